// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! mmdcheck CLI entrypoint.
//!
//! Exit status: 0 when every input holds at least one diagram block and all blocks are
//! well-formed, 1 otherwise (including unreadable inputs and bad configuration), 2 for usage
//! errors.

use std::io::{self, Write};
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, LevelFilter};

use mmdcheck::cli::{self, Args};

fn init_logger(level: &str) {
    let level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("mmdcheck: invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default()).filter_level(level).init();
}

fn main() {
    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "parsed arguments");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cli::run(&args, &mut out);
    let _ = out.flush();

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
