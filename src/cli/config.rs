// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Configuration file lookup.
//!
//! Search order:
//! 1. the explicit `--config` path (must exist)
//! 2. `mmdcheck.toml` in the working directory
//! 3. built-in defaults

use std::fs;
use std::path::Path;

use log::{debug, info};

use super::error::CliError;
use crate::config::CheckerConfig;

pub const LOCAL_CONFIG_FILE: &str = "mmdcheck.toml";

pub fn load_config(explicit_path: Option<&Path>) -> Result<CheckerConfig, CliError> {
    load_config_in(explicit_path, Path::new("."))
}

pub(crate) fn load_config_in(
    explicit_path: Option<&Path>,
    working_dir: &Path,
) -> Result<CheckerConfig, CliError> {
    if let Some(path) = explicit_path {
        info!(path = path.display().to_string(); "loading configuration from explicit path");
        if !path.exists() {
            return Err(CliError::MissingConfig(path.to_path_buf()));
        }
        return load_config_file(path);
    }

    let local = working_dir.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        info!(path = local.display().to_string(); "loading configuration from working directory");
        return load_config_file(&local);
    }

    debug!("no configuration file found, using defaults");
    Ok(CheckerConfig::default())
}

fn load_config_file(path: &Path) -> Result<CheckerConfig, CliError> {
    let content = fs::read_to_string(path).map_err(|err| CliError::io(path, err))?;
    let config: CheckerConfig = toml::from_str(&content).map_err(|err| CliError::ConfigParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}
