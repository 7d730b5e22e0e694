// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Criterion setup shared by the `check.*` benches.
//!
//! Knobs (all optional):
//! - `MMDCHECK_BENCH_SAMPLES`: sample count, 10..=200
//! - `MMDCHECK_BENCH_SECS`: measurement seconds per case, 1..=60
//! - `MMDCHECK_BENCH_PROFILE_HZ`: pprof sampling rate, 0 disables the flamegraph profiler

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn knob<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

pub fn criterion() -> Criterion {
    // Single-document checks finish in microseconds; short runs are enough to settle.
    let samples: usize = knob("MMDCHECK_BENCH_SAMPLES").unwrap_or(30).clamp(10, 200);
    let secs: u64 = knob("MMDCHECK_BENCH_SECS").unwrap_or(2).clamp(1, 60);
    let profile_hz: i32 = knob("MMDCHECK_BENCH_PROFILE_HZ").unwrap_or(0).clamp(0, 1000);

    let config = Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(secs));

    if profile_hz == 0 {
        config
    } else {
        config.with_profiler(PProfProfiler::new(profile_hz, Output::Flamegraph(None)))
    }
}
