// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! mmdcheck: structural checks for Mermaid flowcharts embedded in Markdown.
//!
//! Pipeline: document text → fenced block extraction → per-block validation → summary.
//! The library does no I/O; the `cli` module owns files, output, and exit status.

pub mod check;
pub mod cli;
pub mod config;
pub mod format;
pub mod model;
pub mod report;

pub use check::{check_document, DocumentCheck};
pub use config::CheckerConfig;
pub use report::{summarize, Outcome, Summary};
