// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::info;

use super::error::CliError;

fn is_candidate(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix) && name.ends_with(".md")
}

/// Most recently modified `<prefix>*.md` file directly inside `dir`.
///
/// Ties on modification time resolve to the lexically greatest name, which for timestamped
/// names is also the newest.
pub fn latest_document(dir: &Path, prefix: &str) -> Result<PathBuf, CliError> {
    let entries = fs::read_dir(dir).map_err(|err| CliError::io(dir, err))?;

    let mut latest: Option<(SystemTime, String, PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|err| CliError::io(dir, err))?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !is_candidate(&name, prefix) {
            continue;
        }
        let metadata = entry.metadata().map_err(|err| CliError::io(entry.path(), err))?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

        let newer = match &latest {
            None => true,
            Some((best_time, best_name, _)) => (modified, &name) > (*best_time, best_name),
        };
        if newer {
            latest = Some((modified, name, entry.path()));
        }
    }

    latest.map(|(_, _, path)| path).ok_or_else(|| CliError::NoDocumentFound {
        dir: dir.to_path_buf(),
        prefix: prefix.to_owned(),
    })
}

/// Files are used as-is; directories resolve to their latest matching document.
pub fn resolve_input(input: &Path, prefix: &str) -> Result<PathBuf, CliError> {
    if input.is_dir() {
        let path = latest_document(input, prefix)?;
        info!(dir = input.display().to_string(), path = path.display().to_string();
            "resolved latest document");
        return Ok(path);
    }
    Ok(input.to_path_buf())
}
