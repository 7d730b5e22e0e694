// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid block extraction and structural validation.

pub mod fence;
mod ident;
pub mod scan;
pub mod validate;

pub use fence::extract_blocks;
pub use scan::{EdgeDecl, LineScanner, MermaidLineScanner, NodeDecl};
pub use validate::{validate_block, validate_block_with};
