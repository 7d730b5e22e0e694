// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Whole-document checking: extraction, per-block validation, aggregation.

use log::debug;

use crate::config::CheckerConfig;
use crate::format::mermaid::{extract_blocks, validate_block};
use crate::model::Extraction;
use crate::report::{summarize, BlockReport, Summary};

/// Everything learned from one document. Borrows the document text through its blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCheck<'a> {
    extraction: Extraction<'a>,
    block_reports: Vec<BlockReport>,
}

impl<'a> DocumentCheck<'a> {
    pub fn extraction(&self) -> &Extraction<'a> {
        &self.extraction
    }

    pub fn block_reports(&self) -> &[BlockReport] {
        &self.block_reports
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.block_reports)
    }
}

/// Check every diagram block in `document`. Pure: the same text always gives the same result.
pub fn check_document<'a>(document: &'a str, config: &CheckerConfig) -> DocumentCheck<'a> {
    let extraction = extract_blocks(document, &config.fence_tag);
    let block_reports: Vec<BlockReport> = extraction
        .blocks()
        .iter()
        .map(|block| BlockReport::new(block.start_line(), validate_block(block, config)))
        .collect();

    debug!(blocks = block_reports.len(); "checked document");

    DocumentCheck {
        extraction,
        block_reports,
    }
}
