// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Aggregation of per-block reports into a document summary, plus its text rendering.
//!
//! Summaries own their data (plain strings and counts) so they can outlive the document text
//! and be serialized as-is.

use serde::Serialize;

use crate::model::ValidationReport;

mod text;

pub use text::render_summary_text;

/// A block's report together with where the block sits in its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    start_line: usize,
    report: ValidationReport,
}

impl BlockReport {
    pub fn new(start_line: usize, report: ValidationReport) -> Self {
        Self { start_line, report }
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    NoDiagramFound,
    Invalid,
    Valid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingPair {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    /// 1-based position of the block in its document.
    pub index: usize,
    pub start_line: usize,
    pub declaration: Option<String>,
    pub node_count: usize,
    pub nodes: Vec<String>,
    pub edge_count: usize,
    pub has_style_definitions: bool,
    pub well_formed: bool,
    pub dangling: Vec<DanglingPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_blocks: usize,
    pub well_formed_blocks: usize,
    pub outcome: Outcome,
    pub blocks: Vec<BlockSummary>,
}

impl Summary {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_valid(&self) -> bool {
        self.outcome == Outcome::Valid
    }
}

fn summarize_block(index: usize, block: &BlockReport) -> BlockSummary {
    let report = block.report();
    BlockSummary {
        index,
        start_line: block.start_line(),
        declaration: report.declaration().map(ToString::to_string),
        node_count: report.nodes().len(),
        nodes: report.node_ids().map(|id| id.as_str().to_owned()).collect(),
        edge_count: report.edges().len(),
        has_style_definitions: report.has_style_definitions(),
        well_formed: report.is_well_formed(),
        dangling: report
            .dangling_edges()
            .iter()
            .map(|dangling| {
                let (source, target) = dangling.pair();
                DanglingPair {
                    source: source.to_owned(),
                    target: target.to_owned(),
                }
            })
            .collect(),
    }
}

/// Reduce per-block reports (in document order) to a summary.
pub fn summarize(blocks: &[BlockReport]) -> Summary {
    let blocks: Vec<BlockSummary> = blocks
        .iter()
        .enumerate()
        .map(|(idx, block)| summarize_block(idx + 1, block))
        .collect();
    let total_blocks = blocks.len();
    let well_formed_blocks = blocks.iter().filter(|b| b.well_formed).count();

    let outcome = if total_blocks == 0 {
        Outcome::NoDiagramFound
    } else if well_formed_blocks == total_blocks {
        Outcome::Valid
    } else {
        Outcome::Invalid
    };

    Summary {
        total_blocks,
        well_formed_blocks,
        outcome,
        blocks,
    }
}
