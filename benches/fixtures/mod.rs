// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use mmdcheck::Summary;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    ManyBlocks,
    LargeLongLabels,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::ManyBlocks => "many_blocks",
            Self::LargeLongLabels => "large_long_labels",
        }
    }

    /// (blocks, nodes per block, label length)
    const fn shape(self) -> (usize, usize, usize) {
        match self {
            Self::Small => (1, 8, 12),
            Self::ManyBlocks => (64, 24, 16),
            Self::LargeLongLabels => (4, 400, 160),
        }
    }
}

fn label(idx: usize, len: usize) -> String {
    let mut out = format!("Service {idx}<br/>");
    while out.len() < len {
        out.push('x');
    }
    out
}

fn push_block(doc: &mut String, block: usize, nodes: usize, label_len: usize) {
    let _ = writeln!(doc, "## Section {block}\n\n```mermaid\ngraph TB");
    for node in 0..nodes {
        let _ = writeln!(doc, "    N{node}[{}]", label(node, label_len));
    }
    for node in 1..nodes {
        let connector = if node % 3 == 0 { "-.->|waits for|" } else { "-->" };
        let _ = writeln!(doc, "    N{} {connector} N{node}", node - 1);
    }
    doc.push_str("    classDef service fill:#f3e5f5,stroke:#4a148c\n```\n\nProse.\n\n");
}

/// Markdown document with `case`'s number of well-formed diagram blocks.
pub fn document(case: Case) -> String {
    let (blocks, nodes, label_len) = case.shape();
    let mut doc = String::from("# Solution Overview\n\n");
    for block in 0..blocks {
        push_block(&mut doc, block, nodes, label_len);
    }
    doc
}

pub fn checksum_summary(summary: &Summary) -> u64 {
    summary.blocks.iter().fold(summary.total_blocks as u64, |acc, block| {
        acc.wrapping_mul(31)
            .wrapping_add(block.node_count as u64)
            .wrapping_add((block.edge_count as u64) << 16)
            .wrapping_add(block.dangling.len() as u64)
    })
}
