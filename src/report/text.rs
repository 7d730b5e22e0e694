// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use super::{BlockSummary, Outcome, Summary};

const MAX_LISTED_NODES: usize = 16;

/// Comma-separated node ids; past the cap, the remainder is only counted.
fn node_list(nodes: &[String]) -> String {
    if nodes.len() <= MAX_LISTED_NODES {
        return nodes.join(", ");
    }
    let shown = nodes[..MAX_LISTED_NODES].join(", ");
    format!("{shown}, +{} more", nodes.len() - MAX_LISTED_NODES)
}

fn render_block(out: &mut String, block: &BlockSummary) {
    // Writing into a String cannot fail.
    let _ = write!(out, "block {} (line {})", block.index, block.start_line);
    match &block.declaration {
        Some(declaration) => {
            let _ = writeln!(out, ": {declaration}");
        }
        None => {
            out.push('\n');
            out.push_str("  no graph declaration found\n");
        }
    }

    let _ = writeln!(out, "  nodes ({}): {}", block.node_count, node_list(&block.nodes));
    let _ = writeln!(out, "  edges: {}", block.edge_count);

    if block.dangling.is_empty() {
        out.push_str("  all connections valid\n");
    } else {
        for pair in &block.dangling {
            let _ = writeln!(out, "  invalid connection: {} -> {}", pair.source, pair.target);
        }
    }

    if block.has_style_definitions {
        out.push_str("  includes styling definitions\n");
    }
}

/// Human-readable rendering: one section per block, then a one-line verdict.
pub fn render_summary_text(summary: &Summary) -> String {
    if summary.outcome == Outcome::NoDiagramFound {
        return "no diagram found\n".to_owned();
    }

    let mut out = String::new();
    let _ = writeln!(out, "found {} diagram block(s)", summary.total_blocks);
    for block in &summary.blocks {
        render_block(&mut out, block);
    }
    let _ = writeln!(
        out,
        "{} of {} block(s) well-formed",
        summary.well_formed_blocks, summary.total_blocks
    );
    out
}

#[cfg(test)]
mod tests {
    use super::{node_list, render_summary_text};
    use crate::config::CheckerConfig;
    use crate::format::mermaid::validate_block;
    use crate::model::DiagramBlock;
    use crate::report::{summarize, BlockReport};

    fn render(blocks: &[(usize, &str)]) -> String {
        let reports: Vec<BlockReport> = blocks
            .iter()
            .map(|(line, text)| {
                let block = DiagramBlock::new(*line, text);
                BlockReport::new(*line, validate_block(&block, &CheckerConfig::default()))
            })
            .collect();
        render_summary_text(&summarize(&reports))
    }

    #[test]
    fn long_node_lists_are_capped_by_count() {
        let nodes: Vec<String> = (0..20).map(|i| format!("N{i}")).collect();
        let listed = node_list(&nodes);
        assert!(listed.starts_with("N0, N1, "));
        assert!(listed.ends_with("N15, +4 more"));
        assert_eq!(node_list(&nodes[..2]), "N0, N1");
        assert_eq!(node_list(&[]), "");
    }

    #[test]
    fn renders_no_diagram_found() {
        assert_eq!(render(&[]), "no diagram found\n");
    }

    #[test]
    fn renders_valid_block() {
        let rendered = render(&[(3, "graph TB\nA[a] --> B[b]\nclassDef x fill:#fff")]);
        assert_eq!(
            rendered,
            "found 1 diagram block(s)\n\
             block 1 (line 3): graph TB\n  \
             nodes (2): A, B\n  \
             edges: 1\n  \
             all connections valid\n  \
             includes styling definitions\n\
             1 of 1 block(s) well-formed\n"
        );
    }

    #[test]
    fn renders_missing_declaration_and_dangling_edges() {
        let rendered = render(&[(7, "X[Start] --> Y")]);
        assert!(rendered.contains("block 1 (line 7)\n  no graph declaration found\n"));
        assert!(rendered.contains("  invalid connection: X -> Y\n"));
        assert!(rendered.ends_with("0 of 1 block(s) well-formed\n"));
    }
}
