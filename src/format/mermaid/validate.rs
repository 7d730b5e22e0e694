// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use log::debug;

use super::scan::{LineScanner, MermaidLineScanner};
use crate::config::CheckerConfig;
use crate::model::{
    DanglingEdge, DiagramBlock, Edge, GraphDeclaration, Node, NodeId, ValidationReport,
};

/// Split a declaration line at its first `;`: the header, plus any statements after it.
fn parse_declaration<'l>(
    trimmed: &'l str,
    config: &CheckerConfig,
) -> Option<(GraphDeclaration, &'l str)> {
    let (header, rest) = trimmed.split_once(';').unwrap_or((trimmed, ""));
    let mut parts = header.split_whitespace();
    let keyword = parts.next()?;
    if !config.is_declaration_keyword(keyword) {
        return None;
    }
    let declaration = GraphDeclaration::new(keyword, parts.next().map(str::to_owned));
    Some((declaration, rest.trim()))
}

/// Accumulated findings while walking one block.
struct BlockScan<'c, S: ?Sized> {
    config: &'c CheckerConfig,
    scanner: &'c S,
    has_style_definitions: bool,
    nodes: Vec<Node>,
    seen: HashSet<NodeId>,
    edges: Vec<Edge>,
}

impl<'c, S> BlockScan<'c, S>
where
    S: LineScanner + ?Sized,
{
    fn new(config: &'c CheckerConfig, scanner: &'c S) -> Self {
        Self {
            config,
            scanner,
            has_style_definitions: false,
            nodes: Vec::new(),
            seen: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// Classify and scan one trimmed, non-declaration line.
    fn statement(&mut self, trimmed: &str) {
        if trimmed.is_empty() || self.config.is_comment(trimmed) {
            return;
        }
        if self.config.is_style_definition(trimmed) {
            self.has_style_definitions = true;
            return;
        }
        if self.config.is_class_assignment(trimmed) {
            return;
        }

        for decl in self.scanner.node_decls(trimmed) {
            let Ok(id) = NodeId::new(decl.id) else {
                continue;
            };
            if self.seen.insert(id.clone()) {
                self.nodes.push(Node::new_with_label(id, decl.label));
            }
        }

        for decl in self.scanner.edge_decls(trimmed) {
            let (Ok(source), Ok(target)) = (NodeId::new(decl.source), NodeId::new(decl.target))
            else {
                continue;
            };
            self.edges.push(Edge::new(source, target, decl.kind));
        }
    }

    fn dangling_edges(&self) -> Vec<DanglingEdge> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let missing_source = !self.seen.contains(edge.source());
                let missing_target = !self.seen.contains(edge.target());
                (missing_source || missing_target)
                    .then(|| DanglingEdge::new(edge.clone(), missing_source, missing_target))
            })
            .collect()
    }
}

/// Check one diagram block with the default [`MermaidLineScanner`].
pub fn validate_block(block: &DiagramBlock<'_>, config: &CheckerConfig) -> ValidationReport {
    validate_block_with(block, config, &MermaidLineScanner)
}

/// Check one diagram block.
///
/// Line handling, in order:
/// - blank lines and comment lines are skipped
/// - the first line led by a declaration keyword is the graph declaration; only the statements
///   after its first `;` are scanned
/// - style-definition lines only flag `has_style_definitions`; class assignments are skipped
/// - every other line is scanned for node declarations and, independently, for edges
///
/// Edges whose endpoints were never declared stay in the edge list and are also reported as
/// dangling. Malformed lines never abort the check.
pub fn validate_block_with<S>(
    block: &DiagramBlock<'_>,
    config: &CheckerConfig,
    scanner: &S,
) -> ValidationReport
where
    S: LineScanner + ?Sized,
{
    let mut declaration: Option<GraphDeclaration> = None;
    let mut scan = BlockScan::new(config, scanner);

    for raw_line in block.lines() {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || config.is_comment(trimmed) {
            continue;
        }

        if declaration.is_none() {
            if let Some((parsed, rest)) = parse_declaration(trimmed, config) {
                declaration = Some(parsed);
                scan.statement(rest);
                continue;
            }
        }

        scan.statement(trimmed);
    }

    let dangling_edges = scan.dangling_edges();

    debug!(
        start_line = block.start_line(),
        nodes = scan.nodes.len(),
        edges = scan.edges.len(),
        dangling = dangling_edges.len(),
        declared = declaration.is_some();
        "checked diagram block"
    );

    ValidationReport::new(
        declaration,
        scan.has_style_definitions,
        scan.nodes,
        scan.edges,
        dangling_edges,
    )
}
