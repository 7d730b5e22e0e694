// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

use super::graph::{DanglingEdge, Edge, Node};
use super::ids::NodeId;

/// The header line of a block, e.g. `graph TB` or `flowchart LR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDeclaration {
    keyword: String,
    direction: Option<String>,
}

impl GraphDeclaration {
    pub fn new(keyword: impl Into<String>, direction: Option<String>) -> Self {
        Self {
            keyword: keyword.into(),
            direction,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn direction(&self) -> Option<&str> {
        self.direction.as_deref()
    }
}

impl fmt::Display for GraphDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword)?;
        if let Some(direction) = &self.direction {
            write!(f, " {direction}")?;
        }
        Ok(())
    }
}

/// Structural findings for a single diagram block.
///
/// Nodes and edges keep the order in which they first appear in the block, so the same
/// input always yields the same report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    declaration: Option<GraphDeclaration>,
    has_style_definitions: bool,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    dangling_edges: Vec<DanglingEdge>,
}

impl ValidationReport {
    pub(crate) fn new(
        declaration: Option<GraphDeclaration>,
        has_style_definitions: bool,
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        dangling_edges: Vec<DanglingEdge>,
    ) -> Self {
        Self {
            declaration,
            has_style_definitions,
            nodes,
            edges,
            dangling_edges,
        }
    }

    pub fn declaration(&self) -> Option<&GraphDeclaration> {
        self.declaration.as_ref()
    }

    pub fn has_graph_declaration(&self) -> bool {
        self.declaration.is_some()
    }

    pub fn has_style_definitions(&self) -> bool {
        self.has_style_definitions
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(Node::id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn dangling_edges(&self) -> &[DanglingEdge] {
        &self.dangling_edges
    }

    pub fn is_well_formed(&self) -> bool {
        self.has_graph_declaration() && self.dangling_edges.is_empty()
    }
}
