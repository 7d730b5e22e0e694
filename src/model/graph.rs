// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;

use super::ids::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    label: Option<String>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self { id, label: None }
    }

    pub fn new_with_label(id: NodeId, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id,
            label: (!label.is_empty()).then_some(label),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// The connector shape an edge was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    SolidArrow,
    DottedArrow,
    Bidirectional,
}

impl EdgeKind {
    /// Canonical connector spelling.
    pub fn connector(self) -> &'static str {
        match self {
            Self::SolidArrow => "-->",
            Self::DottedArrow => "-.->",
            Self::Bidirectional => "<-->",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.connector())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    kind: EdgeKind,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, kind: EdgeKind) -> Self {
        Self { source, target, kind }
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.kind, self.target)
    }
}

/// An edge that references at least one identifier never declared as a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingEdge {
    edge: Edge,
    missing_source: bool,
    missing_target: bool,
}

impl DanglingEdge {
    pub(crate) fn new(edge: Edge, missing_source: bool, missing_target: bool) -> Self {
        debug_assert!(missing_source || missing_target);
        Self {
            edge,
            missing_source,
            missing_target,
        }
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    pub fn missing_source(&self) -> bool {
        self.missing_source
    }

    pub fn missing_target(&self) -> bool {
        self.missing_target
    }

    /// The literal `(source, target)` pair, as reported to users.
    pub fn pair(&self) -> (&str, &str) {
        (self.edge.source.as_str(), self.edge.target.as_str())
    }

    /// Undeclared endpoint ids, source first.
    pub fn missing_ids(&self) -> impl Iterator<Item = &NodeId> {
        let source = self.missing_source.then_some(&self.edge.source);
        let target = self.missing_target.then_some(&self.edge.target);
        source.into_iter().chain(target)
    }
}
