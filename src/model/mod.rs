// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Documents contain fenced diagram blocks; each block is checked into a `ValidationReport`
//! made of nodes, edges, and dangling-edge findings.

pub mod block;
pub mod graph;
pub mod ids;
pub mod report;

pub use block::{DiagramBlock, Extraction};
pub use graph::{DanglingEdge, Edge, EdgeKind, Node};
pub use ids::{NodeId, NodeIdError};
pub use report::{GraphDeclaration, ValidationReport};
