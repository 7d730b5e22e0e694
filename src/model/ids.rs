// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use smol_str::SmolStr;

/// A Mermaid node identifier (`[A-Za-z0-9_]+`).
///
/// Identity is the exact, case-sensitive spelling. Identifiers are short, so they are
/// kept inline in a `SmolStr` instead of a heap `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(SmolStr);

impl NodeId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, NodeIdError> {
        let value = value.as_ref();
        validate_node_id(value)?;
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdError {
    Empty,
    InvalidChar { ch: char },
}

impl fmt::Display for NodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("node id must not be empty"),
            Self::InvalidChar { ch } => {
                write!(f, "node id contains invalid character: '{ch}'")
            }
        }
    }
}

impl std::error::Error for NodeIdError {}

pub(crate) fn is_node_id_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn validate_node_id(value: &str) -> Result<(), NodeIdError> {
    if value.is_empty() {
        return Err(NodeIdError::Empty);
    }
    if let Some(ch) = value.chars().find(|c| !is_node_id_char(*c)) {
        return Err(NodeIdError::InvalidChar { ch });
    }
    Ok(())
}
