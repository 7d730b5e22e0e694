// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// The inner text of one fenced diagram block, borrowed from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramBlock<'a> {
    start_line: usize,
    text: &'a str,
}

impl<'a> DiagramBlock<'a> {
    pub fn new(start_line: usize, text: &'a str) -> Self {
        Self { start_line, text }
    }

    /// 1-based line number of the opening fence in the source document.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Block contents without the fence lines.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.text.lines()
    }
}

/// Result of scanning a document for fenced diagram blocks.
///
/// Finding nothing is an expected outcome, not an error; callers branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<'a> {
    NoDiagramFound,
    Found(Vec<DiagramBlock<'a>>),
}

impl<'a> Extraction<'a> {
    pub fn from_blocks(blocks: Vec<DiagramBlock<'a>>) -> Self {
        if blocks.is_empty() {
            Self::NoDiagramFound
        } else {
            Self::Found(blocks)
        }
    }

    pub fn blocks(&self) -> &[DiagramBlock<'a>] {
        match self {
            Self::NoDiagramFound => &[],
            Self::Found(blocks) => blocks,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoDiagramFound)
    }
}
