// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memmem;

use crate::model::{DiagramBlock, Extraction};

const FENCE: &str = "```";

fn is_opening_fence(trimmed: &str, fence_tag: &str) -> bool {
    trimmed.strip_prefix(FENCE) == Some(fence_tag)
}

fn is_closing_fence(trimmed: &str) -> bool {
    trimmed == FENCE
}

fn strip_line_ending(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

/// Extract fenced diagram blocks (`` ```<fence_tag> `` ... `` ``` ``) in document order.
///
/// Each block ends at the first closing fence after its opening fence; nested fences are not
/// supported. An opening fence without a closing fence produces no block.
pub fn extract_blocks<'a>(document: &'a str, fence_tag: &str) -> Extraction<'a> {
    if memmem::find(document.as_bytes(), FENCE.as_bytes()).is_none() {
        return Extraction::NoDiagramFound;
    }

    let mut blocks = Vec::new();
    // (line number of the opening fence, byte offset of the first inner line)
    let mut open: Option<(usize, usize)> = None;
    let mut offset = 0usize;

    for (idx, raw_line) in document.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw_line.len();
        let trimmed = raw_line.trim();

        match open {
            None => {
                if is_opening_fence(trimmed, fence_tag) {
                    open = Some((idx + 1, offset));
                }
            }
            Some((start_line, inner_start)) => {
                if is_closing_fence(trimmed) {
                    let inner = strip_line_ending(&document[inner_start..line_start]);
                    blocks.push(DiagramBlock::new(start_line, inner));
                    open = None;
                }
            }
        }
    }

    Extraction::from_blocks(blocks)
}
