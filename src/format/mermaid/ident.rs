// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ids::is_node_id_char;

/// The identifier at the very start of `token`, e.g. `B` for `B[Bar]` or `B;`.
///
/// A word that continues with non-ASCII letters or digits (`Café`) is not an identifier at
/// all, so it yields `None` rather than its ASCII prefix.
pub(super) fn leading_ident(token: &str) -> Option<&str> {
    let end = token.find(|c: char| !is_node_id_char(c)).unwrap_or(token.len());
    if end == 0 {
        return None;
    }
    match token[end..].chars().next() {
        Some(next) if next.is_alphanumeric() => None,
        _ => Some(&token[..end]),
    }
}

/// Closing delimiter for a label opened by `ch`, given the character before it.
///
/// `>` only opens a label in the asymmetric shape `id>text]`, where it follows an identifier.
pub(super) fn label_close(prev: Option<char>, ch: char) -> Option<char> {
    match ch {
        '[' => Some(']'),
        '(' => Some(')'),
        '{' => Some('}'),
        '"' => Some('"'),
        '|' => Some('|'),
        '>' if prev.is_some_and(is_node_id_char) => Some(']'),
        _ => None,
    }
}

/// Split `segment` on whitespace that sits outside labels, yielding the top-level tokens.
pub(super) fn top_level_tokens(segment: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut in_label: Option<char> = None;
    let mut token_start: Option<usize> = None;
    let mut prev: Option<char> = None;

    for (idx, ch) in segment.char_indices() {
        if let Some(close) = in_label {
            if ch == close {
                in_label = None;
            }
            prev = Some(ch);
            continue;
        }

        if ch.is_whitespace() {
            if let Some(start) = token_start.take() {
                tokens.push(&segment[start..idx]);
            }
            prev = Some(ch);
            continue;
        }

        if token_start.is_none() {
            token_start = Some(idx);
        }
        in_label = label_close(prev, ch);
        prev = Some(ch);
    }

    if let Some(start) = token_start {
        tokens.push(&segment[start..]);
    }
    tokens
}
