// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-line node and edge discovery.
//!
//! The validator only talks to [`LineScanner`], so the matching strategy can change without
//! touching the report model.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use super::ident::{label_close, leading_ident, top_level_tokens};
use crate::model::EdgeKind;

pub type NodeDecls<'l> = SmallVec<[NodeDecl<'l>; 4]>;
pub type EdgeDecls<'l> = SmallVec<[EdgeDecl<'l>; 4]>;

/// An `identifier[label]` occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDecl<'l> {
    pub id: &'l str,
    pub label: &'l str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDecl<'l> {
    pub source: &'l str,
    pub target: &'l str,
    pub kind: EdgeKind,
}

pub trait LineScanner {
    /// Node declarations in left-to-right order. Duplicates are kept; the caller dedups.
    fn node_decls<'l>(&self, line: &'l str) -> NodeDecls<'l>;

    /// Edges in left-to-right order; a chain `A --> B --> C` yields one edge per connector.
    fn edge_decls<'l>(&self, line: &'l str) -> EdgeDecls<'l>;
}

/// Default scanner: a regex for `id[label]` declarations and a label-aware connector scan for
/// edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidLineScanner;

fn node_decl_regex() -> &'static Regex {
    static NODE_DECL: OnceLock<Regex> = OnceLock::new();
    // Leftmost-first matching starts every id at a token boundary, so `API` never matches
    // inside `APIGateway[...]`.
    NODE_DECL.get_or_init(|| {
        Regex::new(r"([A-Za-z0-9_]+)\[([^\]]*)\]").expect("valid node declaration pattern")
    })
}

impl LineScanner for MermaidLineScanner {
    fn node_decls<'l>(&self, line: &'l str) -> NodeDecls<'l> {
        node_decl_regex()
            .captures_iter(line)
            .filter_map(|caps| {
                let id = caps.get(1)?.as_str();
                let label = caps.get(2)?.as_str();
                Some(NodeDecl { id, label })
            })
            .collect()
    }

    fn edge_decls<'l>(&self, line: &'l str) -> EdgeDecls<'l> {
        let (segments, kinds) = split_connectors(line);
        let mut edges = EdgeDecls::new();
        for (idx, kind) in kinds.iter().enumerate() {
            let source = source_ident(segments[idx]);
            let target = target_ident(segments[idx + 1]);
            if let (Some(source), Some(target)) = (source, target) {
                edges.push(EdgeDecl {
                    source,
                    target,
                    kind: *kind,
                });
            }
        }
        edges
    }
}

fn is_connector_char(ch: char) -> bool {
    matches!(ch, '<' | '-' | '.' | '>')
}

/// First half of an inline-label edge (`A -- text --> B`, `A -. text .-> B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineOpener {
    Solid,
    Dotted,
}

impl InlineOpener {
    fn from_run(op: &str) -> Option<Self> {
        match op {
            "--" => Some(Self::Solid),
            "-." => Some(Self::Dotted),
            _ => None,
        }
    }
}

fn all_chars(s: &str, ch: char) -> bool {
    !s.is_empty() && s.chars().all(|c| c == ch)
}

/// Classify a run of connector characters; checked bidirectional, dotted, then solid.
fn classify_connector(op: &str, opener: Option<InlineOpener>) -> Option<EdgeKind> {
    if let Some(shaft) = op.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        if shaft.len() >= 2 && all_chars(shaft, '-') {
            return Some(EdgeKind::Bidirectional);
        }
    }

    if let Some(shaft) = op.strip_suffix("->") {
        if let Some(dots) = shaft.strip_prefix('-') {
            if all_chars(dots, '.') {
                return Some(EdgeKind::DottedArrow);
            }
        }
        if opener == Some(InlineOpener::Dotted) && all_chars(shaft, '.') {
            return Some(EdgeKind::DottedArrow);
        }
    }

    if let Some(shaft) = op.strip_suffix('>') {
        if shaft.len() >= 2 && all_chars(shaft, '-') {
            return Some(EdgeKind::SolidArrow);
        }
    }

    None
}

/// Split a line at its connectors: `n` connectors give `n + 1` endpoint segments.
///
/// Text inside `[...]`, `(...)`, `{...}`, `"..."`, `|...|` and `id>...]` is opaque, so arrows
/// written in labels never count as connectors.
fn split_connectors(line: &str) -> (SmallVec<[&str; 4]>, SmallVec<[EdgeKind; 4]>) {
    let mut segments = SmallVec::<[&str; 4]>::new();
    let mut kinds = SmallVec::<[EdgeKind; 4]>::new();
    let mut in_label: Option<char> = None;
    let mut segment_start = 0usize;
    let mut opener: Option<(usize, InlineOpener)> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if let Some(close) = in_label {
            if ch == close {
                in_label = None;
            }
            continue;
        }
        if let Some(close) = label_close(line[..idx].chars().next_back(), ch) {
            in_label = Some(close);
            continue;
        }
        if !is_connector_char(ch) {
            continue;
        }

        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_connector_char(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }

        let op = &line[idx..end];
        if let Some(kind) = classify_connector(op, opener.map(|(_, o)| o)) {
            let segment_end = opener.map_or(idx, |(start, _)| start);
            segments.push(&line[segment_start..segment_end]);
            kinds.push(kind);
            segment_start = end;
            opener = None;
        } else if opener.is_none() {
            opener = InlineOpener::from_run(op).map(|o| (idx, o));
        }
    }

    segments.push(&line[segment_start..]);
    (segments, kinds)
}

/// Drop a leading `|label|` written right after a connector.
fn strip_edge_label(segment: &str) -> &str {
    let trimmed = segment.trim_start();
    match trimmed.strip_prefix('|') {
        Some(rest) => match rest.find('|') {
            Some(end) => &rest[end + 1..],
            None => trimmed,
        },
        None => trimmed,
    }
}

fn source_ident(segment: &str) -> Option<&str> {
    top_level_tokens(segment).last().copied().and_then(leading_ident)
}

fn target_ident(segment: &str) -> Option<&str> {
    top_level_tokens(strip_edge_label(segment)).first().copied().and_then(leading_ident)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{classify_connector, EdgeDecl, LineScanner, MermaidLineScanner, NodeDecl};
    use crate::model::EdgeKind;

    fn edges(line: &str) -> Vec<(&str, &str, EdgeKind)> {
        MermaidLineScanner
            .edge_decls(line)
            .into_iter()
            .map(|EdgeDecl { source, target, kind }| (source, target, kind))
            .collect()
    }

    fn nodes(line: &str) -> Vec<(&str, &str)> {
        MermaidLineScanner
            .node_decls(line)
            .into_iter()
            .map(|NodeDecl { id, label }| (id, label))
            .collect()
    }

    #[rstest]
    #[case("-->", Some(EdgeKind::SolidArrow))]
    #[case("--->", Some(EdgeKind::SolidArrow))]
    #[case("-.->", Some(EdgeKind::DottedArrow))]
    #[case("-..->", Some(EdgeKind::DottedArrow))]
    #[case("<-->", Some(EdgeKind::Bidirectional))]
    #[case("<---->", Some(EdgeKind::Bidirectional))]
    #[case("---", None)]
    #[case("-.-", None)]
    #[case("->", None)]
    #[case("<->", None)]
    #[case(".", None)]
    fn classifies_connectors(#[case] op: &str, #[case] expected: Option<EdgeKind>) {
        assert_eq!(classify_connector(op, None), expected);
    }

    #[test]
    fn finds_all_node_declarations_on_a_line() {
        assert_eq!(nodes("A[Foo] --> B[Bar]"), vec![("A", "Foo"), ("B", "Bar")]);
        assert_eq!(
            nodes("Cache[(Redis Cache<br/>Caching)]"),
            vec![("Cache", "(Redis Cache<br/>Caching)")]
        );
        assert!(nodes("A --> B").is_empty());
    }

    #[test]
    fn node_ids_are_whole_tokens() {
        assert_eq!(nodes("APIGateway[Gateway]"), vec![("APIGateway", "Gateway")]);
    }

    #[test]
    fn solid_edge_between_declared_nodes() {
        assert_eq!(edges("A[Foo] --> B[Bar]"), vec![("A", "B", EdgeKind::SolidArrow)]);
    }

    #[test]
    fn chained_connectors_yield_one_edge_per_pair() {
        assert_eq!(
            edges("A --> B --> C"),
            vec![("A", "B", EdgeKind::SolidArrow), ("B", "C", EdgeKind::SolidArrow)]
        );
        assert_eq!(
            edges("A-->B-.->C<---->D"),
            vec![
                ("A", "B", EdgeKind::SolidArrow),
                ("B", "C", EdgeKind::DottedArrow),
                ("C", "D", EdgeKind::Bidirectional),
            ]
        );
    }

    #[rstest]
    #[case("Web -->|calls| API", EdgeKind::SolidArrow)]
    #[case("AppHost -.->|orchestrates| API", EdgeKind::DottedArrow)]
    #[case("Web -.->|waits for| API", EdgeKind::DottedArrow)]
    #[case("Web <-->|sync| API", EdgeKind::Bidirectional)]
    fn pipe_labels_are_ignored(#[case] line: &str, #[case] kind: EdgeKind) {
        let source = line.split_whitespace().next().expect("source token");
        assert_eq!(edges(line), vec![(source, "API", kind)]);
    }

    #[test]
    fn inline_text_labels_are_ignored() {
        assert_eq!(edges("A -- uses --> B"), vec![("A", "B", EdgeKind::SolidArrow)]);
        assert_eq!(edges("A -. waits for .-> B"), vec![("A", "B", EdgeKind::DottedArrow)]);
    }

    #[test]
    fn arrows_inside_labels_are_not_connectors() {
        assert_eq!(edges("A[a --> b] --> B[c -.-> d]"), vec![("A", "B", EdgeKind::SolidArrow)]);
        assert!(edges("Note[x --> y]").is_empty());
    }

    #[test]
    fn unsupported_connectors_produce_no_edges() {
        assert!(edges("A --- B").is_empty());
        assert!(edges("A ==> B").is_empty());
        assert!(edges("A -.- B").is_empty());
    }

    #[test]
    fn endpoints_without_identifiers_are_skipped() {
        assert!(edges("--> B").is_empty());
        assert!(edges("A -->").is_empty());
    }

    #[test]
    fn non_ascii_words_are_not_truncated_into_identifiers() {
        assert!(edges("Café --> B[x]").is_empty());
        assert!(edges("A --> Bär").is_empty());
    }

    #[test]
    fn asymmetric_shape_keeps_its_identifier() {
        assert_eq!(edges("A>some text] --> B[x]"), vec![("A", "B", EdgeKind::SolidArrow)]);
        assert_eq!(edges("A>a --> b] -.-> B"), vec![("A", "B", EdgeKind::DottedArrow)]);
    }

    #[test]
    fn trailing_statement_separator_is_trimmed() {
        assert_eq!(edges("A --> B;"), vec![("A", "B", EdgeKind::SolidArrow)]);
    }
}
