// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Checker configuration: the markers and keywords that drive block extraction and line
//! classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("fence_tag must not be empty")]
    EmptyFenceTag,

    #[error("comment_marker must not be empty")]
    EmptyCommentMarker,

    #[error("declaration_keywords must contain at least one keyword")]
    NoDeclarationKeywords,

    #[error("{field} contains an empty or whitespace-bearing keyword: {keyword:?}")]
    InvalidKeyword { field: &'static str, keyword: String },
}

/// Markers recognized by the checker.
///
/// Defaults describe Mermaid flowcharts embedded in Markdown (`` ```mermaid `` fences, `%%`
/// comments, `graph`/`flowchart` headers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    pub fence_tag: String,
    pub declaration_keywords: Vec<String>,
    pub comment_marker: String,
    pub style_keywords: Vec<String>,
    pub class_keyword: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            fence_tag: "mermaid".to_owned(),
            declaration_keywords: vec!["graph".to_owned(), "flowchart".to_owned()],
            comment_marker: "%%".to_owned(),
            style_keywords: vec![
                "classDef".to_owned(),
                "style".to_owned(),
                "linkStyle".to_owned(),
            ],
            class_keyword: "class".to_owned(),
        }
    }
}

impl CheckerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fence_tag.trim().is_empty() {
            return Err(ConfigError::EmptyFenceTag);
        }
        if self.comment_marker.trim().is_empty() {
            return Err(ConfigError::EmptyCommentMarker);
        }
        if self.declaration_keywords.is_empty() {
            return Err(ConfigError::NoDeclarationKeywords);
        }
        check_keywords("declaration_keywords", &self.declaration_keywords)?;
        check_keywords("style_keywords", &self.style_keywords)?;
        check_keywords("class_keyword", std::slice::from_ref(&self.class_keyword))?;
        Ok(())
    }

    pub(crate) fn is_declaration_keyword(&self, token: &str) -> bool {
        self.declaration_keywords.iter().any(|keyword| keyword == token)
    }

    pub(crate) fn is_comment(&self, trimmed: &str) -> bool {
        trimmed.starts_with(self.comment_marker.as_str())
    }

    pub(crate) fn is_style_definition(&self, trimmed: &str) -> bool {
        self.style_keywords.iter().any(|keyword| starts_with_keyword(trimmed, keyword))
    }

    pub(crate) fn is_class_assignment(&self, trimmed: &str) -> bool {
        starts_with_keyword(trimmed, &self.class_keyword)
    }
}

fn check_keywords(field: &'static str, keywords: &[String]) -> Result<(), ConfigError> {
    match keywords.iter().find(|k| k.is_empty() || k.chars().any(char::is_whitespace)) {
        Some(keyword) => Err(ConfigError::InvalidKeyword {
            field,
            keyword: keyword.clone(),
        }),
        None => Ok(()),
    }
}

/// `keyword` as a whole leading word: `classDef x` matches `classDef`, `classDefs` does not.
fn starts_with_keyword(trimmed: &str, keyword: &str) -> bool {
    match trimmed.strip_prefix(keyword) {
        Some(rest) => rest.chars().next().map_or(true, char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CheckerConfig, ConfigError};

    #[test]
    fn default_config_is_valid() {
        CheckerConfig::default().validate().expect("default config");
    }

    #[rstest]
    #[case("classDef service fill:#f3e5f5", true)]
    #[case("style Web fill:#fff", true)]
    #[case("linkStyle 0 stroke:#f00", true)]
    #[case("classDefinitions[Label]", false)]
    #[case("styleGuide --> Web", false)]
    fn detects_style_definition_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(CheckerConfig::default().is_style_definition(line), expected);
    }

    #[rstest]
    #[case("class Web,API service", true)]
    #[case("class AppHost orchestrator", true)]
    #[case("classDef service fill:#fff", false)]
    #[case("classroom[Room] --> Hall", false)]
    fn detects_class_assignment_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(CheckerConfig::default().is_class_assignment(line), expected);
    }

    #[test]
    fn rejects_empty_markers() {
        let config = CheckerConfig {
            comment_marker: " ".to_owned(),
            ..CheckerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyCommentMarker));

        let config = CheckerConfig {
            declaration_keywords: Vec::new(),
            ..CheckerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoDeclarationKeywords));
    }

    #[test]
    fn rejects_keywords_with_whitespace() {
        let config = CheckerConfig {
            style_keywords: vec!["class Def".to_owned()],
            ..CheckerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidKeyword {
                field: "style_keywords",
                keyword: "class Def".to_owned(),
            })
        );
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: CheckerConfig =
            toml::from_str("fence_tag = \"mmd\"\n").expect("parse partial config");
        assert_eq!(config.fence_tag, "mmd");
        assert_eq!(config.comment_marker, "%%");
        assert_eq!(config.declaration_keywords, vec!["graph", "flowchart"]);
    }

    #[test]
    fn unknown_toml_keys_are_rejected() {
        toml::from_str::<CheckerConfig>("fence = \"mmd\"\n").unwrap_err();
    }
}
