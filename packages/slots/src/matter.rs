//! Front-matter reading: the delimiter-block parser collaborator.
//!
//! A delimiter block is a region beginning at a delimiter token on its own
//! line, containing YAML metadata up to a closing delimiter line, followed
//! by body text. [`Matter`] holds the host-wide delimiter configuration and
//! implements [`BlockParser`], the capability the splitter consumes.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml_ng::Mapping;

use crate::config::DEFAULT_DELIMITER;
use crate::error::{Result, SlotsError};

/// Line that can belong to a YAML metadata section when no closing
/// delimiter line exists: blank, indented, a list item, a comment, or a
/// `key:` line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static METADATA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s.*)?$|^-(\s.*)?$|^#|^[^\s:#][^:]*:(\s.*)?$").expect("valid regex")
});

/// Result of parsing one delimiter block.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBlock {
    /// Metadata parsed from the block head.
    pub metadata: Mapping,

    /// Remaining body text after the block.
    pub body: String,
}

/// Capability consumed by the splitter: parse one delimiter block from text
/// beginning at a delimiter occurrence.
pub trait BlockParser {
    /// Parse the block opening at the start of `text`.
    ///
    /// Fails when `text` is malformed relative to the block syntax; the
    /// error propagates to the caller unrecovered.
    fn parse(&self, text: &str) -> Result<ParsedBlock>;
}

/// Front-matter configuration and parser.
///
/// The host configuration may carry alternative delimiters; consumers that
/// need a single token use the primary (first) one.
#[derive(Debug, Clone)]
pub struct Matter {
    delimiters: Vec<String>,
}

impl Default for Matter {
    fn default() -> Self {
        Self {
            delimiters: vec![DEFAULT_DELIMITER.to_string()],
        }
    }
}

impl Matter {
    /// Create a front-matter parser with the given delimiter alternatives.
    ///
    /// An empty list falls back to the default delimiter.
    #[must_use]
    pub fn new(delimiters: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let delimiters: Vec<String> = delimiters.into_iter().map(Into::into).collect();
        if delimiters.is_empty() {
            return Self::default();
        }
        Self { delimiters }
    }

    /// All configured delimiter alternatives.
    #[must_use]
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Primary delimiter token (the first configured alternative).
    #[must_use]
    pub fn primary_delimiter(&self) -> &str {
        self.delimiters
            .first()
            .map_or(DEFAULT_DELIMITER, String::as_str)
    }

    /// Split a whole document source into front-matter metadata and body.
    ///
    /// A source that does not start with the primary delimiter has no front
    /// matter; its metadata is empty and the body is the source unchanged.
    pub fn read_document(&self, source: &str) -> Result<(Mapping, String)> {
        if source.starts_with(self.primary_delimiter()) {
            let block = self.parse(source)?;
            Ok((block.metadata, block.body))
        } else {
            Ok((Mapping::new(), source.to_string()))
        }
    }
}

impl BlockParser for Matter {
    fn parse(&self, text: &str) -> Result<ParsedBlock> {
        let delimiter = self.primary_delimiter();
        let malformed = || SlotsError::MalformedBlock {
            delimiter: delimiter.to_string(),
        };

        let rest = text.strip_prefix(delimiter).ok_or_else(malformed)?;
        // The token must close its line.
        let rest = if let Some(r) = rest.strip_prefix("\r\n") {
            r
        } else if let Some(r) = rest.strip_prefix('\n') {
            r
        } else if rest.is_empty() {
            rest
        } else {
            return Err(malformed());
        };

        // Metadata extends to the closing delimiter line when one exists.
        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == delimiter {
                let metadata = parse_metadata(&rest[..offset])?;
                let body = rest[offset + line.len()..].to_string();
                return Ok(ParsedBlock { metadata, body });
            }
            offset += line.len();
        }

        // No closing line: the metadata section is the maximal run of
        // metadata-shaped lines, and the remainder is the body.
        let mut meta_end = 0;
        for line in rest.split_inclusive('\n') {
            if !METADATA_LINE.is_match(line.trim_end_matches(['\n', '\r'])) {
                break;
            }
            meta_end += line.len();
        }
        let metadata = parse_metadata(&rest[..meta_end])?;
        let body = rest[meta_end..].to_string();
        Ok(ParsedBlock { metadata, body })
    }
}

/// Parse the YAML metadata section of a block; blank sections yield an
/// empty mapping.
fn parse_metadata(source: &str) -> Result<Mapping> {
    if source.trim().is_empty() {
        return Ok(Mapping::new());
    }
    Ok(serde_yaml_ng::from_str(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_closed_block() {
        let matter = Matter::default();
        let block = matter.parse("---\nslot: footer\n---\n<footer></footer>").unwrap();
        assert_eq!(
            block.metadata.get("slot").and_then(|v| v.as_str()),
            Some("footer")
        );
        assert_eq!(block.body, "<footer></footer>");
    }

    #[test]
    fn test_parse_unclosed_block_stops_at_body_line() {
        let matter = Matter::default();
        let block = matter.parse("---\nslot: footer\nFoot").unwrap();
        assert_eq!(
            block.metadata.get("slot").and_then(|v| v.as_str()),
            Some("footer")
        );
        assert_eq!(block.body, "Foot");
    }

    #[test]
    fn test_parse_empty_metadata() {
        let matter = Matter::default();
        let block = matter.parse("---\n\nMore text").unwrap();
        assert!(block.metadata.is_empty());
        assert_eq!(block.body, "More text");
    }

    #[test]
    fn test_parse_bare_delimiter() {
        let matter = Matter::default();
        let block = matter.parse("---").unwrap();
        assert!(block.metadata.is_empty());
        assert_eq!(block.body, "");
    }

    #[test]
    fn test_parse_closing_line_with_trailing_whitespace() {
        let matter = Matter::default();
        let block = matter.parse("---\nslot: aside\n---  \n<aside></aside>").unwrap();
        assert_eq!(block.body, "<aside></aside>");
    }

    #[test]
    fn test_parse_rejects_token_not_closing_its_line() {
        let matter = Matter::default();
        let err = matter.parse("---inline").unwrap_err();
        assert!(matches!(err, SlotsError::MalformedBlock { .. }));
    }

    #[test]
    fn test_parse_rejects_text_not_at_delimiter() {
        let matter = Matter::default();
        assert!(matter.parse("no delimiter here").is_err());
    }

    #[test]
    fn test_parse_invalid_metadata_propagates() {
        let matter = Matter::default();
        let err = matter.parse("---\n- just\n- a\n- list\n---\nbody").unwrap_err();
        assert!(matches!(err, SlotsError::Yaml(_)));
    }

    #[test]
    fn test_primary_delimiter_uses_first_alternative() {
        let matter = Matter::new(["~~~", "---"]);
        assert_eq!(matter.primary_delimiter(), "~~~");
        assert_eq!(matter.delimiters().len(), 2);
    }

    #[test]
    fn test_read_document_with_front_matter() {
        let matter = Matter::default();
        let (metadata, body) = matter
            .read_document("---\ntitle: Home\n---\nWelcome!")
            .unwrap();
        assert_eq!(
            metadata.get("title").and_then(|v| v.as_str()),
            Some("Home")
        );
        assert_eq!(body, "Welcome!");
    }

    #[test]
    fn test_read_document_without_front_matter() {
        let matter = Matter::default();
        let (metadata, body) = matter.read_document("Plain text").unwrap();
        assert!(metadata.is_empty());
        assert_eq!(body, "Plain text");
    }
}
