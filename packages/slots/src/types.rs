//! Core data types for the slots pipeline.
//!
//! These types represent documents flowing through a content pipeline and
//! the named slots extracted from their contents.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml_ng::{Mapping, Value};

use crate::config::PRIMARY_SLOT;

/// A named content segment extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot name; [`PRIMARY_SLOT`] marks the document's primary body.
    pub name: String,

    /// The trimmed text owned exclusively by this slot.
    pub contents: String,
}

impl Slot {
    /// Create a new slot.
    ///
    /// # Examples
    /// ```
    /// use pagefold_slots::Slot;
    ///
    /// let slot = Slot::new("footer", "<footer></footer>");
    /// assert_eq!(slot.to_string(), "<footer></footer>");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Whether this slot carries the reserved primary-body name.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.name == PRIMARY_SLOT
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents)
    }
}

/// A value stored under a name in a document's slot mapping.
///
/// Rendering an entry as text yields the slot contents verbatim for parsed
/// slots and the natural text form for carried values, so templating code
/// can treat any entry as plain text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SlotEntry {
    /// A slot parsed from the document contents by this pipeline.
    Parsed(Slot),

    /// A value carried over from a pre-existing slots mapping.
    Carried(Value),
}

impl SlotEntry {
    /// Classify a raw mapping value: a `{name, contents}` shape becomes a
    /// parsed slot, anything else is carried as-is.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if let Value::Mapping(mapping) = &value {
            if mapping.len() == 2 {
                if let (Some(name), Some(contents)) = (
                    mapping.get("name").and_then(Value::as_str),
                    mapping.get("contents").and_then(Value::as_str),
                ) {
                    return Self::Parsed(Slot::new(name, contents));
                }
            }
        }
        Self::Carried(value)
    }

    /// Slot contents when this entry has any to offer.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        match self {
            Self::Parsed(slot) => Some(&slot.contents),
            Self::Carried(value) => value.as_str(),
        }
    }
}

impl fmt::Display for SlotEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(slot) => write!(f, "{slot}"),
            Self::Carried(value) => match value {
                Value::Null => Ok(()),
                Value::Bool(b) => write!(f, "{b}"),
                Value::Number(n) => write!(f, "{n}"),
                Value::String(s) => f.write_str(s),
                other => f.write_str(
                    serde_yaml_ng::to_string(other)
                        .unwrap_or_default()
                        .trim_end(),
                ),
            },
        }
    }
}

/// Named slot mapping on a document.
pub type SlotMap = BTreeMap<String, SlotEntry>;

/// The structured `slots` field of a document.
///
/// The field as loaded is dynamic: the document's own front matter or a
/// prior pipeline stage may have left anything there. The two variants make
/// the compatible/incompatible distinction explicit for the merge policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SlotsField {
    /// A mapping of named slot entries.
    Map(SlotMap),

    /// Any non-mapping value (sequence, scalar); incompatible with merging.
    Other(Value),
}

impl SlotsField {
    /// Classify a raw front-matter value.
    ///
    /// Mappings with string keys become [`SlotsField::Map`]; everything
    /// else, including mappings with non-string keys, is kept as
    /// [`SlotsField::Other`].
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            other => return Self::Other(other),
        };
        if mapping.iter().any(|(key, _)| key.as_str().is_none()) {
            return Self::Other(Value::Mapping(mapping));
        }
        let map = mapping
            .into_iter()
            .filter_map(|(key, entry)| {
                key.as_str()
                    .map(|name| (name.to_string(), SlotEntry::from_value(entry)))
            })
            .collect();
        Self::Map(map)
    }
}

/// Name the kind of a YAML value for diagnostics.
///
/// Kind names follow the host-scripting convention templating users know:
/// sequences report as `"array"`.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged",
    }
}

/// A document flowing through the pipeline.
///
/// Only `contents` and `slots` are mutated by the slots stage; `metadata`
/// holds the remaining front-matter fields of the document head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Primary body text.
    pub contents: String,

    /// Front-matter fields other than `slots`.
    pub metadata: Mapping,

    /// Structured slots field; absent until front matter or a pipeline
    /// stage sets it.
    pub slots: Option<SlotsField>,
}

impl Document {
    /// Create a document with body text and no metadata.
    #[must_use]
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            metadata: Mapping::new(),
            slots: None,
        }
    }

    /// Set the front-matter metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Mapping) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the pre-existing slots field.
    #[must_use]
    pub fn with_slots(mut self, slots: SlotsField) -> Self {
        self.slots = Some(slots);
        self
    }

    /// Look up a named slot entry.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&SlotEntry> {
        match &self.slots {
            Some(SlotsField::Map(map)) => map.get(name),
            _ => None,
        }
    }
}

/// Documents of one pipeline run, keyed by slash-separated relative path.
pub type Files = BTreeMap<String, Document>;
