//! Slot splitter: divides raw text into an ordered sequence of slots.

use serde_yaml_ng::Value;

use crate::config::PRIMARY_SLOT;
use crate::error::{Result, SlotsError};
use crate::matter::BlockParser;
use crate::types::Slot;

/// Split `text` into an ordered sequence of slots.
///
/// `delimiter` marks the start of an embedded metadata block; `parser`
/// consumes one block at a time. Blocks may nest: the body returned by the
/// parser is scanned again, and slots found there are appended to the same
/// flat sequence. Text in front of the first block becomes an implicit slot
/// named [`PRIMARY_SLOT`].
///
/// Text without any delimiter occurrence yields an empty sequence; callers
/// treat the whole text as the untouched document body.
pub fn split_slots<P: BlockParser>(text: &str, delimiter: &str, parser: &P) -> Result<Vec<Slot>> {
    if delimiter.is_empty() {
        return Err(SlotsError::EmptyDelimiter);
    }

    let mut slots: Vec<Slot> = Vec::new();
    let mut rest = text.trim().to_string();

    while let Some(pos) = rest.find(delimiter) {
        // Text before the delimiter belongs to the slot currently being
        // accumulated. Contents ownership is exclusive: a pending slot
        // never retains text that later slots are parsed from, so at
        // position 0 the pending slot's contents become empty.
        let leading = rest[..pos].trim().to_string();
        match slots.last_mut() {
            Some(last) => last.contents = leading,
            None if !leading.is_empty() => slots.push(Slot::new(PRIMARY_SLOT, leading)),
            None => {}
        }

        let block = parser.parse(&rest[pos..])?;
        let name = block
            .metadata
            .get("slot")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(PRIMARY_SLOT);
        let slot = Slot::new(name, block.body.trim());

        // Continue inside the new slot's contents so nested blocks land in
        // the same flat sequence.
        rest = slot.contents.clone();
        slots.push(slot);
    }

    Ok(slots)
}
