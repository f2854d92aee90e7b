//! Slot merger: reconciles parsed slots with a document's existing state.

use serde_yaml_ng::Value;

use crate::types::{value_kind, Document, Slot, SlotEntry, SlotMap, SlotsField};

/// Which reconciliation branch the merger took for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No slots were parsed; the document was left untouched.
    Untouched,

    /// No usable prior slots field; the parsed mapping was adopted as-is.
    Fresh,

    /// Parsed slots were merged into a pre-existing compatible mapping.
    Extended,

    /// A pre-existing incompatible value of the named kind was replaced
    /// wholesale.
    Replaced(&'static str),
}

/// Merge an ordered slot sequence into `document`.
///
/// The first slot, when it carries the primary name, replaces the document
/// body instead of entering the mapping. Remaining slots are keyed by name,
/// later duplicates overwriting earlier ones. A pre-existing compatible
/// mapping is extended, parsed entries winning on collision; any other
/// pre-existing value is replaced wholesale and reported through the
/// returned outcome. An empty sequence leaves the document untouched and
/// does not create a slots field.
pub fn merge_slots(slots: Vec<Slot>, document: &mut Document) -> MergeOutcome {
    if slots.is_empty() {
        return MergeOutcome::Untouched;
    }

    let mut parsed = SlotMap::new();
    for (index, slot) in slots.into_iter().enumerate() {
        if index == 0 && slot.is_primary() {
            document.contents = slot.contents;
            continue;
        }
        parsed.insert(slot.name.clone(), SlotEntry::Parsed(slot));
    }

    match document.slots.take() {
        None | Some(SlotsField::Other(Value::Null)) => {
            document.slots = Some(SlotsField::Map(parsed));
            MergeOutcome::Fresh
        }
        Some(SlotsField::Map(mut existing)) => {
            existing.extend(parsed);
            document.slots = Some(SlotsField::Map(existing));
            MergeOutcome::Extended
        }
        Some(SlotsField::Other(value)) => {
            let kind = value_kind(&value);
            document.slots = Some(SlotsField::Map(parsed));
            MergeOutcome::Replaced(kind)
        }
    }
}
