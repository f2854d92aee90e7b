//! Pipeline stage that applies slot splitting to matched documents.

use crate::config::{validate_pattern, Options};
use crate::error::{Result, SlotsError};
use crate::matter::Matter;
use crate::splitting::{merge_slots, split_slots, MergeOutcome};
use crate::types::Files;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Paths that matched the configured pattern, in document order.
    pub matched: Vec<String>,

    /// Non-fatal diagnostics collected during the run.
    pub warnings: Vec<String>,
}

/// Split and merge slots for every document matching `options.pattern`.
///
/// Documents that do not match pass through untouched. Splitting uses the
/// primary delimiter of the front-matter configuration; a malformed block
/// aborts the run with the offending document's path attached.
pub fn process(files: &mut Files, matter: &Matter, options: &Options) -> Result<Report> {
    let pattern = validate_pattern(&options.pattern)?;

    tracing::debug!(pattern = %options.pattern, "running with options");

    let matched: Vec<String> = files
        .keys()
        .filter(|path| pattern.matches(path))
        .cloned()
        .collect();

    tracing::debug!(count = matched.len(), "processing matched file(s)");
    tracing::info!(files = ?matched, "matched files");

    let delimiter = matter.primary_delimiter().to_string();
    let mut warnings = Vec::new();

    for path in &matched {
        let Some(document) = files.get_mut(path) else {
            continue;
        };

        let slots =
            split_slots(&document.contents, &delimiter, matter).map_err(|source| {
                SlotsError::Document {
                    path: path.clone(),
                    source: Box::new(source),
                }
            })?;

        if let MergeOutcome::Replaced(kind) = merge_slots(slots, document) {
            tracing::warn!(kind = %kind, path = %path, "overwriting incompatible slots field");
            warnings.push(format!(
                "Overwriting incompatible slots field of kind \"{kind}\" in \"{path}\""
            ));
        }
    }

    Ok(Report { matched, warnings })
}
