//! Filesystem host surface: load a source tree into documents and write the
//! transformed tree back out.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;

use crate::error::{Result, SlotsError};
use crate::matter::Matter;
use crate::types::{Document, Files, SlotsField};

/// Read every file under `root` into a document map keyed by
/// slash-separated relative path.
///
/// With `front_matter` enabled, a leading delimiter block is parsed into
/// the document's metadata; a `slots` key found there becomes the
/// document's pre-existing slots field. With it disabled, the raw source is
/// the document body.
pub fn read_tree(root: &Path, matter: &Matter, front_matter: bool) -> Result<Files> {
    let pattern = root.join("**").join("*").to_string_lossy().into_owned();
    let entries = glob::glob(&pattern).map_err(|source| SlotsError::InvalidPattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Files::new();
    for entry in entries {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let source = fs::read_to_string(&path)?;
        let document = load_document(&source, matter, front_matter)?;
        files.insert(relative_key(root, &path), document);
    }
    Ok(files)
}

/// Build a document from raw source text.
fn load_document(source: &str, matter: &Matter, front_matter: bool) -> Result<Document> {
    if !front_matter {
        return Ok(Document::new(source));
    }
    let (mut metadata, body) = matter.read_document(source)?;
    let slots = metadata.remove("slots").map(SlotsField::from_value);
    Ok(Document {
        contents: body,
        metadata,
        slots,
    })
}

/// Write every document to `output`, mirroring the relative paths.
///
/// Metadata and the slots field are re-emitted as front matter ahead of the
/// body. Returns the written paths.
pub fn write_tree(files: &Files, output: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (relative, document) in files {
        let path = output.join(Path::new(relative));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_atomic(&path, &render_document(document)?)?;
        written.push(path);
    }
    Ok(written)
}

/// Render a document back to source text.
fn render_document(document: &Document) -> Result<String> {
    let mut head = document.metadata.clone();
    if let Some(slots) = &document.slots {
        head.insert(Value::from("slots"), serde_yaml_ng::to_value(slots)?);
    }
    if head.is_empty() {
        return Ok(document.contents.clone());
    }
    let yaml = serde_yaml_ng::to_string(&head)?;
    Ok(format!("---\n{yaml}---\n{}", document.contents))
}

/// Write a file using the atomic temp-file + rename pattern, so partial
/// writes cannot corrupt existing files on crash.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp, path)?;
    Ok(())
}

/// Relative path of `path` under `root`, joined with forward slashes.
fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
