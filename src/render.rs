//! Markdown block rendering for discovered entries.
//!
//! Fence content is emitted verbatim. Embedded fence delimiters are not
//! escaped, so an entry whose own content contains ``` produces malformed
//! markdown; known limitation, kept for output compatibility.

use crate::content::{language_tag, read_text};
use crate::error::PackError;
use crate::scan::{Entry, EntryKind};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Fixed text substituted for unreadable file content
pub const PLACEHOLDER: &str = "无法读取文件内容";

/// Heading suffix marking folder entries
pub const FOLDER_MARKER: &str = "文件夹";

/// Render one entry as a markdown block.
pub fn render_entry(entry: &Entry) -> Result<String, PackError> {
    match entry.kind {
        EntryKind::File => Ok(render_file_entry(entry)),
        EntryKind::Folder => render_folder_entry(entry),
    }
}

/// Single-file entry: top-level heading plus one fenced block.
fn render_file_entry(entry: &Entry) -> String {
    debug!("Rendering file entry {}", entry.label);
    let mut block = format!("# {}\n", entry.label);
    block.push_str(&render_fence(&entry.path));
    block
}

/// Folder entry: top-level heading, then a second-level heading and fenced
/// block per sub-file.
///
/// A folder that cannot be listed at render time is a structural failure,
/// same as the base directory itself.
fn render_folder_entry(entry: &Entry) -> Result<String, PackError> {
    debug!("Rendering folder entry {}", entry.label);
    let mut block = format!("# {} {}\n", entry.label, FOLDER_MARKER);

    for filename in folder_sub_files(&entry.path)? {
        block.push_str(&format!("## {}\n", filename));
        block.push_str(&render_fence(&entry.path.join(&filename)));
    }

    Ok(block)
}

/// List and order a folder's renderable sub-files.
///
/// Only immediate children that are files and carry an extension are kept;
/// extensionless build artifacts are skipped. Header extensions sort first,
/// then sources, then everything else, ties broken by filename.
fn folder_sub_files(folder: &Path) -> Result<Vec<String>, PackError> {
    let mut files = Vec::new();

    for item in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let item = item.map_err(|e| {
            PackError::Io(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "folder traversal failed")
            }))
        })?;

        if !item.file_type().is_file() {
            continue;
        }
        let name = item.file_name().to_string_lossy().into_owned();
        if name.contains('.') {
            files.push(name);
        }
    }

    files.sort_by_key(|name| (extension_rank(name), name.clone()));
    Ok(files)
}

/// Header files before sources before everything else.
fn extension_rank(filename: &str) -> u8 {
    let extension = Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "h" | "hpp" => 0,
        "cpp" | "c" => 1,
        _ => 2,
    }
}

/// One fenced code block for a file, or the placeholder block when the file
/// cannot be read. The placeholder fence carries no language tag.
fn render_fence(path: &Path) -> String {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match read_text(path) {
        Some(content) => format!("```{}\n{}\n```\n\n", language_tag(&filename), content),
        None => format!("```\n{}\n```\n\n", PLACEHOLDER),
    }
}
