//! Best-effort text extraction and code-fence language tagging.
//!
//! Files in the workspace are a mix of UTF-8 and GBK (legacy Chinese
//! comments), with the odd stray byte. Decoding tries a fixed ordered list of
//! encodings and falls back to latin-1, which maps every byte, so decoding as
//! such is total; the read sentinel is reached only on I/O failure.

use encoding_rs::{Encoding, GBK, UTF_8};
use std::path::Path;
use tracing::debug;

/// Encodings tried strictly, in order, before the latin-1 fallback
const STRICT_ENCODINGS: &[&Encoding] = &[UTF_8, GBK];

/// Decode `bytes` with a single encoding, rejecting any malformed sequence.
pub fn try_decode(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    // No BOM sniffing: a BOM, if present, stays part of the content.
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

/// Decode file bytes via the fallback chain: strict UTF-8, strict GBK, then
/// latin-1. The terminal latin-1 step accepts any byte sequence.
pub fn decode_text(bytes: &[u8]) -> String {
    for encoding in STRICT_ENCODINGS {
        if let Some(text) = try_decode(bytes, encoding) {
            return text;
        }
    }
    encoding_rs::mem::decode_latin1(bytes).into_owned()
}

/// Read a file as text, best-effort.
///
/// Returns `None` when the file cannot be opened or read; callers render the
/// placeholder block in place of content and continue. This is deliberately
/// silent beyond a debug event.
pub fn read_text(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(decode_text(&bytes)),
        Err(e) => {
            debug!("Unreadable file {}: {}", path.display(), e);
            None
        }
    }
}

/// Language hint for a fenced code block, from the filename extension.
///
/// Static lookup only; unmapped extensions get the generic `text` tag.
pub fn language_tag(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "cpp" => "cpp",
        "h" => "h",
        "hpp" => "h",
        "c" => "c",
        "py" => "python",
        "js" => "javascript",
        "java" => "java",
        "md" => "markdown",
        "txt" => "text",
        _ => "text",
    }
}
