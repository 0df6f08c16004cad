//! Integration tests for the encoding fallback chain

use blogpack::document::{generate, OUTPUT_FILENAME};
use std::fs;
use tempfile::TempDir;

/// GBK-encoded sources decode through the fallback chain and land in the
/// document as proper UTF-8.
#[test]
fn test_gbk_source_decodes() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    // "// 中文注释" in GBK
    let mut gbk = b"// ".to_vec();
    gbk.extend([0xd6, 0xd0, 0xce, 0xc4, 0xd7, 0xa2, 0xca, 0xcd]);
    fs::write(base.join("Ex1.cpp"), &gbk).unwrap();

    generate(base, OUTPUT_FILENAME).unwrap();

    let document = fs::read_to_string(base.join("blog.md")).unwrap();
    assert!(document.contains("// 中文注释"));
}

/// Bytes invalid under both UTF-8 and GBK still decode (latin-1 is total)
/// and never abort the run.
#[test]
fn test_arbitrary_bytes_never_abort() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    fs::write(base.join("Ex1.cpp"), [0x80, 0x00, 0xff, 0xfe]).unwrap();
    fs::write(base.join("Ex2.cpp"), "fine").unwrap();

    let summary = generate(base, OUTPUT_FILENAME).unwrap();
    assert_eq!(summary.entries, 2);

    let document = fs::read_to_string(base.join("blog.md")).unwrap();
    assert!(document.contains("# Ex2\n```cpp\nfine\n```\n\n"));
}

/// Mixed encodings across entries are decoded independently.
#[test]
fn test_mixed_encodings_per_entry() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    fs::write(base.join("Ex1.cpp"), "// utf-8 中文").unwrap();
    fs::write(base.join("Ex2.cpp"), [0xd6, 0xd0, 0xce, 0xc4]).unwrap();

    generate(base, OUTPUT_FILENAME).unwrap();

    let document = fs::read_to_string(base.join("blog.md")).unwrap();
    assert!(document.contains("// utf-8 中文"));
    assert!(document.contains("# Ex2\n```cpp\n中文\n```\n\n"));
}
