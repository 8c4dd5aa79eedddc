//! Shared helpers for the integration tests.
//!
//! Fixture PDFs are generated on the fly. Every page carries a `/PdTag`
//! string such as `"a.p2"` so tests can check page order after a merge.

#![allow(dead_code)]

use lopdf::{Document, Object, dictionary};
use std::path::{Path, PathBuf};

use pdfdeck::Config;
use pdfdeck::config::OverwriteMode;

/// Build a PDF with `pages` pages tagged `"{tag}.p1"`, `"{tag}.p2"`, ...
pub fn pdf_bytes(tag: &str, pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (1..=pages)
        .map(|number| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                "PdTag" => Object::string_literal(format!("{tag}.p{number}")),
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to serialize fixture");
    bytes
}

/// Write a tagged fixture PDF into `dir`.
pub fn write_pdf(dir: &Path, name: &str, tag: &str, pages: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, pdf_bytes(tag, pages)).expect("Failed to write fixture");
    path
}

/// Page tags of a serialized PDF, in page order.
pub fn page_tags(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).expect("Merged output does not parse");
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).expect("Missing page dictionary");
            let tag = page
                .get(b"PdTag")
                .and_then(Object::as_str)
                .expect("Page lost its tag");
            String::from_utf8_lossy(tag).into_owned()
        })
        .collect()
}

/// Page tags of a PDF file.
pub fn page_tags_of(path: &Path) -> Vec<String> {
    page_tags(&std::fs::read(path).expect("Failed to read output"))
}

/// Configuration writing into `dir`.
pub fn output_config(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_path_buf(),
        overwrite_mode: OverwriteMode::Force,
        quiet: true,
        ..Config::default()
    }
}

/// Create a scratch directory.
pub fn temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("Failed to create temp dir")
}
