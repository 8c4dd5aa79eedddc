//! Fixture builders shared by unit tests.

use lopdf::{Dictionary, Document, Object, dictionary};

/// Build a PDF whose pages are tagged `"{tag}.p1"`, `"{tag}.p2"`, ...
pub fn pdf_bytes(tag: &str, pages: usize) -> Vec<u8> {
    pdf_bytes_with(tag, pages, |_| {})
}

/// Like [`pdf_bytes`], letting the caller adjust each page dictionary.
pub fn pdf_bytes_with<F>(tag: &str, pages: usize, mut adjust: F) -> Vec<u8>
where
    F: FnMut(&mut Dictionary),
{
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for number in 1..=pages {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "PdTag" => Object::string_literal(format!("{tag}.p{number}")),
        };
        adjust(&mut page);
        kids.push(Object::Reference(doc.add_object(page)));
    }

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
    doc.save_to(&mut bytes).expect("fixture serializes");
    bytes
}

/// Page tags of a serialized PDF, in page order.
pub fn page_tags(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).expect("fixture parses");
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).expect("page dictionary");
            let tag = page.get(b"PdTag").and_then(Object::as_str).expect("page tag");
            String::from_utf8_lossy(tag).into_owned()
        })
        .collect()
}
