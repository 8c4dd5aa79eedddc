//! Page-level PDF composition on top of lopdf.
//!
//! The merge works in three steps: load each source, copy its pages into the
//! output's object space, then attach the copies to the output page tree.
//!
//! # Examples
//!
//! ```no_run
//! use pdfdeck::merge::{OutputDocument, SourceDocument};
//!
//! # fn example(a: &[u8], b: &[u8]) -> pdfdeck::Result<Vec<u8>> {
//! let mut output = OutputDocument::create();
//! for bytes in [a, b] {
//!     let source = SourceDocument::load(bytes)?;
//!     for page in output.copy_pages(source)? {
//!         output.add_page(page)?;
//!     }
//! }
//! output.save()
//! # }
//! ```

use lopdf::{Document, Object, ObjectId, dictionary};

use crate::error::{DeckError, Result};
use crate::utils::{INHERITABLE_PAGE_KEYS, inherited_page_attribute};

/// A parsed source document.
#[derive(Debug)]
pub struct SourceDocument {
    doc: Document,
}

impl SourceDocument {
    /// Parse serialized PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a readable PDF.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)?;
        Ok(Self { doc })
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Copy inheritable attributes from ancestors onto each page that lacks
    /// them. Pages lose their ancestors once moved into another tree.
    fn materialize_inherited(&mut self) -> Result<()> {
        let pages: Vec<ObjectId> = self.doc.get_pages().into_values().collect();

        for page_id in pages {
            for key in INHERITABLE_PAGE_KEYS {
                if self.doc.get_dictionary(page_id)?.has(key) {
                    continue;
                }
                if let Some(value) = inherited_page_attribute(&self.doc, page_id, key) {
                    self.doc.get_dictionary_mut(page_id)?.set(key, value);
                }
            }
        }

        Ok(())
    }
}

/// A page copied into an [`OutputDocument`] but not yet placed in its page
/// tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a copied page only shows up once passed to add_page"]
pub struct PageHandle {
    id: ObjectId,
}

/// The document being assembled.
#[derive(Debug)]
pub struct OutputDocument {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
    compress: bool,
}

impl OutputDocument {
    /// Create an empty output document with a bare page tree.
    pub fn create() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        doc.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0,
            }
            .into(),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Self {
            doc,
            pages_id,
            kids: Vec::new(),
            compress: true,
        }
    }

    /// Whether streams are compressed on save. On by default.
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Pages added so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Move every page of `source`, with the objects it references, into this
    /// document. Handles come back in source page order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source page tree is malformed.
    pub fn copy_pages(&mut self, mut source: SourceDocument) -> Result<Vec<PageHandle>> {
        source.materialize_inherited()?;

        let mut doc = source.doc;
        doc.renumber_objects_with(self.doc.max_id + 1);
        self.doc.max_id = self.doc.max_id.max(doc.max_id);

        let handles = doc
            .get_pages()
            .into_values()
            .map(|id| PageHandle { id })
            .collect();

        self.doc.objects.extend(doc.objects);
        Ok(handles)
    }

    /// Append a copied page to the end of the page tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not name a page of this document.
    pub fn add_page(&mut self, handle: PageHandle) -> Result<()> {
        let page = self
            .doc
            .get_dictionary_mut(handle.id)
            .map_err(|_| DeckError::other(format!("Page {:?} is not part of this document", handle.id)))?;

        if !page.has_type(b"Page") {
            return Err(DeckError::other(format!("Object {:?} is not a page", handle.id)));
        }

        page.set("Parent", self.pages_id);
        self.kids.push(handle.id);
        Ok(())
    }

    /// Finish the page tree and serialize.
    ///
    /// Objects no longer reachable from the catalog, such as the source page
    /// trees, are dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn save(mut self) -> Result<Vec<u8>> {
        let pages = self.doc.get_dictionary_mut(self.pages_id)?;
        pages.set(
            "Kids",
            self.kids
                .iter()
                .map(|&id| Object::Reference(id))
                .collect::<Vec<_>>(),
        );
        pages.set("Count", self.kids.len() as i64);

        self.doc.prune_objects();
        self.doc.renumber_objects();
        if self.compress {
            self.doc.compress();
        }

        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}
