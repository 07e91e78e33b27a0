//! The uploaded article shared between the upload and display pages.

use std::rc::Rc;

use common::article::UploadResponse;
use dioxus::prelude::*;

/// PDF bytes shared without copying; equal only to clones of itself.
#[derive(Clone, Debug)]
pub struct PdfBytes(Rc<[u8]>);

impl PdfBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Rc::from(bytes))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for PdfBytes {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArticleSession {
    /// Increases with every upload; tags renders of this session's PDF.
    pub generation: u64,
    pub file_name: String,
    pub pdf_bytes: PdfBytes,
    pub response: Rc<UploadResponse>,
}

/// App-wide slot holding at most one uploaded article.
#[derive(Clone, Copy)]
pub struct ArticleSessionStore {
    session: Signal<Option<ArticleSession>>,
    generation: Signal<u64>,
}

impl ArticleSessionStore {
    pub fn new() -> Self {
        Self { session: Signal::new(None), generation: Signal::new(0) }
    }

    pub fn current(&self) -> Option<ArticleSession> {
        self.session.read().clone()
    }

    /// Replaces whatever was stored before.
    pub fn store(&mut self, file_name: String, pdf_bytes: Vec<u8>, response: UploadResponse) -> u64 {
        let generation = *self.generation.peek() + 1;
        self.generation.set(generation);
        self.session.set(Some(ArticleSession {
            generation,
            file_name,
            pdf_bytes: PdfBytes::new(pdf_bytes),
            response: Rc::new(response),
        }));
        generation
    }

    pub fn clear(&mut self) {
        self.session.set(None);
    }
}
