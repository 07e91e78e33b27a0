//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod article;
pub mod api_error;
pub mod author;
pub mod citation;
pub mod page_viewport;
pub mod pdf_file;
pub mod pdf_view_state;
pub mod sections;
pub mod summary;
