//! Parsing API calls and module exports.

mod response;

mod upload_pdf;
pub use upload_pdf::upload_pdf;

mod validate_url;
pub use validate_url::validate_url;
