pub mod display_components;
pub mod error_boundary;
pub mod loading_indicator;
pub mod navbar;
pub mod notifications;
pub mod pdf_viewer;
pub mod upload_components;
