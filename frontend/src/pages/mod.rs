pub mod display_page;
pub mod not_found_page;
pub mod upload_page;
