pub mod pdf_drop_zone;
pub mod pdf_url_form;
