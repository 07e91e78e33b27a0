pub mod article_session;
pub mod display_options;
pub mod url_param;
