pub mod summarease_api;
