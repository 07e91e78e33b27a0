//! Server-side access to the SummarEase parsing API.

pub mod api;
pub mod client_utils;
pub mod config;
