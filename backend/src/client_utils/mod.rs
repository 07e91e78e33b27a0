pub mod summarease_client;
