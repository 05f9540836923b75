//! Utility modules for common functionality

pub mod http;

pub use http::SheetClient;
