pub mod extension_filter;
pub mod manifest;
