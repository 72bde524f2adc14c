pub mod archive;
pub mod dir_resolver;
pub mod http_transport;
pub mod property_filter;

// Re-export the default collaborators
pub use dir_resolver::DirectoryResolver;
pub use http_transport::HttpTransport;
pub use property_filter::PropertyFilter;
