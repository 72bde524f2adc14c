pub mod filter;
pub mod resolver;
pub mod transport;

// Re-export traits
pub use filter::TemplateFilter;
pub use resolver::FileSetResolver;
pub use transport::{ ExecutionResponse, RecipeTransport };
