pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod resolver;
pub mod syntax;
pub mod workspace;

pub use error::RouteError;
pub use model::Route;
pub use resolver::{RouteExtractor, extract_routes, resolve_routes};
