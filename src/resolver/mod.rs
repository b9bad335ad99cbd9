//! Scoped route resolution.
//!
//! [`resolve_routes`] walks an already-parsed file, tracking which local names
//! hold router groups in which block, and composes every route registration's
//! path with the prefixes of the groups it was registered through.
//! [`RouteExtractor`] bundles parsing and resolution for callers that start
//! from source text.

pub mod matchers;
pub mod path;
pub mod scope;
pub mod sink;
pub mod walker;

use crate::error::{Result, RouteError};
use crate::model::Route;
use crate::syntax::{GoParser, SyntaxNode};
use std::path::Path;

pub use path::join;
pub use scope::GroupMeta;

/// Routes registered in `file`, in source order.
pub fn resolve_routes(file: &SyntaxNode) -> Vec<Route> {
    walker::Walker::new().run(file)
}

pub struct RouteExtractor {
    parser: GoParser,
}

impl RouteExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
        })
    }

    pub fn extract(&mut self, source: &str) -> Result<Vec<Route>> {
        let file = self.parser.parse(source)?;
        Ok(resolve_routes(&file))
    }

    pub fn extract_file(&mut self, path: &Path) -> Result<Vec<Route>> {
        let source = std::fs::read_to_string(path).map_err(|source| RouteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract(&source)
    }
}

/// Convenience wrapper for one-off extraction.
pub fn extract_routes(source: &str) -> Result<Vec<Route>> {
    RouteExtractor::new()?.extract(source)
}
