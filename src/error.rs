use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop route extraction before a tree reaches the resolver.
///
/// Once a tree is produced resolution itself never fails: shapes the
/// resolver does not recognize are skipped.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Neither a source file nor a workspace was supplied.
    #[error("missing source file argument")]
    MissingInput,

    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser reported ERROR or MISSING nodes.
    #[error("syntax error near line {line}")]
    Parse { line: usize },

    #[error("nesting deeper than {limit} levels near line {line}")]
    TooDeep { line: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, RouteError>;
