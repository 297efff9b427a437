use thiserror::Error;

/// Errors raised while reading a resolution source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid markdown format - missing frontmatter")]
    MissingFrontMatter,
}
