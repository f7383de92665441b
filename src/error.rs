use thiserror::Error;

/// Failure kinds shared by the namespace tree and the command engine.
///
/// All variants except [`ShellError::AllocationFailure`] are locally
/// recoverable: the session keeps running and the tree is left exactly as it
/// was before the failing call. `AllocationFailure` cannot be retried
/// meaningfully, but it too is raised before any mutation takes place.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// A required argument is missing; payload is the usage line to show.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// The name already identifies a file or sub-directory (either kind)
    /// among the container's direct children.
    #[error("name already exists: {0}")]
    NameCollision(String),

    /// A fixed-capacity child collection is full; payload names which one.
    #[error("{0} limit reached")]
    CapacityExceeded(&'static str),

    /// No file or directory with this name among the direct children.
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// The ancestor chain is longer than the configured depth bound.
    #[error("path deeper than {0} levels")]
    PathTooDeep(usize),

    /// The node arena could not grow; the tree is left unmodified.
    #[error("memory error")]
    AllocationFailure,
}

pub type Result<T> = std::result::Result<T, ShellError>;
