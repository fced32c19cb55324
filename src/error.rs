use thiserror::Error;

/// Failures other than "the path does not match", which is `Ok(None)`.
#[derive(Error, Debug)]
pub enum MatchError {
    /// The path matched but a captured value could not be percent-decoded.
    #[error("malformed value for parameter {name:?}: {value:?}")]
    MalformedValue { name: String, value: String },
    #[error("invalid route pattern")]
    Compile(#[from] regex::Error),
}
