#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The resolver was configured with an empty directive keyword
    #[error("include keyword must not be empty")]
    EmptyKeyword,

    /// The file does not exist
    #[error("file {file:?} does not exist")]
    NotFound { file: String },

    /// The file exists, but could not be opened or read
    #[error("unable to read file {file:?}: {source}")]
    OpenFailed {
        file: String,
        source: std::io::Error,
    },

    /// Include directive without a quoted path
    #[error("malformed include directive: {file:?} ({line:?}): {text:?}")]
    MalformedDirective {
        /// File containing the directive
        file: String,

        /// 1-based line of the directive
        line: usize,

        /// The directive line as written
        text: String,
    },

    /// A file whose include directive resolves to itself
    #[error("file {file:?} tried to include itself")]
    SelfInclude { file: String },
}

impl ResolveError {
    pub(crate) fn from_io(file: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ResolveError::NotFound {
                file: file.to_owned(),
            }
        } else {
            ResolveError::OpenFailed {
                file: file.to_owned(),
                source: err,
            }
        }
    }
}
