/// Result type alias for the pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised by the assembly pipeline.
///
/// Missing or malformed configuration never surfaces here; assemblers fall
/// back to defaults for that. These variants are structural violations: an
/// assembler chain that produces one is miswired, and the whole generation
/// run aborts.
#[derive(Debug)]
pub enum Error {
    UnrecognizedMethod { method: String, path: String },
    MissingResponses { method: String, path: String },
    IncompleteDocument { field: &'static str },
    Serialization(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::UnrecognizedMethod { method, path } => {
                write!(f, "Unrecognized HTTP method '{}' on route {}", method, path)
            }
            Error::MissingResponses { method, path } => {
                write!(f, "Operation {} {} assembled without responses", method, path)
            }
            Error::IncompleteDocument { field } => {
                write!(f, "Document sealed without required field '{}'", field)
            }
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON serialization error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization(format!("YAML serialization error: {}", err))
    }
}
