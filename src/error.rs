use chroma::ChromaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Chroma(#[from] ChromaError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<chroma::MarkupError> for Error {
    fn from(error: chroma::MarkupError) -> Self {
        Self::Chroma(error.into())
    }
}

impl From<chroma::NotationError> for Error {
    fn from(error: chroma::NotationError) -> Self {
        Self::Chroma(error.into())
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
