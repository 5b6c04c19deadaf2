use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown optimization method: {0}")]
    UnknownMethod(String),

    #[error("Unknown signal side: {0}")]
    UnknownSide(String),
}
