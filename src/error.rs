// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CursorError {
    #[error("end of stream: fewer bytes available than requested")]
    EndOfStream,

    #[error("IO error: {0}")]
    Io(io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("position stack underflow: pop/peek on an empty stack")]
    StackUnderflow,

    #[error("unsupported field width: {0} bytes (supported: 1, 2, 4, 8, 16)")]
    UnsupportedWidth(usize),
}

// Short reads surface as UnexpectedEof from read_exact; fold them into the
// dedicated EndOfStream variant so callers can match on exhaustion directly.
impl From<io::Error> for CursorError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            CursorError::EndOfStream
        } else {
            CursorError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, CursorError>;
