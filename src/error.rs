use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("invalid literal `{0}`")]
    InvalidToken(String),

    #[error("clause is not terminated by 0")]
    MissingTerminator,

    #[error("0 before the end of the clause")]
    MisplacedZero,
}

/// A malformed clause line. `line` counts from 1.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
