use thiserror::Error;

/// Errors raised while constructing a [`Codec`][crate::Codec].
///
/// All of these are configuration mistakes and fatal at startup; a
/// process must not serve requests with a codec it failed to build.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("alphabet contains duplicate symbol '{0}'")]
    DuplicateSymbol(char),
    #[error("alphabet must be ASCII")]
    NonAsciiAlphabet,
    #[error("alphabet has {len} symbols; at least {min} are required")]
    AlphabetTooSmall { len: usize, min: usize },
}

/// The input string is not a code this codec produced.
///
/// Deliberately carries no detail: callers must not be able to tell a
/// malformed string apart from a well-formed code minted under a
/// different salt. Both mean "not found".
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("input is not a valid code")]
pub struct InvalidCode;
