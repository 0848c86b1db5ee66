use derive_more::{Display, Error, From};

use super::Flags;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unable to initialize libmagic (os error {_0})")]
pub struct OpenError(#[error(not(source))] pub i32);

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("failed while loading magic database: {message}")]
pub struct LoadError {
    pub message: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("libmagic doesn't support flags {flags}")]
pub struct FlagsError {
    pub flags: Flags,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unable to detect type of {path}: {message}")]
pub struct DetectError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From)]
pub enum MagicError {
    Open(OpenError),
    Load(LoadError),
    Flags(FlagsError),
    Detect(DetectError),
}
