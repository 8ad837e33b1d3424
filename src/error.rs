use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    ReadFailure { source: io::Error },
    Format { line: usize },
    SectionMissing,
    KeyMissing,
    DefaultSectionProtected,
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Self::ReadFailure { ref source } => Some(source),
            Self::Format { .. }
            | Self::SectionMissing
            | Self::KeyMissing
            | Self::DefaultSectionProtected => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ReadFailure { source: _ } => "failed to read data".fmt(f),
            Self::Format { line } => write!(f, "format is incorrect at line {line}"),
            Self::SectionMissing => "section does not exist".fmt(f),
            Self::KeyMissing => "section's key does not exist".fmt(f),
            Self::DefaultSectionProtected => "default section cannot be removed".fmt(f),
        }
    }
}
