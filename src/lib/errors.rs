use failure::Fail;

/// The Error enum containing all Errors that may occur when running verstamp
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Fail)]
pub enum Error {
    #[fail(display = "Failed to read the version file! Error: {}", _0)]
    VersionFile(String),
    #[fail(display = "Failed to read/write the target file! Error: {}", _0)]
    TargetFile(String),
    #[fail(display = "Failed to build the placeholder pattern! Error: {}", _0)]
    Pattern(String),
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Error::Pattern(e.to_string())
    }
}

