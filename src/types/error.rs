use core::fmt;
use derive_more::From;

use crate::types::Style;

#[derive(Debug,From)]
pub enum Error {
   #[from]
    Io(std::io::Error),
   #[from]
    Config(::config::ConfigError),
    /// no font registered with the writer for this style
    MissingFont(Style),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Config(e) => write!(f, "configuration error: {e}"),
            Error::MissingFont(style) => write!(f, "no font registered for {style:?}"),
        }
    }
}
