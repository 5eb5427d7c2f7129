use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    /// Chart has no data points.
    EmptySeries,
    /// Chart series differ in length.
    LengthMismatch { x: usize, y: usize },
    /// Renderer output failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySeries => write!(f, "chart has no data points"),
            Error::LengthMismatch { x, y } => {
                write!(f, "series length mismatch: {} x values, {} y values", x, y)
            }
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
