use std::error;
use std::fmt;
use std::io;
use std::result;

use log::SetLoggerError;

pub type Result<T> = result::Result<T, PercolationError>;

#[derive(Debug)]
pub enum PercolationError {
    /// Grid size or trial count that is not strictly positive, or too large to allocate.
    InvalidSize {
        what: &'static str,
        value: i64,
    },
    /// Site coordinates outside `[1, n] x [1, n]`.
    OutOfRange {
        row: usize,
        col: usize,
        n: usize,
    },
    /// Union-find element outside `[0, size)`.
    ElementOutOfRange {
        element: usize,
        size: usize,
    },
    ArgumentCount {
        expected: usize,
        found: usize,
    },
    InvalidArgument {
        name: &'static str,
        value: String,
    },
    Io(io::Error),
    Logger(SetLoggerError),
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PercolationError::InvalidSize { what, value } => {
                write!(f, "{} {} is out of range", what, value)
            }
            PercolationError::OutOfRange { row, col, n } => write!(
                f,
                "site (row {}, col {}) is outside the {}x{} grid",
                row, col, n, n
            ),
            PercolationError::ElementOutOfRange { element, size } => {
                write!(f, "element {} is outside [0, {})", element, size)
            }
            PercolationError::ArgumentCount { expected, found } => write!(
                f,
                "expected {} arguments (n trials), got {}",
                expected, found
            ),
            PercolationError::InvalidArgument { name, value } => {
                write!(f, "invalid value for {}: {:?}", name, value)
            }
            PercolationError::Io(e) => write!(f, "io error: {}", e),
            PercolationError::Logger(e) => write!(f, "logger setup failed: {}", e),
        }
    }
}

impl error::Error for PercolationError {}

impl From<io::Error> for PercolationError {
    fn from(e: io::Error) -> PercolationError {
        PercolationError::Io(e)
    }
}

impl From<SetLoggerError> for PercolationError {
    fn from(e: SetLoggerError) -> PercolationError {
        PercolationError::Logger(e)
    }
}
