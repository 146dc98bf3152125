// MIT/Apache2 License

use std::fmt;

/// Sum error type for maskpath operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// A string message.
    Msg(String),
    /// Attempted to run an unsupported operation.
    NotSupported(NotSupportedOp),
    /// A polygon handed to a rasterizer contained a NaN or infinite coordinate.
    NonFinite,
    /// The pixel buffer for an image does not match its dimensions and format.
    ImageSize { expected: usize, actual: usize },
}

/// An operation that is not supported by a [`Rasterizer`].
///
/// [`Rasterizer`]: crate::Rasterizer
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotSupportedOp {
    EvenOdd,
    Supersampling,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::Msg(s) => f.write_str(s),
            Self::NotSupported(nsop) => {
                write!(f, "Rasterizer does not support feature \"{:?}\"", nsop)
            }
            Self::NonFinite => f.write_str("Polygon contains a non-finite coordinate"),
            Self::ImageSize { expected, actual } => write!(
                f,
                "Image buffer holds {} bytes, but its dimensions require {}",
                actual, expected
            ),
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
