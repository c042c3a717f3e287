//! Error type

use core::fmt::{self, Display};

/// Result type with the `koblitz` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Elliptic curve errors.
///
/// Every recoverable failure in this crate is reported through one of these
/// kinds; none of them is retried or silently recovered from internally,
/// except for the bounded redraw loops in key generation and signing.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A textual numeric input could not be classified as decimal, hex,
    /// binary or Base58.
    InvalidNumberFormat {
        /// The offending input, preserved for diagnostics.
        value: String,
    },

    /// Point coordinates fail the curve equation, or a required point
    /// argument is missing or malformed.
    InvalidPoint,

    /// Private scalar outside `[1, n - 1]`, or of the wrong length.
    InvalidPrivateKey,

    /// DER signature structure violates the expected length/tag constants.
    MalformedSignature,

    /// The secure random source failed, or the bounded redraw loop in key
    /// generation or signing was exhausted.
    InsufficientEntropy,

    /// Modular inverse attempted on non-coprime operands, or an operand is
    /// outside the backend's domain.
    ArithmeticDomain,

    /// A Base58Check payload whose trailing checksum does not match.
    InvalidChecksum,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNumberFormat { value } => {
                write!(f, "invalid number format: {value:?}")
            }
            Error::InvalidPoint => f.write_str("point is not on the curve"),
            Error::InvalidPrivateKey => f.write_str("private key out of range"),
            Error::MalformedSignature => f.write_str("malformed DER signature"),
            Error::InsufficientEntropy => f.write_str("secure random source failed"),
            Error::ArithmeticDomain => f.write_str("arithmetic domain error"),
            Error::InvalidChecksum => f.write_str("Base58Check checksum mismatch"),
        }
    }
}

impl std::error::Error for Error {}
