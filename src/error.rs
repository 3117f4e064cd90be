use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use crate::crypto::{Error as CryptoError, ErrorKind as CryptoErrorKind};

/// The possible kinds of error produced by the crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The hashed value is malformed: bad text encoding or a byte length
    /// inconsistent with its declared fields
    Corrupt,

    /// The hashed value uses an unsupported format version
    Version,

    /// The hashed value uses an unsupported pseudorandom function
    Function,

    /// An iteration count or salt length is outside the accepted range
    Parameter,

    /// The secure random source could not supply salt bytes
    RandomSource,

    /// The password does not match the hashed value
    Mismatch,

    /// An unexpected error occurred
    Unexpected,
}

impl ErrorKind {
    /// Convert the error kind to a string reference
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corrupt => "Malformed hashed value",
            Self::Version => "Unknown hashed format version",
            Self::Function => "Unknown hash function",
            Self::Parameter => "Invalid hash function parameter",
            Self::RandomSource => "Random source error",
            Self::Mismatch => "Password does not match hashed value",
            Self::Unexpected => "Unexpected error",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The standard crate error type
#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
    pub(crate) message: Option<String>,
}

/// The standard crate result type
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn from_msg<T: Into<String>>(kind: ErrorKind, msg: T) -> Self {
        Self {
            kind,
            cause: None,
            message: Some(msg.into()),
        }
    }

    /// Accessor for the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Accessor for the error message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn with_cause<T: Into<Box<dyn StdError + Send + Sync + 'static>>>(
        mut self,
        err: T,
    ) -> Self {
        self.cause = Some(err.into());
        self
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(msg) = self.message.as_ref() {
            f.write_str(msg)?;
        } else {
            f.write_str(self.kind.as_str())?;
        }
        if let Some(cause) = self.cause.as_ref() {
            write!(f, "\nCaused by: {}", cause)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            cause: None,
            message: None,
        }
    }
}

impl From<CryptoError> for Error {
    fn from(err: CryptoError) -> Self {
        let (kind, message, cause) = err.into_parts();
        let kind = match kind {
            CryptoErrorKind::Random => ErrorKind::RandomSource,
            CryptoErrorKind::Usage => ErrorKind::Parameter,
            CryptoErrorKind::Unexpected => ErrorKind::Unexpected,
        };
        Error {
            kind,
            cause,
            message: Some(message.to_owned()),
        }
    }
}

macro_rules! err_msg {
    () => {
        $crate::error::Error::from($crate::error::ErrorKind::Unexpected)
    };
    ($kind:ident) => {
        $crate::error::Error::from($crate::error::ErrorKind::$kind)
    };
    ($kind:ident, $($args:tt)+) => {
        $crate::error::Error::from_msg($crate::error::ErrorKind::$kind, format!($($args)+))
    };
}

macro_rules! err_map {
    ($($params:tt)*) => {
        |err| err_msg!($($params)*).with_cause(err)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(Error::from(ErrorKind::Corrupt).to_string(), "Malformed hashed value");
        let err = err_msg!(Parameter, "Salt length {} out of range", 65);
        assert_eq!(err.kind(), ErrorKind::Parameter);
        assert_eq!(err.to_string(), "Salt length 65 out of range");
        assert_eq!(err.message(), Some("Salt length 65 out of range"));
    }

    #[test]
    fn error_cause() {
        let err = "x1".parse::<u32>().map_err(err_map!(Parameter, "Invalid count"));
        let err = err.unwrap_err();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Invalid count\nCaused by: "));
    }

    #[test]
    fn error_eq_by_kind() {
        assert_eq!(Error::from(ErrorKind::Version), err_msg!(Version));
        assert_ne!(Error::from(ErrorKind::Version), err_msg!(Function));
    }

    #[test]
    fn from_crypto_error() {
        let err = Error::from(CryptoError::from(CryptoErrorKind::Random));
        assert_eq!(err.kind(), ErrorKind::RandomSource);
        let err = Error::from(CryptoError::from(CryptoErrorKind::Usage));
        assert_eq!(err.kind(), ErrorKind::Parameter);
    }
}
