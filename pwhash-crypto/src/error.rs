#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;
use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::error::Error as StdError;

/// The possible kinds of error produced by the crate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The secure random source could not produce output
    Random,

    /// An unexpected error occurred
    Unexpected,

    /// A primitive was called with parameters it does not accept
    Usage,
}

impl ErrorKind {
    /// Convert the error kind to a string reference
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "Random source error",
            Self::Unexpected => "Unexpected error",
            Self::Usage => "Usage error",
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
    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub(crate) cause: Option<String>,
    #[cfg(feature = "std")]
    pub(crate) cause: Option<std::boxed::Box<dyn StdError + Send + Sync + 'static>>,
    pub(crate) message: Option<&'static str>,
}

impl Error {
    pub(crate) fn from_msg(kind: ErrorKind, msg: &'static str) -> Self {
        Self {
            kind,
            #[cfg(feature = "alloc")]
            cause: None,
            message: Some(msg),
        }
    }

    /// Accessor for the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Accessor for the error message
    pub fn message(&self) -> &'static str {
        self.message.unwrap_or_else(|| self.kind.as_str())
    }

    /// Split the error into its kind, message and underlying cause
    #[cfg(feature = "std")]
    pub fn into_parts(
        self,
    ) -> (
        ErrorKind,
        &'static str,
        Option<std::boxed::Box<dyn StdError + Send + Sync + 'static>>,
    ) {
        let message = self.message();
        (self.kind, message, self.cause)
    }

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub(crate) fn with_cause<T: Into<Option<String>>>(mut self, err: T) -> Self {
        self.cause = err.into();
        self
    }

    #[cfg(feature = "std")]
    pub(crate) fn with_cause<T: Into<std::boxed::Box<dyn StdError + Send + Sync>>>(
        mut self,
        err: T,
    ) -> Self {
        self.cause = Some(err.into());
        self
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        self.fmt_cause(f)
    }
}

impl Error {
    #[cfg(feature = "alloc")]
    fn fmt_cause(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(cause) = self.cause.as_ref() {
            write!(f, "\nCaused by: {}", cause)?;
        }
        Ok(())
    }

    #[cfg(not(feature = "alloc"))]
    fn fmt_cause(&self, _f: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

#[cfg(feature = "std")]
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
            #[cfg(feature = "alloc")]
            cause: None,
            message: None,
        }
    }
}

macro_rules! err_msg {
    ($kind:ident) => {
        $crate::error::Error::from($crate::error::ErrorKind::$kind)
    };
    ($kind:ident, $msg:expr) => {
        $crate::error::Error::from_msg($crate::error::ErrorKind::$kind, $msg)
    };
}

#[cfg(feature = "std")]
macro_rules! err_map {
    ($($params:tt)*) => {
        |err| err_msg!($($params)*).with_cause(err)
    };
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
macro_rules! err_map {
    ($($params:tt)*) => {
        |err| err_msg!($($params)*).with_cause(alloc::string::ToString::to_string(&err))
    };
}

#[cfg(not(feature = "alloc"))]
macro_rules! err_map {
    ($($params:tt)*) => {
        |_| err_msg!($($params)*)
    };
}
