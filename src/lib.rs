//! Password hashing and verification compatible with the ASP.NET Core Identity
//! password hasher, format version 3: PBKDF2 with HMAC-SHA256, a 128-bit salt
//! and a 256-bit subkey by default.
//!
//! Hashed values stored by an ASP.NET application can be verified unchanged,
//! so users keep their passwords when the server side is replaced.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

#[macro_use]
mod error;
pub use self::error::{Error, ErrorKind, Result};

#[macro_use]
mod macros;

#[cfg(feature = "log")]
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate hex_literal;

pub use pwhash_crypto as crypto;

mod hash;
pub use self::hash::{
    PasswordHash, FORMAT_VERSION, HEADER_LENGTH, PRF_HMAC_SHA256, SUBKEY_LENGTH,
};

#[cfg(feature = "logger")]
mod logger;
#[cfg(feature = "logger")]
pub use self::logger::set_default_logger;

mod params;
pub use self::params::{
    Params, DEFAULT_ITERATIONS, DEFAULT_SALT_LENGTH, MAX_ITERATIONS, MAX_SALT_LENGTH,
    MIN_ITERATIONS, MIN_SALT_LENGTH,
};

mod verify;
pub use self::verify::{
    compare_hash_and_password, generate_from_password, verify_encoded_hash, verify_password,
};
