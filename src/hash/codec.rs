//! Binary and base64 text encodings of a hashed password.
//!
//! The binary layout is identical to ASP.NET's, with all integers big-endian:
//!
//! ```text
//! version[1] = 0x01, prf[4] = 1, iterations[4], salt_length[4], salt[n], subkey[32]
//! ```
//!
//! The text form is the padded, standard-alphabet base64 encoding of the binary
//! form, as stored in the ASP.NET user table.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{PasswordHash, FORMAT_VERSION, PRF_HMAC_SHA256, SUBKEY_LENGTH};
use crate::{
    crypto::buffer::SecretBytes,
    error::{Error, Result},
    params::{check_iterations, check_salt_length},
};

/// The length of the fixed header: a version byte and three 32-bit integers
pub const HEADER_LENGTH: usize = 1 + 3 * 4;

const PRF_OFFSET: usize = 1;
const ITERATIONS_OFFSET: usize = PRF_OFFSET + 4;
const SALT_LENGTH_OFFSET: usize = ITERATIONS_OFFSET + 4;

impl PasswordHash {
    /// Encode the hashed value in the ASP.NET binary format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LENGTH + self.salt.len() + self.subkey.len());
        out.push(FORMAT_VERSION);
        out.extend_from_slice(&PRF_HMAC_SHA256.to_be_bytes());
        out.extend_from_slice(&self.iterations.to_be_bytes());
        out.extend_from_slice(&(self.salt.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.subkey);
        out
    }

    /// Decode a hashed value from the ASP.NET binary format.
    ///
    /// The header is validated in full before anything is copied out of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LENGTH {
            return Err(err_msg!(
                Corrupt,
                "Hashed value too short: {} bytes",
                data.len()
            ));
        }
        let version = data[0];
        if version != FORMAT_VERSION {
            return Err(err_msg!(Version, "Unknown hashed format version: {}", version));
        }
        let prf = read_u32(data, PRF_OFFSET);
        if prf != PRF_HMAC_SHA256 {
            return Err(err_msg!(Function, "Unknown hash function: {}", prf));
        }
        let iterations = read_u32(data, ITERATIONS_OFFSET);
        check_iterations(iterations)?;
        let salt_len = read_u32(data, SALT_LENGTH_OFFSET) as usize;
        check_salt_length(salt_len)?;
        let expected_len = HEADER_LENGTH + salt_len + SUBKEY_LENGTH;
        if data.len() != expected_len {
            return Err(err_msg!(
                Corrupt,
                "Hashed value length {} does not match expected length {}",
                data.len(),
                expected_len
            ));
        }
        let (salt, subkey) = data[HEADER_LENGTH..].split_at(salt_len);
        Ok(Self {
            iterations,
            salt: salt.to_vec(),
            subkey: SecretBytes::from_slice(subkey),
        })
    }

    /// Encode the hashed value as base64 text, the form stored by ASP.NET
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decode a hashed value from base64 text
    pub fn from_base64(text: impl AsRef<[u8]>) -> Result<Self> {
        let data = STANDARD
            .decode(text)
            .map_err(err_map!(Corrupt, "Invalid password hash encoding"))?;
        Self::from_bytes(&data)
    }
}

#[inline]
fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..(offset + 4)]);
    u32::from_be_bytes(buf)
}

impl Display for PasswordHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl FromStr for PasswordHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base64(s)
    }
}

impl Serialize for PasswordHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for PasswordHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(HashVisitor)
    }
}

struct HashVisitor;

impl<'de> de::Visitor<'de> for HashVisitor {
    type Value = PasswordHash;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a base64-encoded password hash")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        PasswordHash::from_base64(value).map_err(E::custom)
    }
}
