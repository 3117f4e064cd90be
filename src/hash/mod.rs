//! The hashed password record

use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::{
    crypto::{buffer::SecretBytes, kdf::pbkdf2::Pbkdf2Sha256, random::random_vec_with},
    error::Result,
    params::Params,
};

mod codec;
pub use self::codec::HEADER_LENGTH;

pub use crate::crypto::kdf::pbkdf2::SUBKEY_LENGTH;

/// The format version byte, designating ASP.NET Identity version 3
pub const FORMAT_VERSION: u8 = 1;

/// The pseudorandom function identifier for HMAC-SHA256
pub const PRF_HMAC_SHA256: u32 = 1;

/// A hashed password: PBKDF2 with HMAC-SHA256 over a salt and iteration count.
///
/// Only format version 1 with HMAC-SHA256 exists, so neither is stored. The
/// record owns its salt and subkey and cannot be modified once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordHash {
    iterations: u32,
    salt: Vec<u8>,
    subkey: SecretBytes,
}

impl PasswordHash {
    /// Assemble a hashed value from its components.
    ///
    /// The components are copied but not validated: callers holding untrusted
    /// input should decode it with [`PasswordHash::from_bytes`] instead.
    pub fn new(salt: &[u8], iterations: u32, subkey: &[u8]) -> Self {
        Self {
            iterations,
            salt: salt.to_vec(),
            subkey: SecretBytes::from_slice(subkey),
        }
    }

    /// Hash a password with a new random salt of [`DEFAULT_SALT_LENGTH`](crate::DEFAULT_SALT_LENGTH)
    /// bytes, using the system random number generator.
    ///
    /// [`DEFAULT_ITERATIONS`](crate::DEFAULT_ITERATIONS) is the ASP.NET compatible
    /// iteration count. An error is returned if the iteration count is out of
    /// range or if the random source fails.
    pub fn from_password(password: impl AsRef<[u8]>, iterations: u32) -> Result<Self> {
        Self::from_password_with_rng(password, Params::new(iterations), &mut OsRng)
    }

    /// Hash a password with a new random salt drawn from `rng`.
    pub fn from_password_with_rng<R>(
        password: impl AsRef<[u8]>,
        params: Params,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        params.validate()?;
        let salt = random_vec_with(rng, params.salt_length())?;
        let subkey = Pbkdf2Sha256::derive(password.as_ref(), &salt, params.iterations());
        trace!(
            "Hashed password with {} iterations and {} byte salt",
            params.iterations(),
            salt.len()
        );
        Ok(Self {
            iterations: params.iterations(),
            salt,
            subkey: SecretBytes::from_slice(&subkey),
        })
    }

    /// Accessor for the format version
    pub fn version(&self) -> u8 {
        FORMAT_VERSION
    }

    /// Accessor for the pseudorandom function identifier
    pub fn prf(&self) -> u32 {
        PRF_HMAC_SHA256
    }

    /// Accessor for the iteration count
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Accessor for the salt
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Accessor for the derived subkey
    pub fn subkey(&self) -> &[u8] {
        &self.subkey
    }

    /// Check whether a plaintext password corresponds to this hashed value.
    pub fn verify(&self, password: impl AsRef<[u8]>) -> bool {
        crate::verify::verify_password(self, password)
    }
}
