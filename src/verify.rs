//! Password verification

use std::hint::black_box;

use subtle::ConstantTimeEq;

use crate::{
    crypto::kdf::pbkdf2::Pbkdf2Sha256,
    error::{Error, Result},
    hash::{PasswordHash, SUBKEY_LENGTH},
    params::{DEFAULT_ITERATIONS, DEFAULT_SALT_LENGTH},
};

/// Reference subkey for the decoy comparison. No password is known to derive it.
const DECOY_SUBKEY: [u8; SUBKEY_LENGTH] = [0x5c; SUBKEY_LENGTH];

const DECOY_SALT: [u8; DEFAULT_SALT_LENGTH] = [0x36; DEFAULT_SALT_LENGTH];

/// Check whether a plaintext password corresponds to a hashed value.
///
/// The candidate subkey is compared to the stored one in constant time.
pub fn verify_password(hash: &PasswordHash, password: impl AsRef<[u8]>) -> bool {
    let derived = Pbkdf2Sha256::derive(password.as_ref(), hash.salt(), hash.iterations());
    // a stored subkey of the wrong length fails after the full derivation
    ConstantTimeEq::ct_eq(hash.subkey(), &derived[..]).into()
}

/// Check a plaintext password against a base64-encoded hashed value, as read
/// from an ASP.NET user table.
///
/// When the hashed value cannot be decoded the result is `false` along with the
/// decoding error, but only after a decoy derivation of the default cost, so
/// that timing does not reveal a malformed stored value. Callers should treat
/// any error as a failed verification and use it for diagnostics only.
pub fn verify_encoded_hash(
    encoded: impl AsRef<[u8]>,
    password: impl AsRef<[u8]>,
) -> (bool, Option<Error>) {
    match PasswordHash::from_base64(encoded) {
        Ok(hash) => (verify_password(&hash, password), None),
        Err(err) => {
            debug!("Error decoding stored password hash: {}", err.kind());
            black_box(decoy_verify(password.as_ref()));
            (false, Some(err))
        }
    }
}

/// Hash a password with a new random salt, returning the base64 text.
pub fn generate_from_password(password: &[u8], iterations: u32) -> Result<Vec<u8>> {
    Ok(PasswordHash::from_password(password, iterations)?
        .to_base64()
        .into_bytes())
}

/// Compare a base64-encoded hashed value with a plaintext password.
///
/// Returns `Ok(())` on a match, an error of kind
/// [`Mismatch`](crate::ErrorKind::Mismatch) for a wrong password, or the
/// decoding error for a malformed hashed value.
pub fn compare_hash_and_password(hashed: &[u8], password: &[u8]) -> Result<()> {
    match verify_encoded_hash(hashed, password) {
        (true, _) => Ok(()),
        (false, Some(err)) => Err(err),
        (false, None) => Err(err_msg!(Mismatch)),
    }
}

fn decoy_verify(password: &[u8]) -> bool {
    let derived = Pbkdf2Sha256::derive(password, &DECOY_SALT, DEFAULT_ITERATIONS);
    ConstantTimeEq::ct_eq(&DECOY_SUBKEY[..], &derived[..]).into()
}
