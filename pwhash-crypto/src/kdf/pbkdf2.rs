//! PBKDF2 with HMAC-SHA256, as used by the ASP.NET Core Identity password hasher

use digest::OutputSizeUser;
use hmac::Hmac;
use sha2::Sha256;

use crate::{buffer::ArrayKey, error::Error, generic_array::typenum::Unsigned};

/// The size of a derived subkey, fixed by the SHA-256 digest size
pub type SubkeySize = <Sha256 as OutputSizeUser>::OutputSize;

/// The length in bytes of a derived subkey
pub const SUBKEY_LENGTH: usize = SubkeySize::USIZE;

/// A derived subkey
pub type Subkey = ArrayKey<SubkeySize>;

/// PBKDF2 using HMAC-SHA256 as the pseudorandom function
#[derive(Clone, Copy, Debug)]
pub struct Pbkdf2Sha256;

impl Pbkdf2Sha256 {
    /// Derive a key of arbitrary length into `output`.
    pub fn derive_key(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        output: &mut [u8],
    ) -> Result<(), Error> {
        if iterations == 0 {
            return Err(err_msg!(Usage, "Iteration count must be positive"));
        }
        if output.is_empty() {
            return Err(err_msg!(Usage, "Output length must be positive"));
        }
        ::pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, output)
            .map_err(|_| err_msg!(Unexpected, "Error deriving key"))
    }

    /// Derive a subkey the length of a SHA-256 digest.
    ///
    /// The iteration count is expected to have been validated by the caller;
    /// a zero count is treated as a single round.
    pub fn derive(password: &[u8], salt: &[u8], iterations: u32) -> Subkey {
        Subkey::new_with(|buf| {
            ::pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, iterations.max(1), buf)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected() {
        // RFC 7914 section 11
        let mut output = [0u8; 64];
        Pbkdf2Sha256::derive_key(b"passwd", b"salt", 1, &mut output).unwrap();
        assert_eq!(
            output,
            hex!(
                "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc"
                "49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783"
            )
        );
    }

    #[test]
    fn expected_subkey() {
        let key = Pbkdf2Sha256::derive(b"password", b"salt", 1);
        assert_eq!(
            &key[..],
            &hex!("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b")[..]
        );
        let key = Pbkdf2Sha256::derive(b"password", b"salt", 4096);
        assert_eq!(
            &key[..],
            &hex!("c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a")[..]
        );
    }

    #[test]
    fn deterministic() {
        let a = Pbkdf2Sha256::derive(b"pass\0word", b"sa\0lt", 10);
        let b = Pbkdf2Sha256::derive(b"pass\0word", b"sa\0lt", 10);
        assert_eq!(a, b);
        assert_eq!(a.len(), SUBKEY_LENGTH);

        let c = Pbkdf2Sha256::derive(b"pass\0word!", b"sa\0lt", 10);
        assert_ne!(a, c);
        let d = Pbkdf2Sha256::derive(b"pass\0word", b"sa\0lt", 11);
        assert_ne!(a, d);
    }

    #[test]
    fn matches_variable_length() {
        let mut output = [0u8; SUBKEY_LENGTH];
        Pbkdf2Sha256::derive_key(b"pw", b"salty", 3, &mut output).unwrap();
        assert_eq!(&Pbkdf2Sha256::derive(b"pw", b"salty", 3)[..], &output[..]);
    }

    #[test]
    fn invalid_params() {
        let mut output = [0u8; SUBKEY_LENGTH];
        let err = Pbkdf2Sha256::derive_key(b"pw", b"salt", 0, &mut output).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Usage);
        let err = Pbkdf2Sha256::derive_key(b"pw", b"salt", 1, &mut []).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Usage);
    }
}
