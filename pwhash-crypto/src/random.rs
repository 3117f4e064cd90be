//! Access to cryptographically secure random sources

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "getrandom")]
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::Error;

/// Fill a mutable slice with random data using the
/// system random number generator.
#[cfg(feature = "getrandom")]
#[inline]
pub fn fill_random(value: &mut [u8]) -> Result<(), Error> {
    fill_random_with(&mut OsRng, value)
}

/// Fill a mutable slice with random data from a secure generator.
///
/// A failure of the generator is reported and never replaced by a weaker source.
pub fn fill_random_with<R>(rng: &mut R, value: &mut [u8]) -> Result<(), Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    rng.try_fill_bytes(value)
        .map_err(err_map!(Random, "Error reading from random source"))
}

/// Create a new `Vec` of random bytes using the system random number generator.
#[cfg(all(feature = "alloc", feature = "getrandom"))]
#[inline]
pub fn random_vec(len: usize) -> Result<Vec<u8>, Error> {
    random_vec_with(&mut OsRng, len)
}

/// Create a new `Vec` of random bytes from a secure generator.
#[cfg(feature = "alloc")]
pub fn random_vec_with<R>(rng: &mut R, len: usize) -> Result<Vec<u8>, Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut buf = alloc::vec![0u8; len];
    fill_random_with(rng, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use core::num::NonZeroU32;

    struct FailingRng;

    impl CryptoRng for FailingRng {}

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unimplemented!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::from(
                NonZeroU32::new(rand::Error::CUSTOM_START).unwrap(),
            ))
        }
    }

    #[test]
    fn random_vec_lengths() {
        // smoke test only, says nothing about the quality of the output
        for len in [0, 1, 16, 33, 1024] {
            assert_eq!(random_vec(len).unwrap().len(), len);
        }
    }

    #[test]
    fn random_vec_distinct() {
        assert_ne!(random_vec(32).unwrap(), random_vec(32).unwrap());
    }

    #[test]
    fn random_source_failure() {
        let mut buf = [0u8; 16];
        let err = fill_random_with(&mut FailingRng, &mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Random);
        let err = random_vec_with(&mut FailingRng, 16).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Random);
    }
}
