use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Formatter},
    ops::Deref,
};

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// A heap-allocated, zeroized byte buffer
#[derive(Clone, Default, Zeroize)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Create a new buffer using an initializer for the data
    pub fn new_with(len: usize, f: impl FnOnce(&mut [u8])) -> Self {
        let mut slf = Self(Vec::with_capacity(len));
        slf.0.resize(len, 0u8);
        f(slf.0.as_mut());
        slf
    }

    /// Create a new buffer from a slice
    #[inline]
    pub fn from_slice(data: &[u8]) -> Self {
        let mut v = Vec::with_capacity(data.len());
        v.extend_from_slice(data);
        Self(v)
    }

    /// Accessor for the length of the buffer contents
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine if the buffer has zero length
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for SecretBytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if cfg!(test) {
            f.debug_tuple("Secret").field(&self.0.as_slice()).finish()
        } else {
            f.write_str("<secret>")
        }
    }
}

impl AsRef<[u8]> for SecretBytes {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl Deref for SecretBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ConstantTimeEq for SecretBytes {
    fn ct_eq(&self, other: &Self) -> Choice {
        ConstantTimeEq::ct_eq(self.0.as_slice(), other.0.as_slice())
    }
}

impl PartialEq for SecretBytes {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for SecretBytes {}

impl From<&[u8]> for SecretBytes {
    fn from(inner: &[u8]) -> Self {
        Self(inner.to_vec())
    }
}

impl From<Vec<u8>> for SecretBytes {
    fn from(inner: Vec<u8>) -> Self {
        Self(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_bytes_eq() {
        let a = SecretBytes::from_slice(b"secret");
        let b = SecretBytes::from(b"secret".to_vec());
        let c = SecretBytes::from(&b"secreT"[..]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        // differing lengths never compare equal
        assert_ne!(a, SecretBytes::from_slice(b"secret!"));
    }

    #[test]
    fn secret_bytes_new_with() {
        let buf = SecretBytes::new_with(4, |b| b.copy_from_slice(&[9, 8, 7, 6]));
        assert_eq!(buf.len(), 4);
        assert_eq!(&buf[..], &[9, 8, 7, 6]);
        assert!(SecretBytes::default().is_empty());
    }

    #[test]
    fn secret_bytes_zeroize() {
        let mut buf = SecretBytes::from_slice(b"wipe me");
        buf.zeroize();
        assert!(buf.is_empty());
    }
}
