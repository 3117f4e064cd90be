//! Zeroizing buffers for derived keys and other secret material

mod array;
pub use self::array::ArrayKey;

#[cfg(feature = "alloc")]
mod secret;
#[cfg(feature = "alloc")]
pub use self::secret::SecretBytes;
