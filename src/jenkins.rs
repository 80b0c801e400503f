//! Jenkins one-at-a-time hashing.
//!
//! `HashArray` needs a key that is stable for the lifetime of the stored
//! element and identical between runs, which rules out `RandomState`.
//! [`JenkinsOne`] is a small deterministic [`Hasher`] that can be used to
//! derive a [`HashCode`](crate::HashCode) from any `Hash` implementation.
//!
//! # Example
//! ```rust
//! use hash_array::jenkins::{compute_hash, hash_code_of};
//!
//! assert_eq!(compute_hash(["a"]), -902917054);
//! assert_eq!(hash_code_of(&(1u8, 2u8)), hash_code_of(&(1u8, 2u8)));
//! ```
use std::hash::{Hash, Hasher};

/// Hasher state for the one-at-a-time function.
///
/// Bytes are mixed in as they are written, the avalanche step is applied by
/// [`Hasher::finish`] without consuming the state, so more bytes can follow.
/// Integers are always written little-endian so the result does not depend
/// on the platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct JenkinsOne {
    h: u32,
}

impl JenkinsOne {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a string's UTF-8 bytes, without any length prefix or terminator.
    pub fn write_str_bytes(&mut self, s: &str) {
        self.write(s.as_bytes());
    }

    /// The avalanched state, reinterpreted as a signed 32 bit hash code.
    #[inline]
    pub fn finish_i32(&self) -> i32 {
        avalanche(self.h) as i32
    }
}

#[inline]
fn avalanche(mut h: u32) -> u32 {
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h.wrapping_add(h << 15)
}

impl Hasher for JenkinsOne {
    #[inline]
    fn finish(&self) -> u64 {
        avalanche(self.h) as u64
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut h = self.h;
        for &b in bytes {
            h = h.wrapping_add(b as u32);
            h = h.wrapping_add(h << 10);
            h ^= h >> 6;
        }
        self.h = h;
    }

    fn write_u16(&mut self, i: u16) {
        self.write(&i.to_le_bytes());
    }

    fn write_u32(&mut self, i: u32) {
        self.write(&i.to_le_bytes());
    }

    fn write_u64(&mut self, i: u64) {
        self.write(&i.to_le_bytes());
    }

    fn write_u128(&mut self, i: u128) {
        self.write(&i.to_le_bytes());
    }

    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }
}

/// Hash any `Hash` value into a deterministic 32 bit hash code.
pub fn hash_code_of<H: Hash + ?Sized>(value: &H) -> i32 {
    let mut hasher = JenkinsOne::new();
    value.hash(&mut hasher);
    hasher.finish_i32()
}

/// Hash a sequence of strings as if their bytes were concatenated.
pub fn compute_hash<I, S>(strings: I) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = JenkinsOne::new();
    for s in strings {
        hasher.write_str_bytes(s.as_ref());
    }
    hasher.finish_i32()
}
