use std::{rc::Rc, sync::Arc};

use crate::jenkins::JenkinsOne;

/// Elements stored in a [`HashArray`](crate::HashArray).
///
/// `hash_code` must be deterministic and must not change while the element
/// is stored. Distinct elements may share a hash code, `PartialEq` is what
/// tells them apart inside a run.
///
/// # Example
/// ```rust
/// use hash_array::HashCode;
///
/// #[derive(PartialEq)]
/// struct Tag {
///     id: u32,
///     name: &'static str,
/// }
///
/// impl HashCode for Tag {
///     fn hash_code(&self) -> i32 {
///         self.id as i32
///     }
/// }
///
/// assert_eq!(Tag { id: 7, name: "seven" }.hash_code(), 7);
/// ```
pub trait HashCode: PartialEq {
    fn hash_code(&self) -> i32;
}

macro_rules! impl_hash_code_widen {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                #[inline]
                fn hash_code(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

impl_hash_code_widen!(i8, i16, i32, u8, u16, u32);

macro_rules! impl_hash_code_fold {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                /// Xor of the high and low 32 bits.
                #[inline]
                fn hash_code(&self) -> i32 {
                    let v = *self as u64;
                    (v ^ (v >> 32)) as i32
                }
            }
        )*
    };
}

impl_hash_code_fold!(i64, u64, isize, usize);

impl HashCode for bool {
    #[inline]
    fn hash_code(&self) -> i32 {
        *self as i32
    }
}

impl HashCode for char {
    #[inline]
    fn hash_code(&self) -> i32 {
        *self as u32 as i32
    }
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        let mut hasher = JenkinsOne::new();
        hasher.write_str_bytes(self);
        hasher.finish_i32()
    }
}

impl HashCode for String {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Box<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Rc<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Arc<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}
