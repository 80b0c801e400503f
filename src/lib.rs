mod error;
pub use error::*;

mod hash_code;
pub use hash_code::*;

pub mod jenkins;

// core array impl
pub mod array;
pub use array::{search, HashArray, Iter, IntoIter, DEFAULT_CAPACITY, MIN_CAPACITY};
