use std::{cmp::Ordering, ops::Range};

/// A maximal block of entries sharing one hash code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// index of the first entry
    pub start: usize,
    /// entry count, never 0 for a run returned by a search
    pub len: usize,
}

impl Run {
    /// One past the last entry of the run
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

pub trait HashSearcher {
    /// Search `hash` in the ascending `hash_codes`.
    ///
    /// Returns `Ok` with the index of the *first* entry of the matching run, or
    /// `Err` with the index where `hash` would be inserted to keep the order.
    fn search(hash_codes: &[i32], hash: i32) -> Result<usize, usize>;

    /// Same as [`search`](Self::search), also measuring the run length.
    #[inline]
    fn search_run(hash_codes: &[i32], hash: i32) -> Result<Run, usize> {
        let start = Self::search(hash_codes, hash)?;
        let len = hash_codes[start..]
            .iter()
            .take_while(|h| **h == hash)
            .count();
        Ok(Run { start, len })
    }
}

/// Classic binary search, then back up to the start of the run.
///
/// Costs `log n` plus the distance from the probe to the run start.
pub struct BinarySearch;

impl HashSearcher for BinarySearch {
    #[inline]
    fn search(hash_codes: &[i32], hash: i32) -> Result<usize, usize> {
        let mut lo = 0;
        let mut hi = hash_codes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match hash_codes[mid].cmp(&hash) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => {
                    let mut first = mid;
                    while first > 0 && hash_codes[first - 1] == hash {
                        first -= 1;
                    }
                    return Ok(first);
                }
            }
        }

        Err(lo)
    }
}

/// Lower bound search, `log n` regardless of run length.
pub struct LowerBoundSearch;

impl HashSearcher for LowerBoundSearch {
    #[inline]
    fn search(hash_codes: &[i32], hash: i32) -> Result<usize, usize> {
        let idx = hash_codes.partition_point(|h| *h < hash);
        match hash_codes.get(idx) {
            Some(h) if *h == hash => Ok(idx),
            _ => Err(idx),
        }
    }
}

pub struct LinearSearch;

impl HashSearcher for LinearSearch {
    #[inline(never)]
    fn search(hash_codes: &[i32], hash: i32) -> Result<usize, usize> {
        hash_codes
            .iter()
            .enumerate()
            .find_map(|(idx, h)| match h.cmp(&hash) {
                Ordering::Less => None,
                Ordering::Equal => Some(Ok(idx)),
                Ordering::Greater => Some(Err(idx)),
            })
            .unwrap_or(Err(hash_codes.len()))
    }
}
