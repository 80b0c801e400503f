use std::{fmt, mem, ops::Index};

use crate::{Error, HashCode};

mod consts;
pub use consts::*;
mod iterator;
pub use iterator::*;
pub mod search;
use search::{BinarySearch, HashSearcher, Run};

/// An array kept in ascending hash code order, with the following considerations:
///
/// 1. Lookup is on the hot path, a search is a binary search over a dense `i32` slice
/// 2. Colliding hash codes are fine, they are stored as one contiguous run
/// 3. Entries are addressable by position as well as by hash code
///
/// Elements and their hash codes live in two parallel vectors, so the search
/// never touches element memory.
///
/// # Example
/// ```rust
/// use hash_array::HashArray;
///
/// let mut array = HashArray::<u64>::new();
///
/// // 0 and 0x1_0000_0001 share hash code 0
/// array.add(5);
/// array.add(0);
/// array.add(0x1_0000_0001);
///
/// assert_eq!(array.as_slice(), &[0, 0x1_0000_0001, 5]);
/// assert_eq!(array.items(0), &[0, 0x1_0000_0001]);
///
/// // collapse the run to a single entry
/// array.store_item(0);
/// assert_eq!(array.as_slice(), &[0, 5]);
///
/// assert_eq!(array.remove_all(5), 1);
/// assert_eq!(array.len(), 1);
/// ```
pub struct HashArray<T> {
    values: Vec<T>,
    hash_codes: Vec<i32>,
    /// logical capacity, only grows by doubling
    capacity: usize,
}

impl<T> HashArray<T> {
    /// Create an empty array with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array able to hold `capacity` elements before growing.
    /// A capacity of 0 is clamped to [`MIN_CAPACITY`].
    ///
    /// # Examples
    /// ```rust
    /// use hash_array::HashArray;
    ///
    /// let array = HashArray::<i32>::with_capacity(0);
    /// assert_eq!(array.capacity(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            values: Vec::with_capacity(capacity),
            hash_codes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Elements in storage order: ascending hash code, mutation order within a run.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Hash codes, parallel to [`as_slice`](Self::as_slice).
    #[inline]
    pub fn hash_codes(&self) -> &[i32] {
        &self.hash_codes
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Returns an iterator over the array, in storage order.
    ///
    /// # Examples
    /// ```rust
    /// use hash_array::HashArray;
    ///
    /// let array = [3, 1, 2].into_iter().collect::<HashArray<i32>>();
    /// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Searches for the first element with `hash`.
    ///
    /// Returns `Ok` with the index of the first element of the run, or `Err` with
    /// the index at which an element with `hash` would be inserted.
    ///
    /// # Examples
    /// ```rust
    /// use hash_array::HashArray;
    ///
    /// let array = [10, 20, 20, 30].into_iter().collect::<HashArray<i32>>();
    /// assert_eq!(array.index_of(20), Ok(1));
    /// assert_eq!(array.index_of(25), Err(3));
    /// ```
    #[inline]
    pub fn index_of(&self, hash: i32) -> Result<usize, usize> {
        BinarySearch::search(&self.hash_codes, hash)
    }

    /// Searches for the whole run of elements with `hash`.
    ///
    /// Returns `Ok` with the run's start and length, or `Err` with the insertion point.
    ///
    /// # Examples
    /// ```rust
    /// use hash_array::{search::Run, HashArray};
    ///
    /// let array = [10, 20, 20, 30].into_iter().collect::<HashArray<i32>>();
    /// assert_eq!(array.index_of_all(20), Ok(Run { start: 1, len: 2 }));
    /// assert_eq!(array.index_of_all(5), Err(0));
    /// ```
    #[inline]
    pub fn index_of_all(&self, hash: i32) -> Result<Run, usize> {
        BinarySearch::search_run(&self.hash_codes, hash)
    }

    /// Returns the first element with `hash`.
    #[inline]
    pub fn get_item(&self, hash: i32) -> Option<&T> {
        let index = self.index_of(hash).ok()?;
        Some(&self.values[index])
    }

    /// Returns every element with `hash`, empty if there is none.
    pub fn items(&self, hash: i32) -> &[T] {
        match self.index_of_all(hash) {
            Ok(run) => &self.values[run.range()],
            Err(_) => &[],
        }
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Examples
    /// ```rust
    /// use hash_array::{Error, HashArray};
    ///
    /// let mut array = [1, 2, 3].into_iter().collect::<HashArray<i32>>();
    /// assert_eq!(array.remove_at(1), Ok(2));
    /// assert_eq!(array.remove_at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        self.check_index(index)?;

        self.hash_codes.remove(index);
        let value = self.values.remove(index);

        #[cfg(test)]
        self.validate_len();

        Ok(value)
    }

    /// Removes every element with `hash`, returns how many were removed.
    pub fn remove_all(&mut self, hash: i32) -> usize {
        match self.index_of_all(hash) {
            Ok(run) => {
                self.remove_range(run.start, run.len);
                run.len
            }
            Err(_) => 0,
        }
    }

    /// Drops all elements. Capacity is kept.
    pub fn clear(&mut self) {
        self.values.clear();
        self.hash_codes.clear();
    }

    /// Copies all elements, in storage order, into `dest` starting at `offset`.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        let end = offset
            .checked_add(self.len())
            .filter(|end| *end <= dest.len())
            .ok_or(Error::DestinationTooSmall {
                offset,
                required: self.len(),
                available: dest.len(),
            })?;

        dest[offset..end].clone_from_slice(&self.values);
        Ok(())
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Make room for one more element, doubling the capacity when full
    fn reserve_one(&mut self) {
        if self.len() < self.capacity {
            return;
        }

        let new_capacity = self.capacity * 2;
        let additional = new_capacity - self.len();
        self.values.reserve_exact(additional);
        self.hash_codes.reserve_exact(additional);

        log::trace!("hash array grows from {} to {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
    }

    /// Insert at `index`, shifting `index..len` right by one
    fn insert_at(&mut self, index: usize, value: T, hash: i32) {
        debug_assert!(index <= self.len());

        self.reserve_one();
        self.values.insert(index, value);
        self.hash_codes.insert(index, hash);
    }

    /// Remove `start..start + count`, dropping the removed elements in place
    fn remove_range(&mut self, start: usize, count: usize) {
        debug_assert!(start + count <= self.len());

        self.values.drain(start..start + count);
        self.hash_codes.drain(start..start + count);

        #[cfg(test)]
        self.validate_len();
    }

    #[cfg(test)]
    fn validate_len(&self) {
        assert_eq!(self.values.len(), self.hash_codes.len());
        assert!(self.len() <= self.capacity);
        assert!(self.hash_codes.windows(2).all(|w| w[0] <= w[1]));
    }
}

impl<T: HashCode> HashArray<T> {
    /// Add an element after any existing element with the same hash code, returns
    /// the index it was placed at.
    ///
    /// Appending in non decreasing hash order skips the search.
    ///
    /// # Examples
    /// ```rust
    /// use hash_array::HashArray;
    ///
    /// let mut array = HashArray::new();
    /// assert_eq!(array.add(5), 0);
    /// assert_eq!(array.add(8), 1);
    /// assert_eq!(array.add(2), 0);
    /// assert_eq!(array.as_slice(), &[2, 5, 8]);
    /// ```
    pub fn add(&mut self, value: T) -> usize {
        let hash = value.hash_code();

        let index = match self.hash_codes.last() {
            Some(last) if hash < *last => match self.index_of_all(hash) {
                Ok(run) => run.end(),
                Err(index) => index,
            },
            _ => self.len(),
        };

        self.insert_at(index, value, hash);

        #[cfg(test)]
        self.validate();

        index
    }

    /// Store an element as the only one with its hash code.
    ///
    /// Inserts it if the hash code is absent, otherwise the first element of the run
    /// is replaced and the rest of the run removed. Returns how many extra elements
    /// were removed.
    ///
    /// # Examples
    /// ```rust
    /// use hash_array::HashArray;
    ///
    /// let mut array = HashArray::<u64>::new();
    /// array.add(0);
    /// array.add(0x1_0000_0001);
    /// array.add(0x2_0000_0002);
    ///
    /// assert_eq!(array.store_item(0x3_0000_0003), 2);
    /// assert_eq!(array.as_slice(), &[0x3_0000_0003]);
    /// ```
    pub fn store_item(&mut self, value: T) -> usize {
        let hash = value.hash_code();

        let removed = match self.index_of_all(hash) {
            Err(index) => {
                self.insert_at(index, value, hash);
                0
            }
            Ok(run) => {
                self.values[run.start] = value;
                if run.len > 1 {
                    log::trace!("collapsing run of {} for hash {}", run.len, hash);
                    self.remove_range(run.start + 1, run.len - 1);
                }
                run.len - 1
            }
        };

        #[cfg(test)]
        self.validate();

        removed
    }

    /// Removes the first element equal to `value`. Returns false if there was none.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.position(value) {
            Some(index) => {
                self.remove_range(index, 1);
                true
            }
            None => false,
        }
    }

    /// Index of the first element equal to `value`.
    ///
    /// The hash code narrows the search to one run, then the run is scanned with `==`.
    pub fn position(&self, value: &T) -> Option<usize> {
        let hash = value.hash_code();
        let start = self.index_of(hash).ok()?;

        self.hash_codes[start..]
            .iter()
            .zip(&self.values[start..])
            .take_while(|(h, _)| **h == hash)
            .position(|(_, v)| v == value)
            .map(|offset| start + offset)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Replace the element at `index`, returning the previous one.
    ///
    /// The replacement must have the same hash code as the element it replaces,
    /// otherwise the array is left unchanged and [`Error::HashMismatch`] returned.
    ///
    /// # Examples
    /// ```rust
    /// use hash_array::{Error, HashArray};
    ///
    /// let mut array = HashArray::<u64>::new();
    /// array.add(0);
    ///
    /// assert_eq!(array.set(0, 0x1_0000_0001), Ok(0));
    /// assert!(matches!(array.set(0, 1), Err(Error::HashMismatch { .. })));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        self.check_index(index)?;

        let stored = self.hash_codes[index];
        let replacement = value.hash_code();
        if stored != replacement {
            return Err(Error::HashMismatch {
                index,
                stored,
                replacement,
            });
        }

        Ok(mem::replace(&mut self.values[index], value))
    }

    /// Check every invariant, used in test only
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        self.validate_len();
        for (value, hash) in self.values.iter().zip(&self.hash_codes) {
            assert_eq!(value.hash_code(), *hash);
        }
    }
}

impl<T> Default for HashArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Independent copy, keeping the capacity of the source.
impl<T: Clone> Clone for HashArray<T> {
    fn clone(&self) -> Self {
        let mut values = Vec::with_capacity(self.capacity);
        values.extend_from_slice(&self.values);
        let mut hash_codes = Vec::with_capacity(self.capacity);
        hash_codes.extend_from_slice(&self.hash_codes);

        Self {
            values,
            hash_codes,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for HashArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for HashArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq> Eq for HashArray<T> {}

impl<T> Index<usize> for HashArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T: HashCode> Extend<T> for HashArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: HashCode> FromIterator<T> for HashArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

/// ensure HashArray is send for send T
fn _ensure_send<T: Send>() {
    fn _assert_send<A: Send>() {}
    _assert_send::<HashArray<T>>();
}

#[cfg(test)]
pub(crate) mod tests {
    use std::rc::Rc;

    use rand::{seq::SliceRandom, Rng};

    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) struct Item {
        pub(crate) hash: i32,
        pub(crate) id: u32,
    }

    impl HashCode for Item {
        fn hash_code(&self) -> i32 {
            self.hash
        }
    }

    pub(crate) fn item(hash: i32, id: u32) -> Item {
        Item { hash, id }
    }

    /// Create an array with `n` shuffled items over `n / 4` distinct hash codes,
    /// also returns the items in insertion order.
    pub(crate) fn create_test_array(n: usize) -> (HashArray<Item>, Vec<Item>) {
        let buckets = (n / 4).max(1) as i32;
        let mut items = (0..n as u32)
            .map(|id| item(id as i32 % buckets, id))
            .collect::<Vec<_>>();
        items.shuffle(&mut rand::thread_rng());

        let mut array = HashArray::with_capacity(1);
        for i in items.iter() {
            array.add(i.clone());
        }

        (array, items)
    }

    fn hashes(array: &HashArray<Item>) -> Vec<i32> {
        array.iter().map(|i| i.hash).collect()
    }

    fn ids(array: &HashArray<Item>) -> Vec<u32> {
        array.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_scenario() {
        let mut array = HashArray::new();
        array.add(item(5, 0));
        array.add(item(2, 1));
        array.add(item(2, 2));
        array.add(item(8, 3));

        assert_eq!(hashes(&array), vec![2, 2, 5, 8]);
        assert_eq!(ids(&array), vec![1, 2, 0, 3]);
        assert_eq!(array.hash_codes(), &[2, 2, 5, 8]);

        assert_eq!(array.remove_all(2), 2);
        assert_eq!(hashes(&array), vec![5, 8]);

        assert_eq!(array.store_item(item(5, 4)), 0);
        assert_eq!(hashes(&array), vec![5, 8]);
        assert_eq!(ids(&array), vec![4, 3]);
    }

    #[test]
    fn test_add_matches_stable_sort() {
        let (array, mut items) = create_test_array(1000);
        items.sort_by_key(|i| i.hash);

        assert_eq!(array.as_slice(), items.as_slice());
        array.validate();
    }

    #[test]
    fn test_add_returns_position() {
        let (mut array, _) = create_test_array(200);
        let mut rng = rand::thread_rng();

        for id in 1000..1100 {
            let value = item(rng.gen_range(-10..60), id);
            let index = array.add(value.clone());

            assert_eq!(array[index], value);
            assert_eq!(array.position(&value), Some(index));
            // placed at the end of its run
            assert_eq!(array.index_of_all(value.hash).unwrap().end(), index + 1);
        }
    }

    #[test]
    fn test_add_before_all() {
        let mut array = HashArray::new();
        array.add(item(10, 0));
        array.add(item(20, 1));
        assert_eq!(array.add(item(i32::MIN, 2)), 0);
        assert_eq!(array.add(item(i32::MAX, 3)), 3);
        assert_eq!(hashes(&array), vec![i32::MIN, 10, 20, i32::MAX]);
    }

    #[test]
    fn test_round_trip() {
        let (array, items) = create_test_array(500);

        for i in items.iter() {
            let index = array.position(i).unwrap();
            assert_eq!(&array[index], i);
            assert_eq!(array.get_item(i.hash).unwrap().hash, i.hash);
            assert!(array.contains(i));
        }

        assert!(!array.contains(&item(0, 10_000)));
        assert!(array.get_item(-1).is_none());
    }

    #[test]
    fn test_capacity_doubling() {
        let mut array = HashArray::with_capacity(1);
        assert_eq!(array.capacity(), 1);

        let mut capacities = vec![];
        for id in 0..5 {
            array.add(item(4 - id as i32, id));
            capacities.push(array.capacity());
        }

        assert_eq!(capacities, vec![1, 2, 4, 4, 8]);
        assert_eq!(hashes(&array), vec![0, 1, 2, 3, 4]);
        assert_eq!(ids(&array), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let (mut array, items) = create_test_array(100);
        let capacity = array.capacity();
        assert_eq!(capacity, 128);

        for i in items.iter() {
            assert!(array.remove(i));
        }
        assert!(array.is_empty());
        assert_eq!(array.capacity(), capacity);

        array.add(item(1, 1));
        array.clear();
        assert_eq!(array.capacity(), capacity);
    }

    #[test]
    fn test_store_item() {
        let mut array = HashArray::new();
        array.add(item(3, 0));
        array.add(item(3, 1));
        array.add(item(3, 2));
        array.add(item(1, 3));
        array.add(item(7, 4));

        assert_eq!(array.store_item(item(3, 5)), 2);
        assert_eq!(hashes(&array), vec![1, 3, 7]);
        assert_eq!(ids(&array), vec![3, 5, 4]);

        // single entry is replaced
        assert_eq!(array.store_item(item(3, 6)), 0);
        assert_eq!(ids(&array), vec![3, 6, 4]);

        // absent hash is inserted in order
        assert_eq!(array.store_item(item(5, 7)), 0);
        assert_eq!(hashes(&array), vec![1, 3, 5, 7]);
        assert_eq!(array.items(3), &[item(3, 6)]);
    }

    #[test]
    fn test_remove() {
        let mut array = HashArray::new();
        array.add(item(2, 0));
        array.add(item(2, 1));
        array.add(item(2, 2));

        assert!(array.remove(&item(2, 1)));
        assert_eq!(ids(&array), vec![0, 2]);

        assert!(!array.remove(&item(2, 1)));
        assert!(!array.remove(&item(9, 0)));
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn test_remove_at() {
        let mut array = [item(1, 0), item(2, 1), item(3, 2)]
            .into_iter()
            .collect::<HashArray<_>>();

        assert_eq!(array.remove_at(1), Ok(item(2, 1)));
        assert_eq!(
            array.remove_at(2),
            Err(Error::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(ids(&array), vec![0, 2]);
    }

    #[test]
    fn test_remove_all() {
        let (mut array, items) = create_test_array(400);
        let len = array.len();

        let expected = items.iter().filter(|i| i.hash == 7).count();
        assert_eq!(array.remove_all(7), expected);
        assert_eq!(array.len(), len - expected);
        assert!(array.index_of(7).is_err());
        assert!(array.items(7).is_empty());

        assert_eq!(array.remove_all(7), 0);
        assert_eq!(array.remove_all(-100), 0);
        array.validate();
    }

    #[test]
    fn test_set() {
        let mut array = HashArray::new();
        array.add(item(1, 0));
        array.add(item(1, 1));

        assert_eq!(array.set(1, item(1, 9)), Ok(item(1, 1)));
        assert_eq!(ids(&array), vec![0, 9]);

        assert_eq!(
            array.set(0, item(2, 10)),
            Err(Error::HashMismatch {
                index: 0,
                stored: 1,
                replacement: 2
            })
        );
        assert_eq!(
            array.set(5, item(1, 10)),
            Err(Error::OutOfRange { index: 5, len: 2 })
        );
        assert_eq!(ids(&array), vec![0, 9]);
        array.validate();
    }

    #[test]
    fn test_get() {
        let (array, _) = create_test_array(10);
        assert!(array.get(9).is_some());
        assert!(array.get(10).is_none());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let array = HashArray::<i32>::new();
        let _value = array[0];
    }

    #[test]
    fn test_clear_drops_values() {
        let counter = Rc::new(());
        let mut array = HashArray::new();
        for _ in 0..10 {
            array.add(Rc::new(ItemRc(counter.clone())));
        }
        assert_eq!(Rc::strong_count(&counter), 11);

        array.clear();
        assert!(array.is_empty());
        assert_eq!(Rc::strong_count(&counter), 1);
    }

    #[test]
    fn test_removal_drops_values() {
        let counter = Rc::new(());
        let mut array = HashArray::new();
        for _ in 0..5 {
            array.add(Rc::new(ItemRc(counter.clone())));
        }

        assert_eq!(array.store_item(Rc::new(ItemRc(counter.clone()))), 4);
        assert_eq!(Rc::strong_count(&counter), 2);

        assert_eq!(array.remove_all(0), 1);
        assert_eq!(Rc::strong_count(&counter), 1);
    }

    /// every instance has hash code 0
    struct ItemRc(Rc<()>);

    impl PartialEq for ItemRc {
        fn eq(&self, _other: &Self) -> bool {
            true
        }
    }

    impl HashCode for ItemRc {
        fn hash_code(&self) -> i32 {
            0
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let (array, _) = create_test_array(40);
        let mut copy = array.clone();

        assert_eq!(copy, array);
        assert_eq!(copy.len(), array.len());
        assert_eq!(copy.capacity(), array.capacity());

        copy.remove_all(0);
        copy.add(item(1000, 1000));
        assert_ne!(copy, array);
        assert_eq!(array.len(), 40);
        assert!(array.get_item(1000).is_none());
    }

    #[test]
    fn test_copy_to() {
        let array = [item(2, 0), item(1, 1)]
            .into_iter()
            .collect::<HashArray<_>>();

        let mut dest = vec![item(0, 0); 4];
        array.copy_to(&mut dest, 1).unwrap();
        assert_eq!(dest, vec![item(0, 0), item(1, 1), item(2, 0), item(0, 0)]);

        assert_eq!(
            array.copy_to(&mut dest, 3),
            Err(Error::DestinationTooSmall {
                offset: 3,
                required: 2,
                available: 4
            })
        );
        assert!(array.copy_to(&mut dest, usize::MAX).is_err());
    }

    #[test]
    fn test_position_agrees_with_run() {
        let (array, _) = create_test_array(300);

        for hash in -2..80 {
            match array.index_of_all(hash) {
                Ok(run) => {
                    for (offset, i) in array.items(hash).iter().enumerate() {
                        assert_eq!(array.position(i), Some(run.start + offset));
                    }
                    assert!(array.position(&item(hash, u32::MAX)).is_none());
                    assert_eq!(array.index_of(hash), Ok(run.start));
                }
                Err(index) => {
                    assert_eq!(array.index_of(hash), Err(index));
                    assert!(array.items(hash).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_debug() {
        let array = [3, 1].into_iter().collect::<HashArray<i32>>();
        assert_eq!(format!("{array:?}"), "[1, 3]");
    }

    #[test]
    fn test_random_ops() {
        let mut rng = rand::thread_rng();
        let mut array = HashArray::with_capacity(2);

        for id in 0..5000 {
            let hash = rng.gen_range(0..64);
            match rng.gen_range(0..6) {
                0 | 1 | 2 => {
                    array.add(item(hash, id));
                }
                3 => {
                    let before = array.items(hash).len();
                    let removed = array.store_item(item(hash, id));
                    assert_eq!(removed, before.saturating_sub(1));
                    assert_eq!(array.items(hash).len(), 1);
                }
                4 => {
                    let before = array.items(hash).len();
                    assert_eq!(array.remove_all(hash), before);
                }
                _ => {
                    if !array.is_empty() {
                        let index = rng.gen_range(0..array.len());
                        array.remove_at(index).unwrap();
                    }
                }
            }
            array.validate();
        }
    }
}
