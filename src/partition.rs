/// Three-way classification of a collection relative to a median value.
///
/// `less` and `greater` hold the elements strictly below and above the median, `equal` everything
/// that compares equal to it. Elements keep their scan order within each bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buckets<T> {
    pub less: Vec<T>,
    pub equal: Vec<T>,
    pub greater: Vec<T>,
}

impl<T> Buckets<T> {
    pub fn new() -> Self {
        Self {
            less: Vec::new(),
            equal: Vec::new(),
            greater: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.less.len() + self.equal.len() + self.greater.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenates `other` onto `self`, bucket by bucket.
    pub fn append(&mut self, mut other: Self) {
        self.less.append(&mut other.less);
        self.equal.append(&mut other.equal);
        self.greater.append(&mut other.greater);
    }
}

impl<T> Default for Buckets<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Buckets<T> {
    pub fn classify<I>(iter: I, median: &T) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut buckets = Self::new();
        for elem in iter {
            buckets.push(elem, median);
        }

        buckets
    }

    #[inline]
    pub fn push(&mut self, elem: T, median: &T) {
        if elem < *median {
            self.less.push(elem);
        } else if elem > *median {
            self.greater.push(elem);
        } else {
            self.equal.push(elem);
        }
    }

    /// Turns the buckets into `(left, right)` with exactly `len_left` elements on the left.
    ///
    /// `less` is topped up with the first `len_left - less.len()` elements of `equal`, the rest
    /// of `equal` goes to the right. For the result to be ordered the median must be the value
    /// of rank `len_left`, which guarantees `less.len() <= len_left <= less.len() + equal.len()`.
    pub fn into_balanced(self, len_left: usize) -> (Vec<T>, Vec<T>) {
        let Buckets {
            mut less,
            mut equal,
            mut greater,
        } = self;

        debug_assert!(less.len() <= len_left);
        debug_assert!(less.len() + equal.len() >= len_left);

        let top_up = len_left.saturating_sub(less.len()).min(equal.len());
        let equal_right = equal.split_off(top_up);

        log::debug!(
            "balanced split: len_left {len_left}, less {}, equal {}, greater {}",
            less.len(),
            top_up + equal_right.len(),
            greater.len()
        );

        less.append(&mut equal);
        greater.extend(equal_right);

        (less, greater)
    }
}
