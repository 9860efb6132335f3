use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    ops::Add,
};

use indexmap::IndexMap;

/// Multiset view of a collection: each distinct element mapped to the number
/// of times it occurs.
///
/// Two counts are equal when they hold the same keys with the same counts.
/// Iteration order plays no part in equality.
#[derive(Clone, PartialEq, Eq)]
pub struct Count<T: Hash + Eq>(IndexMap<T, usize>);

impl<T: Hash + Eq> Count<T> {
    pub fn new() -> Self {
        Count(IndexMap::new())
    }

    // Every stored count is positive.
    pub fn insert(&mut self, e: T) {
        *self.0.entry(e).or_insert(0) += 1;
    }

    pub fn get(&self, e: &T) -> usize {
        self.0.get(e).copied().unwrap_or(0)
    }

    /// Number of distinct elements.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Number of elements, counted with multiplicity.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// No element occurs more than once.
    pub fn is_set(&self) -> bool {
        self.0.values().all(|&n| n <= 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.0.iter().map(|(e, &n)| (e, n))
    }

    fn add_n(&mut self, e: T, n: usize) {
        *self.0.entry(e).or_insert(0) += n;
    }
}

impl<T: Hash + Eq> Default for Count<T> {
    fn default() -> Self {
        Count::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Count<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut count = Count::new();
        count.extend(iter);
        count
    }
}

impl<T: Hash + Eq> Extend<T> for Count<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for e in iter {
            self.insert(e);
        }
    }
}

// Multiset sum.
impl<T: Hash + Eq> Add for Count<T> {
    type Output = Count<T>;

    fn add(mut self, rhs: Count<T>) -> Count<T> {
        for (e, n) in rhs.0 {
            self.add_n(e, n);
        }
        self
    }
}

impl<T: Hash + Eq + Clone> Add for &Count<T> {
    type Output = Count<T>;

    fn add(self, rhs: &Count<T>) -> Count<T> {
        self.clone() + rhs.clone()
    }
}

impl<T: Hash + Eq + Display> Display for Count<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (e, n)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", e, n)?;
        }
        write!(f, "}}")
    }
}

impl<T: Hash + Eq + Debug> Debug for Count<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
