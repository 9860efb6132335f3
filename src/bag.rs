use std::{
    collections::HashSet,
    fmt::{self, Debug, Display},
    hash::Hash,
};

use crate::{
    count::Count,
    log::trace,
    snapshot::{proof_assert, snapshot},
};

/// A mutable bag of conserved elements.
///
/// Think of a physical bag with physical objects inside it: apart from
/// construction and [`Bag::duplicate`], no operation creates or destroys an
/// element. Elements only move, either within one bag or from one bag to
/// another. [`Bag::sort`] and [`Bag::pop_duplicates`] additionally leave the
/// receiver unchanged when applied a second time in a row.
///
/// Equality is multiset equality: two bags are equal when [`Bag::count`]
/// agrees, whatever order their elements are stored in.
///
/// ```
/// use conserved::Bag;
///
/// let mut b1 = Bag::new([1, 2, 2, 3]);
/// let mut b2 = Bag::new([1, 2]);
/// let before = &b1.count() + &b2.count();
/// b1.give_all_to(&mut b2);
///
/// assert!(b1.is_empty());
/// assert_eq!(b2.count(), before);
/// assert_eq!(b2, Bag::new([1, 1, 2, 2, 2, 3]));
/// ```
///
/// A bag cannot give its contents to itself; the borrow checker rejects it:
///
/// ```compile_fail
/// use conserved::Bag;
///
/// let mut b = Bag::new([1, 2, 3]);
/// b.give_all_to(&mut b);
/// ```
#[derive(Clone)]
pub struct Bag<T> {
    items: Vec<T>,
}

impl<T: Ord + Hash + Clone> Bag<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        Bag { items: items.into_iter().collect() }
    }

    pub fn empty() -> Self {
        Bag { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements in their current storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns a new bag holding a copy of every element, in the same order.
    ///
    /// Not conservative: the elements in existence grow by `self.len()`.
    // ensures: result == *self && *self unchanged
    pub fn duplicate(&self) -> Bag<T> {
        Bag { items: self.items.clone() }
    }

    /// Sorts the elements into non-decreasing order.
    ///
    /// The relative order of equal elements is not part of the contract.
    /// Conservative, and idempotent on `self`.
    pub fn sort(&mut self) {
        snapshot!(let old = self.count());
        self.items.sort_unstable();
        trace!("sort: {} elements", self.items.len());

        proof_assert!(self.count() == old);
        proof_assert!(self.items.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Keeps the first occurrence of every distinct element and returns the
    /// later occurrences as a new bag, in their original relative order.
    ///
    /// Afterwards `self` holds each distinct element exactly once, in no
    /// particular order: callers must not rely on it matching the input
    /// order, nor on it being stable from one call to the next.
    ///
    /// Conservative (`self.count()` after plus `result.count()` equals
    /// `self.count()` before), and idempotent on `self`: a second call returns
    /// an empty bag.
    pub fn pop_duplicates(&mut self) -> Bag<T> {
        snapshot!(let old = self.count());

        let mut mine: HashSet<T> = HashSet::with_capacity(self.items.len());
        let mut others = Vec::new();
        for item in self.items.drain(..) {
            if mine.contains(&item) {
                others.push(item);
            } else {
                mine.insert(item);
            }
        }
        self.items = mine.into_iter().collect();
        trace!("pop_duplicates: kept {}, popped {}", self.items.len(), others.len());

        let popped = Bag { items: others };
        proof_assert!(self.count().is_set());
        proof_assert!(self.count() + popped.count() == old);
        popped
    }

    /// Moves every element of `self` to the end of `other`, keeping their
    /// relative order, and leaves `self` empty.
    ///
    /// Conservative across the pair. `self` and `other` are always distinct
    /// bags: two mutable borrows of one bag cannot coexist.
    pub fn give_all_to(&mut self, other: &mut Bag<T>) {
        snapshot!(let old = &self.count() + &other.count());
        trace!("give_all_to: moving {} elements onto {}", self.items.len(), other.items.len());
        other.items.append(&mut self.items);

        proof_assert!(self.items.is_empty());
        proof_assert!(other.count() == old);
    }

    /// Number of occurrences of each distinct element.
    pub fn count(&self) -> Count<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Ord + Hash + Clone> Default for Bag<T> {
    fn default() -> Self {
        Bag::empty()
    }
}

impl<T: Ord + Hash + Clone> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.count() == other.count()
    }
}

impl<T: Ord + Hash + Clone> Eq for Bag<T> {}

impl<T: Ord + Hash + Clone> From<Vec<T>> for Bag<T> {
    fn from(items: Vec<T>) -> Self {
        Bag { items }
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Bag::new(iter)
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Display> Display for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, ")")
    }
}

impl<T: Debug> Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bag(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{:?}", item)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::Bag;
    use crate::count::Count;

    fn count_of(items: &[i32]) -> Count<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn sort_sorted() {
        let mut b = Bag::new([1, 2, 2, 3]);
        b.sort();
        assert_eq!(b.as_slice(), &[1, 2, 2, 3]);
        assert_eq!(b.count(), count_of(&[1, 2, 2, 3]));
        assert_eq!(b.count().get(&2), 2);
    }

    #[test]
    fn sort_twice() {
        let mut b = Bag::new([3, 1, 2, 1]);
        b.sort();
        let once = b.as_slice().to_vec();
        b.sort();
        assert_eq!(b.as_slice(), &once[..]);
        assert_eq!(once, vec![1, 1, 2, 3]);
    }

    #[test]
    fn pop_duplicates() {
        let mut b = Bag::new([1, 2, 2, 3, 3, 3]);
        let dups = b.pop_duplicates();
        assert_eq!(b.count(), count_of(&[1, 2, 3]));
        assert_eq!(dups.count(), count_of(&[2, 3, 3]));
        // later occurrences keep their relative order
        assert_eq!(dups.as_slice(), &[2, 3, 3]);

        let again = b.pop_duplicates();
        assert!(again.is_empty());
        assert_eq!(b.count(), count_of(&[1, 2, 3]));
    }

    #[test]
    fn pop_duplicates_empty() {
        let mut b = Bag::<i32>::empty();
        let dups = b.pop_duplicates();
        assert!(b.is_empty());
        assert!(dups.is_empty());
    }

    #[test]
    fn give_all_to() {
        let mut b0 = Bag::new([1, 2, 3]);
        let mut b1 = Bag::new([2, 3, 4]);
        b0.give_all_to(&mut b1);
        assert!(b0.is_empty());
        assert_eq!(b0.count().distinct(), 0);
        assert_eq!(b1.count(), count_of(&[1, 2, 2, 3, 3, 4]));
        assert_eq!(b1.as_slice(), &[2, 3, 4, 1, 2, 3]);
    }

    #[test]
    fn give_all_to_overlapping() {
        let mut b1 = Bag::new([1, 2, 2, 3]);
        let mut b2 = Bag::new([1, 2]);
        b1.give_all_to(&mut b2);
        assert!(b1.into_vec().is_empty());
        assert_eq!(b2.count(), count_of(&[1, 1, 2, 2, 2, 3]));
        assert_ne!(b2, Bag::new([1, 2, 2, 2, 3]));
        assert_eq!(b2.into_vec(), vec![1, 2, 1, 2, 2, 3]);
    }

    #[test]
    fn give_all_to_empty_source() {
        let mut b0 = Bag::<i32>::empty();
        let mut b1 = Bag::new([7]);
        b0.give_all_to(&mut b1);
        assert!(b0.is_empty());
        assert_eq!(b1.as_slice(), &[7]);
    }

    #[test]
    fn duplicate_is_independent() {
        let b = Bag::new([5]);
        let mut d = b.duplicate();
        assert_eq!(b, d);

        let mut c = Bag::new([3, 1, 2]);
        let original = c.duplicate();
        c.sort();
        assert_eq!(original.as_slice(), &[3, 1, 2]);
        d.give_all_to(&mut c);
        assert!(d.is_empty());
        assert_eq!(b.as_slice(), &[5]);
    }

    #[test]
    fn equality_is_multiset_equality() {
        assert_eq!(Bag::new([3, 1, 2]), Bag::new([1, 2, 3]));
        assert_ne!(Bag::new([1, 1, 2]), Bag::new([1, 2, 2]));
        assert_ne!(Bag::new([1]), Bag::new([1, 1]));
        assert_eq!(Bag::<i32>::empty(), Bag::default());
    }

    #[test]
    fn formatting() {
        let b = Bag::new(["a", "b", "b"]);
        assert_eq!(b.to_string(), "(a,b,b)");
        assert_eq!(format!("{:?}", b), "Bag(\"a\",\"b\",\"b\")");
        assert_eq!(Bag::<u8>::empty().to_string(), "()");
    }
}
