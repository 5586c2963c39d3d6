/// An abstraction for a finite sequence whose elements can be compared by position.
///
/// This is all [distance][crate::distance()] needs to know about its inputs, which lets the same
/// algorithm run over text, token lists, byte strings or anything else with a notion of
/// element equality.
///
/// # Example
///
/// ```rust
/// use levenshtein_graphemes::{distance, Sequence};
///
/// /// Words compared regardless of ASCII case.
/// struct Words<'a>(Vec<&'a str>);
///
/// impl Sequence for Words<'_> {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn elements_eq(&self, other: &Self, i: usize, j: usize) -> bool {
///         self.0[i].eq_ignore_ascii_case(other.0[j])
///     }
/// }
///
/// let a = Words("the quick brown fox".split(' ').collect());
/// let b = Words("The Quick red Fox".split(' ').collect());
///
/// assert_eq!(distance(&a, &b), 1);
/// ```
pub trait Sequence {
    /// Returns the number of elements in this [Sequence].
    fn len(&self) -> usize;

    /// Returns `true` if this [Sequence] has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the element at position `i` of `self` equals the element at position `j` of
    /// `other`.
    ///
    /// Callers guarantee `i < self.len()` and `j < other.len()`.
    fn elements_eq(&self, other: &Self, i: usize, j: usize) -> bool;
}

impl<T: PartialEq> Sequence for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn elements_eq(&self, other: &Self, i: usize, j: usize) -> bool {
        self[i] == other[j]
    }
}

impl<T: PartialEq> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn elements_eq(&self, other: &Self, i: usize, j: usize) -> bool {
        self[i] == other[j]
    }
}


#[cfg(test)]
pub(crate) use tests::MockSequence;
