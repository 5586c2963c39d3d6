use crate::{Graphemes, Sequence};
use std::mem::swap;

/// Computes the Levenshtein distance between two [Sequence]s.
///
/// The result is the minimum number of single element insertions, deletions and substitutions
/// that turn `x` into `y`.
///
/// Runs in `O(x.len() * y.len())` time and allocates two rows of `y.len() + 1` cells, so prefer
/// the shorter input on the right-hand side. Input sizes are not bounded here; that is up to the
/// caller.
///
/// # Example
///
/// ```rust
/// use levenshtein_graphemes::distance;
///
/// let a = ["let", "x", "=", "1", ";"];
/// let b = ["let", "mut", "x", "=", "2", ";"];
///
/// assert_eq!(distance(&a[..], &b[..]), 2);
/// ```
pub fn distance<S: Sequence + ?Sized>(x: &S, y: &S) -> usize {
    let (n, m) = (x.len(), y.len());

    if n == 0 {
        return m;
    }

    if m == 0 {
        return n;
    }

    let mut current: Box<[usize]> = (0..=m).collect();
    let mut next: Box<[usize]> = vec![0; m + 1].into();

    for i in 1..=n {
        debug_assert_eq!(current[0], i - 1);

        next[0] = i;
        for j in 1..=m {
            let deletion = current[j] + 1;
            let insertion = next[j - 1] + 1;
            let substitution = current[j - 1] + usize::from(!x.elements_eq(y, i - 1, j - 1));
            next[j] = deletion.min(insertion).min(substitution);
        }

        swap(&mut current, &mut next);
    }

    debug_assert_eq!(current.len(), m + 1);
    current[m]
}

/// Computes the Levenshtein distance between two strings, counting user-perceived characters.
///
/// Equivalent to calling [distance] on the [Graphemes] of each string.
///
/// # Example
///
/// ```rust
/// use levenshtein_graphemes::text_distance;
///
/// assert_eq!(text_distance("puppy", "lucky"), 3);
/// assert_eq!(text_distance("Coruña", "La Coruña"), 3);
/// ```
pub fn text_distance(x: &str, y: &str) -> usize {
    distance(&Graphemes::new(x), &Graphemes::new(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockSequence;
    use assert_matches::assert_matches;
    use proptest::collection::vec;
    use test_strategy::proptest;

    /// Fills in the whole `(n + 1) * (m + 1)` matrix.
    fn matrix<S: Sequence + ?Sized>(x: &S, y: &S) -> Vec<Vec<usize>> {
        let (n, m) = (x.len(), y.len());
        let mut d = vec![vec![0; m + 1]; n + 1];

        for (i, row) in d.iter_mut().enumerate() {
            row[0] = i;
        }

        for (j, cell) in d[0].iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..=n {
            for j in 1..=m {
                let cost = if x.elements_eq(y, i - 1, j - 1) { 0 } else { 1 };
                d[i][j] = (d[i - 1][j] + 1)
                    .min(d[i][j - 1] + 1)
                    .min(d[i - 1][j - 1] + cost);
            }
        }

        d
    }

    #[test]
    fn known_distances() {
        assert_eq!(text_distance("dog", "dogs"), 1);
        assert_eq!(text_distance("puppy", "lucky"), 3);
        assert_eq!(text_distance("kitten", "sitting"), 3);
        assert_eq!(text_distance("flaw", "lawn"), 2);
        assert_eq!(text_distance("puppy", ""), 5);
        assert_eq!(text_distance("", "puppy"), 5);
        assert_eq!(text_distance("", ""), 0);
    }

    #[test]
    fn accented_characters_are_single_edits() {
        assert_eq!(text_distance("Coruña", "La Coruña"), 3);
        assert_eq!(text_distance("Corun\u{303}a", "La Corun\u{303}a"), 3);
        assert_eq!(text_distance("Coruña", "Coruna"), 1);
        assert_eq!(text_distance("Corun\u{303}a", "Coruna"), 1);
        assert_eq!(text_distance("\nMäry häd ä little lämb\n", "\nMary häd ä little lämb\n"), 1);
    }

    #[test]
    fn empty_slices_are_valid_inputs() {
        let empty: &[u8] = &[];
        assert_eq!(distance(empty, empty), 0);
        assert_eq!(distance(empty, &b"abc"[..]), 3);
        assert_eq!(distance(&b"abc"[..], empty), 3);
    }

    #[proptest]
    fn the_distance_to_itself_is_zero(x: MockSequence) {
        assert_eq!(distance(&x, &x), 0);
    }

    #[proptest]
    fn the_distance_is_symmetric(x: MockSequence, y: MockSequence) {
        assert_eq!(distance(&x, &y), distance(&y, &x));
    }

    #[proptest]
    fn the_distance_obeys_the_triangle_inequality(
        x: MockSequence,
        y: MockSequence,
        z: MockSequence,
    ) {
        assert_matches!(
            (distance(&x, &z), distance(&x, &y) + distance(&y, &z)),
            (a, b) if a <= b
        );
    }

    #[proptest]
    fn the_distance_to_an_empty_sequence_is_the_length(x: MockSequence) {
        let empty = MockSequence::default();
        assert_eq!(distance(&x, &empty), x.len());
        assert_eq!(distance(&empty, &x), x.len());
    }

    #[proptest]
    fn the_distance_is_bounded_by_the_lengths(x: MockSequence, y: MockSequence) {
        let (n, m) = (x.len(), y.len());
        assert_matches!(distance(&x, &y), d if n.abs_diff(m) <= d && d <= n.max(m));
    }

    #[proptest]
    fn the_distance_matches_the_full_matrix(x: MockSequence, y: MockSequence) {
        let d = matrix(&x, &y);
        assert_eq!(distance(&x, &y), d[x.len()][y.len()]);
    }

    #[proptest]
    fn every_cell_is_the_distance_between_prefixes(
        #[strategy(vec(0u8..4, ..10))] x: Vec<u8>,
        #[strategy(vec(0u8..4, ..10))] y: Vec<u8>,
    ) {
        let d = matrix(&x[..], &y[..]);
        for i in 0..=x.len() {
            for j in 0..=y.len() {
                assert_eq!(distance(&x[..i], &y[..j]), d[i][j]);
            }
        }
    }

    #[proptest]
    fn text_distance_agrees_with_chars_on_plain_letters(
        #[strategy(vec(proptest::char::range('a', 'e'), ..12))] x: Vec<char>,
        #[strategy(vec(proptest::char::range('a', 'e'), ..12))] y: Vec<char>,
    ) {
        let a: String = x.iter().collect();
        let b: String = y.iter().collect();
        assert_eq!(text_distance(&a, &b), distance(&x, &y));
    }

    #[proptest]
    fn text_distance_to_empty_counts_graphemes(s: String) {
        assert_eq!(text_distance(&s, &s), 0);
        assert_eq!(text_distance(&s, ""), Graphemes::new(&s).len());
        assert_eq!(text_distance("", &s), Graphemes::new(&s).len());
    }
}
