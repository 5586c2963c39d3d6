use crate::{distance, Graphemes};

/// Finds the candidate closest to `target` by grapheme-aware Levenshtein [distance()].
///
/// Returns the candidate along with its distance, or `None` if there are no candidates.
/// Ties are broken in favor of the earliest candidate.
///
/// # Example
///
/// ```rust
/// use levenshtein_graphemes::nearest;
///
/// let cities = ["Barcelona", "Madrid", "Hospitalet de Llobregat", "A Coruña"];
///
/// assert_eq!(nearest("La Coruña", &cities), Some((&"A Coruña", 2)));
/// assert_eq!(nearest("La Coruña", &[] as &[&str]), None);
/// ```
pub fn nearest<'c, T, I>(target: &str, candidates: I) -> Option<(&'c T, usize)>
where
    T: AsRef<str> + ?Sized + 'c,
    I: IntoIterator<Item = &'c T>,
{
    let target = Graphemes::new(target);
    nearest_by(candidates, |c| {
        distance(&target, &Graphemes::new((*c).as_ref()))
    })
}

/// Finds the candidate that minimizes `distance_to`.
///
/// Ties are broken in favor of the earliest candidate.
///
/// ```rust
/// use levenshtein_graphemes::{distance, nearest_by, Graphemes};
///
/// let target = Graphemes::caseless("MADRID");
/// let cities = ["Barcelona", "madrid", "Valencia"];
///
/// let closest = nearest_by(cities, |c| distance(&target, &Graphemes::caseless(c)));
/// assert_eq!(closest, Some(("madrid", 0)));
/// ```
pub fn nearest_by<T, I, F>(candidates: I, mut distance_to: F) -> Option<(T, usize)>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> usize,
{
    candidates
        .into_iter()
        .map(|c| {
            let d = distance_to(&c);
            (c, d)
        })
        .min_by_key(|&(_, d)| d)
}
