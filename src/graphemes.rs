use crate::Sequence;
use derive_more::Deref;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Text viewed as a [Sequence] of user-perceived characters.
///
/// The text is split into [extended grapheme clusters][uax29] once, on construction, so that a
/// base letter followed by combining marks counts as a single element no matter how many bytes
/// or code points encode it.
///
/// [uax29]: https://www.unicode.org/reports/tr29/
///
/// # Example
///
/// ```rust
/// use levenshtein_graphemes::{Graphemes, Sequence};
///
/// // "n" followed by a combining tilde.
/// let text = Graphemes::new("Corun\u{303}a");
///
/// assert_eq!(text.len(), 6);
/// assert_eq!(&*text[4], "n\u{303}");
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref)]
pub struct Graphemes<'s> {
    #[deref(forward)]
    clusters: Box<[Cow<'s, str>]>,
}

impl<'s> Graphemes<'s> {
    /// Segments `text` into grapheme clusters.
    pub fn new(text: &'s str) -> Self {
        Graphemes {
            clusters: text.graphemes(true).map(Cow::Borrowed).collect(),
        }
    }

    /// Segments `text` into grapheme clusters that compare regardless of case.
    ///
    /// ```rust
    /// use levenshtein_graphemes::{distance, Graphemes};
    ///
    /// let a = Graphemes::caseless("A CORUÑA");
    /// let b = Graphemes::caseless("a coruña");
    ///
    /// assert_eq!(distance(&a, &b), 0);
    /// ```
    pub fn caseless(text: &'s str) -> Self {
        Graphemes {
            clusters: text
                .graphemes(true)
                .map(|g| {
                    if g.chars().any(char::is_uppercase) {
                        Cow::Owned(g.to_lowercase())
                    } else {
                        Cow::Borrowed(g)
                    }
                })
                .collect(),
        }
    }
}

impl<'s> From<&'s str> for Graphemes<'s> {
    #[inline]
    fn from(text: &'s str) -> Self {
        Graphemes::new(text)
    }
}

impl Sequence for Graphemes<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.clusters.len()
    }

    #[inline]
    fn elements_eq(&self, other: &Self, i: usize, j: usize) -> bool {
        self.clusters[i] == other.clusters[j]
    }
}
