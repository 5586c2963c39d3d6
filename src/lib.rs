//! # Overview
//!
//! This crate provides an implementation of the [Levenshtein distance][levenshtein] for arbitrary
//! sequences, i.e. the minimum number of single element insertions, deletions and substitutions
//! needed to turn one sequence into the other.
//!
//! The algorithm only asks its inputs for their length and for whether the elements at two
//! positions are equal, see [Sequence]. Text is compared by user-perceived characters
//! ([Graphemes]) rather than by bytes or code points, so an accented letter counts as a single
//! character whether or not it is precomposed.
//!
//! Only the distance is computed, in `O(n * m)` time and `O(m)` space; no edit script is
//! produced.
//!
//! [levenshtein]:  https://en.wikipedia.org/wiki/Levenshtein_distance
//!
//! # Example
//!
//! ```rust
//! use levenshtein_graphemes::*;
//!
//! assert_eq!(text_distance("dog", "dogs"), 1);
//! assert_eq!(text_distance("puppy", "lucky"), 3);
//!
//! // "ñ" is one character, whether encoded as U+00F1 or as "n" followed by U+0303.
//! assert_eq!(text_distance("Coruña", "La Coruña"), 3);
//! assert_eq!(text_distance("Corun\u{303}a", "La Corun\u{303}a"), 3);
//!
//! // Any slice of comparable elements is a sequence too.
//! let a = [1, 2, 3, 4];
//! let b = [1, 3, 4, 5];
//! assert_eq!(distance(&a[..], &b[..]), 2);
//!
//! let cities = ["Barcelona", "Madrid", "Hospitalet de Llobregat", "A Coruña"];
//!
//! assert_eq!(
//!     nearest("L'Hospitalet de Llobregat", &cities),
//!     Some((&"Hospitalet de Llobregat", 2))
//! );
//! ```

mod distance;
mod graphemes;
mod nearest;
mod sequence;

pub use distance::*;
pub use graphemes::*;
pub use nearest::*;
pub use sequence::*;
