//! Page text and its normalized form.
//!
//! Matching runs on a whitespace-free, case-folded copy of the page text; the
//! [`NormalizedIndex`] keeps the way back to the original character offsets so
//! a match can be handed to the engine as the literal text it appears as.

mod normalize;

pub use normalize::{normalize, normalize_term_for_search, NormalizedIndex, RawText};
pub(crate) use normalize::is_space;
