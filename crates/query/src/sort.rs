//! Ordering of the filtered list.
//!
//! Every ordering is applied with a stable sort, so movies that tie on the
//! sort key keep their catalog order and repeated queries give identical
//! output.

use crate::state::SortKey;
use catalog::MovieRecord;
use icu_collator::{Collator, CollatorOptions};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Sort `movies` in place by `key`.
///
/// `par_sort_by` is rayon's stable merge sort.
pub fn sort_movies(movies: &mut [&MovieRecord], key: SortKey) {
    movies.par_sort_by(|a, b| compare(a, b, key));
}

/// Comparator for a single sort key
pub fn compare(a: &MovieRecord, b: &MovieRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Popularity => b.vote_count.cmp(&a.vote_count),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Duration => a.duration_minutes.cmp(&b.duration_minutes),
        SortKey::Alphabetical => collate(&a.title, &b.title),
    }
}

thread_local! {
    // Root locale, tertiary strength; built once per sorting thread
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Locale-aware title comparison.
///
/// Uses the Unicode Collation Algorithm with the root locale's tailoring:
/// accents are secondary differences, punctuation sorts before digits and
/// digits before letters, and lower-case sorts before upper-case when two
/// titles differ only in case. Titles the collator considers equal fall back
/// to code-point order so the result is a total order.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}
