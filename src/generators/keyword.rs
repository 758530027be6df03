use std::ops::RangeInclusive;

use crate::generators::ranked_priority;
use crate::normalize::{compact, tag_len, to_tag};
use crate::{Category, HashtagCandidate};

const TAG_LEN: RangeInclusive<usize> = 3..=30;
const PRIMARY_LIMIT: usize = 3;
const SECONDARY_LIMIT: usize = 2;
const PRIMARY_PRIORITY: i32 = 80;
const SECONDARY_PRIORITY: i32 = 65;

/// Tags from researched keywords: the first three primary and the first two
/// secondary entries, in that order.
pub fn generate(primary: &[String], secondary: &[String]) -> Vec<HashtagCandidate> {
    let mut candidates = keyword_tags(primary, PRIMARY_LIMIT, PRIMARY_PRIORITY, "Primary keyword");
    candidates.extend(keyword_tags(
        secondary,
        SECONDARY_LIMIT,
        SECONDARY_PRIORITY,
        "Secondary keyword",
    ));
    candidates
}

fn keyword_tags(
    keywords: &[String],
    limit: usize,
    base_priority: i32,
    label: &str,
) -> Vec<HashtagCandidate> {
    keywords
        .iter()
        .take(limit)
        .enumerate()
        .filter_map(|(rank, keyword)| {
            let tag = to_tag(&compact(keyword));
            if !TAG_LEN.contains(&tag_len(&tag)) {
                return None;
            }
            Some(HashtagCandidate::new(
                tag,
                Category::Keyword,
                ranked_priority(base_priority, rank),
                format!("{}: {}", label, keyword),
            ))
        })
        .collect()
}
