pub mod audience;
pub mod keyword;
pub mod niche;
pub mod style;
pub mod topic;
pub mod trending;

pub use niche::Niche;
pub use style::ContentStyle;

use crate::{HashtagCandidate, HashtagInput};

/// Priority drop between successive items of one generator.
pub const PRIORITY_STEP: i32 = 5;

pub fn ranked_priority(base: i32, rank: usize) -> i32 {
    base - rank as i32 * PRIORITY_STEP
}

/// Runs every applicable generator and concatenates their output in a fixed
/// order: topic, keyword, niche, style, trending, audience.
pub fn collect_candidates(input: &HashtagInput, year: i32) -> Vec<HashtagCandidate> {
    let mut candidates = Vec::new();
    candidates.extend(topic::generate(&input.concept, input.title.as_deref()));
    candidates.extend(keyword::generate(
        &input.primary_keywords,
        &input.secondary_keywords,
    ));
    candidates.extend(niche::generate(&input.options.niche));
    candidates.extend(style::generate(&input.options.content_style));
    if input.options.prioritize_trending {
        candidates.extend(trending::generate(&input.concept, year));
    }
    if let Some(audience) = input
        .target_audience
        .as_deref()
        .filter(|value| !value.trim().is_empty())
    {
        candidates.extend(audience::generate(audience));
    }
    candidates
}
