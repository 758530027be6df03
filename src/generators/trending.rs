use crate::normalize::{compact, tag_len};
use crate::{Category, HashtagCandidate};

const MAX_TAG_LEN: usize = 30;

/// Year-stamped placeholder tags. No live trend data is consulted; `year` is
/// supplied by the caller so output stays reproducible.
pub fn generate(concept: &str, year: i32) -> Vec<HashtagCandidate> {
    let mut candidates = vec![HashtagCandidate::new(
        format!("#{}", year),
        Category::Trending,
        55,
        "Current year for timeliness",
    )];

    let dated = format!("#{}{}", compact(concept), year);
    if tag_len(&dated) <= MAX_TAG_LEN {
        candidates.push(HashtagCandidate::new(
            dated,
            Category::Trending,
            50,
            "Concept tagged with current year",
        ));
    }

    candidates.push(HashtagCandidate::new(
        "#viral".to_string(),
        Category::Trending,
        45,
        "General discovery tag",
    ));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_concept_and_viral_tags() {
        let tags: Vec<String> = generate("Rust Tips", 2025)
            .into_iter()
            .map(|c| c.tag)
            .collect();
        assert_eq!(tags, vec!["#2025", "#rusttips2025", "#viral"]);
    }

    #[test]
    fn long_concept_skips_dated_tag() {
        let candidates = generate("an extremely long concept that overflows", 2025);
        let priorities: Vec<i32> = candidates.iter().map(|c| c.priority).collect();
        assert_eq!(priorities, vec![55, 45]);
    }
}
