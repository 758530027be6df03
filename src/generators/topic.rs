use crate::generators::ranked_priority;
use crate::normalize::{compact, tag_len, to_tag, words};
use crate::{Category, HashtagCandidate};

const MAX_TAG_LEN: usize = 30;
const MAIN_PRIORITY: i32 = 100;
const CONCEPT_WORD_PRIORITY: i32 = 90;
const TITLE_WORD_PRIORITY: i32 = 85;

/// Tags derived from the video concept and, when given, its title.
pub fn generate(concept: &str, title: Option<&str>) -> Vec<HashtagCandidate> {
    let mut candidates = Vec::new();

    let main = compact(concept);
    if !main.is_empty() {
        let tag = to_tag(&main);
        if tag_len(&tag) <= MAX_TAG_LEN {
            candidates.push(HashtagCandidate::new(
                tag,
                Category::Topic,
                MAIN_PRIORITY,
                "Main topic from video concept",
            ));
        }
    }

    let concept_words = words(concept)
        .into_iter()
        .filter(|word| word.chars().count() > 3)
        .take(2);
    for (rank, word) in concept_words.enumerate() {
        let tag = to_tag(&word);
        if tag_len(&tag) > MAX_TAG_LEN {
            continue;
        }
        candidates.push(HashtagCandidate::new(
            tag,
            Category::Topic,
            ranked_priority(CONCEPT_WORD_PRIORITY, rank),
            format!("Key word from concept: {}", word),
        ));
    }

    if let Some(title) = title {
        let title_words = words(title)
            .into_iter()
            .filter(|word| word.chars().count() > 4)
            .take(2);
        for (rank, word) in title_words.enumerate() {
            let tag = to_tag(&word);
            if tag_len(&tag) > MAX_TAG_LEN || candidates.iter().any(|c| c.tag == tag) {
                continue;
            }
            candidates.push(HashtagCandidate::new(
                tag,
                Category::Topic,
                ranked_priority(TITLE_WORD_PRIORITY, rank),
                format!("Key word from title: {}", word),
            ));
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(candidates: &[HashtagCandidate]) -> Vec<(&str, i32)> {
        candidates
            .iter()
            .map(|c| (c.tag.as_str(), c.priority))
            .collect()
    }

    #[test]
    fn main_tag_and_first_two_long_words() {
        let candidates = generate("Cooking Pasta Recipes", None);
        assert_eq!(
            tags(&candidates),
            vec![
                ("#cookingpastarecipes", 100),
                ("#cooking", 90),
                ("#pasta", 85),
            ]
        );
    }

    #[test]
    fn short_words_are_skipped() {
        let candidates = generate("how to bake bread", None);
        assert_eq!(
            tags(&candidates),
            vec![("#howtobakebread", 100), ("#bake", 90), ("#bread", 85)]
        );
    }

    #[test]
    fn long_concept_drops_main_tag() {
        let candidates = generate("the ultimate beginners guide to sourdough baking", None);
        assert!(candidates.iter().all(|c| c.priority != 100));
        assert_eq!(candidates[0].tag, "#ultimate");
    }

    #[test]
    fn main_tag_of_exactly_thirty_is_kept() {
        let candidates = generate("aaaaaaaaaa bbbbbbbbbb ccccccccc", None);
        assert_eq!(candidates[0].priority, 100);
        assert_eq!(tag_len(&candidates[0].tag), 30);

        let candidates = generate("aaaaaaaaaa bbbbbbbbbb cccccccccc", None);
        assert!(candidates.iter().all(|c| c.priority != 100));
    }

    #[test]
    fn title_words_skip_tags_already_produced() {
        let candidates = generate("pasta night", Some("Pasta Carbonara Perfected"));
        assert_eq!(
            tags(&candidates),
            vec![
                ("#pastanight", 100),
                ("#pasta", 90),
                ("#night", 85),
                ("#carbonara", 80),
            ]
        );
    }
}
