use crate::generators::ranked_priority;
use crate::normalize::{compact, tag_len, to_tag, words};
use crate::{Category, HashtagCandidate};

const MAX_TAG_LEN: usize = 25;
const AUDIENCE_PRIORITY: i32 = 50;
const MODIFIER_PRIORITY: i32 = 45;
const MODIFIER_SUFFIXES: [&str; 2] = ["for", "tips"];

pub fn generate(audience: &str) -> Vec<HashtagCandidate> {
    let mut candidates = Vec::new();

    let body = compact(audience);
    if !body.is_empty() {
        let tag = to_tag(&body);
        if tag_len(&tag) <= MAX_TAG_LEN {
            candidates.push(HashtagCandidate::new(
                tag,
                Category::Audience,
                AUDIENCE_PRIORITY,
                format!("Target audience: {}", audience.trim()),
            ));
        }
    }

    if let Some(first) = words(audience).first() {
        for (rank, suffix) in MODIFIER_SUFFIXES.iter().enumerate() {
            let tag = to_tag(&format!("{}{}", first, suffix));
            if tag_len(&tag) > MAX_TAG_LEN {
                continue;
            }
            candidates.push(HashtagCandidate::new(
                tag,
                Category::Audience,
                ranked_priority(MODIFIER_PRIORITY, rank),
                "Audience modifier",
            ));
        }
    }

    candidates
}
