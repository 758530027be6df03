use crate::generators::ranked_priority;
use crate::{Category, HashtagCandidate};

const TAGS_USED: usize = 2;
const BASE_PRIORITY: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStyle {
    Tutorial,
    Review,
    Vlog,
    Entertainment,
    Educational,
    Shorts,
}

impl ContentStyle {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tutorial" => Some(ContentStyle::Tutorial),
            "review" => Some(ContentStyle::Review),
            "vlog" => Some(ContentStyle::Vlog),
            "entertainment" => Some(ContentStyle::Entertainment),
            "educational" => Some(ContentStyle::Educational),
            "shorts" => Some(ContentStyle::Shorts),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentStyle::Tutorial => "tutorial",
            ContentStyle::Review => "review",
            ContentStyle::Vlog => "vlog",
            ContentStyle::Entertainment => "entertainment",
            ContentStyle::Educational => "educational",
            ContentStyle::Shorts => "shorts",
        }
    }

    pub fn tags(self) -> &'static [&'static str; 4] {
        match self {
            ContentStyle::Tutorial => &["#tutorial", "#howto", "#stepbystep", "#guide"],
            ContentStyle::Review => &["#review", "#honestreview", "#unboxing", "#comparison"],
            ContentStyle::Vlog => &["#vlog", "#dayinmylife", "#vlogger", "#behindthescenes"],
            ContentStyle::Entertainment => &["#entertainment", "#funny", "#fun", "#comedy"],
            ContentStyle::Educational => &[
                "#educational",
                "#explained",
                "#learnsomething",
                "#facts",
            ],
            ContentStyle::Shorts => &["#shorts", "#youtubeshorts", "#short", "#shortsvideo"],
        }
    }
}

pub fn generate(style: &str) -> Vec<HashtagCandidate> {
    let Some(style) = ContentStyle::from_str(style) else {
        return Vec::new();
    };

    style
        .tags()
        .iter()
        .take(TAGS_USED)
        .enumerate()
        .map(|(rank, tag)| {
            HashtagCandidate::new(
                tag.to_string(),
                Category::Style,
                ranked_priority(BASE_PRIORITY, rank),
                format!("Matches {} content", style.label()),
            )
        })
        .collect()
}
