pub mod config;
pub mod error;
pub mod generators;
pub mod normalize;
pub mod ranking;
pub mod report;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::HashtagConfig;
use crate::ranking::HashtagPipeline;

pub use crate::error::HashtagError;

/// Which generator produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Topic,
    Keyword,
    Niche,
    Style,
    Trending,
    Audience,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Topic => "topic",
            Category::Keyword => "keyword",
            Category::Niche => "niche",
            Category::Style => "style",
            Category::Trending => "trending",
            Category::Audience => "audience",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagCandidate {
    pub tag: String,
    pub category: Category,
    pub priority: i32,
    pub reason: String,
}

impl HashtagCandidate {
    pub fn new(tag: String, category: Category, priority: i32, reason: impl Into<String>) -> Self {
        Self {
            tag,
            category,
            priority,
            reason: reason.into(),
        }
    }
}

/// Request-scoped settings that have a default when the caller omits them.
///
/// | field                 | default      |
/// |-----------------------|--------------|
/// | `niche`               | `"other"`    |
/// | `content_style`       | `"tutorial"` |
/// | `max_hashtags`        | `5`          |
/// | `prioritize_trending` | `true`       |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub niche: String,
    pub content_style: String,
    pub max_hashtags: usize,
    pub prioritize_trending: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            niche: "other".to_string(),
            content_style: "tutorial".to_string(),
            max_hashtags: 5,
            prioritize_trending: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HashtagInput {
    pub concept: String,
    pub title: Option<String>,
    pub primary_keywords: Vec<String>,
    pub secondary_keywords: Vec<String>,
    pub target_audience: Option<String>,
    pub options: GenerationOptions,
}

impl HashtagInput {
    pub fn new(concept: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagBucket {
    pub hashtags: Vec<String>,
    pub formatted: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagPlacement {
    pub all: Vec<HashtagCandidate>,
    pub above_title: HashtagBucket,
    pub in_description: HashtagBucket,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedHashtags {
    pub space_separated: String,
    pub newline_separated: String,
    pub comma_separated: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagStatistics {
    pub total: usize,
    pub by_type: BTreeMap<Category, usize>,
    pub average_length: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagOutput {
    pub concept: String,
    pub niche: String,
    pub content_style: String,
    pub generated_at: DateTime<Utc>,
    pub hashtags: HashtagPlacement,
    pub tag_list: Vec<String>,
    pub formatted: FormattedHashtags,
    pub statistics: HashtagStatistics,
    pub recommendations: Vec<String>,
    pub tips: Vec<String>,
}

pub fn generate_hashtags(
    input: &HashtagInput,
    config: &HashtagConfig,
) -> Result<HashtagOutput, HashtagError> {
    generate_hashtags_at(input, config, Utc::now())
}

/// Runs the full pipeline with `now` standing in for the system clock. The
/// trending year and `generatedAt` both come from it.
pub fn generate_hashtags_at(
    input: &HashtagInput,
    config: &HashtagConfig,
    now: DateTime<Utc>,
) -> Result<HashtagOutput, HashtagError> {
    if input.concept.trim().is_empty() {
        return Err(HashtagError::missing("concept"));
    }

    let candidates = generators::collect_candidates(input, now.year());
    debug!(candidates = candidates.len(), "generated hashtag candidates");

    let pipeline = HashtagPipeline::new(config.limits.clone());
    let selection = pipeline.run(candidates, input.options.max_hashtags);

    Ok(report::build_output(input, selection, now))
}
