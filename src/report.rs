use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::normalize::tag_len;
use crate::ranking::{Selection, ABOVE_TITLE};
use crate::{
    Category, FormattedHashtags, HashtagBucket, HashtagCandidate, HashtagInput, HashtagOutput,
    HashtagPlacement, HashtagStatistics,
};

/// Selections larger than this get a reminder to keep the strongest tags first.
const RECOMMENDED_COUNT: usize = 5;

pub const ABOVE_TITLE_NOTE: &str =
    "Add these to the end of your description; YouTube shows the first 3 hashtags above your title.";
pub const IN_DESCRIPTION_NOTE: &str =
    "Place these after the first three hashtags in your description.";

pub const TIPS: [&str; 6] = [
    "YouTube shows the first 3 hashtags from your description above the video title.",
    "Use 3-5 focused hashtags; more than 15 and YouTube ignores all of them.",
    "Put your most important hashtags first.",
    "Keep hashtags relevant to the video; misleading tags can get the video removed.",
    "Mix broad hashtags with specific ones to reach both large and targeted audiences.",
    "Hashtags cannot contain spaces; combine words like #cookingtips.",
];

pub fn build_output(
    input: &HashtagInput,
    selection: Selection,
    now: DateTime<Utc>,
) -> HashtagOutput {
    let statistics = statistics(&selection.selected);
    let recommendations = recommendations(&selection.selected, &input.options.niche);
    let tag_list = tags_of(&selection.selected);

    HashtagOutput {
        concept: input.concept.clone(),
        niche: input.options.niche.clone(),
        content_style: input.options.content_style.clone(),
        generated_at: now,
        hashtags: HashtagPlacement {
            above_title: bucket(&selection.above_title, ABOVE_TITLE_NOTE),
            in_description: bucket(&selection.in_description, IN_DESCRIPTION_NOTE),
            all: selection.selected,
        },
        formatted: FormattedHashtags {
            space_separated: tag_list.join(" "),
            newline_separated: tag_list.join("\n"),
            comma_separated: tag_list.join(", "),
        },
        tag_list,
        statistics,
        recommendations,
        tips: TIPS.iter().map(|tip| tip.to_string()).collect(),
    }
}

pub fn statistics(selected: &[HashtagCandidate]) -> HashtagStatistics {
    let mut by_type: BTreeMap<Category, usize> = BTreeMap::new();
    for candidate in selected {
        *by_type.entry(candidate.category).or_insert(0) += 1;
    }

    HashtagStatistics {
        total: selected.len(),
        by_type,
        average_length: average_length(selected),
    }
}

/// Mean tag length (with `#`), rounded. Zero for an empty selection.
pub fn average_length(selected: &[HashtagCandidate]) -> usize {
    if selected.is_empty() {
        return 0;
    }
    let total: usize = selected.iter().map(|c| tag_len(&c.tag)).sum();
    (total as f64 / selected.len() as f64).round() as usize
}

pub fn recommendations(selected: &[HashtagCandidate], niche: &str) -> Vec<String> {
    let has = |category: Category| selected.iter().any(|c| c.category == category);
    let mut recommendations = Vec::new();

    if selected.len() < ABOVE_TITLE {
        recommendations.push(format!(
            "Add more hashtags so all {} above-title slots are filled.",
            ABOVE_TITLE
        ));
    }
    if !has(Category::Topic) {
        recommendations.push(
            "Add topic-specific hashtags that describe what the video is about.".to_string(),
        );
    }
    if !has(Category::Niche) && niche != "other" {
        recommendations.push(format!(
            "Add {} niche hashtags to reach that community.",
            niche
        ));
    }
    if !has(Category::Trending) {
        recommendations.push(
            "Consider adding a trending or timely hashtag for extra discovery.".to_string(),
        );
    }
    if selected.len() > RECOMMENDED_COUNT {
        recommendations.push(format!(
            "Make sure your best {} hashtags come first; only those show above the title.",
            ABOVE_TITLE
        ));
    }

    if recommendations.is_empty() {
        recommendations.push("Hashtag mix looks well balanced.".to_string());
    }
    recommendations
}

fn tags_of(candidates: &[HashtagCandidate]) -> Vec<String> {
    candidates.iter().map(|c| c.tag.clone()).collect()
}

fn bucket(candidates: &[HashtagCandidate], note: &str) -> HashtagBucket {
    let hashtags = tags_of(candidates);
    HashtagBucket {
        formatted: hashtags.join(" "),
        hashtags,
        note: note.to_string(),
    }
}
