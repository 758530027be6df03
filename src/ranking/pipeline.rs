use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::normalize::tag_len;
use crate::HashtagCandidate;

/// YouTube ignores every hashtag on a video that carries more than this many.
pub const HARD_CAP: usize = 15;
/// Hashtags YouTube shows above the video title.
pub const ABOVE_TITLE: usize = 3;

/// Tag length bounds applied by the deduplicator, `#` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionLimits {
    pub min_tag_length: usize,
    pub max_tag_length: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            min_tag_length: 3,
            max_tag_length: 100,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub selected: Vec<HashtagCandidate>,
    pub above_title: Vec<HashtagCandidate>,
    pub in_description: Vec<HashtagCandidate>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct HashtagPipeline {
    limits: SelectionLimits,
}

impl HashtagPipeline {
    pub fn new(limits: SelectionLimits) -> Self {
        Self { limits }
    }

    pub fn run(&self, candidates: Vec<HashtagCandidate>, requested_max: usize) -> Selection {
        let mut unique = self.dedup(candidates);
        debug!(unique = unique.len(), "deduplicated hashtag candidates");
        self.rank(&mut unique);
        let selection = self.select(unique, requested_max);
        debug!(
            selected = selection.len(),
            above_title = selection.above_title.len(),
            "selected hashtags"
        );
        selection
    }

    /// Keeps the first occurrence of each tag (case-insensitive) and drops
    /// tags outside the length limits. Input order is preserved.
    pub fn dedup(&self, candidates: Vec<HashtagCandidate>) -> Vec<HashtagCandidate> {
        let mut seen: HashSet<String> = HashSet::new();
        let allowed = self.limits.min_tag_length..=self.limits.max_tag_length;

        candidates
            .into_iter()
            .filter(|candidate| {
                if !allowed.contains(&tag_len(&candidate.tag)) {
                    return false;
                }
                seen.insert(candidate.tag.to_lowercase())
            })
            .collect()
    }

    /// Highest priority first. The sort is stable, so ties keep generation order.
    pub fn rank(&self, candidates: &mut [HashtagCandidate]) {
        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    pub fn select(&self, ranked: Vec<HashtagCandidate>, requested_max: usize) -> Selection {
        let mut selected = ranked;
        selected.truncate(requested_max.min(HARD_CAP));

        let split = ABOVE_TITLE.min(selected.len());
        let above_title = selected[..split].to_vec();
        let in_description = selected[split..].to_vec();

        Selection {
            selected,
            above_title,
            in_description,
        }
    }
}
