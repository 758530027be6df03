use crate::generators::ranked_priority;
use crate::{Category, HashtagCandidate};

const TAGS_USED: usize = 3;
const BASE_PRIORITY: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Niche {
    Tech,
    Gaming,
    Education,
    Lifestyle,
    Business,
    Fitness,
    Cooking,
    Music,
    Beauty,
    Travel,
}

impl Niche {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tech" => Some(Niche::Tech),
            "gaming" => Some(Niche::Gaming),
            "education" => Some(Niche::Education),
            "lifestyle" => Some(Niche::Lifestyle),
            "business" => Some(Niche::Business),
            "fitness" => Some(Niche::Fitness),
            "cooking" => Some(Niche::Cooking),
            "music" => Some(Niche::Music),
            "beauty" => Some(Niche::Beauty),
            "travel" => Some(Niche::Travel),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Niche::Tech => "tech",
            Niche::Gaming => "gaming",
            Niche::Education => "education",
            Niche::Lifestyle => "lifestyle",
            Niche::Business => "business",
            Niche::Fitness => "fitness",
            Niche::Cooking => "cooking",
            Niche::Music => "music",
            Niche::Beauty => "beauty",
            Niche::Travel => "travel",
        }
    }

    /// Established tags for the niche, most popular first.
    pub fn tags(self) -> &'static [&'static str; 5] {
        match self {
            Niche::Tech => &["#tech", "#technology", "#techreview", "#gadgets", "#innovation"],
            Niche::Gaming => &["#gaming", "#gamer", "#videogames", "#gameplay", "#letsplay"],
            Niche::Education => &["#education", "#learning", "#study", "#knowledge", "#edutube"],
            Niche::Lifestyle => &[
                "#lifestyle",
                "#dailylife",
                "#lifehacks",
                "#selfimprovement",
                "#motivation",
            ],
            Niche::Business => &[
                "#business",
                "#entrepreneur",
                "#marketing",
                "#smallbusiness",
                "#success",
            ],
            Niche::Fitness => &["#fitness", "#workout", "#gym", "#health", "#fitnessmotivation"],
            Niche::Cooking => &["#cooking", "#recipe", "#food", "#homecooking", "#foodie"],
            Niche::Music => &["#music", "#musician", "#newmusic", "#cover", "#songwriter"],
            Niche::Beauty => &["#beauty", "#makeup", "#skincare", "#beautytips", "#makeuptutorial"],
            Niche::Travel => &["#travel", "#wanderlust", "#travelvlog", "#adventure", "#explore"],
        }
    }
}

/// Top niche tags; unknown niches yield nothing.
pub fn generate(niche: &str) -> Vec<HashtagCandidate> {
    let Some(niche) = Niche::from_str(niche) else {
        return Vec::new();
    };

    niche
        .tags()
        .iter()
        .take(TAGS_USED)
        .enumerate()
        .map(|(rank, tag)| {
            HashtagCandidate::new(
                tag.to_string(),
                Category::Niche,
                ranked_priority(BASE_PRIORITY, rank),
                format!("Popular in the {} niche", niche.label()),
            )
        })
        .collect()
}
