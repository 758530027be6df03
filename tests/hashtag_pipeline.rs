use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;

use hashtag_gen::config::HashtagConfig;
use hashtag_gen::{generate_hashtags_at, Category, HashtagError, HashtagInput, HashtagOutput};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).single().unwrap()
}

fn run(input: &HashtagInput) -> HashtagOutput {
    generate_hashtags_at(input, &HashtagConfig::default(), fixed_now()).unwrap()
}

fn tags(output: &HashtagOutput) -> Vec<&str> {
    output.hashtags.all.iter().map(|c| c.tag.as_str()).collect()
}

fn rich_input() -> HashtagInput {
    let mut input = HashtagInput::new("learn rust programming");
    input.title = Some("Rust Ownership Explained Simply".to_string());
    input.primary_keywords = vec![
        "rust tutorial".to_string(),
        "rust ownership".to_string(),
        "borrow checker".to_string(),
    ];
    input.secondary_keywords = vec!["systems programming".to_string()];
    input.target_audience = Some("beginner developers".to_string());
    input.options.niche = "tech".to_string();
    input.options.content_style = "educational".to_string();
    input.options.max_hashtags = 15;
    input
}

#[test]
fn cooking_scenario_without_trending() {
    let mut input = HashtagInput::new("cooking pasta recipes");
    input.options.niche = "cooking".to_string();
    input.options.content_style = "tutorial".to_string();
    input.options.max_hashtags = 5;
    input.options.prioritize_trending = false;

    let output = run(&input);

    assert_eq!(output.hashtags.above_title.hashtags[0], "#cookingpastarecipes");
    assert_eq!(output.hashtags.all[0].priority, 100);
    assert_eq!(
        tags(&output),
        vec!["#cookingpastarecipes", "#cooking", "#pasta", "#recipe", "#food"]
    );
    assert!(output
        .hashtags
        .all
        .iter()
        .all(|c| c.category != Category::Trending));
    assert!(!output.statistics.by_type.contains_key(&Category::Trending));
    assert!(output
        .recommendations
        .iter()
        .any(|r| r.contains("trending")));
}

#[test]
fn missing_concept_is_a_validation_error() {
    let config = HashtagConfig::default();
    for concept in ["", "   "] {
        let err = generate_hashtags_at(&HashtagInput::new(concept), &config, fixed_now())
            .unwrap_err();
        assert_eq!(err, HashtagError::MissingField { field: "concept" });
        assert_eq!(err.to_string(), "missing required field: concept");
    }
}

#[test]
fn duplicate_keywords_keep_the_primary_one() {
    let mut input = HashtagInput::new("weekend project");
    input.primary_keywords = vec!["Home Lab".to_string()];
    input.secondary_keywords = vec!["home lab!".to_string()];
    input.options.max_hashtags = 15;

    let output = run(&input);
    let home_lab: Vec<_> = output
        .hashtags
        .all
        .iter()
        .filter(|c| c.tag.eq_ignore_ascii_case("#homelab"))
        .collect();

    assert_eq!(home_lab.len(), 1);
    assert_eq!(home_lab[0].priority, 80);
}

#[test]
fn requested_max_is_capped_at_fifteen() {
    let mut input = rich_input();
    input.options.max_hashtags = 20;

    let output = run(&input);
    assert_eq!(output.statistics.total, 15);
    assert_eq!(output.tag_list.len(), 15);
}

#[test]
fn config_file_cannot_raise_youtube_limits() {
    let dir = std::env::temp_dir().join(format!("hashtag-gen-limits-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("hashtags.toml");
    std::fs::write(
        &path,
        "[limits]\nglobal_max = 40\nabove_title = 6\n\n[defaults]\nmax_hashtags = 40\n",
    )
    .unwrap();

    let (config, _) = HashtagConfig::load(Some(path)).unwrap();
    let _ = std::fs::remove_dir_all(&dir);

    let mut input = rich_input();
    input.options = config.defaults.clone();
    input.options.niche = "tech".to_string();
    input.options.content_style = "educational".to_string();

    let output = generate_hashtags_at(&input, &config, fixed_now()).unwrap();
    assert_eq!(input.options.max_hashtags, 40);
    assert!(output.statistics.total <= 15);
    assert_eq!(output.hashtags.above_title.hashtags.len(), 3);
}

#[test]
fn selection_is_unique_sorted_and_bucketed() {
    let output = run(&rich_input());
    let selected = &output.hashtags.all;

    let unique: HashSet<String> = selected.iter().map(|c| c.tag.to_lowercase()).collect();
    assert_eq!(unique.len(), selected.len());

    assert!(selected.windows(2).all(|pair| pair[0].priority >= pair[1].priority));

    let mut rebuilt = output.hashtags.above_title.hashtags.clone();
    rebuilt.extend(output.hashtags.in_description.hashtags.clone());
    assert_eq!(rebuilt, output.tag_list);
    assert_eq!(output.hashtags.above_title.hashtags.len(), selected.len().min(3));
}

#[test]
fn equal_priorities_keep_generation_order() {
    let mut input = HashtagInput::new("cooking pasta recipes");
    input.options.niche = "cooking".to_string();
    input.options.max_hashtags = 15;

    let output = run(&input);
    let at_sixty: Vec<(&str, Category)> = output
        .hashtags
        .all
        .iter()
        .filter(|c| c.priority == 60)
        .map(|c| (c.tag.as_str(), c.category))
        .collect();

    assert_eq!(
        at_sixty,
        vec![("#food", Category::Niche), ("#tutorial", Category::Style)]
    );
}

#[test]
fn trending_tags_use_injected_year() {
    let mut input = HashtagInput::new("rust tips");
    input.options.max_hashtags = 15;

    let output = run(&input);
    let trending: Vec<&str> = output
        .hashtags
        .all
        .iter()
        .filter(|c| c.category == Category::Trending)
        .map(|c| c.tag.as_str())
        .collect();

    assert_eq!(trending, vec!["#2025", "#rusttips2025", "#viral"]);
    assert_eq!(output.generated_at, fixed_now());
}

#[test]
fn small_max_shrinks_above_title_bucket() {
    let mut input = HashtagInput::new("rust tips");
    input.options.max_hashtags = 2;

    let output = run(&input);
    assert_eq!(output.hashtags.above_title.hashtags.len(), 2);
    assert!(output.hashtags.in_description.hashtags.is_empty());
    assert!(output
        .recommendations
        .iter()
        .any(|r| r.contains("above-title")));
}

#[test]
fn output_serializes_with_camel_case_fields() {
    let mut input = HashtagInput::new("cooking pasta recipes");
    input.options.niche = "cooking".to_string();

    let value = serde_json::to_value(run(&input)).unwrap();

    assert_eq!(value["contentStyle"], "tutorial");
    assert_eq!(value["statistics"]["byType"]["topic"], 3);
    assert_eq!(
        value["formatted"]["commaSeparated"],
        "#cookingpastarecipes, #cooking, #pasta, #recipe, #food"
    );
    assert_eq!(value["hashtags"]["all"][0]["category"], "topic");
    assert_eq!(value["tips"].as_array().map(Vec::len), Some(6));
}
