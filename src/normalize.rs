/// Lowercases `text` and drops every character that is not a word character
/// (`[A-Za-z0-9_]`) or whitespace. Whitespace is left in place.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|ch| is_word_char(*ch) || ch.is_whitespace())
        .collect()
}

/// Normalizes `text` and removes all whitespace, yielding a tag body.
pub fn compact(text: &str) -> String {
    normalize(text)
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Whitespace-separated words of the normalized text, in source order.
pub fn words(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn to_tag(body: &str) -> String {
    format!("#{}", body)
}

/// Character count of a tag, `#` included.
pub fn tag_len(tag: &str) -> usize {
    tag.chars().count()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("How To: Cook PASTA!"), "how to cook pasta");
        assert_eq!(normalize("snake_case 42"), "snake_case 42");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("café crème"), "caf crme");
    }

    #[test]
    fn compact_removes_whitespace() {
        assert_eq!(compact("Cooking  Pasta\tRecipes"), "cookingpastarecipes");
    }

    #[test]
    fn words_keeps_source_order() {
        assert_eq!(words("Rust, for beginners"), vec!["rust", "for", "beginners"]);
    }

    #[test]
    fn tag_len_counts_hash() {
        assert_eq!(tag_len(&to_tag("rust")), 5);
    }
}
