//! English singular/plural inflection for entity and table names.

/// Words whose singular and plural forms are identical.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
    "staff",
];

/// Singular/plural pairs that no suffix rule covers.
const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("analysis", "analyses"),
    ("atlas", "atlases"),
    ("bias", "biases"),
    ("canvas", "canvases"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("crisis", "crises"),
    ("foot", "feet"),
    ("gas", "gases"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("index", "indices"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("ox", "oxen"),
    ("person", "people"),
    ("potato", "potatoes"),
    ("quiz", "quizzes"),
    ("shelf", "shelves"),
    ("thesis", "theses"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Returns the plural form of `word`.
///
/// Words that already read as plural are returned unchanged, so the result is
/// stable for every name that [`singularize`] recognizes as plural.
#[must_use]
pub fn pluralize(word: &str) -> String {
    let (head, last) = split_last_word(word);
    if last.is_empty() {
        return word.to_string();
    }
    format!("{head}{}", pluralize_word(last))
}

/// Returns the singular form of `word`.
#[must_use]
pub fn singularize(word: &str) -> String {
    let (head, last) = split_last_word(word);
    if last.is_empty() {
        return word.to_string();
    }
    format!("{head}{}", singularize_word(last))
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) {
        return word.to_string();
    }

    let singular = singularize_word(word);
    if singular != word && pluralize_regular(&singular) == word {
        return word.to_string();
    }

    pluralize_regular(word)
}

fn pluralize_regular(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| lower.ends_with(suffix)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == lower) {
        return match_case(word, singular);
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == lower) {
        return word.to_string();
    }

    let strip = |count: usize| word[..word.len() - count].to_string();

    if lower.ends_with("ies") && lower.len() > 3 {
        return format!("{}y", strip(3));
    }
    if lower.ends_with("sses")
        || lower.ends_with("xes")
        || lower.ends_with("ches")
        || lower.ends_with("shes")
        || ["buses", "nuses", "puses", "ruses", "tuses"].iter().any(|suffix| lower.ends_with(suffix))
    {
        return strip(2);
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return word.to_string();
    }
    if lower.ends_with('s') && lower.len() > 1 {
        return strip(1);
    }
    word.to_string()
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut chars = lower.chars().rev();
    chars.next();
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

/// Splits a compound name so only its final word is inflected:
/// `post_comment` -> (`post_`, `comment`), `PostComment` -> (`Post`, `Comment`).
fn split_last_word(word: &str) -> (&str, &str) {
    let boundary = word
        .char_indices()
        .rev()
        .find(|(index, ch)| {
            *index > 0 && (*ch == '_' || *ch == '-' || *ch == ' ' || ch.is_ascii_uppercase())
        })
        .map(|(index, ch)| if ch.is_ascii_uppercase() { index } else { index + 1 });

    match boundary {
        Some(index) => word.split_at(index),
        None => ("", word),
    }
}

fn match_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
    } else {
        replacement.to_string()
    }
}
