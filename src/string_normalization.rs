use unidecode::unidecode;

pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Splits a cleaned string into alphanumeric words.
pub fn words(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
}

pub fn contains_word(cleaned: &str, word: &str) -> bool {
    words(cleaned).any(|candidate| candidate == word)
}

/// Whether the words of `phrase` appear consecutively in `cleaned`.
/// "late night" matches "Late Night with Seth Meyers" but not "latenight".
pub fn contains_phrase(cleaned: &str, phrase: &str) -> bool {
    let needle: Vec<&str> = words(phrase).collect();
    if needle.is_empty() {
        return false;
    }
    let haystack: Vec<&str> = words(cleaned).collect();
    haystack.windows(needle.len()).any(|window| window == needle.as_slice())
}

/// First letter or digit of a display name, uppercased.
///
/// Leading punctuation and whitespace are skipped, so "(500) Days of Summer"
/// gives `5` and "'Til Death" gives `T`. Names without any letter or digit
/// give `None`.
pub fn initial_of(name: &str) -> Option<char> {
    name.chars()
        .find(|c| c.is_alphanumeric())
        .and_then(|c| c.to_uppercase().next())
}
