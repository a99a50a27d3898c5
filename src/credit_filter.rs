use crate::snapshot::{MediaCredit, MediaKind};
use crate::string_normalization::{clean_str, contains_phrase, contains_word};
use serde::{Deserialize, Serialize};

/// Character words meaning the performer appears as themselves.
const SELF_APPEARANCE_WORDS: &[&str] = &["self", "himself", "herself", "themselves", "themself"];

/// Character phrases marking footage that is not a narrative role.
const NON_NARRATIVE_CHARACTER_PHRASES: &[&str] = &[
    "archive footage",
    "archival footage",
    "stock footage",
    "archive material",
    "uncredited archive",
    "clip compilation",
    "compilation footage",
];

/// Title phrases for awards, clip and non-fiction formats, any media kind.
const EXCLUDED_TITLE_PHRASES: &[&str] = &[
    "award",
    "awards",
    "documentary",
    "behind the scenes",
    "making of",
    "anthology",
    "compilation",
    "bloopers",
];

/// Title words marking unscripted tv formats.
const UNSCRIPTED_TV_WORDS: &[&str] = &["talk", "reality", "news"];

/// Title phrases for talk, variety and game formats. Only applied to tv, so
/// films such as "Late Night" stay in.
const UNSCRIPTED_TV_PHRASES: &[&str] = &[
    "tonight show",
    "late show",
    "late night",
    "variety show",
    "clip show",
    "game show",
    "saturday night live",
];

const EXCLUDED_CREDIT_TYPES: &[&str] = &["archive", "archival", "cameo", "stock footage", "footage"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditFilterOptions {
    pub include_tv: bool,
    pub exclude_franchise: bool,
}

impl CreditFilterOptions {
    pub fn new(include_tv: bool, exclude_franchise: bool) -> Self {
        Self {
            include_tv,
            exclude_franchise,
        }
    }
}

impl Default for CreditFilterOptions {
    fn default() -> Self {
        Self {
            include_tv: true,
            exclude_franchise: false,
        }
    }
}

pub fn is_substantive(credit: &MediaCredit, options: &CreditFilterOptions) -> bool {
    if credit.kind == MediaKind::Tv && !options.include_tv {
        return false;
    }
    if options.exclude_franchise && credit.is_franchise {
        return false;
    }

    !is_non_narrative_character(&credit.character)
        && !is_excluded_title(&credit.title, credit.kind)
        && !is_excluded_credit_type(&credit.credit_type)
}

pub fn filter_credits<'a>(
    credits: impl IntoIterator<Item = &'a MediaCredit>,
    options: &CreditFilterOptions,
) -> Vec<&'a MediaCredit> {
    credits
        .into_iter()
        .filter(|credit| is_substantive(credit, options))
        .collect()
}

fn is_non_narrative_character(character: &str) -> bool {
    if character.trim().is_empty() {
        return false;
    }
    let cleaned = clean_str(character);

    SELF_APPEARANCE_WORDS
        .iter()
        .any(|word| contains_word(&cleaned, word))
        || matches_any_phrase(&cleaned, NON_NARRATIVE_CHARACTER_PHRASES)
}

fn is_excluded_title(title: &str, kind: MediaKind) -> bool {
    let cleaned = clean_str(title);
    if matches_any_phrase(&cleaned, EXCLUDED_TITLE_PHRASES) {
        return true;
    }

    kind == MediaKind::Tv
        && (UNSCRIPTED_TV_WORDS
            .iter()
            .any(|word| contains_word(&cleaned, word))
            || matches_any_phrase(&cleaned, UNSCRIPTED_TV_PHRASES))
}

fn is_excluded_credit_type(credit_type: &str) -> bool {
    if credit_type.trim().is_empty() {
        return false;
    }
    let cleaned = clean_str(credit_type).replace(['_', '-'], " ");
    matches_any_phrase(&cleaned, EXCLUDED_CREDIT_TYPES)
}

fn matches_any_phrase(cleaned: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| contains_phrase(cleaned, phrase))
}
