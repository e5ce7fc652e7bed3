//! Website scrape activity - fetch a place's own site and pull marketing
//! signals out of its readable text.
//!
//! Every failure mode (no URL, transport error, non-success status, nothing
//! readable) collapses to the empty `WebsiteContent`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::common::utils::{truncate_chars, word_matcher};
use crate::domains::places::models::{PriceRange, WebsiteContent};
use crate::kernel::{BaseContentExtractor, BasePageFetcher};

/// Readable text kept from a page before analysis.
pub const MAX_TEXT_CHARS: usize = 2048;

/// Length of the stored summary, taken from the start of the kept text.
pub const SUMMARY_CHARS: usize = 500;

pub const MAX_KEYWORDS: usize = 10;

const MENU_VOCABULARY: &[&str] = &[
    "breakfast",
    "brunch",
    "lunch",
    "dinner",
    "coffee",
    "espresso",
    "latte",
    "tea",
    "matcha",
    "pastry",
    "pastries",
    "bread",
    "croissant",
    "cake",
    "dessert",
    "ice cream",
    "pizza",
    "pasta",
    "burger",
    "sandwich",
    "salad",
    "soup",
    "sushi",
    "ramen",
    "noodles",
    "dumplings",
    "curry",
    "tacos",
    "steak",
    "seafood",
    "chicken",
    "bbq",
    "tapas",
    "vegan",
    "vegetarian",
    "gluten-free",
    "cocktails",
    "wine",
    "beer",
    "sake",
];

const VIBE_VOCABULARY: &[&str] = &[
    "cozy",
    "romantic",
    "family-friendly",
    "casual",
    "trendy",
    "lively",
    "quiet",
    "relaxed",
    "peaceful",
    "intimate",
    "elegant",
    "modern",
    "rustic",
    "charming",
    "historic",
    "authentic",
    "vibrant",
    "scenic",
    "outdoor",
    "rooftop",
    "live music",
    "hip",
    "friendly",
    "welcoming",
];

const EXPENSIVE_CUES: &[&str] = &["expensive", "fine dining"];
const MODERATE_CUES: &[&str] = &["moderate"];
const BUDGET_CUES: &[&str] = &["cheap", "budget"];

lazy_static! {
    static ref MENU_MATCHERS: Vec<(&'static str, Regex)> = term_matchers(MENU_VOCABULARY);
    static ref VIBE_MATCHERS: Vec<(&'static str, Regex)> = term_matchers(VIBE_VOCABULARY);
    static ref EXPENSIVE_MATCHERS: Vec<(&'static str, Regex)> = term_matchers(EXPENSIVE_CUES);
    static ref MODERATE_MATCHERS: Vec<(&'static str, Regex)> = term_matchers(MODERATE_CUES);
    static ref BUDGET_MATCHERS: Vec<(&'static str, Regex)> = term_matchers(BUDGET_CUES);
}

// Terms are escaped, so every pattern compiles
fn term_matchers(terms: &[&'static str]) -> Vec<(&'static str, Regex)> {
    terms
        .iter()
        .map(|term| (*term, word_matcher(term).unwrap()))
        .collect()
}

/// Fetch and analyze a website. Never fails; see module docs.
pub async fn scrape_website(
    url: Option<&str>,
    fetcher: &dyn BasePageFetcher,
    extractor: &dyn BaseContentExtractor,
) -> WebsiteContent {
    let Some(url) = url else {
        return WebsiteContent::default();
    };

    let page = match fetcher.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url = %url, error = %e, "Website fetch failed");
            return WebsiteContent::default();
        }
    };

    if !page.is_success() {
        debug!(url = %url, status = page.status, "Website returned non-success status");
        return WebsiteContent::default();
    }

    match extractor.extract_text(&page.body) {
        Some(text) => analyze_text(&text),
        None => {
            debug!(url = %url, "No readable text on website");
            WebsiteContent::default()
        }
    }
}

/// Derive summary, keywords and price tier from readable page text.
pub fn analyze_text(text: &str) -> WebsiteContent {
    let text = truncate_chars(text.trim(), MAX_TEXT_CHARS);
    if text.is_empty() {
        return WebsiteContent::default();
    }

    let lowered = text.to_lowercase();

    WebsiteContent {
        summary: Some(truncate_chars(text, SUMMARY_CHARS).to_string()),
        menu_keywords: matching_terms(&lowered, &MENU_MATCHERS),
        price_range: detect_price_range(&lowered),
        vibe_keywords: matching_terms(&lowered, &VIBE_MATCHERS),
    }
}

/// Vocabulary terms present in `lowered`, in vocabulary order.
fn matching_terms(lowered: &str, vocabulary: &[(&'static str, Regex)]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|(_, matcher)| matcher.is_match(lowered))
        .take(MAX_KEYWORDS)
        .map(|(term, _)| term.to_string())
        .collect()
}

fn any_cue(lowered: &str, cues: &[(&'static str, Regex)]) -> bool {
    cues.iter().any(|(_, matcher)| matcher.is_match(lowered))
}

/// Highest tier with any cue present wins, wherever it appears in the text.
pub fn detect_price_range(lowered: &str) -> Option<PriceRange> {
    if lowered.contains("$$$") || any_cue(lowered, &EXPENSIVE_MATCHERS) {
        Some(PriceRange::Expensive)
    } else if lowered.contains("$$") || any_cue(lowered, &MODERATE_MATCHERS) {
        Some(PriceRange::Moderate)
    } else if lowered.contains('$') || any_cue(lowered, &BUDGET_MATCHERS) {
        Some(PriceRange::Budget)
    } else {
        None
    }
}
