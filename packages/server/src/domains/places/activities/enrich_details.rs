//! Detail enrichment activity - one detail lookup per selected candidate.

use places_client::PlaceDetails;
use tracing::{debug, warn};

use crate::common::utils::generate_summary;
use crate::domains::places::models::{Candidate, ReviewSnippet};
use crate::kernel::BasePlaceProvider;

/// Fields requested from the detail lookup.
pub const DETAIL_FIELDS: &[&str] = &[
    "website",
    "formatted_phone_number",
    "opening_hours",
    "editorial_summary",
    "reviews",
    "photos",
];

pub const MAX_REVIEWS: usize = 3;
pub const REVIEW_SNIPPET_MAX_CHARS: usize = 200;

/// Detail data ready to merge into a candidate. Photo references are already
/// resolved to URLs so merging needs no provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailEnrichment {
    pub website_url: Option<String>,
    pub phone: Option<String>,
    pub opening_hours: Vec<String>,
    pub editorial_summary: Option<String>,
    pub reviews: Vec<ReviewSnippet>,
    pub photo_urls: Vec<String>,
}

impl DetailEnrichment {
    fn from_details(details: PlaceDetails, provider: &dyn BasePlaceProvider) -> Self {
        let reviews = details
            .reviews
            .into_iter()
            .filter_map(|review| {
                let text = review.text.filter(|t| !t.trim().is_empty())?;
                Some(ReviewSnippet {
                    text: generate_summary(text.trim(), REVIEW_SNIPPET_MAX_CHARS),
                    rating: review.rating,
                })
            })
            .take(MAX_REVIEWS)
            .collect();

        Self {
            website_url: details.website.filter(|w| !w.trim().is_empty()),
            phone: details.formatted_phone_number,
            opening_hours: details
                .opening_hours
                .map(|hours| hours.weekday_text)
                .unwrap_or_default(),
            editorial_summary: details.editorial_summary.and_then(|s| s.overview),
            reviews,
            photo_urls: details
                .photos
                .iter()
                .filter_map(|p| p.photo_reference.as_deref())
                .map(|reference| provider.photo_url(reference))
                .collect(),
        }
    }

    /// Merge into the candidate. Only fields the lookup actually carried are
    /// written; photo URLs go through the candidate's dedup and cap.
    pub fn apply(self, candidate: &mut Candidate) {
        if self.website_url.is_some() {
            candidate.website_url = self.website_url;
        }
        if self.phone.is_some() {
            candidate.details.phone = self.phone;
        }
        if !self.opening_hours.is_empty() {
            candidate.details.opening_hours = self.opening_hours;
        }
        if self.editorial_summary.is_some() {
            candidate.details.editorial_summary = self.editorial_summary;
        }
        if !self.reviews.is_empty() {
            candidate.details.reviews = self.reviews;
        }
        for url in self.photo_urls {
            candidate.push_image_url(url);
        }
    }
}

/// Look up extended details. Provider errors and empty lookups both yield
/// `None`; nothing is propagated.
pub async fn enrich_details(
    external_id: &str,
    provider: &dyn BasePlaceProvider,
) -> Option<DetailEnrichment> {
    let details = match provider.place_details(external_id, DETAIL_FIELDS).await {
        Ok(details) => details,
        Err(e) => {
            warn!(external_id = %external_id, error = %e, "Place details lookup failed");
            return None;
        }
    };

    if details.is_empty() {
        debug!(external_id = %external_id, "Place details lookup returned nothing");
        return None;
    }

    Some(DetailEnrichment::from_details(details, provider))
}
