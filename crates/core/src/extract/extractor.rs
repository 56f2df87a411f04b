//! Rule-based field extraction.
//!
//! The result page layout is undocumented, so extraction is a prioritized
//! list of selector rules. The first rule that matches decides the outcome;
//! if none match the page is treated as a miss and gets a placeholder result.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::{ConfigError, ExtractorConfig};
use crate::records::{CaseIdentifier, LookupResult};

/// One extraction strategy.
#[derive(Debug, Clone)]
pub enum ExtractionRule {
    /// A banner whose first text starts with `marker` means the lookup failed.
    ErrorBanner { selector: Selector, marker: String },
    /// Headline text plus all text under the details nodes.
    StatusFields { headline: Selector, details: Selector },
}

/// What a page turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The error banner was present.
    ErrorBanner,
    /// Status headline and detail text.
    Status { message: String, details: String },
    /// No rule matched the page structure.
    Miss,
}

#[derive(Debug, Clone)]
pub struct FieldExtractor {
    rules: Vec<ExtractionRule>,
    not_found_message: String,
}

impl FieldExtractor {
    pub fn new(rules: Vec<ExtractionRule>, not_found_message: impl Into<String>) -> Self {
        Self {
            rules,
            not_found_message: not_found_message.into(),
        }
    }

    /// Build the banner-then-fields rule list from configured selectors.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        let rules = vec![
            ExtractionRule::ErrorBanner {
                selector: parse_selector("error_selector", &config.error_selector)?,
                marker: config.error_marker.clone(),
            },
            ExtractionRule::StatusFields {
                headline: parse_selector("headline_selector", &config.headline_selector)?,
                details: parse_selector("details_selector", &config.details_selector)?,
            },
        ];
        Ok(Self::new(rules, config.not_found_message.clone()))
    }

    /// Apply the rules in order to a raw HTML page.
    pub fn extract(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);

        for rule in &self.rules {
            match rule {
                ExtractionRule::ErrorBanner { selector, marker } => {
                    let banner = document.select(selector).find_map(first_text);
                    if banner.is_some_and(|text| text.starts_with(marker.as_str())) {
                        return Extraction::ErrorBanner;
                    }
                }
                ExtractionRule::StatusFields { headline, details } => {
                    let Some(message) = document.select(headline).find_map(first_text) else {
                        continue;
                    };
                    let mut detail_nodes = document.select(details).peekable();
                    if detail_nodes.peek().is_none() {
                        continue;
                    }
                    let details = detail_nodes.flat_map(|node| node.text()).collect();
                    return Extraction::Status { message, details };
                }
            }
        }

        Extraction::Miss
    }

    /// Turn an extraction outcome into the record for `identifier`.
    ///
    /// Banner and miss outcomes both become the not-found placeholder.
    pub fn result_for(&self, identifier: CaseIdentifier, extraction: Extraction) -> LookupResult {
        match extraction {
            Extraction::Status { message, details } => {
                LookupResult::new(identifier, message, details)
            }
            outcome => {
                debug!(identifier = %identifier, outcome = ?outcome, "No status on page");
                LookupResult::new(identifier, self.not_found_message.as_str(), "")
            }
        }
    }
}

fn parse_selector(name: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| {
        ConfigError::ValidationError(format!("extractor.{} is not a valid selector: {}", name, e))
    })
}

/// First text node directly under an element.
fn first_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .find_map(|node| node.value().as_text().map(|text| (&**text).to_owned()))
}
