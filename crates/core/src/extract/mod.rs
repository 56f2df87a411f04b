//! Status text extraction from portal result pages.

mod extractor;

pub use extractor::{Extraction, ExtractionRule, FieldExtractor};
