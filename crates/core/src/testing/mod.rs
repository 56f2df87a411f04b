//! Testing utilities and mock implementations.
//!
//! Provides a mock [`StatusPortal`](crate::portal::StatusPortal) and HTML
//! fixtures shaped like real portal result pages, so the batch loop can be
//! exercised without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use casestatus_core::testing::{fixtures, MockPortal};
//!
//! let portal = MockPortal::new();
//! portal.set_page("EAC1", fixtures::status_page("Case Was Approved", &["Done."])).await;
//! portal.set_failure("EAC2").await;
//! ```

mod mock_portal;

pub use mock_portal::MockPortal;

/// HTML fixtures.
pub mod fixtures {
    /// A result page with `headline` and `paragraphs` at the status block path.
    ///
    /// Both are inserted as raw HTML.
    pub fn status_page(headline: &str, paragraphs: &[&str]) -> String {
        let details: String = paragraphs.iter().map(|p| format!("<p>{}</p>", p)).collect();
        format!(
            r#"<!DOCTYPE html>
<html>
<head><title>Case Status Online</title></head>
<body>
<div id="header">USCIS</div>
<div class="main-content">
<form name="caseStatusForm" action="/casestatus/mycasestatus.do" method="post">
<div class="container">
<div class="row">
<div class="col">
<div class="rows">
<div class="appointment-sec">Your Case Status</div>
<div class="current-status-sec">
<div class="status-label">Status</div>
<div class="status-bar"></div>
<div class="rows text-center"><h1>{}</h1>{}</div>
</div>
</div>
</div>
</div>
</div>
</div>
</form>
</div>
</body>
</html>"#,
            headline, details
        )
    }

    /// A result page carrying the validation error banner.
    pub fn validation_error_page() -> String {
        r#"<!DOCTYPE html>
<html>
<head><title>Case Status Online</title></head>
<body>
<div id="header">USCIS</div>
<div class="main-content">
<form name="caseStatusForm" method="post">
<div id="formErrorMessages"><h4>Validation Error(s)<br/>You must correct the following error(s) before proceeding:</h4>
<ul><li>The application receipt number entered is invalid.</li></ul>
</div>
</form>
</div>
</body>
</html>"#
            .to_string()
    }
}
