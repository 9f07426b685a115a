//! Opens URLs in the system default browser.

use pilot_common::PilotError;
use tracing::debug;

/// Open `url` in a new browser tab. The description is folded into the
/// user-facing message ("Opening: https://... (Reddit homepage)").
pub fn open_url(url: &str, description: &str) -> Result<String, PilotError> {
    debug!(url, "opening in browser");
    open::that(url).map_err(|e| PilotError::Browser(format!("{} ({})", url, e)))?;
    if description.is_empty() {
        Ok(format!("Opening: {}", url))
    } else {
        Ok(format!("Opening: {} ({})", url, description))
    }
}

/// Substitute the percent-encoded query into a `{query}` URL template.
pub fn build_search_url(template: &str, query: &str) -> String {
    template.replace("{query}", &urlencoding::encode(query))
}
