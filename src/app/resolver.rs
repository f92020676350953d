//! Prompt-to-report resolution.
//!
//! Simulates report generation by matching trigger phrases against the
//! prompt and returning a canned configuration. Pure, deterministic, and
//! total: any text that matches nothing falls through to the general
//! performance report.

use crate::app::fixtures;
use crate::app::report::Report;

/// Resolve a free-text prompt to a report configuration.
///
/// Checks are independent substring tests against the lower-cased prompt,
/// applied in a fixed priority order; the first matching rule wins. A prompt
/// containing both "orders" and "revenue" therefore resolves to the orders
/// report.
pub fn resolve(prompt: &str) -> Report {
    let prompt = prompt.to_lowercase();

    if prompt.contains("at least 1 order") || prompt.contains("orders") {
        return fixtures::orders_report();
    }

    if prompt.contains("revenue") || prompt.contains("drove revenue") {
        return fixtures::revenue_report();
    }

    if prompt.contains("high spend") || prompt.contains("low roas") {
        return fixtures::spend_roas_report();
    }

    fixtures::fallback_report()
}
