//! Precomposed contact e-mail link for the About page.

use crate::utils::percent_encode::encode;

pub const CONTACT_SUBJECT: &str = "MultiClassClassificationInput App Inquiry";
pub const CONTACT_BODY: &str = "I am writing to inquire about...";

/// Builds a `mailto:` link with percent-encoded subject and body.
///
/// Purely a client-side convenience; nothing is sent by the server.
pub fn mailto_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        encode(subject),
        encode(body)
    )
}
