use crate::domain::NormalizedPhone;

pub const LINK_BASE: &str = "https://wa.me/";
pub const TEXT_PARAM: &str = "text";

/// Builds `https://wa.me/<phone>`, with `?text=` when the message has content.
///
/// Everything but ASCII alphanumerics and `-_.~` is percent-encoded, so spaces,
/// newlines, reserved characters and non-Latin text all survive the query string.
pub fn build_link(phone: &NormalizedPhone, message: &str) -> String {
    let base = format!("{LINK_BASE}{}", phone.as_str());
    if message.trim().is_empty() {
        return base;
    }
    format!("{base}?{TEXT_PARAM}={}", urlencoding::encode(message))
}
