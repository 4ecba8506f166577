use crate::error::invalid_input;
use anyhow::Result;
use orderlink_core::{normalize_phone, NormalizedPhone};

pub fn parse_phone(raw: &str) -> Result<NormalizedPhone> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("phone cannot be empty"));
    }
    normalize_phone(trimmed)
        .ok_or_else(|| invalid_input(format!("invalid mobile number: {trimmed}")))
}
