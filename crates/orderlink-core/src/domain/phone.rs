use crate::error::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const COUNTRY_CODE: &str = "20";
const MOBILE_PREFIX: &str = "201";
const NORMALIZED_LEN: usize = 12;

// +20 / 20 / 0 are all optional in front of the 1XXXXXXXXX subscriber part.
static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+?20)?0?1[0-9]{9}").expect("valid mobile pattern"));

/// A national mobile number in canonical `201XXXXXXXXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// International display form, e.g. `+201012345678`.
    pub fn display(&self) -> String {
        format!("+{}", self.0)
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizedPhone> for String {
    fn from(phone: NormalizedPhone) -> Self {
        phone.0
    }
}

/// Strict parse for stored values: the whole string must be a phone, not just
/// contain one.
impl TryFrom<String> for NormalizedPhone {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let whole = MOBILE_PATTERN
            .find(trimmed)
            .is_some_and(|found| found.start() == 0 && found.end() == trimmed.len());
        match normalize_phone(trimmed) {
            Some(phone) if whole => Ok(phone),
            _ => Err(CoreError::InvalidPhone(value)),
        }
    }
}

/// Finds the first mobile-shaped substring in `value` and canonicalizes it.
///
/// Returns `None` when the text holds no number or the match does not survive
/// normalization; most cells are not phones, so absence is not an error.
pub fn normalize_phone(value: &str) -> Option<NormalizedPhone> {
    let found = MOBILE_PATTERN.find(value)?;
    let digits: String = found
        .as_str()
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();

    let canonical = if digits.starts_with('0') && digits.len() == 11 {
        format!("{COUNTRY_CODE}{}", &digits[1..])
    } else if digits.starts_with(COUNTRY_CODE) && digits.len() == NORMALIZED_LEN {
        digits
    } else if digits.starts_with('1') && digits.len() == 10 {
        format!("{COUNTRY_CODE}{digits}")
    } else {
        return None;
    };

    if !canonical.starts_with(MOBILE_PREFIX) || canonical.len() != NORMALIZED_LEN {
        return None;
    }

    Some(NormalizedPhone(canonical))
}

/// Returns the first phone found scanning `cells` in column order.
pub fn first_phone_in_row<'a, I>(cells: I) -> Option<NormalizedPhone>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    cells.into_iter().flatten().find_map(normalize_phone)
}

#[cfg(test)]
mod tests {
    use super::{first_phone_in_row, normalize_phone, NormalizedPhone};
    use crate::error::CoreError;

    fn normalized(value: &str) -> Option<String> {
        normalize_phone(value).map(|phone| phone.as_str().to_string())
    }

    #[test]
    fn normalize_phone_replaces_leading_zero() {
        assert_eq!(normalized("01012345678").as_deref(), Some("201012345678"));
        assert_eq!(normalized("01598765432").as_deref(), Some("201598765432"));
    }

    #[test]
    fn normalize_phone_keeps_country_code_forms() {
        assert_eq!(normalized("201012345678").as_deref(), Some("201012345678"));
        assert_eq!(normalized("+201012345678").as_deref(), Some("201012345678"));
    }

    #[test]
    fn normalize_phone_prepends_country_code_to_bare_subscriber() {
        assert_eq!(normalized("1012345678").as_deref(), Some("201012345678"));
    }

    #[test]
    fn normalize_phone_finds_number_inside_text() {
        assert_eq!(
            normalized("call me: 01112223334 after 5").as_deref(),
            Some("201112223334")
        );
        assert_eq!(
            normalized("رقم العميل 01234567890").as_deref(),
            Some("201234567890")
        );
    }

    #[test]
    fn normalize_phone_rejects_non_numbers() {
        assert!(normalize_phone("N/A").is_none());
        assert!(normalize_phone("").is_none());
        assert!(normalize_phone("123").is_none());
        assert!(normalize_phone("0101234567").is_none());
    }

    #[test]
    fn normalize_phone_rejects_arabic_indic_digits() {
        assert!(normalize_phone("1٢٣٤٥٦٧٨٩٠").is_none());
        assert!(normalize_phone("٠١٠١٢٣٤٥٦٧٨").is_none());
        assert!(normalize_phone("01٠12345678").is_none());
    }

    #[test]
    fn deserialize_normalizes_or_rejects() {
        let phone: NormalizedPhone = serde_json::from_str("\"+201012345678\"").unwrap();
        assert_eq!(phone.as_str(), "201012345678");
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"201012345678\"");

        assert!(serde_json::from_str::<NormalizedPhone>("\"not a phone\"").is_err());
        assert!(serde_json::from_str::<NormalizedPhone>("\"\"").is_err());
        assert!(serde_json::from_str::<NormalizedPhone>("\"call 01012345678\"").is_err());
        assert!(serde_json::from_str::<NormalizedPhone>("\"2001012345678\"").is_err());
    }

    #[test]
    fn try_from_reports_the_rejected_value() {
        let err = NormalizedPhone::try_from("12345".to_string()).unwrap_err();
        assert_eq!(err, CoreError::InvalidPhone("12345".to_string()));
        let phone = NormalizedPhone::try_from("01012345678".to_string()).unwrap();
        assert_eq!(phone.as_str(), "201012345678");
    }

    #[test]
    fn normalize_phone_rejects_overlong_prefixed_match() {
        // "20" + "0" + "1" + nine digits is 13 digits and fails every branch.
        assert!(normalize_phone("2001012345678").is_none());
    }

    #[test]
    fn normalize_phone_is_idempotent_on_canonical_values() {
        let first = normalize_phone("01098765432").unwrap();
        let second = normalize_phone(first.as_str()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn display_adds_plus() {
        let phone = normalize_phone("01098765432").unwrap();
        assert_eq!(phone.display(), "+201098765432");
    }

    #[test]
    fn first_phone_in_row_uses_column_order() {
        let cells = vec![
            Some("no phone here"),
            None,
            Some("01000000001"),
            Some("01000000002"),
        ];
        let phone = first_phone_in_row(cells).unwrap();
        assert_eq!(phone.as_str(), "201000000001");
    }

    #[test]
    fn first_phone_in_row_returns_none_without_match() {
        let cells = vec![Some("a"), None, Some("42")];
        assert!(first_phone_in_row(cells).is_none());
    }
}
