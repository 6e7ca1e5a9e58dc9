//! Input handling for the search box and the sign-up form
//!
//! Nothing here rejects free text: location names and condition labels are
//! accepted as typed. The only rule is that blank input counts as absent.

/// Whether a form field holds nothing but whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trim a typed location the way the search box does.
///
/// Blank input becomes `None`, which asks the sampler for a random place.
pub fn normalize_location(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// A sign-up needs some phone number; its format is not checked
pub fn validate_subscriber_phone(phone: &str) -> Result<(), &'static str> {
    if is_blank(phone) {
        return Err("Phone number is required");
    }
    Ok(())
}

/// Mask all but the last three characters of a phone number for logs
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.trim().chars().collect();
    let visible = chars.len().min(3);
    let hidden = chars.len() - visible;
    let mut masked = "*".repeat(hidden);
    masked.extend(&chars[hidden..]);
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_location() {
        assert_eq!(normalize_location("  Cape Coast "), Some("Cape Coast"));
        assert_eq!(normalize_location("Kumasi"), Some("Kumasi"));
        assert_eq!(normalize_location(""), None);
        assert_eq!(normalize_location(" \t\n"), None);
    }

    #[test]
    fn test_validate_subscriber_phone() {
        assert!(validate_subscriber_phone("0241234567").is_ok());
        assert!(validate_subscriber_phone("call me").is_ok());
        assert!(validate_subscriber_phone("").is_err());
        assert!(validate_subscriber_phone("   ").is_err());
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("0241234567"), "*******567");
        assert_eq!(mask_phone(" 12 "), "12");
        assert_eq!(mask_phone(""), "");
    }
}
