//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// E.164 format: leading '+', 2 to 15 digits, no leading zero
static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid E.164
pub fn is_valid_phone(phone: &str) -> bool {
    E164_REGEX.is_match(&normalize_phone(phone))
}

/// Mask a phone number for logging, keeping only the last four digits
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone(phone);
    if normalized.len() <= 4 {
        "****".to_string()
    } else {
        format!("***{}", &normalized[normalized.len() - 4..])
    }
}
