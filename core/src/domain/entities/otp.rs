//! One-time password entity for phone-based authentication.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of a generated code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for codes (10 minutes)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 10;

/// One-time password record tied to a phone number
///
/// Rows are append-only; a phone may have several outstanding codes and
/// only the newest unconsumed, unexpired match counts as active.
/// Consumption is one-way: `consumed_at` is set exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// Unique identifier for the code record
    pub id: Uuid,

    /// Phone number this code was issued against (E.164)
    pub phone: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the code was consumed, if ever
    pub consumed_at: Option<DateTime<Utc>>,
}

impl OtpCode {
    /// Creates a new code with a random 6-digit value and the given TTL
    pub fn new(phone: String, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiry_minutes),
            consumed_at: None,
        }
    }

    /// Generates a random 6-digit code, uniformly distributed over the
    /// full range and zero-padded
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the code has been consumed
    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }

    /// A code is valid while it is unconsumed and unexpired
    pub fn is_valid(&self) -> bool {
        !self.is_consumed() && !self.is_expired()
    }

    /// Marks the code consumed; has no further effect when already consumed
    pub fn consume(&mut self) {
        if self.consumed_at.is_none() {
            self.consumed_at = Some(Utc::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_code() {
        let otp = OtpCode::new("+15551234567".to_string(), DEFAULT_EXPIRY_MINUTES);

        assert_eq!(otp.phone, "+15551234567");
        assert_eq!(otp.code.len(), CODE_LENGTH);
        assert!(otp.code.chars().all(|c| c.is_ascii_digit()));
        assert!(!otp.is_consumed());
        assert!(!otp.is_expired());
        assert!(otp.is_valid());
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..200 {
            let code = OtpCode::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("generated code should parse");
            assert!(num < 1_000_000);
        }
    }

    #[test]
    fn test_generate_code_spread() {
        // Codes should not cluster; with 500 draws over a million values
        // duplicates are rare and a constant output would be a bug.
        let codes: HashSet<String> = (0..500).map(|_| OtpCode::generate_code()).collect();
        assert!(codes.len() > 450);

        // The full digit range is reachable, including low values that
        // need zero padding.
        let has_padded = (0..2000)
            .map(|_| OtpCode::generate_code())
            .any(|c| c.starts_with('0'));
        assert!(has_padded);
    }

    #[test]
    fn test_consume_is_one_way() {
        let mut otp = OtpCode::new("+15551234567".to_string(), DEFAULT_EXPIRY_MINUTES);

        otp.consume();
        let first = otp.consumed_at;
        assert!(first.is_some());

        otp.consume();
        assert_eq!(otp.consumed_at, first);
        assert!(!otp.is_valid());
    }

    #[test]
    fn test_expired_code_is_invalid() {
        let mut otp = OtpCode::new("+15551234567".to_string(), 0);
        otp.expires_at = Utc::now() - Duration::seconds(1);

        assert!(otp.is_expired());
        assert!(!otp.is_valid());
    }
}
