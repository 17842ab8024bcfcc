//! Authentication configuration: JWT signing, OTP expiry and MPIN hashing

use serde::{Deserialize, Serialize};

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token expiry in hours
    pub expiry_hours: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            expiry_hours: 24,
            issuer: String::from("otpgate"),
        }
    }
}

impl JwtConfig {
    /// Check if the default secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-me-in-production"
    }
}

/// One-time password configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes until an issued code expires
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self { expiry_minutes: 10 }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// OTP configuration
    pub otp: OtpConfig,

    /// bcrypt work factor used when hashing MPINs
    pub mpin_bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            otp: OtpConfig::default(),
            mpin_bcrypt_cost: 10,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt.secret),
            expiry_hours: std::env::var("JWT_EXPIRY_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.jwt.expiry_hours),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.jwt.issuer),
        };

        let otp = OtpConfig {
            expiry_minutes: std::env::var("OTP_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.otp.expiry_minutes),
        };

        let mpin_bcrypt_cost = std::env::var("MPIN_BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.mpin_bcrypt_cost);

        Self {
            jwt,
            otp,
            mpin_bcrypt_cost,
        }
    }
}
