//! Token service configuration

use og_shared::config::JwtConfig;

/// Configuration for session token issuance and validation
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HS256 signing secret
    pub secret: String,

    /// Session token expiry in hours
    pub expiry_hours: i64,

    /// Issuer claim
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::from(JwtConfig::default())
    }
}

impl From<JwtConfig> for TokenConfig {
    fn from(jwt: JwtConfig) -> Self {
        Self {
            secret: jwt.secret,
            expiry_hours: jwt.expiry_hours,
            issuer: jwt.issuer,
        }
    }
}
