//! Auth service configuration

/// Configuration for the authentication service
#[derive(Debug, Clone, Copy)]
pub struct AuthServiceConfig {
    /// bcrypt work factor for MPIN hashing
    pub mpin_bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            mpin_bcrypt_cost: 10,
        }
    }
}
