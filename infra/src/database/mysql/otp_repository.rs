//! MySQL implementation of the OtpRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::debug;
use uuid::Uuid;

use og_core::domain::entities::otp::OtpCode;
use og_core::errors::DomainError;
use og_core::repositories::OtpRepository;
use og_shared::utils::phone::mask_phone;

use super::db_error;

/// MySQL-backed OTP repository
///
/// Rows are append-only; consumption flips `consumed_at` exactly once
/// via a conditional update, so two racing verifications cannot both
/// succeed. Expired rows are filtered on read, never swept.
pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    /// Create a new MySQL OTP repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_otp(row: &sqlx::mysql::MySqlRow) -> Result<OtpCode, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("read otp_codes.id", e))?;

        Ok(OtpCode {
            id: Uuid::parse_str(&id).map_err(|e| db_error("parse otp_codes.id", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_error("read otp_codes.phone", e))?,
            code: row
                .try_get("code")
                .map_err(|e| db_error("read otp_codes.code", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("read otp_codes.created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| db_error("read otp_codes.expires_at", e))?,
            consumed_at: row
                .try_get::<Option<DateTime<Utc>>, _>("consumed_at")
                .map_err(|e| db_error("read otp_codes.consumed_at", e))?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn save(&self, otp: OtpCode) -> Result<OtpCode, DomainError> {
        let query = r#"
            INSERT INTO otp_codes (id, phone, code, created_at, expires_at, consumed_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(otp.id.to_string())
            .bind(&otp.phone)
            .bind(&otp.code)
            .bind(otp.created_at)
            .bind(otp.expires_at)
            .bind(otp.consumed_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("insert otp", e))?;

        debug!(phone = %mask_phone(&otp.phone), "OTP row stored");
        Ok(otp)
    }

    async fn find_active(&self, phone: &str, code: &str) -> Result<Option<OtpCode>, DomainError> {
        // Expiry is compared against the application clock so that the
        // lazy-expiry cutoff matches the one used at issuance.
        let query = r#"
            SELECT id, phone, code, created_at, expires_at, consumed_at
            FROM otp_codes
            WHERE phone = ? AND code = ? AND consumed_at IS NULL AND expires_at > ?
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(phone)
            .bind(code)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find active otp", e))?;

        row.as_ref().map(Self::row_to_otp).transpose()
    }

    async fn consume(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE otp_codes
            SET consumed_at = ?
            WHERE id = ? AND consumed_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("consume otp", e))?;

        Ok(result.rows_affected() == 1)
    }
}
