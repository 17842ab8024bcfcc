//! MySQL implementation of the UserRepository trait

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use tracing::{debug, warn};
use uuid::Uuid;

use og_core::domain::entities::user::User;
use og_core::errors::{AuthError, DomainError};
use og_core::repositories::UserRepository;
use og_shared::utils::phone::mask_phone;

use super::db_error;

const USER_COLUMNS: &str = "id, email, phone, first_name, last_name, mpin_hash, is_active, \
     country, state, city, dob, pic_url, created_at, updated_at";

/// MySQL-backed user repository
///
/// User ids are stored as CHAR(36) UUID strings; emails are stored
/// lowercased and carry a unique index, as does the phone column.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("read users.id", e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| db_error("parse users.id", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("read users.email", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_error("read users.phone", e))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| db_error("read users.first_name", e))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| db_error("read users.last_name", e))?,
            mpin_hash: row
                .try_get("mpin_hash")
                .map_err(|e| db_error("read users.mpin_hash", e))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| db_error("read users.is_active", e))?,
            country: row
                .try_get("country")
                .map_err(|e| db_error("read users.country", e))?,
            state: row
                .try_get("state")
                .map_err(|e| db_error("read users.state", e))?,
            city: row
                .try_get("city")
                .map_err(|e| db_error("read users.city", e))?,
            dob: row
                .try_get::<Option<NaiveDate>, _>("dob")
                .map_err(|e| db_error("read users.dob", e))?,
            pic_url: row
                .try_get("pic_url")
                .map_err(|e| db_error("read users.pic_url", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("read users.created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("read users.updated_at", e))?,
        })
    }

    async fn find_one(&self, query: &str, bind: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(query)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            "INSERT INTO users ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.mpin_hash)
            .bind(user.is_active)
            .bind(&user.country)
            .bind(&user.state)
            .bind(&user.city)
            .bind(user.dob)
            .bind(&user.pic_url)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {
                debug!(user_id = %user.id, phone = %mask_phone(&user.phone), "User row created");
                Ok(user)
            }
            // The unique indexes on phone and email settle concurrent
            // signup races that the service-level checks cannot see.
            Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
                warn!(phone = %mask_phone(&user.phone), "User insert hit unique index");
                Err(AuthError::UserAlreadyExists.into())
            }
            Err(e) => Err(db_error("insert user", e)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        self.find_one(&query, &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        // Emails are stored lowercased; normalize the probe instead of
        // wrapping the indexed column in LOWER().
        let query = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);
        self.find_one(&query, &email.to_lowercase()).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE phone = ?", USER_COLUMNS);
        self.find_one(&query, phone).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, first_name = ?, last_name = ?, mpin_hash = ?,
                is_active = ?, country = ?, state = ?, city = ?, dob = ?,
                pic_url = ?, updated_at = ?
            WHERE id = ?
        "#;

        let updated_at = Utc::now();
        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.mpin_hash)
            .bind(user.is_active)
            .bind(&user.country)
            .bind(&user.state)
            .bind(&user.city)
            .bind(user.dob)
            .bind(&user.pic_url)
            .bind(updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => Err(DomainError::NotFound {
                resource: "User".to_string(),
            }),
            Ok(_) => Ok(User { updated_at, ..user }),
            Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
                Err(AuthError::EmailTaken.into())
            }
            Err(e) => Err(db_error("update user", e)),
        }
    }
}
