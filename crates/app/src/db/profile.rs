//! Profile store.
//!
//! The signed-in user is kept as three independent keys in the `preference`
//! table under the `user_profile` namespace.

use sqlx::SqlitePool;

use little_lemon_core::UserProfile;

use super::RepositoryError;

/// Namespace holding the profile keys.
pub const USER_PROFILE: &str = "user_profile";
pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const EMAIL: &str = "email";

/// Key/value persistence of the user profile.
#[derive(Clone)]
pub struct ProfileStore {
    pool: SqlitePool,
}

impl ProfileStore {
    /// Create a store over an already migrated pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read the profile; absent keys come back as empty strings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn load(&self) -> Result<UserProfile, RepositoryError> {
        let entries: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM preference WHERE namespace = ?")
                .bind(USER_PROFILE)
                .fetch_all(&self.pool)
                .await?;

        let mut profile = UserProfile::default();
        for (key, value) in entries {
            match key.as_str() {
                FIRST_NAME => profile.first_name = value,
                LAST_NAME => profile.last_name = value,
                EMAIL => profile.email = value,
                _ => {}
            }
        }
        Ok(profile)
    }

    /// Write all three fields at once.
    ///
    /// Either every key is written or none is.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the transaction fails.
    pub async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        for (key, value) in [
            (FIRST_NAME, &profile.first_name),
            (LAST_NAME, &profile.last_name),
            (EMAIL, &profile.email),
        ] {
            sqlx::query(
                r"
                INSERT INTO preference (namespace, key, value)
                VALUES (?, ?, ?)
                ON CONFLICT (namespace, key) DO UPDATE SET value = excluded.value
                ",
            )
            .bind(USER_PROFILE)
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::debug!("User profile saved");
        Ok(())
    }

    /// Remove every key in the profile namespace.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn clear(&self) -> Result<(), RepositoryError> {
        let removed = sqlx::query("DELETE FROM preference WHERE namespace = ?")
            .bind(USER_PROFILE)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(removed, "User profile cleared");
        Ok(())
    }

    /// Whether a non-empty email is stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn has_registered_user(&self) -> Result<bool, RepositoryError> {
        let email: Option<String> =
            sqlx::query_scalar("SELECT value FROM preference WHERE namespace = ? AND key = ?")
                .bind(USER_PROFILE)
                .bind(EMAIL)
                .fetch_optional(&self.pool)
                .await?;

        Ok(email.is_some_and(|e| !e.is_empty()))
    }
}
