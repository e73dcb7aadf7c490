use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Authorization tier. Stored lowercase in `users.role`; any other string is
/// rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "VARCHAR", rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl User {
    /// Exact-match lookup, used by login (no case normalization).
    pub async fn find_by_username(db: &PgPool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, role, created_at, updated_at
            FROM users
            WHERE username = $1
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Pre-insert uniqueness probe. There is no UNIQUE constraint on the
    /// column; this count is the only duplicate guard.
    pub async fn count_by_username(db: &PgPool, username: &str) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM users WHERE username = $1"#,
        )
        .bind(username)
        .fetch_one(db)
        .await?;
        Ok(count)
    }

    pub async fn insert(
        db: &PgPool,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> anyhow::Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (username, password, role, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(db)
        .await?;
        Ok(id)
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn update(
        db: &PgPool,
        id: i32,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE users
            SET username = $1, password = $2, role = $3, updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role.as_str())
        .bind(id)
        .execute(db)
        .await?;
        Ok(res.rows_affected())
    }

    pub async fn delete_by_id(db: &PgPool, id: i32) -> anyhow::Result<u64> {
        let res = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn user_serialization_omits_password_hash() {
        let user = User {
            id: 1,
            username: "alice".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            role: Role::User,
            created_at: datetime!(2024-01-01 00:00:00 UTC),
            updated_at: datetime!(2024-01-01 00:00:00 UTC),
        };
        let json = serde_json::to_string(&user).expect("serializes");
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        assert!(json.contains(r#""username":"alice""#));
        assert!(json.contains(r#""role":"user""#));
    }

    #[test]
    fn role_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::from_str::<Role>(r#""admin""#).unwrap(),
            Role::Admin
        );
        assert!(serde_json::from_str::<Role>(r#""root""#).is_err());
    }

    #[test]
    fn role_as_str_matches_stored_form() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::User.as_str(), "user");
    }
}
