//! PostgreSQL user repository

use postboard_common::RepositoryError;
use sqlx::PgPool;

use super::UserRepository;
use crate::domain::entities::User;

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, avatar, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, avatar, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, password_hash, avatar, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
