//! Post repository for database operations.

use sqlx::PgPool;

use minimart_core::PostId;

use super::RepositoryError;
use crate::models::Post;

/// Internal row type for post queries.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i32,
    title: String,
    body: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId::new(row.id),
            title: row.title,
            body: row.body,
        }
    }
}

/// Repository for post database operations.
pub struct PostRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all posts, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostRow>("SELECT id, title, body FROM posts ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Get a post by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: PostId) -> Result<Option<Post>, RepositoryError> {
        let row =
            sqlx::query_as::<_, PostRow>("SELECT id, title, body FROM posts WHERE id = $1")
                .bind(id.as_i32())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Post::from))
    }

    /// Create a new post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, title: &str, body: &str) -> Result<Post, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, body) VALUES ($1, $2) RETURNING id, title, body",
        )
        .bind(title)
        .bind(body)
        .fetch_one(self.pool)
        .await?;

        Ok(Post::from(row))
    }

    /// Replace the title and body of an existing post.
    ///
    /// Returns `None` if no post with this ID exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: PostId,
        title: &str,
        body: &str,
    ) -> Result<Option<Post>, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET title = $2, body = $3 WHERE id = $1 RETURNING id, title, body",
        )
        .bind(id.as_i32())
        .bind(title)
        .bind(body)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    /// Delete a post by its ID. Returns whether a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: PostId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
