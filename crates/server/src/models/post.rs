//! Blog post domain type.

use serde::Serialize;

use minimart_core::PostId;

/// A blog post.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
}
