//! Homepage: the most recent posts

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use serde::Serialize;
use tera::Context;

use blogly_core::{PostRepo, PostWithAuthor, DEFAULT_RECENT_LIMIT};

use crate::http::error::PageError;
use crate::http::server::AppState;
use crate::templates;

/// A recent post joined with its author's display name.
#[derive(Serialize)]
pub struct RecentPostView {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub user_id: i64,
    pub friendly_date: String,
}

impl From<PostWithAuthor> for RecentPostView {
    fn from(p: PostWithAuthor) -> Self {
        let friendly_date = p.friendly_date();
        Self {
            id: p.id,
            title: p.title,
            author: p.author,
            user_id: p.user_id,
            friendly_date,
        }
    }
}

/// GET / - the five most recent posts, newest first
async fn homepage(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let recent = PostRepo::new(&state.pool)
        .recent(DEFAULT_RECENT_LIMIT)
        .await?;
    let posts: Vec<RecentPostView> = recent.into_iter().map(RecentPostView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("posts", &posts);
    Ok(templates::render("home.html", &ctx)?)
}

/// Homepage routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(homepage))
}
