//! Post pages and form handlers

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tera::Context;

use blogly_core::{NewPost, Post, PostRepo, TagRepo, UserRepo};

use super::tags::TagView;
use super::users::UserView;
use crate::http::error::PageError;
use crate::http::server::AppState;
use crate::templates;

/// Fields submitted by the post forms. Decoded by hand from the raw
/// pair list because the `tags` checkbox key repeats once per checked
/// box, which a plain derive cannot collect.
#[derive(Debug, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i64>,
}

impl PostForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "title" => form.title = value,
                "content" => form.content = value,
                // Non-numeric tag values are dropped, not rejected.
                "tags" => {
                    if let Ok(id) = value.parse() {
                        form.tag_ids.push(id);
                    }
                }
                _ => {}
            }
        }
        form
    }
}

/// Post as the templates see it, with the formatted creation time.
#[derive(Serialize)]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub friendly_date: String,
    pub user_id: i64,
}

impl From<Post> for PostView {
    fn from(p: Post) -> Self {
        let friendly_date = p.friendly_date();
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            friendly_date,
            user_id: p.user_id,
        }
    }
}

/// GET /users/{id}/posts/new - the add-post form with every tag offered
async fn new_post_page(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let user = UserRepo::new(&state.pool).get(user_id).await?;
    let tags = TagRepo::new(&state.pool).list().await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(user));
    ctx.insert(
        "tags",
        &tags.into_iter().map(TagView::from).collect::<Vec<_>>(),
    );
    Ok(templates::render("post_new.html", &ctx)?)
}

/// POST /users/{id}/posts/new - create a post, then back to its author
async fn create_post(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, PageError> {
    let form = PostForm::from_pairs(pairs);
    let record = NewPost::new(&form.title, &form.content)?;
    let post = PostRepo::new(&state.pool)
        .create(user_id, record, &form.tag_ids)
        .await?;

    tracing::info!(post_id = post.id, user_id, "post created");
    Ok(Redirect::to(&format!("/users/{user_id}")))
}

/// GET /posts/{id} - post detail with author and tags
async fn show_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let repo = PostRepo::new(&state.pool);
    let post = repo.get(id).await?;
    let author = UserRepo::new(&state.pool).get(post.user_id).await?;
    let tags = repo.tags(id).await?;

    let mut ctx = Context::new();
    ctx.insert("post", &PostView::from(post));
    ctx.insert("author", &UserView::from(author));
    ctx.insert(
        "tags",
        &tags.into_iter().map(TagView::from).collect::<Vec<_>>(),
    );
    Ok(templates::render("post_detail.html", &ctx)?)
}

/// GET /posts/{id}/edit - the edit form with current tags pre-checked
async fn edit_post_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let repo = PostRepo::new(&state.pool);
    let post = repo.get(id).await?;
    let checked_ids: Vec<i64> = repo.tags(id).await?.into_iter().map(|t| t.id).collect();
    let tags = TagRepo::new(&state.pool).list().await?;

    let mut ctx = Context::new();
    ctx.insert("post", &PostView::from(post));
    ctx.insert(
        "tags",
        &tags.into_iter().map(TagView::from).collect::<Vec<_>>(),
    );
    ctx.insert("checked_ids", &checked_ids);
    Ok(templates::render("post_edit.html", &ctx)?)
}

/// POST /posts/{id}/edit - replace title, content, and tag set
async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, PageError> {
    let form = PostForm::from_pairs(pairs);
    let record = NewPost::new(&form.title, &form.content)?;
    PostRepo::new(&state.pool)
        .update(id, record, &form.tag_ids)
        .await?;

    tracing::info!(post_id = id, "post updated");
    Ok(Redirect::to(&format!("/posts/{id}")))
}

/// POST /posts/{id}/delete - remove the post, then back to its author
async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    let post = PostRepo::new(&state.pool).delete(id).await?;

    tracing::info!(post_id = id, "post deleted");
    Ok(Redirect::to(&format!("/users/{}", post.user_id)))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{id}/posts/new",
            get(new_post_page).post(create_post),
        )
        .route("/posts/{id}", get(show_post))
        .route("/posts/{id}/edit", get(edit_post_page).post(update_post))
        .route("/posts/{id}/delete", post(delete_post))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn from_pairs_collects_repeated_tag_keys() {
        let form = PostForm::from_pairs(vec![
            pair("title", "First!"),
            pair("content", "hello"),
            pair("tags", "1"),
            pair("tags", "3"),
        ]);
        assert_eq!(form.title, "First!");
        assert_eq!(form.content, "hello");
        assert_eq!(form.tag_ids, vec![1, 3]);
    }

    #[test]
    fn from_pairs_without_tags_yields_empty_set() {
        let form = PostForm::from_pairs(vec![pair("title", "a"), pair("content", "b")]);
        assert!(form.tag_ids.is_empty());
    }

    #[test]
    fn from_pairs_drops_non_numeric_tag_values() {
        let form = PostForm::from_pairs(vec![
            pair("title", "a"),
            pair("content", "b"),
            pair("tags", "2"),
            pair("tags", "oops"),
        ]);
        assert_eq!(form.tag_ids, vec![2]);
    }

    #[test]
    fn from_pairs_ignores_unknown_keys() {
        let form = PostForm::from_pairs(vec![pair("title", "a"), pair("csrf", "zzz")]);
        assert_eq!(form.title, "a");
        assert_eq!(form.content, "");
    }

    #[test]
    fn post_view_formats_the_creation_time() {
        use chrono::TimeZone;

        let view = PostView::from(Post {
            id: 9,
            title: "First!".into(),
            content: "hello".into(),
            created_at: chrono::Utc.with_ymd_and_hms(2021, 1, 5, 14, 30, 0).unwrap(),
            user_id: 2,
        });
        assert_eq!(view.friendly_date, "Tue Jan 5 2021, 2:30 PM");
        assert_eq!(view.user_id, 2);
    }
}
