//! Tag pages and form handlers

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tera::Context;

use blogly_core::{Tag, TagName, TagRepo};

use super::posts::PostView;
use crate::http::error::PageError;
use crate::http::server::AppState;
use crate::templates;

/// The single field submitted by the tag forms.
#[derive(Deserialize)]
pub struct TagForm {
    pub name: String,
}

/// Tag as the templates see it.
#[derive(Serialize)]
pub struct TagView {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagView {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

/// GET /tags - all tags in insertion order
async fn list_tags(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let tags = TagRepo::new(&state.pool).list().await?;

    let mut ctx = Context::new();
    ctx.insert(
        "tags",
        &tags.into_iter().map(TagView::from).collect::<Vec<_>>(),
    );
    Ok(templates::render("tag_list.html", &ctx)?)
}

/// GET /tags/new - the add-tag form
async fn new_tag_page() -> Result<Html<String>, PageError> {
    Ok(templates::render("tag_new.html", &Context::new())?)
}

/// POST /tags/new - create a tag, then back to the tag list
async fn create_tag(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TagForm>,
) -> Result<Redirect, PageError> {
    let name = TagName::new(&form.name)?;
    let tag = TagRepo::new(&state.pool).create(name).await?;

    tracing::info!(tag_id = tag.id, "tag created");
    Ok(Redirect::to("/tags"))
}

/// GET /tags/{id} - tag detail with every post carrying it
async fn show_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let repo = TagRepo::new(&state.pool);
    let tag = repo.get(id).await?;
    let posts = repo.posts(id).await?;

    let mut ctx = Context::new();
    ctx.insert("tag", &TagView::from(tag));
    ctx.insert(
        "posts",
        &posts.into_iter().map(PostView::from).collect::<Vec<_>>(),
    );
    Ok(templates::render("tag_detail.html", &ctx)?)
}

/// GET /tags/{id}/edit - the edit form, pre-filled
async fn edit_tag_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let tag = TagRepo::new(&state.pool).get(id).await?;

    let mut ctx = Context::new();
    ctx.insert("tag", &TagView::from(tag));
    Ok(templates::render("tag_edit.html", &ctx)?)
}

/// POST /tags/{id}/edit - rename, then back to the tag list
async fn update_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<TagForm>,
) -> Result<Redirect, PageError> {
    let name = TagName::new(&form.name)?;
    TagRepo::new(&state.pool).update(id, name).await?;

    tracing::info!(tag_id = id, "tag updated");
    Ok(Redirect::to("/tags"))
}

/// POST /tags/{id}/delete - remove the tag; posts carrying it survive
async fn delete_tag(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    TagRepo::new(&state.pool).delete(id).await?;

    tracing::info!(tag_id = id, "tag deleted");
    Ok(Redirect::to("/tags"))
}

/// Tag routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tags", get(list_tags))
        .route("/tags/new", get(new_tag_page).post(create_tag))
        .route("/tags/{id}", get(show_tag))
        .route("/tags/{id}/edit", get(edit_tag_page).post(update_tag))
        .route("/tags/{id}/delete", post(delete_tag))
}
