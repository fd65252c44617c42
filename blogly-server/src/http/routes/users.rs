//! User pages and form handlers

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tera::Context;

use blogly_core::{NewUser, User, UserRepo};

use super::posts::PostView;
use crate::http::error::PageError;
use crate::http::server::AppState;
use crate::templates;

/// Fields submitted by the add-user and edit-user forms.
#[derive(Deserialize)]
pub struct UserForm {
    pub first: String,
    pub last: String,
    #[serde(rename = "img-url", default)]
    pub image_url: Option<String>,
}

/// User as the templates see it, with the derived display name.
#[derive(Serialize)]
pub struct UserView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub image_url: String,
}

impl From<User> for UserView {
    fn from(u: User) -> Self {
        let full_name = u.full_name();
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            full_name,
            image_url: u.image_url,
        }
    }
}

/// GET /users - all users in insertion order
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let users = UserRepo::new(&state.pool).list().await?;
    let views: Vec<UserView> = users.into_iter().map(UserView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("users", &views);
    Ok(templates::render("user_list.html", &ctx)?)
}

/// GET /users/new - the add-user form
async fn new_user_page() -> Result<Html<String>, PageError> {
    Ok(templates::render("user_new.html", &Context::new())?)
}

/// POST /add-user - create a user, then back to the homepage
async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, PageError> {
    let record = NewUser::new(&form.first, &form.last, form.image_url.as_deref())?;
    let user = UserRepo::new(&state.pool).create(record).await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(Redirect::to("/"))
}

/// GET /users/{id} - user detail with their posts
async fn show_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let repo = UserRepo::new(&state.pool);
    let user = repo.get(id).await?;
    let posts = repo.posts(id).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(user));
    ctx.insert(
        "posts",
        &posts.into_iter().map(PostView::from).collect::<Vec<_>>(),
    );
    Ok(templates::render("user_detail.html", &ctx)?)
}

/// GET /users/{id}/edit - the edit form, pre-filled
async fn edit_user_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let user = UserRepo::new(&state.pool).get(id).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(user));
    Ok(templates::render("user_edit.html", &ctx)?)
}

/// POST /users/{id}/edit - replace name and image, then back home
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, PageError> {
    let record = NewUser::new(&form.first, &form.last, form.image_url.as_deref())?;
    UserRepo::new(&state.pool).update(id, record).await?;

    tracing::info!(user_id = id, "user updated");
    Ok(Redirect::to("/"))
}

/// POST /users/{id}/delete - remove the user and, via cascade, their posts
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    UserRepo::new(&state.pool).delete(id).await?;

    tracing::info!(user_id = id, "user deleted");
    Ok(Redirect::to("/"))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/new", get(new_user_page))
        .route("/add-user", post(create_user))
        .route("/users/{id}", get(show_user))
        .route("/users/{id}/edit", get(edit_user_page).post(update_user))
        .route("/users/{id}/delete", post(delete_user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_view_carries_the_derived_name() {
        let view = UserView::from(User {
            id: 5,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            image_url: "/static/no-profile-photo-150.png".into(),
        });
        assert_eq!(view.full_name, "Jane Doe");
        assert_eq!(view.id, 5);
    }

    #[test]
    fn form_field_names_match_the_templates() {
        // The edit form posts `first`, `last`, and `img-url`.
        let form: UserForm =
            serde_urlencoded::from_str("first=Jane&last=Doe&img-url=%2Fme.png").unwrap();
        assert_eq!(form.first, "Jane");
        assert_eq!(form.last, "Doe");
        assert_eq!(form.image_url.as_deref(), Some("/me.png"));

        // img-url may be absent entirely.
        let form: UserForm = serde_urlencoded::from_str("first=Jane&last=Doe").unwrap();
        assert_eq!(form.image_url, None);
    }
}
