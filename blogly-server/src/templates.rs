//! Embedded Tera templates
//!
//! Every view is compiled into the binary with `include_str!` and registered
//! once in a lazily-initialized global registry, so the server never reads
//! templates from disk at request time. Registration parses all templates
//! and builds the inheritance chains up front; a malformed template fails
//! the first render in any process, not some later request.

use axum::response::Html;
use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// Global template registry (lazily initialized).
static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();

    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("user_list.html", include_str!("../templates/user_list.html")),
        ("user_new.html", include_str!("../templates/user_new.html")),
        (
            "user_detail.html",
            include_str!("../templates/user_detail.html"),
        ),
        ("user_edit.html", include_str!("../templates/user_edit.html")),
        ("post_new.html", include_str!("../templates/post_new.html")),
        (
            "post_detail.html",
            include_str!("../templates/post_detail.html"),
        ),
        ("post_edit.html", include_str!("../templates/post_edit.html")),
        ("tag_list.html", include_str!("../templates/tag_list.html")),
        ("tag_new.html", include_str!("../templates/tag_new.html")),
        (
            "tag_detail.html",
            include_str!("../templates/tag_detail.html"),
        ),
        ("tag_edit.html", include_str!("../templates/tag_edit.html")),
        ("not_found.html", include_str!("../templates/not_found.html")),
        ("error.html", include_str!("../templates/error.html")),
    ])
    .expect("template registration failed");

    tera
});

/// Render a registered template into an HTML response body.
pub fn render(name: &str, ctx: &Context) -> Result<Html<String>, tera::Error> {
    TEMPLATES.render(name, ctx).map(Html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx_from(value: serde_json::Value) -> Context {
        Context::from_serialize(value).expect("context")
    }

    fn rendered(name: &str, value: serde_json::Value) -> String {
        let Html(body) = render(name, &ctx_from(value)).expect(name);
        body
    }

    #[test]
    fn home_renders_posts_and_empty_state() {
        let body = rendered(
            "home.html",
            json!({
                "posts": [{
                    "id": 1,
                    "title": "First!",
                    "author": "Jane Doe",
                    "user_id": 7,
                    "friendly_date": "Sat Aug 1 2026, 3:05 PM",
                }]
            }),
        );
        assert!(body.contains("First!"));
        assert!(body.contains("/posts/1"));
        assert!(body.contains("Jane Doe"));

        let empty = rendered("home.html", json!({ "posts": [] }));
        assert!(empty.contains("No posts yet"));
    }

    #[test]
    fn user_pages_render() {
        let user = json!({
            "id": 3,
            "first_name": "Jane",
            "last_name": "Doe",
            "full_name": "Jane Doe",
            "image_url": "/static/no-profile-photo-150.png",
        });

        let list = rendered("user_list.html", json!({ "users": [user] }));
        assert!(list.contains("Jane Doe"));
        assert!(list.contains(r#"<form action="/users/new">"#));

        let new = rendered("user_new.html", json!({}));
        assert!(new.contains(r#"<form action="/add-user" method="POST">"#));
        assert!(new.contains(r#"name="img-url""#));

        let detail = rendered(
            "user_detail.html",
            json!({ "user": user, "posts": [] }),
        );
        assert!(detail.contains("Jane Doe"));
        assert!(detail.contains("/users/3/posts/new"));
        assert!(detail.contains("/users/3/delete"));

        let edit = rendered("user_edit.html", json!({ "user": user }));
        assert!(edit.contains(r#"value="Jane""#));
        assert!(edit.contains("/users/3/edit"));
    }

    #[test]
    fn post_pages_render() {
        let post = json!({
            "id": 9,
            "title": "Hello",
            "content": "World",
            "friendly_date": "Sat Aug 1 2026, 3:05 PM",
            "user_id": 3,
        });
        let author = json!({
            "id": 3,
            "first_name": "Jane",
            "last_name": "Doe",
            "full_name": "Jane Doe",
            "image_url": "/static/no-profile-photo-150.png",
        });
        let tags = json!([{ "id": 1, "name": "fun" }, { "id": 2, "name": "rust" }]);

        let detail = rendered(
            "post_detail.html",
            json!({ "post": post, "author": author, "tags": tags }),
        );
        assert!(detail.contains("Hello"));
        assert!(detail.contains("/tags/2"));
        assert!(detail.contains("/posts/9/delete"));

        let new = rendered(
            "post_new.html",
            json!({ "user": author, "tags": tags }),
        );
        assert!(new.contains("/users/3/posts/new"));
        assert!(new.contains(r#"name="tags" value="1""#));

        // Tag 2 is pre-checked on the edit form, tag 1 is not.
        let edit = rendered(
            "post_edit.html",
            json!({ "post": post, "tags": tags, "checked_ids": [2] }),
        );
        assert!(edit.contains(r#"value="2" checked"#));
        assert!(!edit.contains(r#"value="1" checked"#));
    }

    #[test]
    fn tag_pages_render() {
        let tag = json!({ "id": 4, "name": "rust" });

        let list = rendered("tag_list.html", json!({ "tags": [tag] }));
        assert!(list.contains("rust"));
        assert!(list.contains(r#"<form action="/tags/new">"#));

        let new = rendered("tag_new.html", json!({}));
        assert!(new.contains(r#"<form action="/tags/new" method="POST">"#));

        let detail = rendered("tag_detail.html", json!({ "tag": tag, "posts": [] }));
        assert!(detail.contains("No posts carry this tag"));
        assert!(detail.contains("/tags/4/delete"));

        let edit = rendered("tag_edit.html", json!({ "tag": tag }));
        assert!(edit.contains(r#"value="rust""#));
    }

    #[test]
    fn error_pages_render() {
        let missing = rendered("not_found.html", json!({ "message": "user 42 not found" }));
        assert!(missing.contains("user 42 not found"));

        let error = rendered(
            "error.html",
            json!({ "status": 400, "reason": "title cannot be empty" }),
        );
        assert!(error.contains("400"));
        assert!(error.contains("title cannot be empty"));
    }

    #[test]
    fn user_content_is_escaped() {
        let body = rendered(
            "tag_detail.html",
            json!({
                "tag": { "id": 1, "name": "<script>alert(1)</script>" },
                "posts": [],
            }),
        );
        assert!(!body.contains("<script>alert(1)</script>"));
        assert!(body.contains("&lt;script&gt;"));
    }
}
