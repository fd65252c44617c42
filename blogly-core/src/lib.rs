pub mod db;
pub mod error;
pub mod models;

pub use db::repos::{PostRepo, TagRepo, UserRepo, DEFAULT_RECENT_LIMIT};
pub use error::{DataError, Result};
pub use models::{
    ImageUrl, NewPost, NewUser, PersonName, Post, PostContent, PostTitle, PostWithAuthor, Tag,
    TagName, User, ValidationError, DEFAULT_IMAGE_URL,
};
