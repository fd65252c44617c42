//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod post;
pub mod tag;
pub mod user;
pub mod validation;

pub use post::{NewPost, Post, PostContent, PostTitle, PostWithAuthor};
pub use tag::{Tag, TagName};
pub use user::{ImageUrl, NewUser, PersonName, User, DEFAULT_IMAGE_URL};
pub use validation::ValidationError;
