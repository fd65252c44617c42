//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uses JOINs for list projections (no N+1)
//! - One atomic unit per write: a single statement plus declarative
//!   cascades, or an explicit transaction for multi-statement writes
//! - NotFound from fetch_optional / rows_affected, never from panics

pub mod posts;
pub mod tags;
pub mod users;

pub use posts::{PostRepo, DEFAULT_RECENT_LIMIT};
pub use tags::TagRepo;
pub use users::UserRepo;
