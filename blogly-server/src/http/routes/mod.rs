//! Route handlers organized by resource
//!
//! Each module owns one resource's pages: the form DTOs it accepts, the
//! view structs its templates render, and a `router()` merged in
//! [`crate::http::server::build_router`]. Every handler calls exactly one
//! write operation or the read operations its view needs, then renders or
//! redirects.

pub mod health;
pub mod home;
pub mod posts;
pub mod tags;
pub mod users;
