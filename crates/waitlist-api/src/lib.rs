//! SketchTattoo waitlist API.
//!
//! A minimal HTTP service backing the landing page's email waitlist form:
//! - `POST /api/signup` records an email, refusing duplicates
//! - `GET /api/signups` lists every signup, most recent first
//!
//! All state is in-memory and lives for the process lifetime only.

pub mod api;
pub mod config;
pub mod error;
pub mod registry;

pub use config::Config;
pub use error::ApiError;
pub use registry::{Registry, SignupRecord, UserRecord};
