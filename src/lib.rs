//! An unofficial Rust client for the Stability AI Stable Fast 3D API.
//!
//! Stable Fast 3D turns a single image into a textured 3D model. This crate
//! wraps the one endpoint involved — an authenticated multipart POST — and
//! ships a small CLI that validates the input paths, performs the request,
//! writes the returned `.glb` artifact next to a derived filename, and
//! reports the outcome as a single JSON line.
//!
//! ## Features
//! - Asynchronous, streaming image upload.
//! - Bearer-token authentication with an environment-variable fallback.
//! - Typed error handling for robust applications.
//! - A machine-readable invocation result for embedding in other tools.

mod client;
mod error;
mod types;

pub use client::StabilityClient;
pub use error::StabilityError;
pub use types::InvocationResult;
