//! Domain layer - Contract types exposed by the gateway.
//!
//! This crate has no infrastructure dependencies. The types here are the
//! stable shapes internal consumers rely on, independent of the provider.

pub mod constants;
pub mod repo;

pub use constants::*;
pub use repo::Repo;
