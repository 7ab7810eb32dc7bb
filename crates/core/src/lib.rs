//! KillrVideo request model and input-validation engine.
//!
//! Everything here is pure logic: no transport, no persistence. The API
//! crate decodes requests, runs them through [`validation::RequestGuard`],
//! and only hands valid requests to business logic.

pub mod error;
pub mod request;
pub mod validation;
