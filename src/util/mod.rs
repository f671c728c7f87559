//! Cross-cutting helpers: token persistence, redirect guards, validation.

pub mod auth;
pub mod storage;
pub mod validate;
