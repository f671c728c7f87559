//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `invite`) so individual components can
//! depend on small focused models. `auth` is the only writer of session
//! state; `invite` is form-scoped and owned by the registration page.

pub mod auth;
pub mod invite;
