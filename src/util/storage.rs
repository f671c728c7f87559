//! Bearer-token persistence in browser `localStorage`.
//!
//! This module is the single source of truth for the stored credential: the
//! transport layer and session state always read through it at call time and
//! never cache the token across requests, so an external logout cannot leave
//! a stale copy behind. SSR paths safely no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "studyhub_access_token";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token.
///
/// Returns `None` when unset or outside a browser context.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Store the bearer token, replacing any previous value.
pub fn set_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored bearer token. Idempotent.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
