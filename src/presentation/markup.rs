/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/2/26
******************************************************************************/

//! HTML fragments for request lifecycle states
//!
//! The web frontends inject a fragment per state while a call is in flight or
//! after it settles. The class names (`loading`, `error`, `success`) are part
//! of the platform's stylesheet contract. Messages are inserted verbatim;
//! escaping is the embedding application's responsibility.

/// Fragment shown while a request is in flight
#[must_use]
pub fn loading_markup() -> String {
    String::from(r#"<div class="loading">Loading...</div>"#)
}

/// Fragment shown when a request failed
#[must_use]
pub fn error_markup(message: &str) -> String {
    format!(r#"<div class="error">Error: {message}</div>"#)
}

/// Fragment shown when an operation succeeded
#[must_use]
pub fn success_markup(message: &str) -> String {
    format!(r#"<div class="success">{message}</div>"#)
}
