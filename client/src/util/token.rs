//! Admin bearer-token lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow (outside this crate) stores the admin token in the
//! `adminToken` cookie. It is read once when the app starts and handed to
//! `AdminApi`; nothing else reads the cookie.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::fmt;

pub const ADMIN_TOKEN_COOKIE: &str = "adminToken";

/// Credential sent as `Authorization: Bearer <token>`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("BearerToken(<empty>)")
        } else {
            f.write_str("BearerToken(<redacted>)")
        }
    }
}

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_owned())
    })
}

/// Read the admin token from the browser cookie jar.
///
/// Returns an empty token when the cookie is absent; the server then rejects
/// requests and the page reports that like any other failure.
pub fn read_admin_token() -> BearerToken {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let document = web_sys::window().and_then(|w| w.document());
        let cookies = match document.map(|d| d.dyn_into::<web_sys::HtmlDocument>()) {
            Some(Ok(html)) => html.cookie().unwrap_or_default(),
            _ => String::new(),
        };
        match cookie_value(&cookies, ADMIN_TOKEN_COOKIE) {
            Some(raw) => {
                let decoded = match js_sys::decode_uri_component(&raw) {
                    Ok(v) => v.as_string().unwrap_or(raw),
                    Err(_) => raw,
                };
                BearerToken::new(decoded)
            }
            None => {
                leptos::logging::warn!("{ADMIN_TOKEN_COOKIE} cookie missing; admin requests will be unauthenticated");
                BearerToken::default()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        BearerToken::default()
    }
}
