//! Flash messages carried across redirects in a cookie.
//!
//! Every mutating operation finishes with a redirect plus one of these
//! structured results; the page rendered next reads it, shows it, and
//! clears the cookie. Only the presentation layer ever renders the
//! message.

use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use std::fmt;

use crate::web::cookies::read_cookie;

/// Name of the cookie carrying a pending flash message.
pub const FLASH_COOKIE: &str = "flash";

/// Category of a flash message, mirrored by the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Warning,
    Danger,
    Info,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Warning => "warning",
            FlashLevel::Danger => "danger",
            FlashLevel::Info => "info",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashLevel::Success),
            "warning" => Some(FlashLevel::Warning),
            "danger" => Some(FlashLevel::Danger),
            "info" => Some(FlashLevel::Info),
            _ => None,
        }
    }
}

impl fmt::Display for FlashLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A one-shot status message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }

    /// `Set-Cookie` value carrying this message to the next request.
    ///
    /// The message is base64-encoded so it stays a valid cookie value
    /// regardless of content.
    pub fn to_set_cookie(&self) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(self.message.as_bytes());
        format!(
            "{FLASH_COOKIE}={}.{encoded}; Path=/; HttpOnly; SameSite=Lax",
            self.level
        )
    }

    /// `Set-Cookie` value clearing a consumed flash message.
    pub fn clear_cookie() -> String {
        format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }

    /// Reads a pending flash message from the request headers.
    ///
    /// Anything malformed (bad level, bad base64, bad UTF-8) is dropped
    /// silently; a broken flash cookie is not worth an error page.
    pub fn from_request_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = read_cookie(headers, FLASH_COOKIE)?;
        let (level, encoded) = raw.split_once('.')?;
        let level = FlashLevel::parse(level)?;
        let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
        let message = String::from_utf8(bytes).ok()?;
        Some(Self { level, message })
    }
}

/// Redirects to `to` with `flash` queued for the next page render.
pub fn flash_redirect(flash: Flash, to: &str) -> Response {
    (
        AppendHeaders([(SET_COOKIE, flash.to_set_cookie())]),
        Redirect::to(to),
    )
        .into_response()
}
