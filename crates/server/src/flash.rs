//! One-shot messages carried to the next page in a cookie.
//!
//! The cookie holds a short code, never the text itself.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

use service::contact::domain::SUCCESS_MESSAGE;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flash {
    ContactReceived,
}

impl Flash {
    fn code(self) -> &'static str {
        match self {
            Flash::ContactReceived => "contact_received",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "contact_received" => Some(Flash::ContactReceived),
            _ => None,
        }
    }

    fn message(self) -> FlashMessage {
        match self {
            Flash::ContactReceived => FlashMessage { level: "success", message: SUCCESS_MESSAGE.to_string() },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub level: &'static str,
    pub message: String,
}

pub fn push(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(Cookie::build((FLASH_COOKIE, flash.code())).path("/").http_only(true))
}

/// Read and clear pending messages.
pub fn take(jar: CookieJar) -> (CookieJar, Vec<FlashMessage>) {
    let Some(code) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, Vec::new());
    };
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    let messages = Flash::from_code(&code).map(Flash::message).into_iter().collect();
    (jar, messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_returns_pushed_message_once() {
        let jar = push(CookieJar::new(), Flash::ContactReceived);
        let (jar, messages) = take(jar);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, SUCCESS_MESSAGE);
        let (_, again) = take(jar);
        assert!(again.is_empty());
    }

    #[test]
    fn unknown_code_is_dropped() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "bogus"));
        let (_, messages) = take(jar);
        assert!(messages.is_empty());
    }
}
