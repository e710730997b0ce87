//! Bearer credential for requests made on behalf of the viewer.
//!
//! The credential is resolved once by the caller and handed to the page; nothing
//! below this module reads tokens from the environment.

use anyhow::{Context, Result};
use std::fmt::{Debug, Display};

use crate::config::Config;

#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// `None` for a blank token.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Parses an `Authorization: Bearer ...` header value.
    pub fn from_authorization(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        Self::new(token)
    }

    /// Picks the `token` cookie out of a `Cookie` header value.
    pub fn from_cookie_header(value: &str) -> Option<Self> {
        value
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == "token")
            .and_then(|(_, token)| Self::new(token))
    }

    /// Token from the `token` setting, else the first line of `token_file`.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        if let Some(token) = config.token.as_deref().and_then(Self::new) {
            return Ok(Some(token));
        }
        let Some(path) = &config.token_file else {
            return Ok(None);
        };
        let path = shellexpand::path::full(path)
            .with_context(|| format!("Can't expand token file path {}", path.display()))?;
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Can't read token file {}", path.display()))?;
        Ok(contents.lines().next().and_then(Self::new))
    }
}

// Tokens never end up in logs.
impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(***)")
    }
}

impl Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "***")
    }
}
