//! SMTP configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SMTP configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// Mail server host name
    #[serde(default)]
    pub host: String,
    /// Mail server port
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Login user; also the sender address unless `from` is set
    #[serde(default)]
    pub username: String,
    /// Login password
    #[serde(default)]
    pub password: String,
    /// Connection security
    #[serde(default)]
    pub security: SmtpSecurity,
    /// Sender address override
    #[serde(default)]
    pub from: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            security: SmtpSecurity::default(),
            from: None,
        }
    }
}

impl SmtpConfig {
    /// Address placed in the `From` header
    pub fn sender(&self) -> &str {
        self.from.as_deref().unwrap_or(&self.username)
    }

    /// Whether the transport should authenticate
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }
}

// Keep the password out of startup logs
impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("security", &self.security)
            .field("from", &self.from)
            .finish()
    }
}

/// How the SMTP connection is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// TLS from the first byte (SMTPS)
    #[default]
    Tls,
    /// Plain connection upgraded with STARTTLS
    StartTls,
    /// No encryption, for local relays only
    Plain,
}

impl FromStr for SmtpSecurity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tls" | "ssl" | "smtps" => Ok(Self::Tls),
            "starttls" => Ok(Self::StartTls),
            "plain" | "none" => Ok(Self::Plain),
            other => Err(format!("Unknown SMTP security mode: {}", other)),
        }
    }
}
