/// VLC HTTP control-protocol requests.
/// Every command is a GET against `/requests/status.xml` with the command name
/// and its parameters in the query string, authenticated with HTTP Basic auth
/// (empty user name, the configured password).

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::settings::Settings;
use crate::timestamp::Timestamp;
use crate::{COMMAND_PARAM, SEEK_VALUE_PARAM, STATUS_PATH};

/// Player commands issued by the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerCommand {
    /// Jump to the position given in the `val` parameter
    Seek,
    /// Resume playback, even when already playing
    ForceResume,
}

impl PlayerCommand {
    /// Wire name used in the `command` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seek => "seek",
            Self::ForceResume => "pl_forceresume",
        }
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how to reach the player. Snapshot of the connection part of [`Settings`].
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: String,
    pub password: String,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            password: password.into(),
        }
    }
}

impl From<&Settings> for Endpoint {
    fn from(settings: &Settings) -> Self {
        Self::new(&settings.host, &settings.port, &settings.password)
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Build `{host}:{port}/requests/status.xml?{params}&command={command}`.
///
/// Parameters keep their given order and are percent-encoded; `command` is
/// always the last query parameter, so identical inputs give identical URLs.
pub fn command_url(host: &str, port: &str, command: &str, params: &[(&str, &str)]) -> String {
    let mut query = String::new();
    for (key, value) in params {
        query.push_str(&urlencoding::encode(key));
        query.push('=');
        query.push_str(&urlencoding::encode(value));
        query.push('&');
    }
    query.push_str(COMMAND_PARAM);
    query.push('=');
    query.push_str(&urlencoding::encode(command));

    format!(
        "{}:{}{}?{}",
        host.trim_end_matches('/'),
        port.trim(),
        STATUS_PATH,
        query
    )
}

/// `Authorization` header value: `Basic base64(":" + password)`.
pub fn basic_auth_header(password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!(":{}", password)))
}

/// A fully built, authenticated control request, ready for a transport.
#[derive(Clone, PartialEq, Eq)]
pub struct PlayerRequest {
    pub command: PlayerCommand,
    pub url: String,
    /// Value of the `Authorization` header
    pub authorization: String,
}

impl PlayerRequest {
    pub fn new(endpoint: &Endpoint, command: PlayerCommand, params: &[(&str, &str)]) -> Self {
        Self {
            command,
            url: command_url(&endpoint.host, &endpoint.port, command.as_str(), params),
            authorization: basic_auth_header(&endpoint.password),
        }
    }

    /// `seek` to the given position.
    pub fn seek(endpoint: &Endpoint, timestamp: &Timestamp) -> Self {
        let value = timestamp.seek_value();
        Self::new(endpoint, PlayerCommand::Seek, &[(SEEK_VALUE_PARAM, value.as_str())])
    }

    /// `pl_forceresume`, no parameters.
    pub fn force_resume(endpoint: &Endpoint) -> Self {
        Self::new(endpoint, PlayerCommand::ForceResume, &[])
    }
}

// The URL holds no credentials, but the header does.
impl fmt::Debug for PlayerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerRequest")
            .field("command", &self.command)
            .field("url", &self.url)
            .field("authorization", &"Basic <redacted>")
            .finish()
    }
}
