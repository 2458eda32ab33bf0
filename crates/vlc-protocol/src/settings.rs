/// Persisted connection settings.
/// Stored as a flat TOML record; every field has a default so a partial or
/// older file merges over the defaults on load.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Password of VLC's HTTP interface (user name is always empty)
    #[serde(default = "default_password")]
    pub password: String,

    /// Scheme and host of the player, e.g. "http://127.0.0.1"
    #[serde(default = "default_host")]
    pub host: String,

    /// Kept as text, exactly as entered in the settings form
    #[serde(default = "default_port")]
    pub port: String,

    /// Send `pl_forceresume` after every seek
    #[serde(default = "default_true", alias = "forceResumeOnSeek")]
    pub force_resume_on_seek: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            password: default_password(),
            host: default_host(),
            port: default_port(),
            force_resume_on_seek: default_true(),
        }
    }
}

fn default_password() -> String {
    crate::DEFAULT_PASSWORD.to_string()
}

fn default_host() -> String {
    crate::DEFAULT_HOST.to_string()
}

fn default_port() -> String {
    crate::DEFAULT_PORT.to_string()
}

fn default_true() -> bool {
    crate::DEFAULT_FORCE_RESUME_ON_SEEK
}

impl Settings {
    /// Parse a TOML settings record. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("Settings")
            .field("password", &password)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("force_resume_on_seek", &self.force_resume_on_seek)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.password, "");
        assert_eq!(s.host, "http://127.0.0.1");
        assert_eq!(s.port, "8080");
        assert!(s.force_resume_on_seek);
    }

    #[test]
    fn test_empty_record_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_record_merges_over_defaults() {
        let s = Settings::from_toml("password = \"vetinari\"\n").unwrap();
        assert_eq!(s.password, "vetinari");
        assert_eq!(s.host, "http://127.0.0.1");
        assert_eq!(s.port, "8080");
        assert!(s.force_resume_on_seek);
    }

    #[test]
    fn test_camel_case_toggle_accepted() {
        let s = Settings::from_toml("forceResumeOnSeek = false\n").unwrap();
        assert!(!s.force_resume_on_seek);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let s = Settings::from_toml("vlcPassword = \"old\"\nport = \"9000\"\n").unwrap();
        assert_eq!(s.port, "9000");
        assert_eq!(s.password, "");
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(Settings::from_toml("force_resume_on_seek = \"maybe\"\n").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let s = Settings {
            password: "pw".into(),
            host: "http://media.local".into(),
            port: "8081".into(),
            force_resume_on_seek: false,
        };
        let text = s.to_toml().unwrap();
        assert!(text.contains("force_resume_on_seek = false"));
        assert_eq!(Settings::from_toml(&text).unwrap(), s);
    }

    #[test]
    fn test_debug_redacts_password() {
        let s = Settings {
            password: "hunter2".into(),
            ..Settings::default()
        };
        assert!(!format!("{:?}", s).contains("hunter2"));
    }
}
