/// Settings form: field descriptors for the host to render, and the updates
/// it sends back when the user edits a field.

use std::fmt;
use std::str::FromStr;

use vlc_protocol::settings::Settings;

/// Form field keys, identical to the keys in the settings file.
pub const KEY_PASSWORD: &str = "password";
pub const KEY_HOST: &str = "host";
pub const KEY_PORT: &str = "port";
pub const KEY_FORCE_RESUME: &str = "force_resume_on_seek";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Unknown setting '{0}' (expected one of: password, host, port, force_resume_on_seek)")]
    UnknownField(String),

    #[error("Invalid value '{value}' for {field}: expected true or false")]
    InvalidToggle { field: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text input whose value is masked
    Password,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    Password,
    Host,
    Port,
    ForceResumeOnSeek,
}

impl SettingField {
    /// Fields in form order.
    pub const ALL: [SettingField; 4] = [
        SettingField::Password,
        SettingField::Host,
        SettingField::Port,
        SettingField::ForceResumeOnSeek,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Password => KEY_PASSWORD,
            Self::Host => KEY_HOST,
            Self::Port => KEY_PORT,
            Self::ForceResumeOnSeek => KEY_FORCE_RESUME,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Password => "VLC password",
            Self::Host => "VLC host",
            Self::Port => "VLC port",
            Self::ForceResumeOnSeek => "Resume after seek",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Password => "Password for HTTP access to VLC",
            Self::Host => "Scheme and address of the VLC HTTP interface",
            Self::Port => "Port of the VLC HTTP interface",
            Self::ForceResumeOnSeek => "Start playback after seeking, even if VLC was paused",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Password => "Enter your password",
            Self::Host => vlc_protocol::DEFAULT_HOST,
            Self::Port => vlc_protocol::DEFAULT_PORT,
            Self::ForceResumeOnSeek => "",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Password => FieldKind::Password,
            Self::Host | Self::Port => FieldKind::Text,
            Self::ForceResumeOnSeek => FieldKind::Toggle,
        }
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            KEY_PASSWORD => Ok(Self::Password),
            KEY_HOST => Ok(Self::Host),
            KEY_PORT => Ok(Self::Port),
            KEY_FORCE_RESUME | "forceResumeOnSeek" | "force-resume-on-seek" => {
                Ok(Self::ForceResumeOnSeek)
            }
            other => Err(SettingsError::UnknownField(other.to_string())),
        }
    }
}

/// One edit coming back from the form.
#[derive(Clone, PartialEq, Eq)]
pub enum SettingUpdate {
    Password(String),
    Host(String),
    Port(String),
    ForceResumeOnSeek(bool),
}

impl SettingUpdate {
    /// Build an update from the raw string a host form delivers.
    pub fn parse(field: SettingField, raw: &str) -> Result<Self, SettingsError> {
        Ok(match field {
            SettingField::Password => Self::Password(raw.to_string()),
            SettingField::Host => Self::Host(raw.trim().to_string()),
            SettingField::Port => Self::Port(raw.trim().to_string()),
            SettingField::ForceResumeOnSeek => Self::ForceResumeOnSeek(parse_toggle(field, raw)?),
        })
    }

    pub fn field(&self) -> SettingField {
        match self {
            Self::Password(_) => SettingField::Password,
            Self::Host(_) => SettingField::Host,
            Self::Port(_) => SettingField::Port,
            Self::ForceResumeOnSeek(_) => SettingField::ForceResumeOnSeek,
        }
    }

    pub fn apply(&self, settings: &mut Settings) {
        match self {
            Self::Password(v) => settings.password = v.clone(),
            Self::Host(v) => settings.host = v.clone(),
            Self::Port(v) => settings.port = v.clone(),
            Self::ForceResumeOnSeek(v) => settings.force_resume_on_seek = *v,
        }
    }
}

impl fmt::Debug for SettingUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password(_) => f.write_str("Password(<redacted>)"),
            Self::Host(v) => f.debug_tuple("Host").field(v).finish(),
            Self::Port(v) => f.debug_tuple("Port").field(v).finish(),
            Self::ForceResumeOnSeek(v) => f.debug_tuple("ForceResumeOnSeek").field(v).finish(),
        }
    }
}

fn parse_toggle(field: SettingField, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(SettingsError::InvalidToggle {
            field: field.key(),
            value: raw.to_string(),
        }),
    }
}

/// A rendered form row: descriptor plus the current value as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub field: SettingField,
    pub value: String,
}

/// Describe the settings form for `settings`. The password value is masked.
pub fn settings_form(settings: &Settings) -> Vec<FormRow> {
    SettingField::ALL
        .iter()
        .map(|&field| {
            let value = match field {
                SettingField::Password => "*".repeat(settings.password.chars().count()),
                SettingField::Host => settings.host.clone(),
                SettingField::Port => settings.port.clone(),
                SettingField::ForceResumeOnSeek => settings.force_resume_on_seek.to_string(),
            };
            FormRow { field, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_roundtrip() {
        for field in SettingField::ALL {
            assert_eq!(field.key().parse::<SettingField>().unwrap(), field);
        }
        assert_eq!(
            "forceResumeOnSeek".parse::<SettingField>().unwrap(),
            SettingField::ForceResumeOnSeek
        );
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(
            "volume".parse::<SettingField>(),
            Err(SettingsError::UnknownField("volume".into()))
        );
    }

    #[test]
    fn test_toggle_values() {
        for raw in ["true", "On", "yes", "1"] {
            assert_eq!(
                SettingUpdate::parse(SettingField::ForceResumeOnSeek, raw).unwrap(),
                SettingUpdate::ForceResumeOnSeek(true)
            );
        }
        for raw in ["false", "OFF", "no", "0"] {
            assert_eq!(
                SettingUpdate::parse(SettingField::ForceResumeOnSeek, raw).unwrap(),
                SettingUpdate::ForceResumeOnSeek(false)
            );
        }
        assert!(SettingUpdate::parse(SettingField::ForceResumeOnSeek, "sometimes").is_err());
    }

    #[test]
    fn test_password_kept_verbatim() {
        // Spaces can be part of a password
        let update = SettingUpdate::parse(SettingField::Password, " pw ").unwrap();
        assert_eq!(update, SettingUpdate::Password(" pw ".into()));

        let host = SettingUpdate::parse(SettingField::Host, " http://h ").unwrap();
        assert_eq!(host, SettingUpdate::Host("http://h".into()));
    }

    #[test]
    fn test_apply() {
        let mut s = Settings::default();
        SettingUpdate::Port("9999".into()).apply(&mut s);
        SettingUpdate::ForceResumeOnSeek(false).apply(&mut s);
        assert_eq!(s.port, "9999");
        assert!(!s.force_resume_on_seek);
    }

    #[test]
    fn test_form_masks_password() {
        let s = Settings {
            password: "hunter2".into(),
            ..Settings::default()
        };
        let rows = settings_form(&s);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].field, SettingField::Password);
        assert_eq!(rows[0].value, "*******");
        assert_eq!(rows[1].value, "http://127.0.0.1");
        assert_eq!(rows[2].value, "8080");
        assert_eq!(rows[3].value, "true");
        assert_eq!(rows[3].field.kind(), FieldKind::Toggle);
    }

    #[test]
    fn test_update_debug_redacts_password() {
        let update = SettingUpdate::Password("hunter2".into());
        assert!(!format!("{:?}", update).contains("hunter2"));
    }
}
