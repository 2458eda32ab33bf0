//! Seek-to-timestamp extension core: the host-facing lifecycle plus the
//! capabilities it is wired with (settings storage, command transport).

pub mod client;
pub mod dispatch;
pub mod extension;
pub mod form;
pub mod host;
pub mod store;

pub use client::PlayerClient;
pub use dispatch::{Dispatch, DispatchError, DispatchOutcome, HttpTransport, Transport};
pub use extension::{Extension, MenuEntry, SeekReport};
pub use form::{settings_form, FieldKind, FormRow, SettingField, SettingUpdate, SettingsError};
pub use host::EditorView;
pub use store::{MemoryStore, SettingsStore, TomlFileStore};
