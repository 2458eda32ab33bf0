/// Extension lifecycle as seen by the host editor.
///
/// The host calls [`Extension::load`] at startup with its settings store and a
/// transport, asks [`Extension::menu_entry`] whenever it builds the editor
/// context menu, calls [`Extension::seek_selection`] when that entry is
/// clicked, forwards settings form edits to [`Extension::update_setting`], and
/// finally calls [`Extension::unload`].

use anyhow::Context;
use tracing::{debug, info};

use vlc_protocol::request::{Endpoint, PlayerCommand};
use vlc_protocol::settings::Settings;
use vlc_protocol::timestamp::Timestamp;

use crate::client::PlayerClient;
use crate::dispatch::{Dispatch, Transport};
use crate::form::{settings_form, FormRow, SettingUpdate};
use crate::host::EditorView;
use crate::store::SettingsStore;

pub const MENU_TITLE_PREFIX: &str = "Seek VLC to ";
pub const MENU_ICON: &str = "chevrons-right";

/// Context-menu entry offered when the selection holds a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: String,
    pub icon: &'static str,
    pub timestamp: Timestamp,
}

/// What a seek action sent, for the host to show as a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekReport {
    pub timestamp: Timestamp,
    /// Commands in the order they were handed to the transport, with their URLs
    pub sent: Vec<(PlayerCommand, String)>,
}

pub struct Extension<S, T> {
    settings: Settings,
    store: S,
    transport: T,
    /// Dispatches not yet known to be finished. Kept only so the host can
    /// observe them; nothing here waits on them.
    in_flight: Vec<Dispatch>,
}

impl<S: SettingsStore, T: Transport> Extension<S, T> {
    /// Startup: load the stored record (merged over defaults) once.
    pub fn load(store: S, transport: T) -> anyhow::Result<Self> {
        let settings = store
            .load()
            .context("Cannot load settings")?
            .unwrap_or_default();

        info!(
            host = %settings.host,
            port = %settings.port,
            force_resume = settings.force_resume_on_seek,
            "Seek extension loaded"
        );

        Ok(Self {
            settings,
            store,
            transport,
            in_flight: Vec::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Menu entry for the current selection, or None if there is no active
    /// view or the selection holds no timestamp.
    pub fn menu_entry(&self, view: Option<&dyn EditorView>) -> Option<MenuEntry> {
        let selection = view?.selection();
        let timestamp = Timestamp::find(&selection)?;
        Some(MenuEntry {
            title: format!("{}{}", MENU_TITLE_PREFIX, selection.trim()),
            icon: MENU_ICON,
            timestamp,
        })
    }

    /// Seek the player to the timestamp in the current selection.
    ///
    /// Sends `seek`, then `pl_forceresume` when enabled, without waiting for
    /// either. Returns None (and sends nothing) when there is no active view
    /// or no timestamp in the selection.
    pub fn seek_selection(&mut self, view: Option<&dyn EditorView>) -> Option<SeekReport> {
        let Some(view) = view else {
            debug!("No active editor view, ignoring seek");
            return None;
        };
        let selection = view.selection();
        let Some(timestamp) = Timestamp::find(&selection) else {
            debug!("Selection holds no timestamp, ignoring seek");
            return None;
        };

        self.in_flight.retain(|d| !d.is_finished());

        let client = PlayerClient::new(Endpoint::from(&self.settings), &self.transport);
        let mut report = SeekReport {
            timestamp,
            sent: Vec::with_capacity(2),
        };

        let seek = client.seek(&timestamp);
        report.sent.push((seek.command(), seek.url().to_string()));
        self.in_flight.push(seek);

        // Independent of how the seek request fares
        if self.settings.force_resume_on_seek {
            let resume = client.force_resume();
            report.sent.push((resume.command(), resume.url().to_string()));
            self.in_flight.push(resume);
        }

        info!(timestamp = %timestamp, commands = report.sent.len(), "Seek issued");
        Some(report)
    }

    /// Current form rows for the host's settings tab.
    pub fn settings_form(&self) -> Vec<FormRow> {
        settings_form(&self.settings)
    }

    /// Apply one settings form edit and persist the record.
    ///
    /// The in-memory settings only change once the store accepted the new
    /// record, so a failed save leaves both sides as they were.
    pub fn update_setting(&mut self, update: SettingUpdate) -> anyhow::Result<()> {
        let mut next = self.settings.clone();
        update.apply(&mut next);
        self.store
            .save(&next)
            .with_context(|| format!("Cannot save setting {}", update.field()))?;
        self.settings = next;
        info!(field = %update.field(), "Setting updated");
        Ok(())
    }

    /// Number of dispatches handed out and not yet seen to finish.
    pub fn in_flight(&self) -> usize {
        self.in_flight.iter().filter(|d| !d.is_finished()).count()
    }

    /// Teardown. Hands back unfinished dispatches; the host decides whether
    /// to wait for them or let them go.
    pub fn unload(mut self) -> Vec<Dispatch> {
        self.in_flight.retain(|d| !d.is_finished());
        info!(pending = self.in_flight.len(), "Seek extension unloaded");
        self.in_flight
    }
}
