use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use vlc_control::{
    EditorView, Extension, FieldKind, HttpTransport, SettingField, SettingUpdate, TomlFileStore,
};
use vlc_protocol::timestamp::Timestamp;

#[derive(Parser, Debug)]
#[command(name = "vlcseek", about = "Seek VLC to timestamps found in text")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to the settings file
    #[arg(
        short,
        long,
        env = "VLCSEEK_SETTINGS",
        default_value = "config/vlcseek.toml",
        global = true
    )]
    settings: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Seek VLC to the first timestamp in TEXT (read from stdin when omitted)
    Seek {
        /// Selected text
        text: Vec<String>,
    },
    /// Print the context-menu entry TEXT would get, if any
    Menu {
        /// Selected text
        text: Vec<String>,
    },
    /// Show the timestamp and seek value found in TEXT
    Parse {
        /// Selected text
        text: Vec<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Show current settings
    Show,
    /// Change one setting (password, host, port, force_resume_on_seek)
    Set { field: String, value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = TomlFileStore::new(&args.settings);

    match args.command {
        Commands::Seek { text } => {
            let selection = read_selection(text)?;
            let mut ext = Extension::load(store, HttpTransport::new()?)?;

            match ext.seek_selection(selection.as_ref().map(|s| s as &dyn EditorView)) {
                Some(report) => {
                    println!("Seek to {}", report.timestamp);
                    for (command, url) in &report.sent {
                        println!("  {:<16}{}", command.as_str(), url);
                    }
                }
                None => debug!("Nothing to seek to"),
            }

            // Keep the runtime alive until the requests are out
            for dispatch in ext.unload() {
                let command = dispatch.command();
                match dispatch.outcome().await {
                    Ok(status) => debug!(command = %command, status = status, "Dispatch settled"),
                    Err(e) => debug!(command = %command, error = %e, "Dispatch failed"),
                }
            }
        }
        Commands::Menu { text } => {
            let selection = read_selection(text)?;
            let ext = Extension::load(store, HttpTransport::new()?)?;
            if let Some(entry) = ext.menu_entry(selection.as_ref().map(|s| s as &dyn EditorView)) {
                println!("{}", entry.title);
            }
        }
        Commands::Parse { text, json } => {
            let selection = read_selection(text)?.unwrap_or_default();
            let found = Timestamp::find(&selection);
            if json {
                let value = match found {
                    Some(ts) => {
                        let mut value = serde_json::to_value(ts)?;
                        value["seek_value"] = ts.seek_value().into();
                        value
                    }
                    None => serde_json::Value::Null,
                };
                println!("{}", value);
            } else if let Some(ts) = found {
                println!("Timestamp:   {}", ts);
                println!("Seek value:  {}", ts.seek_value());
            } else {
                println!("No timestamp found");
            }
        }
        Commands::Settings { action } => match action.unwrap_or(SettingsAction::Show) {
            SettingsAction::Show => {
                let ext = Extension::load(store, HttpTransport::new()?)?;
                println!("VLC Seek Settings ({})", args.settings.display());
                println!("══════════════════════════════");
                for row in ext.settings_form() {
                    let value = match row.field.kind() {
                        FieldKind::Toggle => {
                            if row.value == "true" { "on".to_string() } else { "off".to_string() }
                        }
                        FieldKind::Password if row.value.is_empty() => "(not set)".to_string(),
                        _ => row.value,
                    };
                    println!("  {:<20}{}", format!("{}:", row.field.name()), value);
                    println!("  {:<20}{}", "", row.field.description());
                }
            }
            SettingsAction::Set { field, value } => {
                let field: SettingField = field.parse()?;
                let update = SettingUpdate::parse(field, &value)?;
                let mut ext = Extension::load(store, HttpTransport::new()?)?;
                ext.update_setting(update)?;
                println!("Updated {}", field.name());
            }
        },
    }

    Ok(())
}

/// The selection of the "active view": joined arguments, or piped stdin.
/// None stands for no active view.
fn read_selection(text: Vec<String>) -> anyhow::Result<Option<String>> {
    if !text.is_empty() {
        return Ok(Some(text.join(" ")));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        warn!("No text given and stdin is a terminal");
        return Ok(None);
    }

    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .context("Cannot read selection from stdin")?;

    if buf.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}
