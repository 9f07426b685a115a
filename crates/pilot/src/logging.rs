//! Invocation logging: one JSONL entry per dispatched command.
//!
//! XDG-compliant path discovery with a fallback chain; never writes under
//! /var for non-root users.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;

/// Log entry for each dispatched command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 timestamp
    pub ts: String,

    /// Request ID (UUID)
    pub req_id: String,

    /// Raw input line
    pub input: String,

    /// Resolved action kind
    pub action: String,

    /// Success flag
    pub ok: bool,

    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl LogEntry {
    /// Discover log file path with fallback chain
    ///
    /// Priority:
    /// 1. $PILOT_LOG_FILE environment variable (explicit override)
    /// 2. $XDG_STATE_HOME/pilot/ctl.jsonl (XDG standard)
    /// 3. ~/.local/state/pilot/ctl.jsonl (XDG fallback)
    fn discover_log_path() -> Option<String> {
        if let Ok(path) = std::env::var("PILOT_LOG_FILE") {
            return Some(path);
        }

        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
            return Some(format!("{}/pilot/ctl.jsonl", xdg_state));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(format!("{}/.local/state/pilot/ctl.jsonl", home));
        }

        None
    }

    /// Write the entry, silently dropping it when no path can be
    /// discovered or the file is unwritable - logging must never break
    /// the interpreter loop.
    pub fn write(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string(self)?;

        if let Some(path) = Self::discover_log_path() {
            let _ = Self::write_to_file(&json, &path);
        }
        Ok(())
    }

    fn write_to_file(json: &str, path: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        writeln!(file, "{}", json)?;
        Ok(())
    }

    /// Generate request ID
    pub fn generate_req_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Get current timestamp in ISO 8601 format
    pub fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

/// Short stable name for an action variant, for the log line.
pub fn action_kind(action: &pilot_common::Action) -> &'static str {
    use pilot_common::Action::*;
    match action {
        Exit => "exit",
        ShowHelp => "show_help",
        ShowHistory => "show_history",
        ClearHistory => "clear_history",
        SetTheme(_) => "set_theme",
        SetDefaultEngine(_) => "set_default_engine",
        ListEngines => "list_engines",
        ListGroups => "list_groups",
        DateTimeQuery(_) => "datetime_query",
        CalendarQuery { .. } => "calendar_query",
        ClipboardCopy(_) => "clipboard_copy",
        ClipboardPaste => "clipboard_paste",
        Pwd => "pwd",
        Cd(_) => "cd",
        Ls(_) => "ls",
        GenPass { .. } => "genpass",
        LaunchLocalApp(_) => "launch_local_app",
        OpenFile(_) => "open_file",
        OpenSiteGroup(_) => "open_site_group",
        OpenLiteralUrl(_) => "open_literal_url",
        OpenKnownSite(_) => "open_known_site",
        SiteSearch { .. } => "site_search",
        EngineSearch { .. } => "engine_search",
        DefaultEngineSearch(_) => "default_engine_search",
        Usage(_) => "usage",
        Unknown(_) => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pilot_common::Action;

    #[test]
    fn entries_serialize_to_single_json_lines() {
        let entry = LogEntry {
            ts: LogEntry::now(),
            req_id: LogEntry::generate_req_id(),
            input: "cats on reddit".to_string(),
            action: action_kind(&Action::SiteSearch {
                site: "Reddit".to_string(),
                query: "cats".to_string(),
            })
            .to_string(),
            ok: true,
            duration_ms: 3,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"site_search\""));
    }

    #[test]
    fn action_kinds_are_distinct_for_search_variants() {
        assert_ne!(
            action_kind(&Action::DefaultEngineSearch("x".into())),
            action_kind(&Action::EngineSearch { engine: "e".into(), query: "x".into() })
        );
    }
}
