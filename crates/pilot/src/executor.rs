//! Action dispatcher - executes one resolved [`Action`] against the
//! collaborators and reports back.
//!
//! Session-mutating actions (`SetTheme`, `SetDefaultEngine`, `Cd`) touch
//! the session only after their validation succeeds; every failure path
//! leaves the session exactly as it was.

use pilot_common::display::{Theme, THEME_NAMES};
use pilot_common::{Action, Catalog, Outcome, SessionState};

use crate::help;
use crate::ops::{apps, browser, clipboard, datetime, files, passgen};

/// Execute `action`, mutating `session` where the action calls for it.
pub fn dispatch(action: &Action, catalog: &Catalog, session: &mut SessionState) -> Outcome {
    match action {
        Action::Exit => Outcome {
            ok: true,
            message: "Goodbye!".to_string(),
            description: None,
        },

        Action::ShowHelp => Outcome::success(help::render(catalog, session), "Displayed help"),

        Action::ShowHistory => Outcome::success(help::render_history(session), "Viewed history"),

        Action::ClearHistory => {
            session.clear_history();
            Outcome::success("Command history cleared.", "Cleared command history")
        }

        Action::SetTheme(name) => match Theme::from_name(name) {
            Some(_) => {
                session.theme = name.clone();
                Outcome::success(
                    format!("Theme set to {}.", name),
                    format!("Set theme to {}", name),
                )
            }
            None => Outcome::failure(format!(
                "Error: Unknown theme '{}'. Available: {}",
                name,
                THEME_NAMES.join(", ")
            )),
        },

        Action::SetDefaultEngine(name) => match catalog.resolve_engine(name) {
            Some(engine) => {
                session.default_engine_key = engine.key.to_string();
                Outcome::success(
                    format!("Default search engine set to: {}", engine.key),
                    format!("Set default engine to {}", engine.key),
                )
            }
            None => Outcome::failure(format!("Error: Search engine '{}' not found.", name)),
        },

        Action::ListEngines => {
            Outcome::success(help::render_engines(catalog, session), "Listed search engines")
        }

        Action::ListGroups => Outcome::success(help::render_groups(catalog), "Listed site groups"),

        Action::DateTimeQuery(kind) => {
            Outcome::success(datetime::render_now(*kind), format!("Showed {}", kind.label()))
        }

        Action::CalendarQuery { month, year } => Outcome::success(
            format!(
                "Calendar for {} {}:\n{}",
                datetime::MONTH_NAMES[(month - 1) as usize],
                year,
                datetime::render_calendar(*month, *year)
            ),
            format!("Showed calendar for {}/{}", month, year),
        ),

        Action::ClipboardCopy(text) => match clipboard::copy(text) {
            Ok(()) => Outcome::success("Text copied to clipboard.", "Copied text to clipboard"),
            Err(e) => Outcome::failure(e.to_string()),
        },

        Action::ClipboardPaste => match clipboard::paste() {
            Ok(Some(text)) => {
                let preview: String = text.chars().take(50).collect();
                let ellipsis = if text.chars().count() > 50 { "..." } else { "" };
                Outcome::success(
                    format!("Clipboard contents: '{}{}'", preview, ellipsis),
                    "Pasted from clipboard",
                )
            }
            Ok(None) => Outcome {
                ok: true,
                message: "Clipboard is empty or contains non-text data.".to_string(),
                description: None,
            },
            Err(e) => Outcome::failure(e.to_string()),
        },

        Action::Pwd => Outcome::success(
            format!("Internal CWD: {}", session.working_directory.display()),
            "Showed internal PWD",
        ),

        Action::Cd(path) => match files::resolve_cd(&session.working_directory, path) {
            Ok(new_dir) => {
                session.working_directory = new_dir;
                Outcome::success(
                    format!(
                        "Internal CWD changed to: {}",
                        session.working_directory.display()
                    ),
                    format!("CD to {}", session.working_directory.display()),
                )
            }
            Err(e) => Outcome::failure(format!("Error: {}", e)),
        },

        Action::Ls(path) => {
            let target = files::resolve_ls(&session.working_directory, path.as_deref());
            match files::list_directory(&target) {
                Ok(listing) => Outcome::success(
                    listing,
                    format!("Listed contents of {}", target.display()),
                ),
                Err(e) => Outcome::failure(format!("Error: {}", e)),
            }
        }

        Action::GenPass {
            length,
            upper,
            lower,
            digits,
            symbols,
        } => match passgen::generate(*length, *upper, *lower, *digits, *symbols) {
            Ok(password) => Outcome::success(
                format!("Generated password ({} chars): {}", length, password),
                "Generated password",
            ),
            Err(e) => Outcome::failure(e.to_string()),
        },

        Action::LaunchLocalApp(name) => match catalog.app(name) {
            Some(app) => match apps::launch(app) {
                Ok(message) => Outcome::success(message, format!("Launched app: {}", app.key)),
                Err(e) => Outcome::failure(e.to_string()),
            },
            None => Outcome::failure(format!("Local application '{}' not configured.", name)),
        },

        Action::OpenFile(path) => match apps::open_file(path) {
            Ok(message) => {
                Outcome::success(message, format!("Opened file: {}", path.display()))
            }
            Err(e) => Outcome::failure(e.to_string()),
        },

        Action::OpenSiteGroup(name) => match catalog.group(name) {
            Some(group) => {
                let mut lines = Vec::new();
                let mut all_ok = true;
                for key in group.sites {
                    let Some(site) = catalog.site(key) else {
                        continue;
                    };
                    match browser::open_url(site.base_url, &format!("{} homepage", site.key)) {
                        Ok(message) => lines.push(message),
                        Err(e) => {
                            all_ok = false;
                            lines.push(e.to_string());
                        }
                    }
                }
                Outcome {
                    ok: all_ok,
                    message: lines.join("\n"),
                    description: all_ok
                        .then(|| format!("Opened site group: {}", group.name)),
                }
            }
            None => Outcome::failure(format!("Error: Unknown site group '{}'", name)),
        },

        Action::OpenLiteralUrl(url) => match browser::open_url(url, "Direct URL") {
            Ok(message) => Outcome::success(message, format!("Opened URL: {}", url)),
            Err(e) => Outcome::failure(e.to_string()),
        },

        Action::OpenKnownSite(key) => match catalog.site(key) {
            Some(site) => {
                match browser::open_url(site.base_url, &format!("{} homepage", site.key)) {
                    Ok(message) => {
                        Outcome::success(message, format!("Opened site: {}", site.key))
                    }
                    Err(e) => Outcome::failure(e.to_string()),
                }
            }
            None => Outcome::failure(format!("Error: Unknown site '{}'", key)),
        },

        Action::SiteSearch { site, query } => dispatch_site_search(site, query, catalog),

        Action::EngineSearch { engine, query } => match catalog.engine(engine) {
            Some(engine) => {
                let url = browser::build_search_url(engine.url_template, query);
                match browser::open_url(&url, &format!("Search '{}' via {}", query, engine.key)) {
                    Ok(message) => Outcome::success(
                        message,
                        format!("Searched via {} for: {}", engine.key, query),
                    ),
                    Err(e) => Outcome::failure(e.to_string()),
                }
            }
            None => Outcome::failure(format!("Error: Search engine '{}' not found.", engine)),
        },

        Action::DefaultEngineSearch(query) => {
            match catalog.engine(&session.default_engine_key) {
                Some(engine) => {
                    let url = browser::build_search_url(engine.url_template, query);
                    match browser::open_url(
                        &url,
                        &format!("{} search: '{}'", engine.key, query),
                    ) {
                        Ok(message) => Outcome::success(
                            message,
                            format!("{} search: {}", engine.key, query),
                        ),
                        Err(e) => Outcome::failure(e.to_string()),
                    }
                }
                None => Outcome::failure(format!(
                    "Error: Default engine '{}' not found.",
                    session.default_engine_key
                )),
            }
        }

        Action::Usage(message) => Outcome::failure(message.clone()),

        Action::Unknown(raw) => Outcome::failure(format!(
            "Error: Command not understood: '{}'",
            raw
        )),
    }
}

/// A site search against a site with no search template still opens the
/// homepage; the outcome is a partial success with a combined message.
fn dispatch_site_search(site_key: &str, query: &str, catalog: &Catalog) -> Outcome {
    let Some(site) = catalog.site(site_key) else {
        return Outcome::failure(format!("Error: Unknown site '{}'", site_key));
    };

    match site.search_url_template {
        Some(template) => {
            let url = browser::build_search_url(template, query);
            match browser::open_url(&url, &format!("Search '{}' on {}", query, site.key)) {
                Ok(message) => Outcome::success(
                    message,
                    format!("Searched on {} for: {}", site.key, query),
                ),
                Err(e) => Outcome::failure(e.to_string()),
            }
        }
        None => {
            let lead = format!("Site '{}' known but no search. Opening homepage.", site.key);
            match browser::open_url(site.base_url, &format!("{} homepage", site.key)) {
                Ok(message) => Outcome::success(
                    format!("{}\n  {}", lead, message),
                    format!("Tried search on {}, opened homepage", site.key),
                ),
                Err(e) => Outcome::failure(format!("{}\n  {}", lead, e)),
            }
        }
    }
}

/// Append the history entry for one dispatched command, per the
/// recording rules: canonical description on success (including partial
/// success), a distinct entry for unrecognized input, nothing otherwise.
pub fn record_history(action: &Action, raw: &str, outcome: &Outcome, session: &mut SessionState) {
    if outcome.ok {
        if let Some(description) = &outcome.description {
            session.push_history(description.clone());
        }
    } else if matches!(action, Action::Unknown(_)) {
        session.push_history(format!("Unknown command: {}", raw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Catalog, SessionState) {
        (Catalog::builtin(), SessionState::new("Google", "light"))
    }

    #[test]
    fn set_engine_mutates_session_only_on_success() {
        let (catalog, mut session) = setup();

        let outcome = dispatch(
            &Action::SetDefaultEngine("ddg".to_string()),
            &catalog,
            &mut session,
        );
        assert!(outcome.ok);
        assert_eq!(session.default_engine_key, "DuckDuckGo");

        let outcome = dispatch(
            &Action::SetDefaultEngine("altavista".to_string()),
            &catalog,
            &mut session,
        );
        assert!(!outcome.ok);
        assert_eq!(session.default_engine_key, "DuckDuckGo");
    }

    #[test]
    fn set_theme_validates_before_mutating() {
        let (catalog, mut session) = setup();

        let outcome = dispatch(&Action::SetTheme("dark".to_string()), &catalog, &mut session);
        assert!(outcome.ok);
        assert_eq!(session.theme, "dark");

        let outcome = dispatch(
            &Action::SetTheme("solarized".to_string()),
            &catalog,
            &mut session,
        );
        assert!(!outcome.ok);
        assert_eq!(session.theme, "dark");
    }

    #[test]
    fn cd_failure_leaves_working_directory_unchanged() {
        let (catalog, mut session) = setup();
        let before = session.working_directory.clone();

        let outcome = dispatch(
            &Action::Cd("/no/such/directory".to_string()),
            &catalog,
            &mut session,
        );
        assert!(!outcome.ok);
        assert_eq!(session.working_directory, before);
    }

    #[test]
    fn cd_success_updates_working_directory() {
        let (catalog, mut session) = setup();
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().to_path_buf();

        let outcome = dispatch(
            &Action::Cd(target.display().to_string()),
            &catalog,
            &mut session,
        );
        assert!(outcome.ok, "{}", outcome.message);
        assert_eq!(session.working_directory, target);
    }

    #[test]
    fn genpass_outcome_reports_length() {
        let (catalog, mut session) = setup();
        let outcome = dispatch(
            &Action::GenPass {
                length: 12,
                upper: true,
                lower: true,
                digits: true,
                symbols: false,
            },
            &catalog,
            &mut session,
        );
        assert!(outcome.ok);
        assert!(outcome.message.contains("(12 chars)"));
    }

    #[test]
    fn usage_errors_do_not_reach_history() {
        let (_, mut session) = setup();
        let action = Action::Usage("Usage: copy <text to copy>".to_string());
        let outcome = Outcome::failure("Usage: copy <text to copy>");
        record_history(&action, "copy ", &outcome, &mut session);
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn unknown_input_gets_a_distinct_history_entry() {
        let (_, mut session) = setup();
        let action = Action::Unknown("???".to_string());
        let outcome = Outcome::failure("Error: Command not understood: '???'");
        record_history(&action, "???", &outcome, &mut session);
        assert_eq!(session.history().next(), Some("Unknown command: ???"));
    }

    #[test]
    fn successful_outcomes_record_their_description() {
        let (catalog, mut session) = setup();
        let action = Action::Pwd;
        let outcome = dispatch(&action, &catalog, &mut session);
        record_history(&action, "pwd", &outcome, &mut session);
        assert_eq!(session.history().next(), Some("Showed internal PWD"));
    }
}
