//! Command router - maps one line of user input to exactly one [`Action`].
//!
//! Classification is a strict first-match cascade. The ordering encodes
//! human priority: control commands beat exact shortcuts, exact shortcuts
//! beat structural URL detection, URL detection beats inferred search
//! intent, and the default search catches everything else. Reordering the
//! rules changes observable behavior for any input that satisfies more
//! than one of them (a known alias that is also URL-shaped, for instance),
//! so new rules must slot into this order deliberately.

use chrono::Datelike;
use once_cell::sync::Lazy;
use pilot_common::catalog::SpecialAction;
use pilot_common::{Action, Catalog, DateTimeKind, SessionState};
use regex::Regex;
use std::path::{Path, PathBuf};

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://|www\.)[^\s/$.?#].[^\s]*$").expect("invalid url pattern")
});

// Bare registrable-domain shape ("x.com", "docs.rs/regex"): dotted host
// with an alphabetic TLD, optional port and path.
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9.-]*\.[a-z]{2,}(:\d+)?(/\S*)?$").expect("invalid domain pattern")
});

/// Classify one trimmed, non-empty input line.
///
/// The session rides along for rules that consult live state; today the
/// default engine is resolved at dispatch time, so it goes unused here.
pub fn route(raw: &str, catalog: &Catalog, _session: &SessionState) -> Action {
    let lower = raw.to_lowercase();

    // 1. Exit keywords.
    if matches!(lower.as_str(), "exit" | "quit" | "q") {
        return Action::Exit;
    }

    // 2. Built-in verbs, each with its own sub-parsing.
    if let Some(action) = route_builtin(raw, &lower, catalog) {
        return action;
    }

    // 3. Exact special-case phrase (case-sensitive as typed). Dynamic
    // cases resolve against the session at dispatch time, not here.
    if let Some(case) = catalog.special_case(raw) {
        return match &case.action {
            SpecialAction::Open(url) => Action::OpenLiteralUrl(url.to_string()),
            SpecialAction::Search(query) => Action::DefaultEngineSearch(query.to_string()),
            SpecialAction::DateTime => Action::DateTimeQuery(DateTimeKind::Full),
        };
    }

    // 4. Full input names a known site or one of its aliases.
    if let Some(site) = catalog.resolve_site(&lower) {
        return Action::OpenKnownSite(site.key.to_string());
    }

    // 5. Literal URL shape.
    if looks_like_url(raw, &lower) {
        let url = if lower.starts_with("http://") || lower.starts_with("https://") {
            raw.to_string()
        } else {
            format!("http://{}", raw)
        };
        return Action::OpenLiteralUrl(url);
    }

    // 6. Embedded "query + site/engine" phrase.
    if let Some(found) = crate::extractor::extract(raw, catalog) {
        return match found.kind {
            crate::extractor::PhraseKind::SiteSearch => Action::SiteSearch {
                site: found.target_key,
                query: found.query,
            },
            crate::extractor::PhraseKind::EngineSearch => Action::EngineSearch {
                engine: found.target_key,
                query: found.query,
            },
        };
    }

    // 7. Everything else is a query for the session's default engine.
    Action::DefaultEngineSearch(raw.to_string())
}

/// Rule 2 of the cascade. Returns `None` when the input is not a built-in
/// verb so the remaining rules get their turn.
fn route_builtin(raw: &str, lower: &str, catalog: &Catalog) -> Option<Action> {
    match lower {
        "help" | "list" | "ls" | "man" => return Some(Action::ShowHelp),
        "clear hist" | "clear history" => return Some(Action::ClearHistory),
        "list engines" => return Some(Action::ListEngines),
        "list groups" | "groups" => return Some(Action::ListGroups),
        "show history" | "history" => return Some(Action::ShowHistory),
        "date" => return Some(Action::DateTimeQuery(DateTimeKind::Date)),
        "time" => return Some(Action::DateTimeQuery(DateTimeKind::Time)),
        "datetime" | "now" => return Some(Action::DateTimeQuery(DateTimeKind::Full)),
        "paste" => return Some(Action::ClipboardPaste),
        "pwd" => return Some(Action::Pwd),
        "dir" => return Some(Action::Ls(None)),
        _ => {}
    }

    if let Some(name) = strip_prefix(raw, lower, "theme ") {
        return Some(if name.is_empty() {
            Action::Usage("Usage: theme <light|dark>".to_string())
        } else {
            Action::SetTheme(name.to_lowercase())
        });
    }

    for prefix in ["set engine ", "use engine "] {
        if let Some(name) = strip_prefix(raw, lower, prefix) {
            return Some(if name.is_empty() {
                Action::Usage("Usage: set engine <engine_name>".to_string())
            } else {
                Action::SetDefaultEngine(name.to_string())
            });
        }
    }

    if first_token(lower) == Some("cal") || first_token(lower) == Some("calendar") {
        return Some(parse_calendar(lower));
    }

    if let Some(text) = strip_prefix(raw, lower, "copy ") {
        return Some(if text.is_empty() {
            Action::Usage("Usage: copy <text to copy>".to_string())
        } else {
            Action::ClipboardCopy(text.to_string())
        });
    }

    if let Some(path) = strip_prefix(raw, lower, "cd ") {
        if !path.is_empty() {
            return Some(Action::Cd(path.to_string()));
        }
    }

    for prefix in ["ls ", "dir "] {
        if let Some(path) = strip_prefix(raw, lower, prefix) {
            if !path.is_empty() {
                return Some(Action::Ls(Some(path.to_string())));
            }
            return Some(Action::Ls(None));
        }
    }

    if lower == "genpass" || lower.starts_with("genpass ") {
        return Some(parse_genpass(raw));
    }

    if let Some(rest) = strip_prefix(raw, lower, "open ") {
        let rest_lower = rest.to_lowercase();
        if let Some(path) = strip_prefix(rest, &rest_lower, "file ") {
            if !path.is_empty() {
                return Some(Action::OpenFile(PathBuf::from(path)));
            }
            return Some(Action::Usage("Usage: open file <path>".to_string()));
        }
        if let Some(name) = strip_prefix(rest, &rest_lower, "group ") {
            if !name.is_empty() {
                return Some(Action::OpenSiteGroup(name.to_lowercase()));
            }
            return Some(Action::Usage("Usage: open group <group_name>".to_string()));
        }
        if catalog.app(&rest_lower).is_some() {
            return Some(Action::LaunchLocalApp(rest_lower));
        }
        // Not an app, file or group: let "open cats on youtube" fall
        // through to the extractor.
    }

    None
}

/// Case-insensitive prefix match on `lower` that slices the original text,
/// preserving the case of whatever follows the verb.
fn strip_prefix<'a>(raw: &'a str, lower: &str, prefix: &str) -> Option<&'a str> {
    if lower.starts_with(prefix) {
        raw.get(prefix.len()..).map(str::trim)
    } else {
        None
    }
}

fn first_token(lower: &str) -> Option<&str> {
    lower.split_whitespace().next()
}

/// `cal [month] [year]`: one numeric argument in 1..=12 is a month,
/// anything else is a year; years outside 1900..=2200 are rejected.
fn parse_calendar(lower: &str) -> Action {
    let usage = || Action::Usage("Calendar error. Use 'cal [month] [year]'".to_string());
    let now = chrono::Local::now();
    let (mut month, mut year) = (now.month(), now.year());

    let parts: Vec<&str> = lower.split_whitespace().collect();
    match parts.len() {
        1 => {}
        2 => match parts[1].parse::<i32>() {
            Ok(value) if (1..=12).contains(&value) => month = value as u32,
            Ok(value) => year = value,
            Err(_) => return usage(),
        },
        3 => {
            match (parts[1].parse::<u32>(), parts[2].parse::<i32>()) {
                (Ok(m), Ok(y)) => {
                    month = m;
                    year = y;
                }
                _ => return usage(),
            }
        }
        _ => return usage(),
    }

    if !(1..=12).contains(&month) || !(1900..=2200).contains(&year) {
        return usage();
    }
    Action::CalendarQuery { month, year }
}

/// `genpass [length] [-flags]`: length clamped to 8..=128, default 16.
/// Flag characters toggle classes (u/l/n|d/s|p); a flag string that
/// enables nothing falls back to upper+lower+digits.
fn parse_genpass(raw: &str) -> Action {
    let parts: Vec<&str> = raw.split_whitespace().collect();

    let mut length: usize = 16;
    if parts.len() > 1 {
        match parts[1].parse::<usize>() {
            Ok(value) => length = value,
            Err(_) => {
                return Action::Usage(
                    "Invalid length for genpass. Usage: genpass [length] [-ulnsp]".to_string(),
                )
            }
        }
    }
    length = length.clamp(8, 128);

    let (mut upper, mut lower, mut digits, mut symbols) = (true, true, true, false);
    if parts.len() > 2 {
        let opts = parts[2].to_lowercase();
        upper = opts.contains('u');
        lower = opts.contains('l');
        digits = opts.contains('n') || opts.contains('d');
        symbols = opts.contains('s') || opts.contains('p');
        if !(upper || lower || digits || symbols) {
            (upper, lower, digits) = (true, true, true);
        }
    }

    Action::GenPass {
        length,
        upper,
        lower,
        digits,
        symbols,
    }
}

/// Literal-URL shape: an explicit scheme or `www.` prefix, a bare domain
/// with an alphabetic TLD, or a dotted token with a path/port separator.
/// Whitespace or an existing local file of the same name disqualify the
/// structural branches.
fn looks_like_url(raw: &str, lower: &str) -> bool {
    if URL_RE.is_match(lower) {
        return true;
    }
    if raw.chars().any(char::is_whitespace) || Path::new(raw).is_file() {
        return false;
    }
    if DOMAIN_RE.is_match(lower) {
        return true;
    }
    raw.contains('.') && (raw.contains('/') || raw.contains(':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::new("Google", "light")
    }

    fn route_one(input: &str) -> Action {
        route(input, &Catalog::builtin(), &session())
    }

    #[test]
    fn exit_keywords() {
        assert_eq!(route_one("exit"), Action::Exit);
        assert_eq!(route_one("QUIT"), Action::Exit);
        assert_eq!(route_one("q"), Action::Exit);
    }

    #[test]
    fn bare_ls_is_help_but_ls_with_path_lists() {
        assert_eq!(route_one("ls"), Action::ShowHelp);
        assert_eq!(route_one("ls /tmp"), Action::Ls(Some("/tmp".to_string())));
        assert_eq!(route_one("dir"), Action::Ls(None));
        assert_eq!(route_one("dir src"), Action::Ls(Some("src".to_string())));
    }

    #[test]
    fn theme_and_engine_builtins() {
        assert_eq!(route_one("theme dark"), Action::SetTheme("dark".to_string()));
        assert_eq!(
            route_one("set engine ddg"),
            Action::SetDefaultEngine("ddg".to_string())
        );
        assert_eq!(
            route_one("use engine Brave"),
            Action::SetDefaultEngine("Brave".to_string())
        );
        assert!(matches!(route_one("set engine "), Action::Usage(_)));
    }

    #[test]
    fn datetime_kinds() {
        assert_eq!(route_one("date"), Action::DateTimeQuery(DateTimeKind::Date));
        assert_eq!(route_one("time"), Action::DateTimeQuery(DateTimeKind::Time));
        assert_eq!(route_one("now"), Action::DateTimeQuery(DateTimeKind::Full));
    }

    #[test]
    fn calendar_parsing() {
        assert_eq!(
            route_one("cal 7 2026"),
            Action::CalendarQuery { month: 7, year: 2026 }
        );
        // Single argument <= 12 is a month of the current year.
        assert!(matches!(route_one("cal 3"), Action::CalendarQuery { month: 3, .. }));
        // Single large argument is a year.
        assert!(
            matches!(route_one("cal 2027"), Action::CalendarQuery { year: 2027, .. })
        );
        assert!(matches!(route_one("cal 13 2026"), Action::Usage(_)));
        assert!(matches!(route_one("cal 1 1492"), Action::Usage(_)));
        assert!(matches!(route_one("cal next month"), Action::Usage(_)));
        // Keyword match is on the first token only; "calories in pizza"
        // is a search, not a calendar request.
        assert_eq!(
            route_one("calories in pizza"),
            Action::DefaultEngineSearch("calories in pizza".to_string())
        );
    }

    #[test]
    fn genpass_defaults_and_clamping() {
        assert_eq!(
            route_one("genpass"),
            Action::GenPass { length: 16, upper: true, lower: true, digits: true, symbols: false }
        );
        assert!(matches!(route_one("genpass 4"), Action::GenPass { length: 8, .. }));
        assert!(matches!(route_one("genpass 999"), Action::GenPass { length: 128, .. }));
        assert!(matches!(route_one("genpass abc"), Action::Usage(_)));
    }

    #[test]
    fn genpass_flag_parsing() {
        assert_eq!(
            route_one("genpass 20 -us"),
            Action::GenPass { length: 20, upper: true, lower: false, digits: false, symbols: true }
        );
        // Flags that toggle nothing fall back to upper+lower+digits.
        assert_eq!(
            route_one("genpass 20 -xyz"),
            Action::GenPass { length: 20, upper: true, lower: true, digits: true, symbols: false }
        );
    }

    #[test]
    fn copy_preserves_case_and_requires_text() {
        assert_eq!(
            route_one("copy Hello World"),
            Action::ClipboardCopy("Hello World".to_string())
        );
        assert!(matches!(route_one("copy "), Action::Usage(_)));
        assert_eq!(route_one("paste"), Action::ClipboardPaste);
    }

    #[test]
    fn open_forms() {
        assert_eq!(
            route_one("open calculator"),
            Action::LaunchLocalApp("calculator".to_string())
        );
        assert_eq!(
            route_one("open file /tmp/notes.txt"),
            Action::OpenFile(PathBuf::from("/tmp/notes.txt"))
        );
        assert_eq!(
            route_one("open group dev"),
            Action::OpenSiteGroup("dev".to_string())
        );
        // Unknown app: falls through to the extractor.
        assert_eq!(
            route_one("open cats on youtube"),
            Action::SiteSearch { site: "YouTube".to_string(), query: "open cats".to_string() }
        );
    }

    #[test]
    fn special_cases_beat_site_names() {
        // "python docs" is both a special case and a site key; the
        // special case wins and carries its fixed URL.
        assert_eq!(
            route_one("python docs"),
            Action::OpenLiteralUrl("https://docs.python.org/3/".to_string())
        );
        assert_eq!(route_one("current time"), Action::DateTimeQuery(DateTimeKind::Full));
        assert_eq!(
            route_one("weather forecast"),
            Action::DefaultEngineSearch("weather forecast".to_string())
        );
        // Case-sensitive: "Gmail" is not the trigger "gmail" - it falls
        // through and becomes a default search.
        assert_eq!(
            route_one("gmail"),
            Action::OpenLiteralUrl("https://mail.google.com/".to_string())
        );
        assert_eq!(
            route_one("Gmail"),
            Action::DefaultEngineSearch("Gmail".to_string())
        );
    }

    #[test]
    fn site_name_opens_homepage() {
        assert_eq!(route_one("reddit"), Action::OpenKnownSite("Reddit".to_string()));
        assert_eq!(route_one("YT"), Action::OpenKnownSite("YouTube".to_string()));
    }

    #[test]
    fn alias_vs_url_shape_precedence() {
        // "x" is exactly a Twitter alias; "x.com" is URL-shaped and must
        // never resolve via alias matching.
        assert_eq!(route_one("x"), Action::OpenKnownSite("Twitter".to_string()));
        assert_eq!(
            route_one("x.com"),
            Action::OpenLiteralUrl("http://x.com".to_string())
        );
        assert_eq!(
            route_one("x.com/some/path"),
            Action::OpenLiteralUrl("http://x.com/some/path".to_string())
        );
    }

    #[test]
    fn url_shapes() {
        assert_eq!(
            route_one("https://example.com"),
            Action::OpenLiteralUrl("https://example.com".to_string())
        );
        assert_eq!(
            route_one("www.example.com"),
            Action::OpenLiteralUrl("http://www.example.com".to_string())
        );
        assert_eq!(
            route_one("localhost.dev:8080"),
            Action::OpenLiteralUrl("http://localhost.dev:8080".to_string())
        );
        // Whitespace disqualifies the structural branch.
        assert_eq!(
            route_one("not a url / at all"),
            Action::DefaultEngineSearch("not a url / at all".to_string())
        );
    }

    #[test]
    fn extractor_results_map_to_search_actions() {
        assert_eq!(
            route_one("python tutorial on stack overflow"),
            Action::SiteSearch {
                site: "Stack Overflow".to_string(),
                query: "python tutorial".to_string()
            }
        );
        assert_eq!(
            route_one("cats via duckduckgo"),
            Action::EngineSearch {
                engine: "DuckDuckGo".to_string(),
                query: "cats".to_string()
            }
        );
    }

    #[test]
    fn fallback_is_default_engine_search() {
        assert_eq!(
            route_one("blah blah blah"),
            Action::DefaultEngineSearch("blah blah blah".to_string())
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let catalog = Catalog::builtin();
        let session = session();
        for input in ["reddit", "cats on youtube", "genpass 42", "x.com:443"] {
            let first = route(input, &catalog, &session);
            let second = route(input, &catalog, &session);
            assert_eq!(first, second, "{}", input);
        }
    }
}
