//! Help text and catalog listings, rendered engine-aware.

use pilot_common::{Catalog, SessionState};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Full help text. Mentions the active default engine so examples stay
/// truthful after `set engine`.
pub fn render(catalog: &Catalog, session: &SessionState) -> String {
    let engine = &session.default_engine_key;
    let mut out = format!(
        "--- pilot v{} help ---\n\
         Default Engine: {engine}. Type 'list engines' or 'set engine <name>'.\n\
         \n\
         General Web:\n\
         \x20 <url>                      - Opens URL (e.g., https://example.com)\n\
         \x20 <site_name_or_alias>       - Opens known site's homepage (e.g., YouTube)\n\
         \x20 <query>                    - Searches query on {engine}\n\
         \x20 <query> via/using <engine> - Search with a specific engine (e.g. 'cats via DuckDuckGo')\n\
         \x20 <query> on <site>          - Search on a site (e.g. 'python tutorial on Stack Overflow')\n\
         \x20 <special_command>          - (e.g., 'gmail', 'weather forecast', 'python docs')\n\
         \n\
         Local Apps & Files:\n\
         \x20 open calculator / notepad / terminal\n\
         \x20 open file <path>\n\
         \x20 open group <group_name>\n\
         \n\
         Internal Tools:\n\
         \x20 date / time / datetime / now - Current date/time info\n\
         \x20 cal [month] [year]         - Text calendar\n\
         \x20 copy <text>                - Copy text to clipboard\n\
         \x20 paste                      - Show clipboard contents\n\
         \x20 pwd                        - Show internal current working directory\n\
         \x20 cd <path>                  - Change internal directory (cd .., cd ~)\n\
         \x20 ls / dir [path]            - List directory contents\n\
         \x20 genpass [len] [-ulnsp]     - Generate password (u:upper, l:lower, n:num, s:symbol)\n\
         \n\
         Session & Other:\n\
         \x20 theme light/dark           - Switch display palette\n\
         \x20 help / list engines / list groups / show history / clear hist / exit\n",
        VERSION,
    );

    out.push_str("--- Known Sites (type full site name or alias to open) ---\n");
    let mut sites: Vec<_> = catalog.sites.iter().collect();
    sites.sort_by_key(|s| s.key);
    for site in sites.iter().take(12) {
        match site.aliases.first() {
            Some(alias) => out.push_str(&format!("  - {} (Alias: {})\n", site.key, alias)),
            None => out.push_str(&format!("  - {}\n", site.key)),
        }
    }
    if sites.len() > 12 {
        out.push_str("  ...and more!\n");
    }

    out.push_str("--- Special Commands (sample) ---\n");
    let mut triggers: Vec<&str> = catalog.special_cases.iter().map(|c| c.trigger).collect();
    triggers.sort();
    for trigger in triggers.iter().take(8) {
        out.push_str(&format!("  - {}\n", trigger));
    }
    if triggers.len() > 8 {
        out.push_str("  ...and more!\n");
    }
    out
}

/// One line per engine, aliases and description included, default marked.
pub fn render_engines(catalog: &Catalog, session: &SessionState) -> String {
    let mut lines = vec!["--- Available Search Engines ---".to_string()];
    for engine in &catalog.engines {
        let aliases = if engine.aliases.is_empty() {
            String::new()
        } else {
            format!(" (Aliases: {})", engine.aliases.join(", "))
        };
        let description = engine
            .description
            .map(|d| format!(" - {}", d))
            .unwrap_or_default();
        let default = if engine.key == session.default_engine_key {
            " (DEFAULT)"
        } else {
            ""
        };
        lines.push(format!("  - {}{}{}{}", engine.key, aliases, description, default));
    }
    lines.push("Use 'set engine <name>' to change default.".to_string());
    lines.join("\n")
}

pub fn render_groups(catalog: &Catalog) -> String {
    let mut lines = vec!["--- Available Site Groups ---".to_string()];
    if catalog.groups.is_empty() {
        lines.push("(No site groups defined)".to_string());
    }
    for group in &catalog.groups {
        lines.push(format!("  Group '{}': {}", group.name, group.sites.join(", ")));
    }
    lines.push("Use 'open group <group_name>' to open all.".to_string());
    lines.join("\n")
}

pub fn render_history(session: &SessionState) -> String {
    let mut lines = vec!["--- Command History (Current Session) ---".to_string()];
    if session.history_len() == 0 {
        lines.push("(History is empty)".to_string());
    }
    for (i, entry) in session.history().enumerate() {
        lines.push(format!("{}: {}", i + 1, entry));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_names_the_active_engine() {
        let catalog = Catalog::builtin();
        let mut session = SessionState::new("Google", "light");
        assert!(render(&catalog, &session).contains("Default Engine: Google"));
        session.default_engine_key = "DuckDuckGo".to_string();
        assert!(render(&catalog, &session).contains("Default Engine: DuckDuckGo"));
    }

    #[test]
    fn engine_listing_marks_the_default() {
        let catalog = Catalog::builtin();
        let session = SessionState::new("DuckDuckGo", "light");
        let listing = render_engines(&catalog, &session);
        assert!(listing.contains("DuckDuckGo (Aliases: ddg) (DEFAULT)"));
        assert!(!listing.contains("Google (Aliases: google) (DEFAULT)"));
    }

    #[test]
    fn empty_history_renders_placeholder() {
        let session = SessionState::new("Google", "light");
        assert!(render_history(&session).contains("(History is empty)"));
    }

    #[test]
    fn history_entries_are_numbered_oldest_first() {
        let mut session = SessionState::new("Google", "light");
        session.push_history("first");
        session.push_history("second");
        let text = render_history(&session);
        assert!(text.contains("1: first"));
        assert!(text.contains("2: second"));
    }
}
