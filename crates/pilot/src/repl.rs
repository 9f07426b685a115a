//! REPL - the interactive loop.
//!
//! One command is fully classified and dispatched before the next line is
//! read; the blocking stdin read is the only wait state.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use pilot_common::display::{self, MessageClass, Theme};
use pilot_common::{Action, Catalog, Outcome, SessionState};
use tracing::debug;

use crate::executor;
use crate::logging::{action_kind, LogEntry};
use crate::router;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the interactive loop until `exit` or EOF.
pub fn run(catalog: &Catalog, session: &mut SessionState) -> Result<()> {
    display::print_header("pilot", VERSION);
    theme(session).print(
        MessageClass::Info,
        "Welcome! Type 'help' for commands, 'exit' to leave.",
    );
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        display::print_status_line(&session.default_engine_key, &session.working_directory);
        print!("{} ", display::symbols::PROMPT);
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => {
                theme(session).print(MessageClass::Error, &format!("Error reading input: {}", e));
                continue;
            }
            None => break, // EOF
        };

        if input.is_empty() {
            continue;
        }

        theme(session).print(MessageClass::CommandEcho, &input);

        let action = router::route(&input, catalog, session);
        debug!(input = %input, action = action_kind(&action), "classified");

        if action == Action::Exit {
            theme(session).print(MessageClass::Info, "Goodbye!");
            break;
        }

        process(&input, &action, catalog, session);
        println!();
    }

    Ok(())
}

/// Dispatch one classified action: execute, print, record, log.
pub fn process(raw: &str, action: &Action, catalog: &Catalog, session: &mut SessionState) -> Outcome {
    let started = Instant::now();
    let outcome = executor::dispatch(action, catalog, session);

    if matches!(action, Action::ShowHistory) && outcome.ok {
        // Header stays plain; the entries themselves get the history tint.
        let mut lines = outcome.message.lines();
        if let Some(header) = lines.next() {
            theme(session).print(MessageClass::Info, header);
        }
        for line in lines {
            theme(session).print(MessageClass::History, line);
        }
    } else if !outcome.ok {
        theme(session).print(MessageClass::Error, &outcome.message);
    } else {
        theme(session).print(message_class(action), &outcome.message);
    }

    executor::record_history(action, raw, &outcome, session);

    let entry = LogEntry {
        ts: LogEntry::now(),
        req_id: LogEntry::generate_req_id(),
        input: raw.to_string(),
        action: action_kind(action).to_string(),
        ok: outcome.ok,
        duration_ms: started.elapsed().as_millis() as u64,
    };
    let _ = entry.write();

    outcome
}

fn theme(session: &SessionState) -> Theme {
    Theme::from_name(&session.theme).unwrap_or(Theme::Light)
}

/// Successful session/effect commands read as green, informational
/// lookups as plain text; failures are handled by the caller.
fn message_class(action: &Action) -> MessageClass {
    match action {
        Action::SetTheme(_)
        | Action::SetDefaultEngine(_)
        | Action::ClearHistory
        | Action::ClipboardCopy(_)
        | Action::Cd(_)
        | Action::GenPass { .. }
        | Action::LaunchLocalApp(_)
        | Action::OpenFile(_)
        | Action::OpenSiteGroup(_)
        | Action::OpenLiteralUrl(_)
        | Action::OpenKnownSite(_)
        | Action::SiteSearch { .. }
        | Action::EngineSearch { .. }
        | Action::DefaultEngineSearch(_) => MessageClass::Success,
        _ => MessageClass::Info,
    }
}
