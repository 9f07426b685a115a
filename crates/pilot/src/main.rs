//! Pilot - command-line browser & app launcher
//!
//! One line of free-form text in, one resolved action out: open a URL,
//! search a known site or engine, run a built-in utility, or fall back to
//! the default web search.

use anyhow::Result;
use clap::Parser;
use pilot::cli::{Cli, Commands};
use pilot::{help, repl, router};
use pilot_common::config::Config;
use pilot_common::{Catalog, SessionState};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin();
    let config = Config::load()?;
    let mut session = build_session(&catalog, &config);

    match cli.command {
        None => repl::run(&catalog, &mut session),
        Some(Commands::Exec { input }) => {
            let raw = input.join(" ");
            let raw = raw.trim();
            if raw.is_empty() {
                println!("Usage: pilot exec <command line>");
                return Ok(());
            }
            let action = router::route(raw, &catalog, &session);
            let outcome = repl::process(raw, &action, &catalog, &mut session);
            if !outcome.ok {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Engines) => {
            println!("{}", help::render_engines(&catalog, &session));
            Ok(())
        }
        Some(Commands::Groups) => {
            println!("{}", help::render_groups(&catalog));
            Ok(())
        }
    }
}

/// Build the session from config, falling back to the first catalog
/// engine when the configured default does not resolve.
fn build_session(catalog: &Catalog, config: &Config) -> SessionState {
    let engine_key = match catalog.resolve_engine(&config.default_engine) {
        Some(engine) => engine.key.to_string(),
        None => {
            let fallback = catalog.engines[0].key.to_string();
            warn!(
                configured = %config.default_engine,
                fallback = %fallback,
                "configured default engine not found"
            );
            fallback
        }
    };
    let theme = if pilot_common::display::Theme::from_name(&config.theme).is_some() {
        config.theme.clone()
    } else {
        warn!(configured = %config.theme, "unknown theme in config, using light");
        "light".to_string()
    };
    SessionState::new(engine_key, theme)
}
