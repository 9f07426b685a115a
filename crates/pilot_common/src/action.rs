//! The resolved action type produced by classifying one input line.

use std::path::PathBuf;

/// Which timestamp rendering the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeKind {
    /// `date` - calendar date with weekday.
    Date,
    /// `time` - wall-clock time.
    Time,
    /// `datetime` / `now` - both.
    Full,
}

impl DateTimeKind {
    pub fn label(&self) -> &'static str {
        match self {
            DateTimeKind::Date => "Current Date",
            DateTimeKind::Time => "Current Time",
            DateTimeKind::Full => "Current Date & Time",
        }
    }
}

/// Exactly one `Action` results from each classified input line.
///
/// The variants mirror the recognized input surface; `Unknown` is only
/// reachable when the default-search fallback is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    ShowHelp,
    ShowHistory,
    ClearHistory,
    SetTheme(String),
    SetDefaultEngine(String),
    ListEngines,
    ListGroups,
    DateTimeQuery(DateTimeKind),
    CalendarQuery { month: u32, year: i32 },
    ClipboardCopy(String),
    ClipboardPaste,
    Pwd,
    Cd(String),
    Ls(Option<String>),
    GenPass {
        length: usize,
        upper: bool,
        lower: bool,
        digits: bool,
        symbols: bool,
    },
    LaunchLocalApp(String),
    OpenFile(PathBuf),
    OpenSiteGroup(String),
    OpenLiteralUrl(String),
    OpenKnownSite(String),
    SiteSearch { site: String, query: String },
    EngineSearch { engine: String, query: String },
    DefaultEngineSearch(String),
    /// Malformed arguments to a built-in verb; carries the usage message.
    Usage(String),
    Unknown(String),
}

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub ok: bool,
    /// User-facing message, passed through verbatim from collaborators.
    pub message: String,
    /// Canonical history description; `None` when nothing should be
    /// recorded beyond the generic failure entry.
    pub description: Option<String>,
}

impl Outcome {
    pub fn success(message: impl Into<String>, description: impl Into<String>) -> Self {
        Outcome {
            ok: true,
            message: message.into(),
            description: Some(description.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome {
            ok: false,
            message: message.into(),
            description: None,
        }
    }
}
