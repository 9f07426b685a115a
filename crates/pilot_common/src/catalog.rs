//! Static reference tables: search engines, known sites, special-case
//! phrases, site groups and local applications.
//!
//! The catalog is built once at startup and never mutated. Entries are kept
//! in `Vec`s rather than maps because declaration order is the documented
//! tie-break when an alias resolves to more than one entry.

use tracing::warn;

/// A web search engine with a `{query}` URL template.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    pub key: &'static str,
    pub url_template: &'static str,
    pub aliases: &'static [&'static str],
    pub description: Option<&'static str>,
}

/// A site the user can open by name, optionally searchable.
#[derive(Debug, Clone)]
pub struct KnownSite {
    pub key: &'static str,
    pub base_url: &'static str,
    /// Absent when the site has no usable search endpoint.
    pub search_url_template: Option<&'static str>,
    pub aliases: &'static [&'static str],
    pub description: Option<&'static str>,
}

/// What a special-case phrase resolves to.
///
/// `Search` and `DateTime` are resolved against the *current* session state
/// at dispatch time, so "weather forecast" always uses whichever engine is
/// the default when the phrase is typed, not when the catalog was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialAction {
    /// Open a fixed destination URL.
    Open(&'static str),
    /// Run the current default engine over a fixed query.
    Search(&'static str),
    /// Show the current date and time.
    DateTime,
}

/// Exact-phrase shortcut.
#[derive(Debug, Clone)]
pub struct SpecialCase {
    pub trigger: &'static str,
    pub action: SpecialAction,
}

/// Named, ordered collection of known-site keys.
#[derive(Debug, Clone)]
pub struct SiteGroup {
    pub name: &'static str,
    pub sites: &'static [&'static str],
}

/// A local application with per-OS launch commands.
#[derive(Debug, Clone)]
pub struct LocalApp {
    pub key: &'static str,
    /// Key-to-key indirection, e.g. "text editor" -> "notepad".
    pub alias_of: Option<&'static str>,
    pub windows: Option<&'static str>,
    pub macos: Option<&'static str>,
    /// Candidates probed in order with `which` on Linux.
    pub linux: &'static [&'static str],
}

/// The full immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub engines: Vec<SearchEngine>,
    pub sites: Vec<KnownSite>,
    pub special_cases: Vec<SpecialCase>,
    pub groups: Vec<SiteGroup>,
    pub apps: Vec<LocalApp>,
}

impl Catalog {
    /// Build the built-in catalog and warn about alias collisions.
    pub fn builtin() -> Self {
        let catalog = Catalog {
            engines: builtin_engines(),
            sites: builtin_sites(),
            special_cases: builtin_special_cases(),
            groups: builtin_groups(),
            apps: builtin_apps(),
        };
        catalog.warn_on_alias_collisions();
        catalog
    }

    /// Resolve a user-supplied token to an engine, case-insensitively,
    /// against canonical keys and aliases. First declared entry wins.
    pub fn resolve_engine(&self, token: &str) -> Option<&SearchEngine> {
        let token = token.trim().to_lowercase();
        self.engines.iter().find(|e| {
            e.key.to_lowercase() == token || e.aliases.iter().any(|a| *a == token)
        })
    }

    /// Resolve a user-supplied token to a known site. Same rules as
    /// [`Self::resolve_engine`].
    pub fn resolve_site(&self, token: &str) -> Option<&KnownSite> {
        let token = token.trim().to_lowercase();
        self.sites.iter().find(|s| {
            s.key.to_lowercase() == token || s.aliases.iter().any(|a| *a == token)
        })
    }

    /// Look up an engine by its canonical key.
    pub fn engine(&self, key: &str) -> Option<&SearchEngine> {
        self.engines.iter().find(|e| e.key == key)
    }

    /// Look up a site by its canonical key.
    pub fn site(&self, key: &str) -> Option<&KnownSite> {
        self.sites.iter().find(|s| s.key == key)
    }

    /// Exact case-sensitive special-case lookup.
    pub fn special_case(&self, input: &str) -> Option<&SpecialCase> {
        self.special_cases.iter().find(|c| c.trigger == input)
    }

    pub fn group(&self, name: &str) -> Option<&SiteGroup> {
        let name = name.trim().to_lowercase();
        self.groups.iter().find(|g| g.name == name)
    }

    /// Resolve a local app key or alias to its launch entry.
    pub fn app(&self, key: &str) -> Option<&LocalApp> {
        let key = key.trim().to_lowercase();
        let found = self.apps.iter().find(|a| a.key == key)?;
        match found.alias_of {
            Some(target) => self.apps.iter().find(|a| a.key == target),
            None => Some(found),
        }
    }

    /// Duplicate aliases are resolved by declaration order; that is easy to
    /// get wrong when editing the tables, so flag them at load.
    fn warn_on_alias_collisions(&self) {
        let mut seen: Vec<(&str, &str)> = Vec::new();
        for engine in &self.engines {
            for alias in engine.aliases.iter().copied() {
                if let Some(&(_, first)) = seen.iter().find(|(a, _)| *a == alias) {
                    warn!(alias, first, second = engine.key, "duplicate engine alias");
                } else {
                    seen.push((alias, engine.key));
                }
            }
        }
        seen.clear();
        for site in &self.sites {
            for alias in site.aliases.iter().copied() {
                if let Some(&(_, first)) = seen.iter().find(|(a, _)| *a == alias) {
                    warn!(alias, first, second = site.key, "duplicate site alias");
                } else {
                    seen.push((alias, site.key));
                }
            }
        }
    }
}

fn builtin_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine {
            key: "Google",
            url_template: "https://www.google.com/search?q={query}",
            aliases: &["google"],
            description: None,
        },
        SearchEngine {
            key: "DuckDuckGo",
            url_template: "https://duckduckgo.com/?q={query}",
            aliases: &["ddg"],
            description: None,
        },
        SearchEngine {
            key: "Bing",
            url_template: "https://www.bing.com/search?q={query}",
            aliases: &[],
            description: None,
        },
        SearchEngine {
            key: "Brave Search",
            url_template: "https://search.brave.com/search?q={query}",
            aliases: &["brave"],
            description: None,
        },
        SearchEngine {
            key: "Yahoo",
            url_template: "https://search.yahoo.com/search?p={query}",
            aliases: &[],
            description: None,
        },
        SearchEngine {
            key: "Startpage",
            url_template: "https://www.startpage.com/do/search?query={query}",
            aliases: &["start page"],
            description: Some("Private search (uses Google results)."),
        },
        SearchEngine {
            key: "Ecosia",
            url_template: "https://www.ecosia.org/search?q={query}",
            aliases: &[],
            description: Some("Search engine that plants trees."),
        },
        SearchEngine {
            key: "Qwant",
            url_template: "https://www.qwant.com/?q={query}",
            aliases: &[],
            description: Some("European privacy-focused search engine."),
        },
        SearchEngine {
            key: "Perplexity AI",
            url_template: "https://www.perplexity.ai/search?q={query}",
            aliases: &["perplexity"],
            description: Some("AI-powered search and answer engine."),
        },
    ]
}

fn builtin_sites() -> Vec<KnownSite> {
    vec![
        KnownSite {
            key: "Amazon",
            base_url: "https://www.amazon.com",
            search_url_template: Some("https://www.amazon.com/s?k={query}"),
            aliases: &["亚马逊"],
            description: Some("Global e-commerce."),
        },
        KnownSite {
            key: "Wikipedia",
            base_url: "https://en.wikipedia.org",
            search_url_template: Some("https://en.wikipedia.org/w/index.php?search={query}"),
            aliases: &["wiki", "维基百科"],
            description: Some("Free encyclopedia."),
        },
        KnownSite {
            key: "YouTube",
            base_url: "https://www.youtube.com",
            search_url_template: Some("https://www.youtube.com/results?search_query={query}"),
            aliases: &["yt", "油管"],
            description: Some("Video platform."),
        },
        KnownSite {
            key: "GitHub",
            base_url: "https://github.com/",
            search_url_template: Some("https://github.com/search?q={query}"),
            aliases: &[],
            description: Some("Code hosting."),
        },
        KnownSite {
            key: "Stack Overflow",
            base_url: "https://stackoverflow.com",
            search_url_template: Some("https://stackoverflow.com/search?q={query}"),
            aliases: &["so"],
            description: Some("Q&A for programmers."),
        },
        KnownSite {
            key: "MDN Web Docs",
            base_url: "https://developer.mozilla.org/",
            search_url_template: Some("https://developer.mozilla.org/en-US/search?q={query}"),
            aliases: &["mdn"],
            description: Some("Mozilla Web Docs."),
        },
        KnownSite {
            key: "Reddit",
            base_url: "https://www.reddit.com",
            search_url_template: Some("https://www.reddit.com/search/?q={query}"),
            aliases: &[],
            description: Some("News aggregation and discussion forums."),
        },
        KnownSite {
            key: "Twitter",
            base_url: "https://twitter.com",
            search_url_template: Some("https://twitter.com/search?q={query}&src=typed_query"),
            aliases: &["推特", "x"],
            description: Some("Microblogging and social networking."),
        },
        KnownSite {
            key: "BBC News",
            base_url: "https://www.bbc.com/news",
            search_url_template: Some("https://www.bbc.co.uk/search?q={query}"),
            aliases: &["bbc"],
            description: Some("British Broadcasting Corporation News."),
        },
        KnownSite {
            key: "CNN",
            base_url: "https://www.cnn.com",
            search_url_template: Some("https://www.cnn.com/search?q={query}"),
            aliases: &[],
            description: Some("Cable News Network."),
        },
        KnownSite {
            key: "New York Times",
            base_url: "https://www.nytimes.com",
            search_url_template: Some("https://www.nytimes.com/search?query={query}"),
            aliases: &["nyt", "纽约时报"],
            description: Some("American newspaper of record."),
        },
        KnownSite {
            key: "Reuters",
            base_url: "https://www.reuters.com",
            search_url_template: Some("https://www.reuters.com/site-search/?query={query}"),
            aliases: &[],
            description: Some("International news agency."),
        },
        KnownSite {
            key: "Instagram",
            base_url: "https://www.instagram.com",
            search_url_template: None,
            aliases: &["ig"],
            description: Some("Photo and video sharing."),
        },
        KnownSite {
            key: "LinkedIn",
            base_url: "https://www.linkedin.com",
            search_url_template: Some(
                "https://www.linkedin.com/search/results/all/?keywords={query}",
            ),
            aliases: &["领英"],
            description: Some("Professional networking."),
        },
        KnownSite {
            key: "Python docs",
            base_url: "https://docs.python.org/3/",
            search_url_template: Some("https://docs.python.org/3/search.html?q={query}"),
            aliases: &[],
            description: Some("Official Python documentation."),
        },
        KnownSite {
            key: "Wayback Machine",
            base_url: "https://web.archive.org/",
            search_url_template: Some("https://web.archive.org/web/*/{query}*"),
            aliases: &["archive.org"],
            description: Some("Internet Archive."),
        },
        KnownSite {
            key: "Fandom",
            base_url: "https://www.fandom.com/",
            search_url_template: Some("https://www.fandom.com/?s={query}"),
            aliases: &["wikia"],
            description: Some("Community-focused wiki hosting."),
        },
    ]
}

fn builtin_special_cases() -> Vec<SpecialCase> {
    vec![
        SpecialCase {
            trigger: "gmail",
            action: SpecialAction::Open("https://mail.google.com/"),
        },
        SpecialCase {
            trigger: "google maps",
            action: SpecialAction::Open("https://maps.google.com/"),
        },
        SpecialCase {
            trigger: "python docs",
            action: SpecialAction::Open("https://docs.python.org/3/"),
        },
        SpecialCase {
            trigger: "github trending",
            action: SpecialAction::Open("https://github.com/trending"),
        },
        SpecialCase {
            trigger: "speed test",
            action: SpecialAction::Open("https://www.speedtest.net/"),
        },
        SpecialCase {
            trigger: "current time",
            action: SpecialAction::DateTime,
        },
        SpecialCase {
            trigger: "weather forecast",
            action: SpecialAction::Search("weather forecast"),
        },
        SpecialCase {
            trigger: "local weather",
            action: SpecialAction::Search("local weather"),
        },
        SpecialCase {
            trigger: "news headlines",
            action: SpecialAction::Search("news headlines today"),
        },
        SpecialCase {
            trigger: "ip address",
            action: SpecialAction::Search("what is my ip address"),
        },
        SpecialCase {
            trigger: "what is my ip",
            action: SpecialAction::Search("what is my ip"),
        },
    ]
}

fn builtin_groups() -> Vec<SiteGroup> {
    vec![
        SiteGroup {
            name: "news",
            sites: &["BBC News", "CNN", "New York Times", "Reuters"],
        },
        SiteGroup {
            name: "social",
            sites: &["Twitter", "Reddit", "Instagram", "LinkedIn"],
        },
        SiteGroup {
            name: "dev",
            sites: &["GitHub", "Stack Overflow", "MDN Web Docs", "Python docs"],
        },
    ]
}

fn builtin_apps() -> Vec<LocalApp> {
    vec![
        LocalApp {
            key: "calculator",
            alias_of: None,
            windows: Some("calc.exe"),
            macos: Some("Calculator"),
            linux: &["gnome-calculator", "kcalc", "xcalc"],
        },
        LocalApp {
            key: "notepad",
            alias_of: None,
            windows: Some("notepad.exe"),
            macos: Some("TextEdit"),
            linux: &["gedit", "kate", "mousepad"],
        },
        LocalApp {
            key: "text editor",
            alias_of: Some("notepad"),
            windows: None,
            macos: None,
            linux: &[],
        },
        LocalApp {
            key: "terminal",
            alias_of: None,
            windows: Some("cmd.exe"),
            macos: Some("Terminal"),
            linux: &["gnome-terminal", "konsole", "xfce4-terminal", "xterm"],
        },
    ]
}
