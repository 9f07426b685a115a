//! Phrase extractor - pulls an embedded "query + site" or "query + engine"
//! out of loose natural-language input.
//!
//! Patterns are data, not control flow: an ordered table of compiled
//! regexes with named `query` and `site`/`engine` capture groups. Adding a
//! connector word or another language means adding a table row, nothing
//! else. Site patterns are tried entirely before engine patterns, and
//! within each group the most specific prepositional shape comes first;
//! the bare "X Y" form is a catch-all and must stay last.

use once_cell::sync::Lazy;
use pilot_common::Catalog;
use regex::Regex;

/// What a successful extraction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseKind {
    SiteSearch,
    EngineSearch,
}

/// A resolved phrase: query text plus the canonical catalog key it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub kind: PhraseKind,
    pub query: String,
    pub target_key: String,
}

struct Pattern {
    kind: PhraseKind,
    re: Regex,
}

// Site names may carry spaces, dots, apostrophes, ampersands, dashes and
// slashes ("Stack Overflow", "archive.org"); engine names are simpler.
const SITE_CHARS: &str = r"[\w\s.'&/-]+";
const ENGINE_CHARS: &str = r"[\w\s]+";

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    let site = |shape: String| Pattern {
        kind: PhraseKind::SiteSearch,
        re: Regex::new(&shape).expect("invalid site pattern"),
    };
    let engine = |shape: String| Pattern {
        kind: PhraseKind::EngineSearch,
        re: Regex::new(&shape).expect("invalid engine pattern"),
    };
    vec![
        // "search python tutorial on stack overflow"
        site(format!(
            r"(?i)^(?:search|find|look\s+for)\s+(?P<query>.+?)\s+(?:on|in|at|from)\s+(?P<site>{SITE_CHARS})$"
        )),
        // "python tutorial on stack overflow"
        site(format!(
            r"(?i)^(?P<query>.+?)\s+(?:on|in|at|from)\s+(?P<site>{SITE_CHARS})$"
        )),
        // "stack overflow search python tutorial"
        site(format!(
            r"(?i)^(?P<site>{SITE_CHARS}?)\s+(?:search|find|look\s+for)\s+(?P<query>.+)$"
        )),
        // "猫 的 维基百科"
        site(format!(
            r"(?i)^(?P<query>.+?)\s*的\s*(?P<site>{SITE_CHARS})$"
        )),
        // "在 维基百科 搜索 猫" / "在 维基百科 上 查找 猫"
        site(format!(
            r"(?i)^在\s*(?P<site>{SITE_CHARS}?)\s*(?:上)?(?:搜索|查找)\s*(?P<query>.+)$"
        )),
        // "查找 猫 在 维基百科"
        site(format!(
            r"(?i)^(?:搜索|查找)\s*(?P<query>.+?)\s*在\s*(?P<site>{SITE_CHARS})$"
        )),
        // "cats reddit" - catch-all, must stay last among site shapes
        site(format!(
            r"(?i)^(?P<query>.+?)\s+(?P<site>{SITE_CHARS})$"
        )),
        // "cats via duckduckgo"
        engine(format!(
            r"(?i)^(?P<query>.+?)\s+(?:via|using|with\s+engine|on\s+engine)\s+(?P<engine>{ENGINE_CHARS})$"
        )),
        // "search cats via duckduckgo"
        engine(format!(
            r"(?i)^(?:search|find)\s+(?P<query>.+?)\s+(?:via|using|with\s+engine|on\s+engine)\s+(?P<engine>{ENGINE_CHARS})$"
        )),
    ]
});

/// Try each pattern in order; the first whose shape matches *and* whose
/// captured target resolves against the catalog wins. A shape match with an
/// unresolvable target or an empty query is discarded, not a failure - a
/// greedy match must never block a later, differently-shaped pattern.
pub fn extract(raw: &str, catalog: &Catalog) -> Option<PhraseMatch> {
    for pattern in PATTERNS.iter() {
        let Some(caps) = pattern.re.captures(raw) else {
            continue;
        };
        let query = caps.name("query").map(|m| m.as_str().trim()).unwrap_or("");
        if query.is_empty() {
            continue;
        }
        match pattern.kind {
            PhraseKind::SiteSearch => {
                let token = caps.name("site").map(|m| m.as_str().trim()).unwrap_or("");
                if let Some(site) = catalog.resolve_site(token) {
                    return Some(PhraseMatch {
                        kind: PhraseKind::SiteSearch,
                        query: query.to_string(),
                        target_key: site.key.to_string(),
                    });
                }
            }
            PhraseKind::EngineSearch => {
                let token = caps.name("engine").map(|m| m.as_str().trim()).unwrap_or("");
                if let Some(engine) = catalog.resolve_engine(token) {
                    return Some(PhraseMatch {
                        kind: PhraseKind::EngineSearch,
                        query: query.to_string(),
                        target_key: engine.key.to_string(),
                    });
                }
            }
        }
    }
    None
}
