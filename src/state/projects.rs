// Project panel state.
// Stale-while-revalidate over a single cached repository snapshot, plus the
// card shaping shared by cached and fresh renders.

use chrono::{DateTime, Utc};

use crate::github::Repository;

/// Most cards the grid will show.
pub const MAX_CARDS: usize = 9;

/// Shown when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Shown when nothing survives filtering.
pub const EMPTY_PLACEHOLDER: &str = "No public repositories to show.";

/// Loading state for the panel.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Loading,
    Loaded(T),
    Error(String),
}

/// Where the cards currently on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSource {
    FreshCache,
    Network,
    StaleCache,
}

/// A shaped display card for one repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub repo_url: String,
    pub language: Option<String>,
    pub stars: u64,
    pub updated: String,
    pub live_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct ProjectsState {
    pub cards: LoadingState<Vec<ProjectCard>>,
    pub source: Option<CardSource>,
    /// Age of the snapshot when it came from an expired cache entry.
    pub stale_age: Option<std::time::Duration>,
    pub selected: usize,
}

impl ProjectsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panel contents with cards shaped from `repos`.
    /// Returns how many cards survived filtering.
    pub fn render(&mut self, repos: &[Repository], source: CardSource, now: DateTime<Utc>) -> usize {
        self.stale_age = None;
        let cards = build_cards(repos, now);
        let rendered = cards.len();
        self.selected = self.selected.min(rendered.saturating_sub(1));
        self.cards = LoadingState::Loaded(cards);
        self.source = Some(source);
        rendered
    }

    /// Clear the loading placeholder with an error. Only meaningful while
    /// nothing has rendered; rendered content is never replaced by errors.
    pub fn fail(&mut self, message: String) {
        if !self.has_content() {
            self.cards = LoadingState::Error(message);
        }
    }

    /// Whether a render (cached or fresh, even an empty one) has happened.
    pub fn has_content(&self) -> bool {
        matches!(self.cards, LoadingState::Loaded(_))
    }

    pub fn card_count(&self) -> usize {
        match &self.cards {
            LoadingState::Loaded(cards) => cards.len(),
            _ => 0,
        }
    }

    pub fn selected_card(&self) -> Option<&ProjectCard> {
        match &self.cards {
            LoadingState::Loaded(cards) => cards.get(self.selected),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        let count = self.card_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.card_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }
}

/// Filter, order, and cap the raw repository list, then shape cards.
/// Forks and archived repositories never render; the rest sort by last
/// update, newest first, capped at nine.
pub fn build_cards(repos: &[Repository], now: DateTime<Utc>) -> Vec<ProjectCard> {
    let mut kept: Vec<&Repository> = repos.iter().filter(|r| !r.fork && !r.archived).collect();
    kept.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    kept.truncate(MAX_CARDS);
    kept.into_iter().map(|r| card_for(r, now)).collect()
}

fn card_for(repo: &Repository, now: DateTime<Utc>) -> ProjectCard {
    ProjectCard {
        title: pretty_name(&repo.name),
        description: repo
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        repo_url: repo.html_url.clone(),
        language: repo.language.clone(),
        stars: repo.stargazers_count,
        updated: relative_time(repo.updated_at, now),
        live_url: live_url(repo.homepage.as_deref()),
    }
}

/// Human-friendly display name: separator runs become spaces, words get
/// capitalized. "my-cool_project" -> "My Cool Project".
pub fn pretty_name(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A homepage qualifies as a live demo only over http(s).
fn live_url(homepage: Option<&str>) -> Option<String> {
    let url = homepage?;
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(url.to_string())
    } else {
        None
    }
}

/// Elapsed time against coarse unit boundaries: y / mo (~30d) / d / h / m,
/// anything under a minute is "just now".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    relative_span(now.signed_duration_since(then).num_seconds().max(0))
}

/// Format a span of whole seconds the way `relative_time` does.
pub fn relative_span(secs: i64) -> String {
    const UNITS: [(&str, i64); 5] = [
        ("y", 31_536_000),
        ("mo", 2_592_000),
        ("d", 86_400),
        ("h", 3_600),
        ("m", 60),
    ];
    for (unit, size) in UNITS {
        let value = secs / size;
        if value >= 1 {
            return format!("{}{} ago", value, unit);
        }
    }
    "just now".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn repo(name: &str, fork: bool, archived: bool, updated_secs: i64) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/someone/{}", name),
            homepage: None,
            language: None,
            stargazers_count: 0,
            updated_at: Utc.timestamp_opt(updated_secs, 0).unwrap(),
            fork,
            archived,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_forks_and_archived_never_render() {
        let repos = vec![
            repo("keep", false, false, 100),
            repo("a-fork", true, false, 200),
            repo("shelved", false, true, 300),
        ];
        let cards = build_cards(&repos, now());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Keep");
    }

    #[test]
    fn test_card_count_is_min_of_nine_and_survivors() {
        let repos: Vec<Repository> = (0..14).map(|i| repo(&format!("r{}", i), false, false, i)).collect();
        assert_eq!(build_cards(&repos, now()).len(), MAX_CARDS);

        let few: Vec<Repository> = (0..3).map(|i| repo(&format!("r{}", i), false, false, i)).collect();
        assert_eq!(build_cards(&few, now()).len(), 3);
    }

    #[test]
    fn test_cards_ordered_by_update_descending() {
        let repos = vec![
            repo("oldest", false, false, 100),
            repo("newest", false, false, 900),
            repo("middle", false, false, 500),
        ];
        let cards = build_cards(&repos, now());
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_live_link_requires_http_scheme() {
        let mut with_ftp = repo("x", false, false, 0);
        with_ftp.homepage = Some("ftp://x".to_string());
        let mut with_https = repo("y", false, false, 0);
        with_https.homepage = Some("https://x".to_string());

        let cards = build_cards(&[with_ftp, with_https], now());
        let ftp_card = cards.iter().find(|c| c.title == "X").unwrap();
        let https_card = cards.iter().find(|c| c.title == "Y").unwrap();
        assert!(ftp_card.live_url.is_none());
        assert_eq!(https_card.live_url.as_deref(), Some("https://x"));
    }

    #[test]
    fn test_missing_description_gets_placeholder() {
        let mut described = repo("a", false, false, 0);
        described.description = Some("does things".to_string());
        let mut blank = repo("b", false, false, 0);
        blank.description = Some(String::new());
        let bare = repo("c", false, false, 0);

        let cards = build_cards(&[described, blank, bare], now());
        assert_eq!(cards.iter().filter(|c| c.description == NO_DESCRIPTION).count(), 2);
        assert!(cards.iter().any(|c| c.description == "does things"));
    }

    #[test]
    fn test_pretty_name() {
        assert_eq!(pretty_name("my-cool_project"), "My Cool Project");
        assert_eq!(pretty_name("plain"), "Plain");
        assert_eq!(pretty_name("__dunder__"), "Dunder");
    }

    #[test]
    fn test_relative_time_boundaries() {
        assert_eq!(relative_span(3_700), "1h ago");
        assert_eq!(relative_span(90_000), "1d ago");
        assert_eq!(relative_span(10), "just now");
        assert_eq!(relative_span(2_592_000), "1mo ago");
        assert_eq!(relative_span(63_072_000), "2y ago");
    }

    #[test]
    fn test_future_timestamps_clamp_to_just_now() {
        let then = Utc.timestamp_opt(1_700_000_500, 0).unwrap();
        assert_eq!(relative_time(then, now()), "just now");
    }

    #[test]
    fn test_render_replaces_and_clamps_selection() {
        let mut state = ProjectsState::new();
        let many: Vec<Repository> = (0..5).map(|i| repo(&format!("r{}", i), false, false, i)).collect();
        state.render(&many, CardSource::Network, now());
        state.selected = 4;

        let few: Vec<Repository> = (0..2).map(|i| repo(&format!("r{}", i), false, false, i)).collect();
        state.render(&few, CardSource::Network, now());
        assert_eq!(state.selected, 1);
        assert_eq!(state.source, Some(CardSource::Network));
    }

    #[test]
    fn test_fail_never_clobbers_rendered_content() {
        let mut state = ProjectsState::new();
        state.render(&[repo("a", false, false, 0)], CardSource::FreshCache, now());
        state.fail("boom".to_string());
        assert!(state.has_content());
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = ProjectsState::new();
        let repos: Vec<Repository> = (0..3).map(|i| repo(&format!("r{}", i), false, false, i)).collect();
        state.render(&repos, CardSource::Network, now());

        state.select_prev();
        assert_eq!(state.selected, 2);
        state.select_next();
        assert_eq!(state.selected, 0);
    }
}
