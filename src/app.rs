// App state and main event loop.
// Wires the page behaviors together: each loop iteration draws a frame,
// polls terminal events, then services timers and the fetch channel.

use std::io;
use std::time::Instant;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::cache;
use crate::content;
use crate::error::{PorticoError, Result};
use crate::github::{GitHubClient, Repository};
use crate::layout::{BlockId, DocLayout};
use crate::state::{
    CardSource, ConsoleLog, CopyFlow, NavSpy, ProjectsState, RevealTracker, ScrollAnimation,
    Section, Toast,
};
use crate::ui;

/// Terminal-event poll timeout; doubles as the animation/timer tick.
const TICK_MS: u64 = 50;

/// Rows scrolled per arrow key press.
const SCROLL_STEP: u16 = 1;

/// Toast window for the no-cache fetch failure.
const FETCH_FAILURE_TOAST_MS: u64 = 6_000;

type FetchOutcome = Result<Vec<Repository>>;

/// Main application state.
pub struct App {
    pub should_quit: bool,
    /// Scroll offset of the document viewport, in rows.
    pub scroll: u16,
    /// Rows available to the document between nav bar and status bar.
    pub viewport: u16,
    width: u16,
    pub doc_layout: DocLayout,
    pub nav: NavSpy,
    anim: Option<ScrollAnimation>,
    pub reveal: RevealTracker,
    pub toast: Toast,
    pub copy_flow: CopyFlow,
    pub projects: ProjectsState,
    pub console: ConsoleLog,
    pub show_help: bool,
    pub show_console: bool,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    layout_dirty: bool,
}

impl App {
    pub fn new() -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            should_quit: false,
            scroll: 0,
            viewport: 0,
            width: 0,
            doc_layout: DocLayout::default(),
            nav: NavSpy::new(),
            anim: None,
            reveal: RevealTracker::new(),
            toast: Toast::new(),
            copy_flow: CopyFlow::new(),
            projects: ProjectsState::new(),
            console: ConsoleLog::new(),
            show_help: false,
            show_console: false,
            fetch_tx,
            fetch_rx,
            layout_dirty: true,
        };

        // The reveal target set is fixed at startup; cards rendered later
        // are marked visible directly instead of being observed.
        app.reveal.observe(BlockId::About);
        app.reveal.observe(BlockId::Footer);

        // Cache phase: a fresh snapshot renders before the fetch returns.
        if let Some(path) = cache::repos_path(content::GITHUB_USER) {
            if let Some(repos) = cache::read_if_valid::<Vec<Repository>>(&path, cache::REPOS_TTL) {
                let rendered = app
                    .projects
                    .render(&repos, CardSource::FreshCache, Utc::now());
                app.reveal_cards(rendered);
                app.console
                    .log_info(format!("projects: rendered {} cards from cache", rendered));
            }
        } else {
            app.console
                .log_warn("no cache directory available; caching disabled");
        }

        app.start_fetch();
        app
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            let size = terminal.size()?;
            self.resize(size.width, size.height);
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Network phase: the fetch runs off-loop and reports back over the
    /// channel. Also the `r` refresh path; overlapping fetches just arrive
    /// in order.
    fn start_fetch(&mut self) {
        let tx = self.fetch_tx.clone();
        match GitHubClient::new() {
            Ok(client) => {
                tokio::spawn(async move {
                    let _ = tx.send(client.user_repos(content::GITHUB_USER).await);
                });
            }
            Err(err) => {
                let _ = tx.send(Err(err));
            }
        }
        self.console.log_info("projects: fetching repositories");
    }

    /// Pick up terminal dimensions and recompute geometry when stale.
    fn resize(&mut self, width: u16, height: u16) {
        let viewport = height.saturating_sub(ui::NAVBAR_HEIGHT + ui::STATUS_BAR_HEIGHT);
        if width != self.width || viewport != self.viewport {
            self.width = width;
            self.viewport = viewport;
            self.layout_dirty = true;
        }
        if self.layout_dirty {
            self.refresh_layout();
        }
    }

    fn refresh_layout(&mut self) {
        self.doc_layout = ui::document::build(self, self.width).layout;
        self.scroll = self.scroll.min(self.doc_layout.max_scroll(self.viewport));
        self.layout_dirty = false;
        self.viewport_changed();
    }

    /// Push the new viewport to the observers.
    fn viewport_changed(&mut self) {
        self.nav
            .on_viewport_change(&self.doc_layout, self.scroll, self.viewport);
        self.reveal
            .on_viewport_change(&self.doc_layout, self.scroll, self.viewport);
    }

    /// Handle keyboard and resize events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(TICK_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Resize(_, _) => self.layout_dirty = true,
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Overlays swallow input first.
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }
        if self.show_console {
            match key.code {
                KeyCode::Esc | KeyCode::Char('`') => self.show_console = false,
                KeyCode::Up | KeyCode::Char('k') => self.console.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.console.select_next(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('`') => {
                self.show_console = true;
                self.console.mark_read();
            }
            KeyCode::Tab => self.nav.focused = self.nav.focused.next(),
            KeyCode::BackTab => self.nav.focused = self.nav.focused.prev(),
            KeyCode::Enter => self.activate_link(self.nav.focused),
            KeyCode::Char('1') => self.activate_link(Section::About),
            KeyCode::Char('2') => self.activate_link(Section::Projects),
            KeyCode::Char('3') => self.activate_link(Section::Contact),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-(SCROLL_STEP as i32)),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(SCROLL_STEP as i32),
            KeyCode::PageUp => self.scroll_by(-(self.viewport as i32)),
            KeyCode::PageDown => self.scroll_by(self.viewport as i32),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(self.doc_layout.max_scroll(self.viewport)),
            KeyCode::Char('n') => self.projects.select_next(),
            KeyCode::Char('p') => self.projects.select_prev(),
            KeyCode::Char('o') => self.open_selected_repo(),
            KeyCode::Char('l') => self.open_selected_live(),
            KeyCode::Char('r') => self.start_fetch(),
            KeyCode::Char(c) => {
                if let Some(link) = content::CONTACT_LINKS.iter().find(|l| l.hotkey == c) {
                    self.copy_flow.trigger(link, &mut self.toast, Instant::now());
                }
            }
            _ => {}
        }
    }

    /// The click path: activate immediately, animate toward the section,
    /// update the location fragment. A failed title update is ignored and
    /// the scroll still happens.
    fn activate_link(&mut self, section: Section) {
        self.nav.activate(section);
        if let Some(top) = self.doc_layout.section_top(section) {
            let target = top.min(self.doc_layout.max_scroll(self.viewport));
            self.anim = Some(ScrollAnimation::to(target));
        }
        let _ = execute!(
            io::stdout(),
            SetTitle(format!("portico — {}", section.fragment()))
        );
    }

    /// Manual scrolling cancels a running animation.
    fn scroll_by(&mut self, delta: i32) {
        self.anim = None;
        let max = self.doc_layout.max_scroll(self.viewport) as i32;
        let next = (self.scroll as i32 + delta).clamp(0, max) as u16;
        if next != self.scroll {
            self.scroll = next;
            self.viewport_changed();
        }
    }

    fn scroll_to(&mut self, offset: u16) {
        self.anim = None;
        let clamped = offset.min(self.doc_layout.max_scroll(self.viewport));
        if clamped != self.scroll {
            self.scroll = clamped;
            self.viewport_changed();
        }
    }

    /// Service timers and the fetch channel.
    fn tick(&mut self, now: Instant) {
        self.toast.tick(now);

        for redirect in self.copy_flow.due_redirects(now) {
            if let Err(err) = webbrowser::open(&redirect.target) {
                self.console
                    .log_error(format!("mail handoff failed: {}", err));
            }
        }

        if let Some(anim) = self.anim {
            let (next, done) = anim.step(self.scroll);
            if next != self.scroll {
                self.scroll = next;
                self.viewport_changed();
            }
            if done {
                self.anim = None;
            }
        }

        self.drain_fetch();
    }

    fn drain_fetch(&mut self) {
        while let Ok(outcome) = self.fetch_rx.try_recv() {
            match outcome {
                Ok(repos) => self.apply_fetched(repos),
                Err(err) => self.apply_fetch_failure(err),
            }
        }
    }

    fn apply_fetched(&mut self, repos: Vec<Repository>) {
        let rendered = self.projects.render(&repos, CardSource::Network, Utc::now());
        self.console.log_info(format!(
            "projects: fetched={} rendered={}",
            repos.len(),
            rendered
        ));
        self.reveal_cards(rendered);
        self.layout_dirty = true;

        if let Some(path) = cache::repos_path(content::GITHUB_USER)
            && let Err(err) = cache::write_cached(&path, &repos)
        {
            self.console
                .log_warn(format!("projects: cache write failed: {}", err));
        }
    }

    /// Network failure: silent when content is already up; falls back to an
    /// expired snapshot when one exists; only a truly empty panel surfaces
    /// a toast.
    fn apply_fetch_failure(&mut self, err: PorticoError) {
        self.console
            .log_error(format!("projects: fetch failed: {}", err));

        if self.projects.has_content() {
            return;
        }

        let stale = cache::repos_path(content::GITHUB_USER)
            .and_then(|path| cache::read_cached::<Vec<Repository>>(&path));

        if let Some(cached) = stale {
            let age = cached.age();
            let rendered = self
                .projects
                .render(&cached.data, CardSource::StaleCache, Utc::now());
            self.projects.stale_age = Some(age);
            self.reveal_cards(rendered);
            self.console.log_warn(format!(
                "projects: showing expired cache ({} cards)",
                rendered
            ));
        } else {
            self.projects.fail(err.to_string());
            self.toast.present(
                "Failed to load GitHub projects. See console for details.",
                FETCH_FAILURE_TOAST_MS,
            );
        }
        self.layout_dirty = true;
    }

    /// Freshly rendered cards are visible immediately; only blocks present
    /// at startup reveal on scroll.
    fn reveal_cards(&mut self, count: usize) {
        for index in 0..count {
            self.reveal.mark_revealed(BlockId::Card(index));
        }
    }

    fn open_selected_repo(&mut self) {
        let Some(url) = self.projects.selected_card().map(|c| c.repo_url.clone()) else {
            return;
        };
        if let Err(err) = webbrowser::open(&url) {
            self.console
                .log_error(format!("open repository failed: {}", err));
        }
    }

    fn open_selected_live(&mut self) {
        let Some(url) = self
            .projects
            .selected_card()
            .and_then(|c| c.live_url.clone())
        else {
            return;
        };
        if let Err(err) = webbrowser::open(&url) {
            self.console
                .log_error(format!("open live demo failed: {}", err));
        }
    }
}
