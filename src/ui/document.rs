// Document builder.
// Produces the portfolio's scrollable lines and, in the same pass, the row
// geometry the scroll spy and reveal tracker consume. Layout and rendering
// can never disagree because both come from one builder.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::content;
use crate::layout::{BlockId, DocLayout, RowSpan, wrap};
use crate::state::projects::{EMPTY_PLACEHOLDER, relative_span};
use crate::state::{LoadingState, ProjectCard, Section};

/// Left padding for body text.
const INDENT: &str = "  ";
/// Extra padding for card details under a card title.
const CARD_INDENT: &str = "    ";
/// Widest measure body text wraps to.
const MAX_MEASURE: u16 = 76;

/// The rendered document and its geometry.
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub layout: DocLayout,
}

/// Render the document viewport at the current scroll offset.
pub fn draw_document(frame: &mut Frame, app: &mut App, area: Rect) {
    let doc = build(app, area.width);
    let paragraph = Paragraph::new(doc.lines).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Build the full document for `width` columns.
pub fn build(app: &App, width: u16) -> Document {
    let measure = width.saturating_sub(4).clamp(20, MAX_MEASURE);
    let mut doc = Builder::default();

    // About
    let about_top = doc.row();
    doc.heading(Section::About, None);
    let body_top = doc.row();
    let about_revealed = app.reveal.is_revealed(BlockId::About);
    for paragraph in content::ABOUT_BODY {
        for line in wrap(paragraph, measure) {
            doc.body_line(line, about_revealed);
        }
        doc.blank();
    }
    doc.block(BlockId::About, body_top);
    doc.section(Section::About, about_top);

    // Projects
    let projects_top = doc.row();
    doc.heading(Section::Projects, staleness_note(app));
    match &app.projects.cards {
        LoadingState::Loading => {
            doc.status_line("⏳ Loading projects...", Color::Yellow);
            doc.blank();
        }
        LoadingState::Error(err) => {
            doc.status_line(&format!("❌ {}", err), Color::Red);
            doc.blank();
        }
        LoadingState::Loaded(cards) if cards.is_empty() => {
            doc.status_line(EMPTY_PLACEHOLDER, Color::DarkGray);
            doc.blank();
        }
        LoadingState::Loaded(cards) => {
            for (index, card) in cards.iter().enumerate() {
                card_lines(
                    &mut doc,
                    index,
                    card,
                    index == app.projects.selected,
                    app.reveal.is_revealed(BlockId::Card(index)),
                    measure,
                );
            }
        }
    }
    doc.section(Section::Projects, projects_top);

    // Contact
    let contact_top = doc.row();
    doc.heading(Section::Contact, None);
    for line in wrap(content::CONTACT_INTRO, measure) {
        doc.body_line(line, true);
    }
    doc.blank();
    for link in content::CONTACT_LINKS {
        doc.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("({}) ", link.hotkey),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!("{}: ", link.label)),
            Span::styled(link.email, Style::default().fg(Color::Cyan)),
        ]));
    }
    doc.blank();

    let footer_top = doc.row();
    let footer_revealed = app.reveal.is_revealed(BlockId::Footer);
    for line in content::FOOTER_LINES {
        doc.body_line((*line).to_string(), footer_revealed);
    }
    doc.block(BlockId::Footer, footer_top);
    doc.section(Section::Contact, contact_top);

    doc.finish()
}

/// Panel note when the cards on screen came from an expired snapshot.
fn staleness_note(app: &App) -> Option<String> {
    let age = app.projects.stale_age?;
    Some(format!("(cached {})", relative_span(age.as_secs() as i64)))
}

/// Emit the lines of one project card and record its reveal block.
fn card_lines(
    doc: &mut Builder,
    index: usize,
    card: &ProjectCard,
    selected: bool,
    revealed: bool,
    measure: u16,
) {
    let card_top = doc.row();

    let marker = if selected { "▸ " } else { "  " };
    let title_style = if revealed {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    doc.push(Line::from(vec![
        Span::raw(marker),
        Span::styled(card.title.clone(), title_style),
    ]));

    let body_style = if revealed {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    for line in wrap(&card.description, measure.saturating_sub(2)) {
        doc.push(Line::from(Span::styled(
            format!("{CARD_INDENT}{line}"),
            body_style,
        )));
    }

    let mut meta = vec![Span::raw(CARD_INDENT)];
    if let Some(language) = &card.language {
        meta.push(Span::styled(
            language.clone(),
            Style::default().fg(Color::Magenta),
        ));
        meta.push(Span::raw("  "));
    }
    meta.push(Span::styled(
        format!("★ {}", card.stars),
        Style::default().fg(Color::Yellow),
    ));
    meta.push(Span::styled(
        format!("  Updated {}", card.updated),
        Style::default().fg(Color::DarkGray),
    ));
    doc.push(Line::from(meta));

    doc.push(Line::from(Span::styled(
        format!("{CARD_INDENT}{}", card.repo_url),
        Style::default().fg(Color::Blue),
    )));
    if let Some(live) = &card.live_url {
        doc.push(Line::from(Span::styled(
            format!("{CARD_INDENT}Live demo: {}", live),
            Style::default().fg(Color::Green),
        )));
    }
    doc.blank();

    doc.block(BlockId::Card(index), card_top);
}

/// Accumulates lines and geometry together.
#[derive(Default)]
struct Builder {
    lines: Vec<Line<'static>>,
    layout: DocLayout,
}

impl Builder {
    fn row(&self) -> u16 {
        self.lines.len() as u16
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.push(Line::default());
    }

    fn body_line(&mut self, text: String, revealed: bool) {
        let style = if revealed {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        self.push(Line::from(Span::styled(format!("{INDENT}{text}"), style)));
    }

    fn status_line(&mut self, text: &str, color: Color) {
        self.push(Line::from(Span::styled(
            format!("{INDENT}{text}"),
            Style::default().fg(color),
        )));
    }

    fn heading(&mut self, section: Section, note: Option<String>) {
        self.blank();
        let mut spans = vec![Span::styled(
            section.title().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(note) = note {
            spans.push(Span::styled(
                format!("  {}", note),
                Style::default().fg(Color::Yellow),
            ));
        }
        self.push(Line::from(spans));
        self.blank();
    }

    fn section(&mut self, section: Section, top: u16) {
        let height = self.row().saturating_sub(top);
        self.layout.sections.push((section, RowSpan { top, height }));
    }

    fn block(&mut self, id: BlockId, top: u16) {
        let height = self.row().saturating_sub(top);
        self.layout.blocks.push((id, RowSpan { top, height }));
    }

    fn finish(mut self) -> Document {
        self.layout.height = self.row();
        Document {
            lines: self.lines,
            layout: self.layout,
        }
    }
}
