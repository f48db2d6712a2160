// Scroll spy and smooth scrolling.
// Owns the single active nav link, derived from viewport geometry, and the
// eased scroll animation used by link activation.

use crate::layout::DocLayout;

/// Spy band, as fractions of the viewport height: detection runs from 35%
/// below the top edge down to 50% above the bottom edge.
const BAND_TOP_FRACTION: f32 = 0.35;
const BAND_BOTTOM_FRACTION: f32 = 0.50;

/// Rows of slack when deciding the document is scrolled to its end.
const BOTTOM_SLACK_ROWS: u16 = 2;

/// A section of the portfolio document, doubling as its nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Location fragment shown in the terminal title.
    pub fn fragment(&self) -> &'static str {
        match self {
            Section::About => "#about",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Section::About => Section::Projects,
            Section::Projects => Section::Contact,
            Section::Contact => Section::About,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Section::About => Section::Contact,
            Section::Projects => Section::About,
            Section::Contact => Section::Projects,
        }
    }
}

/// Tracks which nav link is active and which has keyboard focus.
#[derive(Debug)]
pub struct NavSpy {
    /// The single highlighted link. At most one, by construction.
    pub active: Section,
    /// Link the next Enter press activates.
    pub focused: Section,
    /// Sections inside the band on the previous check, for crossing detection.
    in_band: Vec<Section>,
}

impl NavSpy {
    pub fn new() -> Self {
        Self {
            active: Section::default(),
            focused: Section::default(),
            in_band: Vec::new(),
        }
    }

    /// Activate a link directly (the click path).
    pub fn activate(&mut self, section: Section) {
        self.active = section;
        self.focused = section;
    }

    /// Recompute the active link from viewport geometry. A section becomes
    /// active when it crosses into the spy band; the last to cross wins.
    /// The bottom-of-document override then forces Contact when the
    /// viewport reaches the end. Sections absent from the layout are never
    /// observed.
    pub fn on_viewport_change(&mut self, layout: &DocLayout, scroll: u16, viewport: u16) {
        let band_start = scroll.saturating_add((viewport as f32 * BAND_TOP_FRACTION) as u16);
        let band_end = scroll
            .saturating_add(viewport)
            .saturating_sub((viewport as f32 * BAND_BOTTOM_FRACTION) as u16);

        let now_in_band: Vec<Section> = if band_end > band_start {
            layout
                .sections
                .iter()
                .filter(|(_, span)| span.overlap(band_start, band_end) > 0)
                .map(|(section, _)| *section)
                .collect()
        } else {
            Vec::new()
        };

        for section in &now_in_band {
            if !self.in_band.contains(section) {
                self.active = *section;
            }
        }
        self.in_band = now_in_band;

        if scroll.saturating_add(viewport) >= layout.height.saturating_sub(BOTTOM_SLACK_ROWS) {
            self.active = Section::Contact;
        }
    }
}

impl Default for NavSpy {
    fn default() -> Self {
        Self::new()
    }
}

/// Eased scroll animation toward a target row, stepped once per tick.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    target: u16,
}

impl ScrollAnimation {
    pub fn to(target: u16) -> Self {
        Self { target }
    }

    /// Advance one frame from `current`. Returns the next offset and
    /// whether the target has been reached.
    pub fn step(&self, current: u16) -> (u16, bool) {
        if current == self.target {
            return (current, true);
        }
        let dist = current.abs_diff(self.target);
        let step = (dist / 4).max(1);
        let next = if self.target > current {
            current + step
        } else {
            current - step
        };
        (next, next == self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RowSpan;

    fn three_section_layout() -> DocLayout {
        DocLayout {
            sections: vec![
                (Section::About, RowSpan { top: 0, height: 40 }),
                (
                    Section::Projects,
                    RowSpan {
                        top: 40,
                        height: 60,
                    },
                ),
                (
                    Section::Contact,
                    RowSpan {
                        top: 100,
                        height: 20,
                    },
                ),
            ],
            blocks: Vec::new(),
            height: 120,
        }
    }

    #[test]
    fn test_section_entering_band_becomes_active() {
        let layout = three_section_layout();
        let mut spy = NavSpy::new();

        // Viewport [0, 40): band is [14, 20), inside About.
        spy.on_viewport_change(&layout, 0, 40);
        assert_eq!(spy.active, Section::About);

        // Viewport [30, 70): band is [44, 50), inside Projects.
        spy.on_viewport_change(&layout, 30, 40);
        assert_eq!(spy.active, Section::Projects);
    }

    #[test]
    fn test_last_section_to_cross_wins() {
        let layout = three_section_layout();
        let mut spy = NavSpy::new();

        // Start with Projects in the band.
        spy.on_viewport_change(&layout, 30, 40);
        assert_eq!(spy.active, Section::Projects);

        // Scroll back up: About crosses into the band and takes over even
        // though Projects is the later section in document order.
        spy.on_viewport_change(&layout, 10, 40);
        assert_eq!(spy.active, Section::About);
    }

    #[test]
    fn test_section_staying_in_band_does_not_retrigger() {
        let layout = three_section_layout();
        let mut spy = NavSpy::new();

        spy.on_viewport_change(&layout, 30, 40);
        assert_eq!(spy.active, Section::Projects);

        // Manual activation wins until another section crosses the band.
        spy.activate(Section::Contact);
        spy.on_viewport_change(&layout, 31, 40);
        assert_eq!(spy.active, Section::Contact);
    }

    #[test]
    fn test_bottom_override_forces_contact() {
        let layout = three_section_layout();
        let mut spy = NavSpy::new();

        // scroll + viewport == height - 1: within the slack, Contact wins
        // no matter what the band says.
        spy.on_viewport_change(&layout, 79, 40);
        assert_eq!(spy.active, Section::Contact);
    }

    #[test]
    fn test_missing_sections_are_ignored() {
        let layout = DocLayout {
            sections: vec![(Section::About, RowSpan { top: 0, height: 400 })],
            blocks: Vec::new(),
            height: 400,
        };
        let mut spy = NavSpy::new();

        spy.on_viewport_change(&layout, 100, 40);
        assert_eq!(spy.active, Section::About);
    }

    #[test]
    fn test_animation_converges_from_both_sides() {
        let anim = ScrollAnimation::to(100);
        let mut offset = 0;
        for _ in 0..200 {
            let (next, done) = anim.step(offset);
            offset = next;
            if done {
                break;
            }
        }
        assert_eq!(offset, 100);

        let anim = ScrollAnimation::to(3);
        let mut offset = 100;
        for _ in 0..200 {
            let (next, done) = anim.step(offset);
            offset = next;
            if done {
                break;
            }
        }
        assert_eq!(offset, 3);
    }
}
