// Fixed page content.
// portico has no config surface; everything the page shows is a constant,
// the same way the API base and cache TTL are.

/// GitHub account whose public repositories fill the projects panel.
pub const GITHUB_USER: &str = "TopazLah";

/// Paragraphs of the About section body.
pub const ABOUT_BODY: &[&str] = &[
    "Hi, I'm Topaz. I build small, sharp tools and the occasional web thing. \
     Most of my work lives on GitHub, and the projects panel below is pulled \
     straight from there, so it is always current.",
    "Scroll with the arrow keys or jump between sections from the bar above. \
     The contact section at the bottom has everything you need to reach me.",
];

/// Lead line of the Contact section.
pub const CONTACT_INTRO: &str =
    "Press a hotkey to copy an address; your mail app opens right after.";

/// Closing lines at the bottom of the document.
pub const FOOTER_LINES: &[&str] = &[
    "────────────────────────────────────────",
    "Thanks for scrolling all the way down.",
    "This page lives in your terminal; the projects above are live from GitHub.",
];

/// A copy-email control in the Contact section.
#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub email: &'static str,
    /// Compose target opened after the copy flow. None means mailto:<email>.
    pub compose: Option<&'static str>,
    /// Key that triggers this control.
    pub hotkey: char,
}

impl ContactLink {
    /// The mail-compose target for the post-copy handoff.
    pub fn compose_target(&self) -> String {
        match self.compose {
            Some(href) => href.to_string(),
            None => format!("mailto:{}", self.email),
        }
    }
}

/// The contact controls shown in the Contact section.
pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        email: "hello@topazlah.dev",
        compose: None,
        hotkey: 'e',
    },
    ContactLink {
        label: "Work inquiries",
        email: "work@topazlah.dev",
        compose: Some("mailto:work@topazlah.dev?subject=Project%20inquiry"),
        hotkey: 'w',
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_target_defaults_to_mailto() {
        let link = ContactLink {
            label: "Email",
            email: "a@x.com",
            compose: None,
            hotkey: 'e',
        };
        assert_eq!(link.compose_target(), "mailto:a@x.com");
    }

    #[test]
    fn test_compose_target_prefers_explicit_href() {
        let link = ContactLink {
            label: "Work",
            email: "b@y.com",
            compose: Some("mailto:b@y.com?subject=Hello"),
            hotkey: 'w',
        };
        assert_eq!(link.compose_target(), "mailto:b@y.com?subject=Hello");
    }

    #[test]
    fn test_contact_hotkeys_are_unique() {
        for (i, a) in CONTACT_LINKS.iter().enumerate() {
            for b in &CONTACT_LINKS[i + 1..] {
                assert_ne!(a.hotkey, b.hotkey);
            }
        }
    }
}
