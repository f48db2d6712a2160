// Contact copy flow.
// Copies an address to the clipboard, reports through the toast, then hands
// off to the mail client after a short fixed delay. Flows are independent:
// a second trigger before the first redirect fires overlaps it.

use std::time::{Duration, Instant};

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::content::ContactLink;
use crate::error::Result;
use crate::state::toast::{DEFAULT_TOAST_MS, Toast};

/// Delay before the mail-compose handoff fires.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(150);

/// Visibility window for the degraded-copy toast.
const FALLBACK_TOAST_MS: u64 = 6_000;

/// A scheduled mail-compose handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRedirect {
    pub due: Instant,
    pub target: String,
}

#[derive(Debug, Default)]
pub struct CopyFlow {
    pending: Vec<PendingRedirect>,
}

impl CopyFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one copy flow for `link`: copy, toast, schedule the handoff.
    pub fn trigger(&mut self, link: &ContactLink, toast: &mut Toast, now: Instant) {
        let outcome = copy_text(link.email);
        if let Err(err) = &outcome {
            tracing::warn!(%err, email = link.email, "clipboard copy failed");
        }
        self.complete(&outcome, link, toast, now);
    }

    /// Report the copy outcome and queue the redirect. Anything short of an
    /// error counts as copied; the redirect is queued either way.
    fn complete(
        &mut self,
        outcome: &Result<bool>,
        link: &ContactLink,
        toast: &mut Toast,
        now: Instant,
    ) {
        match outcome {
            Ok(_) => toast.present(format!("Email copied: {}", link.email), DEFAULT_TOAST_MS),
            Err(_) => toast.present(
                format!("Open your mail app to contact: {}", link.email),
                FALLBACK_TOAST_MS,
            ),
        }
        self.pending.push(PendingRedirect {
            due: now + REDIRECT_DELAY,
            target: link.compose_target(),
        });
    }

    /// Drain the redirects whose delay has elapsed.
    pub fn due_redirects(&mut self, now: Instant) -> Vec<PendingRedirect> {
        let (due, waiting) = self.pending.drain(..).partition(|r| now >= r.due);
        self.pending = waiting;
        due
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Copy `text` to the system clipboard. Prefers the native clipboard; when
/// no backend is available, falls back to asking the terminal itself via an
/// OSC 52 escape write. Empty input is reported as not copied, not an error.
fn copy_text(text: &str) -> Result<bool> {
    if text.is_empty() {
        return Ok(false);
    }
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            clipboard.set_text(text.to_string())?;
            Ok(true)
        }
        Err(_) => copy_text_osc52(text),
    }
}

/// Legacy path: stage the payload through the terminal's own clipboard
/// escape. Works over SSH where no display server is reachable.
fn copy_text_osc52(text: &str) -> Result<bool> {
    use std::io::Write;

    let payload = STANDARD.encode(text.as_bytes());
    let mut out = std::io::stdout();
    write!(out, "\x1b]52;c;{}\x07", payload)?;
    out.flush()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PorticoError;
    use crate::state::toast::ToastStyle;

    const LINK_A: ContactLink = ContactLink {
        label: "Email",
        email: "a@x.com",
        compose: None,
        hotkey: 'e',
    };
    const LINK_B: ContactLink = ContactLink {
        label: "Work",
        email: "b@y.com",
        compose: Some("mailto:b@y.com?subject=Hi"),
        hotkey: 'w',
    };

    #[test]
    fn test_successful_copy_toasts_copied() {
        let mut flow = CopyFlow::new();
        let mut toast = Toast::with_style(ToastStyle::Plain);
        flow.complete(&Ok(true), &LINK_A, &mut toast, Instant::now());

        assert_eq!(toast.visible(), Some("Email copied: a@x.com"));
    }

    #[test]
    fn test_failed_copy_toasts_fallback_and_still_redirects() {
        let t0 = Instant::now();
        let mut flow = CopyFlow::new();
        let mut toast = Toast::with_style(ToastStyle::Plain);

        let failed: Result<bool> =
            Err(PorticoError::Io(std::io::Error::other("access denied")));
        flow.complete(&failed, &LINK_A, &mut toast, t0);

        assert_eq!(
            toast.visible(),
            Some("Open your mail app to contact: a@x.com")
        );
        let due = flow.due_redirects(t0 + REDIRECT_DELAY);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].target, "mailto:a@x.com");
    }

    #[test]
    fn test_overlapping_flows_last_toast_wins() {
        let t0 = Instant::now();
        let mut flow = CopyFlow::new();
        let mut toast = Toast::with_style(ToastStyle::Plain);

        flow.complete(&Ok(true), &LINK_A, &mut toast, t0);
        flow.complete(&Ok(true), &LINK_B, &mut toast, t0 + Duration::from_millis(50));

        assert_eq!(toast.visible(), Some("Email copied: b@y.com"));
        assert_eq!(flow.pending_count(), 2);

        // Each flow keeps its own timer: the first fires alone, then the second.
        let first = flow.due_redirects(t0 + Duration::from_millis(160));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].target, "mailto:a@x.com");

        let second = flow.due_redirects(t0 + Duration::from_millis(210));
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].target, "mailto:b@y.com?subject=Hi");
        assert_eq!(flow.pending_count(), 0);
    }

    #[test]
    fn test_redirect_not_due_before_delay() {
        let t0 = Instant::now();
        let mut flow = CopyFlow::new();
        let mut toast = Toast::with_style(ToastStyle::Plain);

        flow.complete(&Ok(true), &LINK_A, &mut toast, t0);
        assert!(flow.due_redirects(t0 + Duration::from_millis(100)).is_empty());
        assert_eq!(flow.pending_count(), 1);
    }
}
