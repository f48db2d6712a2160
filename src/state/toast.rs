// Toast presenter.
// One surface, one pending hide timer; each call replaces both the message
// and the timer. Last call wins, nothing is queued.

use std::time::{Duration, Instant};

/// Default visibility window.
pub const DEFAULT_TOAST_MS: u64 = 10_000;

/// How the toast is drawn. Probed once at startup, never re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Styled,
    Plain,
}

impl ToastStyle {
    /// Capability probe: honor NO_COLOR and fall back to plain rendering on
    /// terminals without a usable palette.
    fn probe() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return ToastStyle::Plain;
        }
        if crossterm::style::available_color_count() < 16 {
            ToastStyle::Plain
        } else {
            ToastStyle::Styled
        }
    }
}

#[derive(Debug)]
pub struct Toast {
    message: Option<String>,
    hide_at: Option<Instant>,
    style: ToastStyle,
}

impl Toast {
    pub fn new() -> Self {
        Self::with_style(ToastStyle::probe())
    }

    pub fn with_style(style: ToastStyle) -> Self {
        Self {
            message: None,
            hide_at: None,
            style,
        }
    }

    /// Show `message` for `duration_ms`, cancelling any pending hide.
    pub fn present(&mut self, message: impl Into<String>, duration_ms: u64) {
        self.present_at(message, duration_ms, Instant::now());
    }

    fn present_at(&mut self, message: impl Into<String>, duration_ms: u64, now: Instant) {
        self.message = Some(message.into());
        self.hide_at = Some(now + Duration::from_millis(duration_ms));
    }

    /// Clear the toast once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.hide_at
            && now >= deadline
        {
            self.message = None;
            self.hide_at = None;
        }
    }

    /// The message currently on screen, if any.
    pub fn visible(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn style(&self) -> ToastStyle {
        self.style
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_and_expire() {
        let t0 = Instant::now();
        let mut toast = Toast::with_style(ToastStyle::Plain);

        toast.present_at("hello", 1_000, t0);
        assert_eq!(toast.visible(), Some("hello"));

        toast.tick(t0 + Duration::from_millis(999));
        assert_eq!(toast.visible(), Some("hello"));

        toast.tick(t0 + Duration::from_millis(1_000));
        assert_eq!(toast.visible(), None);
    }

    #[test]
    fn test_second_call_replaces_message_and_timer() {
        let t0 = Instant::now();
        let mut toast = Toast::with_style(ToastStyle::Plain);

        toast.present_at("first", 10_000, t0);
        toast.present_at("second", 1_000, t0 + Duration::from_millis(50));

        assert_eq!(toast.visible(), Some("second"));

        // The second call's shorter deadline is the one in effect: had the
        // first timer survived, the toast would stay up until t0 + 10s.
        toast.tick(t0 + Duration::from_millis(1_100));
        assert_eq!(toast.visible(), None);
    }

    #[test]
    fn test_tick_without_message_is_a_noop() {
        let mut toast = Toast::with_style(ToastStyle::Plain);
        toast.tick(Instant::now());
        assert_eq!(toast.visible(), None);
    }
}
