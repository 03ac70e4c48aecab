//! Toast notification center.

use crate::render::escape_html;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default time a toast stays fully visible.
pub const DEFAULT_DISPLAY_MS: u64 = 5_000;
/// Default exit-animation time before the toast is removed.
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 500;

/// Millisecond clock used to stamp new toasts.
pub type Clock = fn() -> i64;

/// Unix epoch milliseconds from the system clock.
pub fn system_now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Alert style class for the toast wrapper.
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Info => "alert-info",
            Self::Warning => "alert-warning",
            Self::Error => "alert-danger",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Info => "fas fa-info-circle",
            Self::Warning => "fas fa-exclamation-triangle",
            Self::Error => "fas fa-times-circle",
        }
    }
}

/// Unknown notification kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNotificationKind(pub String);

impl Display for UnknownNotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown notification kind `{}`; expected success|info|warning|error",
            self.0
        )
    }
}

impl Error for UnknownNotificationKind {}

impl FromStr for NotificationKind {
    type Err = UnknownNotificationKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(UnknownNotificationKind(value.to_string())),
        }
    }
}

/// Sink for user-facing notifications emitted by store operations.
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: NotificationKind);
}

/// Where a toast is pinned on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPlacement {
    /// Full-width banner below the navbar; slides down.
    TopBanner,
    /// Fixed-width box in the top-right corner; slides in from the right.
    TopRight,
}

impl ToastPlacement {
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.is_mobile() {
            Self::TopBanner
        } else {
            Self::TopRight
        }
    }

    fn style(self) -> &'static str {
        match self {
            Self::TopBanner => "top: 80px; left: 20px; right: 20px; animation: slideInDown 0.5s ease;",
            Self::TopRight => {
                "top: 20px; right: 20px; min-width: 300px; max-width: 400px; animation: slideInRight 0.5s ease;"
            }
        }
    }
}

/// One queued toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub placement: ToastPlacement,
    pub created_at_ms: i64,
    /// Removal instant: creation + display time + exit animation.
    pub expires_at_ms: i64,
}

impl Toast {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="alert {alert} position-fixed" data-toast-id="{id}" style="{style} z-index: 9999;"><div class="d-flex align-items-center"><i class="{icon} me-2"></i><span>{message}</span><button type="button" class="btn-close ms-auto"></button></div></div>"#,
            alert = self.kind.alert_class(),
            id = self.id,
            style = self.placement.style(),
            icon = self.kind.icon_class(),
            message = escape_html(&self.message),
        )
    }
}

/// Timing knobs for toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub display_ms: u64,
    pub exit_animation_ms: u64,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            display_ms: DEFAULT_DISPLAY_MS,
            exit_animation_ms: DEFAULT_EXIT_ANIMATION_MS,
        }
    }
}

impl ToastTiming {
    fn lifetime_ms(self) -> i64 {
        i64::try_from(self.display_ms.saturating_add(self.exit_animation_ms)).unwrap_or(i64::MAX)
    }
}

/// Active toast queue.
pub struct ToastCenter {
    toasts: Vec<Toast>,
    next_id: u64,
    timing: ToastTiming,
    viewport: Viewport,
    clock: Clock,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(ToastTiming::default(), Viewport::default())
    }
}

impl ToastCenter {
    pub fn new(timing: ToastTiming, viewport: Viewport) -> Self {
        Self::with_clock(timing, viewport, system_now_ms)
    }

    /// Creates a center stamping toasts with a caller-provided clock.
    pub fn with_clock(timing: ToastTiming, viewport: Viewport, clock: Clock) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            timing,
            viewport,
            clock,
        }
    }

    /// Queues a toast stamped with the current clock value; returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let now_ms = (self.clock)();
        self.show_at(message, kind, now_ms)
    }

    /// Queues a toast created at `now_ms`; returns its id.
    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now_ms: i64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            placement: ToastPlacement::for_viewport(self.viewport),
            created_at_ms: now_ms,
            expires_at_ms: now_ms.saturating_add(self.timing.lifetime_ms()),
        });
        log::debug!(
            "event=toast_show module=notify id={} kind={}",
            id,
            kind.as_str()
        );
        id
    }

    /// Closes one toast early. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    /// Drops toasts whose deadline has passed; returns how many were removed.
    pub fn prune(&mut self, now_ms: i64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now_ms));
        before - self.toasts.len()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastCenter {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.show(message, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationKind, ToastCenter, ToastPlacement, ToastTiming};
    use crate::viewport::Viewport;

    fn fixed_clock() -> i64 {
        10_000
    }

    #[test]
    fn toast_expires_after_display_and_exit_animation() {
        let mut center =
            ToastCenter::with_clock(ToastTiming::default(), Viewport::default(), fixed_clock);
        center.show("saved", NotificationKind::Success);

        assert_eq!(center.prune(15_499), 0);
        assert_eq!(center.prune(15_500), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut center = ToastCenter::default();
        let first = center.show_at("a", NotificationKind::Info, 0);
        let second = center.show_at("b", NotificationKind::Info, 0);

        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].id, second);
    }

    #[test]
    fn placement_follows_viewport() {
        let mut center = ToastCenter::new(ToastTiming::default(), Viewport::new(400));
        center.show_at("m", NotificationKind::Warning, 0);
        center.set_viewport(Viewport::new(1400));
        center.show_at("d", NotificationKind::Warning, 0);

        assert_eq!(center.active()[0].placement, ToastPlacement::TopBanner);
        assert_eq!(center.active()[1].placement, ToastPlacement::TopRight);
    }

    #[test]
    fn kind_parses_from_string() {
        assert_eq!("ERROR".parse::<NotificationKind>(), Ok(NotificationKind::Error));
        assert!("loud".parse::<NotificationKind>().is_err());
    }

    #[test]
    fn toast_html_escapes_message() {
        let mut center = ToastCenter::default();
        center.show_at("<b>hi</b>", NotificationKind::Error, 0);
        let html = center.latest().expect("toast queued").to_html();
        assert!(html.contains("alert-danger"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }
}
