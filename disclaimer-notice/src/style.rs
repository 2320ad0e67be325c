//! Class names the renderer attaches to the notice, and the stylesheet that targets them.

/// Class of the outer notice box.
pub const CONTAINER_CLASS: &str = "DisclaimerNotice";

/// Added to the outer box when the current [`Theme`](crate::Theme) casts a shadow.
pub const SHADOW_CLASS: &str = "shadowed";

/// Class of the correction link.
pub const LINK_CLASS: &str = "correction-link";

/// Styles for the notice. The link only gets its dashed outline, and loses its underline,
/// under `:focus-visible`.
pub const STYLESHEET: &str = include_str!("../assets/notice.css");
