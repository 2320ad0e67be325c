//! Framework-independent model of the disclaimer notice: its fixed text, the issue link it
//! points to, and the styling hooks a renderer attaches to it.
mod content;
mod issue_link;
mod style;
mod theme;

pub use content::{NoticeContent, LINK_LABEL, MESSAGE};
pub use issue_link::{IssueLink, IssueLinkError, CORRECTION_ISSUE_URL, GITHUB_HOST};
pub use style::{CONTAINER_CLASS, LINK_CLASS, SHADOW_CLASS, STYLESHEET};
pub use theme::Theme;
