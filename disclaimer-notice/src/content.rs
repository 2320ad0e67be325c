use implicit_clone::unsync::IString;

use crate::issue_link::{IssueLink, IssueLinkError, CORRECTION_ISSUE_URL};

/// Text shown ahead of the link. The trailing space separates it from the link label.
pub const MESSAGE: &str = "I'm not an expert on this topic. If you find an error or want to \
    correct me in another way, please ";

/// Visible text of the correction link.
pub const LINK_LABEL: &str = "open an issue!";

/// Everything the disclaimer notice displays.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeContent {
    /// Explanatory sentence, up to the link.
    pub message: IString,
    /// Visible text of the link.
    pub link_label: IString,
    /// Target of the link.
    pub href: IString,
}

impl NoticeContent {
    /// The fixed notice content, linking to [`CORRECTION_ISSUE_URL`].
    pub const fn correction() -> Self {
        Self {
            message: IString::Static(MESSAGE),
            link_label: IString::Static(LINK_LABEL),
            href: IString::Static(CORRECTION_ISSUE_URL),
        }
    }

    /// The fixed notice text, linking to the issue form described by `link` instead.
    pub fn for_issue_link(link: &IssueLink) -> Result<Self, IssueLinkError> {
        let href = link.to_url()?;
        Ok(Self {
            href: IString::from(String::from(href)),
            ..Self::correction()
        })
    }
}

impl Default for NoticeContent {
    fn default() -> Self {
        Self::correction()
    }
}
