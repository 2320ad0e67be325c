/// Presentation mode of the page the notice is embedded in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Picks the theme matching a `prefers-color-scheme: dark` query result.
    #[inline]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether the notice container gets a drop shadow. Shadows are suppressed in dark mode.
    #[inline]
    pub fn casts_shadow(self) -> bool {
        matches!(self, Theme::Light)
    }
}
