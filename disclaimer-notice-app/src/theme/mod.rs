//! Detects the page color scheme and provides it to descendants as a [`Theme`] context.
use gloo::events::EventListener;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::{
    function_component, hook, html, use_context, use_effect_with, use_memo, use_state_eq,
    ContextProvider, Html, Properties,
};

use disclaimer_notice::Theme;

/// Media query which matches when the user has asked for a dark color scheme.
#[cfg(target_arch = "wasm32")]
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Looks up the dark color scheme media query, if the browser supports it.
#[cfg(target_arch = "wasm32")]
fn prefers_dark_query() -> Option<MediaQueryList> {
    let Some(window) = web_sys::window() else {
        debug!("Unable to find the global window");
        return None;
    };
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(Some(query)) => Some(query),
        Ok(None) => {
            debug!("Media query {PREFERS_DARK_QUERY} is unsupported");
            None
        }
        Err(e) => {
            debug!("Unable to evaluate media query {PREFERS_DARK_QUERY}: {e:?}");
            None
        }
    }
}

/// Outside the browser there is no window to query.
#[cfg(not(target_arch = "wasm32"))]
fn prefers_dark_query() -> Option<MediaQueryList> {
    None
}

/// Picks the theme to start with, given the result of the color scheme query if it could be
/// evaluated.
fn initial_theme(prefers_dark: Option<bool>) -> Theme {
    match prefers_dark {
        Some(prefers_dark) => Theme::from_prefers_dark(prefers_dark),
        None => {
            warn!("Unable to detect the preferred color scheme, using the default theme");
            Theme::default()
        }
    }
}

/// Picks the theme to switch to after a color scheme change event. `None` means the event
/// was not a media query event and is ignored.
fn changed_theme(prefers_dark: Option<bool>) -> Option<Theme> {
    match prefers_dark {
        Some(prefers_dark) => {
            let theme = Theme::from_prefers_dark(prefers_dark);
            debug!("Color scheme changed, switching to {theme:?}");
            Some(theme)
        }
        None => {
            warn!("Ignoring color scheme change event of an unexpected type");
            None
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Children to render within the theme context.
    #[prop_or_default]
    pub children: Html,
}

/// Provides the current [`Theme`] to its children and follows changes to the user's color
/// scheme preference while mounted.
#[function_component]
pub fn ThemeProvider(props: &Props) -> Html {
    let query = use_memo((), |()| prefers_dark_query());
    let theme = use_state_eq(|| initial_theme((*query).as_ref().map(MediaQueryList::matches)));

    let setter = theme.setter();
    use_effect_with(query, move |query| {
        let listener = match &**query {
            Some(query) => Some(EventListener::new(query, "change", move |event| {
                let prefers_dark = event
                    .dyn_ref::<MediaQueryListEvent>()
                    .map(MediaQueryListEvent::matches);
                if let Some(theme) = changed_theme(prefers_dark) {
                    setter.set(theme);
                }
            })),
            None => None,
        };
        move || drop(listener)
    });

    html! {
        <ContextProvider<Theme> context={*theme}>
            {props.children.clone()}
        </ContextProvider<Theme>>
    }
}

/// Get the theme from context, or the default theme outside of a [`ThemeProvider`].
#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}
