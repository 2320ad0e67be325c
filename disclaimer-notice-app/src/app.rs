use yew::{function_component, html, Html};

use disclaimer_notice::STYLESHEET;

use crate::disclaimer::DisclaimerNotice;
use crate::theme::ThemeProvider;

/// Root of the page: installs the notice styles and renders the notice under the detected
/// color scheme.
#[function_component]
pub fn App() -> Html {
    html! {
        <ThemeProvider>
            <style>{STYLESHEET}</style>
            <main class="App">
                <DisclaimerNotice />
            </main>
        </ThemeProvider>
    }
}
