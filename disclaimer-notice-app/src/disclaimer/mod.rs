use yew::{classes, function_component, html, Html};

use disclaimer_notice::{NoticeContent, Theme, CONTAINER_CLASS, LINK_CLASS, SHADOW_CLASS};

use crate::theme::use_theme;

/// Creates the disclaimer box: a short note that the author may be wrong, followed by a link
/// to open a pre-filled correction issue on GitHub.
pub fn disclaimer_notice(theme: Theme) -> Html {
    let NoticeContent {
        message,
        link_label,
        href,
    } = NoticeContent::correction();
    let shadow = theme.casts_shadow().then_some(SHADOW_CLASS);
    html! {
        <div class={classes!(CONTAINER_CLASS, shadow)}>
            <div>
                {message}
                <a class={LINK_CLASS} href={href}>{link_label}</a>
            </div>
        </div>
    }
}

/// Static disclaimer notice. Takes no props; the shadow follows the [`Theme`] context.
#[function_component]
pub fn DisclaimerNotice() -> Html {
    disclaimer_notice(use_theme())
}

#[cfg(test)]
mod tests {
    use yew::{ContextProvider, LocalServerRenderer, ServerRenderer};

    use disclaimer_notice::{CORRECTION_ISSUE_URL, LINK_LABEL, MESSAGE};

    use super::*;

    /// Undoes the entity escaping applied to server-rendered text and attributes.
    fn unescape(html: &str) -> String {
        html.replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    async fn render_notice() -> String {
        let html = ServerRenderer::<DisclaimerNotice>::new()
            .hydratable(false)
            .render()
            .await;
        unescape(&html)
    }

    async fn render_dark_page() -> String {
        let html = ServerRenderer::<DarkPage>::new()
            .hydratable(false)
            .render()
            .await;
        unescape(&html)
    }

    #[function_component]
    fn DarkPage() -> Html {
        html! {
            <ContextProvider<Theme> context={Theme::Dark}>
                <DisclaimerNotice />
            </ContextProvider<Theme>>
        }
    }

    #[tokio::test]
    async fn renders_link_and_message() {
        let html = render_notice().await;
        assert!(html.contains(&format!(r#"href="{CORRECTION_ISSUE_URL}""#)));
        assert!(html.contains(r#"class="correction-link""#));
        assert!(html.contains(&format!(">{LINK_LABEL}</a>")));
        assert!(html.contains(">open an issue!</a>"));
        assert!(html.contains("I'm not an expert on this topic."));
        assert!(html.contains(&format!("{MESSAGE}<a ")));
    }

    #[tokio::test]
    async fn renders_one_link() {
        let html = render_notice().await;
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.starts_with(r#"<div class="DisclaimerNotice shadowed"><div>"#));
        assert!(html.ends_with("</a></div></div>"));
    }

    #[tokio::test]
    async fn rendering_is_idempotent() {
        let first = render_notice().await;
        let second = render_notice().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn dark_theme_drops_shadow() {
        let html = render_dark_page().await;
        assert!(html.starts_with(r#"<div class="DisclaimerNotice"><div>"#));
        assert!(!html.contains("shadowed"));
        assert!(html.contains(&format!(r#"href="{CORRECTION_ISSUE_URL}""#)));
    }

    #[tokio::test]
    async fn rendering_schedules_no_work() {
        let runtime = tokio::runtime::Handle::current();
        assert_eq!(runtime.metrics().num_alive_tasks(), 0);

        let html = LocalServerRenderer::<DisclaimerNotice>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains(">open an issue!</a>"));
        assert_eq!(runtime.metrics().num_alive_tasks(), 0);
    }
}
