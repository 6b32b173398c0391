use crate::components::TextBox;
use leptos::prelude::*;

pub const HEADING: &str = "Instagram Post Dowloader";
pub const INSTRUCTIONS: &str = "Paste the share link of any public Instagram post.";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <h1>{HEADING}</h1>
        <p>{INSTRUCTIONS}</p>
        <div class="flex items-center justify-center">
            <TextBox />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_home() -> String {
        Owner::new().with(|| view! { <HomePage /> }.to_html())
    }

    #[test]
    fn renders_single_heading_verbatim() {
        let html = render_home();
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.contains("<h1>Instagram Post Dowloader</h1>"));
    }

    #[test]
    fn renders_single_instruction_paragraph() {
        let html = render_home();
        // The field caption is the only other paragraph on the page.
        assert_eq!(html.matches("<p").count(), 2);
        assert_eq!(html.matches("<p>").count(), 1);
        assert!(html.contains(&format!("<p>{INSTRUCTIONS}</p>")));
    }

    #[test]
    fn centers_exactly_one_text_box() {
        let html = render_home();
        assert!(html.contains(r#"<div class="flex items-center justify-center">"#));
        assert_eq!(html.matches(r#"data-slot="field""#).count(), 1);
        assert_eq!(html.matches("<input").count(), 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        let first = render_home();
        let second = render_home();
        assert_eq!(first, second);
    }
}
