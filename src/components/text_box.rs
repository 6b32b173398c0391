use crate::components::field::{Description, Field, Input, Label};
use leptos::prelude::*;
use tailwind_fuse::*;

const LAYOUT: &str = "mt-3 block w-full rounded-md px-3 py-2.5 text-sm text-black";
// soft translucent pill with a gentle top-to-bottom sheen
const BACKGROUND: &str =
    "bg-[linear-gradient(180deg,rgba(255,255,255,0.07),rgba(255,255,255,0.04))]";
const INSET_HIGHLIGHT: &str = "shadow-[inset_0_1px_0_rgba(255,255,255,0.08)]";
const RING: &str = "ring-1 ring-inset ring-white/10";
const PLACEHOLDER: &str = "placeholder:text-black/30";
const FOCUS: &str = "focus:outline-none focus:ring-2 focus:ring-white/25";
const TRANSITION: &str = "transition-colors";

/// Class string for the link input. `extra` is merged last, so it wins over
/// any base class it conflicts with.
pub fn input_class(extra: Option<String>) -> String {
    let base = tw_join!(
        LAYOUT,
        BACKGROUND,
        INSET_HIGHLIGHT,
        RING,
        PLACEHOLDER,
        FOCUS,
        TRANSITION
    );

    match extra {
        Some(extra) if !extra.trim().is_empty() => tw_merge!(base, extra),
        _ => base,
    }
}

#[component]
pub fn TextBox(
    #[prop(into, optional)] class: MaybeProp<String>,
    #[prop(into, default = "post-link".to_string())] id: String,
) -> impl IntoView {
    let input_class = input_class(class.get_untracked());

    view! {
        <Field id=id class="max-w-md">
            <Label class="text-sm font-medium text-black">"Name"</Label>
            <Description class="mt-1 text-sm text-black/60">
                "Use your real name so people will recognize you."
            </Description>
            <Input input_type="text" placeholder=" " class=input_class />
        </Field>
    }
}
