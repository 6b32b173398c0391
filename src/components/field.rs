//! Headless form-field primitives.
//!
//! A [`Field`] shares its id with the [`Label`], [`Description`] and [`Input`]
//! rendered inside it, so the label and caption are associated with the input
//! for assistive technology without any wiring at the call site. The
//! primitives carry no styling of their own and attach no event handlers.

use leptos::prelude::*;

/// Id shared by the parts of a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldContext {
    pub id: String,
}

impl FieldContext {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn label_id(&self) -> String {
        format!("{}-label", self.id)
    }

    pub fn description_id(&self) -> String {
        format!("{}-description", self.id)
    }

    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }
}

#[component]
pub fn Field(
    #[prop(into)] id: String,
    #[prop(into, optional)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    provide_context(FieldContext::new(id));

    view! {
        <div data-slot="field" class=move || class.get().unwrap_or_default()>
            {children()}
        </div>
    }
}

#[component]
pub fn Label(#[prop(into, optional)] class: MaybeProp<String>, children: Children) -> impl IntoView {
    let field = use_context::<FieldContext>();
    let id = field.as_ref().map(FieldContext::label_id);
    let input_id = field.as_ref().map(FieldContext::input_id);

    view! {
        <label
            id=id
            for=input_id
            data-slot="label"
            class=move || class.get().unwrap_or_default()
        >
            {children()}
        </label>
    }
}

#[component]
pub fn Description(
    #[prop(into, optional)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let id = use_context::<FieldContext>().map(|field| field.description_id());

    view! {
        <p id=id data-slot="description" class=move || class.get().unwrap_or_default()>
            {children()}
        </p>
    }
}

/// Uncontrolled input. Whatever the user types stays in the DOM node.
#[component]
pub fn Input(
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] class: MaybeProp<String>,
) -> impl IntoView {
    let field = use_context::<FieldContext>();
    let id = field.as_ref().map(FieldContext::input_id);
    let labelled_by = field.as_ref().map(FieldContext::label_id);
    let described_by = field.as_ref().map(FieldContext::description_id);

    view! {
        <input
            id=id
            type=input_type
            placeholder=placeholder
            aria-labelledby=labelled_by
            aria-describedby=described_by
            data-slot="input"
            class=move || class.get().unwrap_or_default()
        />
    }
}
