use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Full-height text area for the note body.
///
/// Every input event reports the full text through `on_input`; `value` drives the
/// displayed text (e.g. after a load lands).
#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] autofocus: bool,
    #[prop(default = false.into(), into)] disabled: Signal<bool>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 flex min-h-64 w-full flex-1 resize-none rounded-md bg-transparent px-3 py-2 text-base outline-none md:text-sm",
        "focus-visible:border-ring focus-visible:ring-ring/50 disabled:cursor-not-allowed disabled:opacity-50",
        class
    );

    // Manual wiring instead of `bind:value`, same as the other form controls.
    let handle_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                on_input.run(area.value());
            }
        }
    };

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            autofocus=autofocus
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:input=handle_input
        ></textarea>
    }
}
