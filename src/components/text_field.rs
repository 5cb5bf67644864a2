//! Labelled Text Input

use leptos::prelude::*;

/// Input with a label above it.
///
/// `on_input` receives `(name, value)` so one handler can serve a whole form.
#[component]
pub fn TextField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<(String, String)>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// HTML `pattern`, e.g. `[0-9]{10}`
    #[prop(optional, into)] pattern: Option<String>,
) -> impl IntoView {
    let input_id = name.clone();
    let label_for = name.clone();
    let field_name = name.clone();

    view! {
        <div class="field">
            <label for=label_for>{label}</label>
            <input
                id=input_id
                name=name
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder
                pattern=pattern
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.run((field_name.clone(), event_target_value(&ev)))
            />
        </div>
    }
}
