use leptos::prelude::*;

/// Labelled input bound to a signal
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Form control name
    name: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                name=name
                class="form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Labelled textarea bound to a signal
#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                name=name
                class="form-input form-textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Labelled select; the option text doubles as its value
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    /// First, unselectable entry
    placeholder: &'static str,
    options: &'static [&'static str],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                name=name
                class="form-input form-select"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" disabled=true>{placeholder}</option>
                {options.iter().map(|option| view! {
                    <option value=*option>{*option}</option>
                }).collect_view()}
            </select>
        </label>
    }
}
