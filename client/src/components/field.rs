//! Labelled form controls with inline error text.

use leptos::prelude::*;

/// Single-line text input. `kind` is the HTML input type.
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    kind: &'static str,
    value: String,
    placeholder: &'static str,
    error: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input class="field__input" type=kind name=name id=name value=value placeholder=placeholder/>
            {error.map(|message| view! { <p class="field__error">{message}</p> })}
        </label>
    }
}

/// Multi-line text input.
#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    rows: &'static str,
    value: String,
    placeholder: &'static str,
    error: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea class="field__input field__input--area" name=name id=name rows=rows placeholder=placeholder>
                {value}
            </textarea>
            {error.map(|message| view! { <p class="field__error">{message}</p> })}
        </label>
    }
}

/// Image picker. The preview is filled in by `static/app.js`.
#[component]
pub fn ImageField(label: &'static str, hint: &'static str) -> impl IntoView {
    view! {
        <label class="field field--image">
            <span class="field__label">{label}</span>
            <span class="image-drop">
                <img class="image-drop__preview" alt="Preview" hidden="hidden"/>
                <span class="image-drop__hint">
                    <strong>"Click to upload"</strong>
                    " "
                    {hint}
                </span>
                <span class="image-drop__formats">"PNG, JPG or JPEG (MAX. 5MB)"</span>
                <input class="image-drop__input" type="file" name="image" accept="image/*"/>
            </span>
        </label>
    }
}
