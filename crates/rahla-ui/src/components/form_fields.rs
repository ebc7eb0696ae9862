//! Inputs generated from field specs.
//!
//! # Design
//! - Values are strings keyed like the form model; the parent owns them.
//! - Multi-language fields render one input per language, each in its own direction.
//! - The field named by the current validation error is flagged `aria-invalid`.

use crate::core::forms::{FieldKind, FieldSpec, FormValues, LANGUAGES, localized_key};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FormFieldsProps {
    pub fields: &'static [FieldSpec],
    pub values: FormValues,
    pub on_change: Callback<(String, String)>,
    /// Label key of the field to flag.
    #[prop_or_default]
    pub invalid_field: Option<&'static str>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(FormFields)]
pub(crate) fn form_fields(props: &FormFieldsProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    html! {
        <div class="form-fields">
            {for props.fields.iter().map(|field| {
                let invalid = props.invalid_field == Some(field.label_key);
                let ctx = Controls {
                    values: &props.values,
                    on_change: &props.on_change,
                    disabled: props.disabled,
                    invalid,
                    bundle: &bundle,
                };
                let mut label = bundle.text(field.label_key, field.key);
                if field.required {
                    label.push_str(" *");
                }
                if field.kind.is_localized() {
                    html! {
                        <fieldset class={classes!("field", "localized", invalid.then_some("invalid"))}>
                            <legend>{label}</legend>
                            {for LANGUAGES.iter().map(|(language, language_label)| {
                                let key = localized_key(field.key, language);
                                let dir = if *language == "english" { "ltr" } else { "rtl" };
                                html! {
                                    <label class="stack">
                                        <span class="muted">{bundle.text(language_label, language)}</span>
                                        {ctx.control(field.kind, &key, dir)}
                                    </label>
                                }
                            })}
                        </fieldset>
                    }
                } else {
                    html! {
                        <label class={classes!("field", "stack", invalid.then_some("invalid"))}>
                            <span>{label}</span>
                            {ctx.control(field.kind, field.key, "auto")}
                        </label>
                    }
                }
            })}
        </div>
    }
}

struct Controls<'a> {
    values: &'a FormValues,
    on_change: &'a Callback<(String, String)>,
    disabled: bool,
    invalid: bool,
    bundle: &'a TranslationBundle,
}

impl Controls<'_> {
    fn control(&self, kind: FieldKind, key: &str, dir: &'static str) -> Html {
        let Self {
            values,
            on_change,
            disabled,
            invalid,
            bundle,
        } = *self;
        let value = values.get(key).cloned().unwrap_or_default();
        let aria_invalid = invalid.then_some("true");
        let emit = {
            let on_change = on_change.clone();
            let key = key.to_string();
            move |next: String| on_change.emit((key.clone(), next))
        };

        match kind {
            FieldKind::LongText | FieldKind::LocalizedLong => {
                let oninput = Callback::from(move |event: InputEvent| {
                    if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                        emit(area.value());
                    }
                });
                html! {
                    <textarea rows="4" {dir} {disabled} aria-invalid={aria_invalid} value={value} {oninput} />
                }
            }
            FieldKind::Toggle => {
                let onchange = Callback::from(move |event: Event| {
                    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                        emit(input.checked().to_string());
                    }
                });
                html! {
                    <input type="checkbox" checked={value == "true"} {disabled} {onchange} />
                }
            }
            FieldKind::Select(options) => {
                let onchange = Callback::from(move |event: Event| {
                    if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                        emit(select.value());
                    }
                });
                html! {
                    <select {disabled} aria-invalid={aria_invalid} {onchange}>
                        {for options.iter().map(|option| html! {
                            <option value={option.value} selected={option.value == value}>
                                {bundle.text(option.label_key, option.value)}
                            </option>
                        })}
                    </select>
                }
            }
            _ => {
                let oninput = Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                        emit(input.value());
                    }
                });
                let step = (kind == FieldKind::Decimal).then_some("any");
                html! {
                    <input
                        type={kind.input_type()}
                        {step}
                        {dir}
                        {disabled}
                        aria-invalid={aria_invalid}
                        value={value}
                        {oninput}
                    />
                }
            }
        }
    }
}
