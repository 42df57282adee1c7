use auth_flow::validation::Field;
use leptos::*;

#[component]
pub fn FormField<F>(
    cx: Scope,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    error: Signal<Option<&'static str>>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! { cx,
        <div class="mb-3">
            <label class="form-label" for=field.id()>{label}</label>
            <input
                class="form-control"
                class:is-invalid=move || error.get().is_some()
                type=input_type
                id=field.id()
                name=field.id()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! { cx, <div class="invalid-feedback d-block">{message}</div> }
                    })
            }}
        </div>
    }
}
