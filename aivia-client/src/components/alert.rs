use leptos::*;

/// Dismissable banner showing the last submission failure
#[component]
pub fn ErrorBanner<F>(cx: Scope, message: Signal<Option<String>>, on_dismiss: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    move || {
        message.get().map(|message| {
            let on_dismiss = on_dismiss.clone();
            view! { cx,
                <div class="alert alert-danger d-flex align-items-center gap-2 border-0 mb-0" role="alert">
                    <i class="fa-solid fa-circle-exclamation"></i>
                    <strong class="flex-grow-1">{message}</strong>
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close"
                        on:click=move |_| on_dismiss()
                    ></button>
                </div>
            }
        })
    }
}
