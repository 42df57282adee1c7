use common::api::SocialProvider;
use leptos::*;

const fn icon_class(provider: SocialProvider) -> &'static str {
    match provider {
        SocialProvider::Google => "fa-brands fa-google",
        SocialProvider::Github => "fa-brands fa-github",
    }
}

/// One outline button per OAuth provider. Shares the form's pending flag.
#[component]
pub fn SocialButtons<F>(cx: Scope, disabled: Signal<bool>, on_select: F) -> impl IntoView
where
    F: Fn(SocialProvider) + Clone + 'static,
{
    let buttons = SocialProvider::ALL
        .into_iter()
        .map(|provider| {
            let on_select = on_select.clone();
            view! { cx,
                <button
                    type="button"
                    class="btn btn-outline-secondary w-100 d-flex align-items-center justify-content-center gap-2"
                    prop:disabled=move || disabled.get()
                    on:click=move |_| on_select(provider)
                >
                    <i class=icon_class(provider)></i>
                    {provider.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();
    view! { cx,
        <div class="position-relative text-center small my-3">
            <hr/>
            <span class="position-absolute top-50 start-50 translate-middle px-2 bg-body text-body-secondary">
                "Or continue with"
            </span>
        </div>
        <div class="d-grid gap-2">{buttons}</div>
    }
}
