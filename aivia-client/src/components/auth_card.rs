use leptos::*;

/// Two column card framing the sign up and sign in forms
#[component]
pub fn AuthCard(cx: Scope, children: Children) -> impl IntoView {
    view! { cx,
        <div class="container min-vh-100 d-flex align-items-center justify-content-center p-3">
            <div class="card overflow-hidden w-100 p-0" style="max-width: 56rem;">
                <div class="row g-0">
                    <div class="col-md-6 p-4 p-md-5">
                        {children(cx)}
                    </div>
                    <div
                        class="col-md-6 d-none d-md-flex flex-column gap-3 align-items-center justify-content-center"
                        style="background: radial-gradient(circle, #15803d, #14532d);"
                    >
                        <img src="/logo.svg" alt="Aivia Logo" width="92" height="92"/>
                        <p class="fs-3 fw-semibold text-white">"Aivia"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
