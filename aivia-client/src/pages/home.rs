use auth_flow::{routes::Page, session::SessionView};
use leptos::*;
use leptos_router::*;

use crate::SessionContext;

#[component]
pub fn Home(cx: Scope) -> impl IntoView {
    let session = SessionContext::expect(cx);
    let snapshot = session.snapshot;
    view! { cx,
        <div class="d-flex flex-column align-items-center justify-content-center flex-grow-1 gap-3 p-4">
            {move || snapshot.with(|snapshot| match snapshot.view() {
                SessionView::Loading => view! { cx, <p>"Loading..."</p> }.into_view(cx),
                SessionView::Unauthenticated => view! { cx,
                    <p>"You are not logged in."</p>
                    <A href=Page::SignIn.path()>"Sign in now."</A>
                }
                .into_view(cx),
                SessionView::Authenticated { name, .. } => {
                    let session = session.clone();
                    view! { cx,
                        <p>"Logged in as " {name.to_owned()}</p>
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| session.sign_out()
                        >
                            "Sign Out"
                        </button>
                    }
                    .into_view(cx)
                }
            })}
        </div>
    }
}
