use auth_flow::session::SessionView;
use leptos::*;

use crate::SessionContext;

/// Signed in user's menu at the bottom of the sidebar
#[component]
pub fn DashboardUserButton(cx: Scope) -> impl IntoView {
    let session = SessionContext::expect(cx);
    let snapshot = session.snapshot;
    let (open, set_open) = create_signal(cx, false);

    move || {
        snapshot.with(|snapshot| match snapshot.view() {
            SessionView::Loading => view! { cx,
                <div class="d-flex align-items-center gap-2">
                    <span class="small fw-medium">"Loading..."</span>
                </div>
            }
            .into_view(cx),
            SessionView::Unauthenticated => view! { cx,
                <div class="d-flex align-items-center gap-2">
                    <span class="small fw-medium">"Not logged in"</span>
                </div>
            }
            .into_view(cx),
            SessionView::Authenticated { name, image } => {
                let session = session.clone();
                let avatar = image.map(|src| {
                    view! { cx,
                        <img src=src.to_owned() alt="" class="rounded-circle" width="32" height="32"/>
                    }
                });
                view! { cx,
                    <div class="dropdown w-100">
                        <button
                            type="button"
                            class="btn w-100 d-flex align-items-center justify-content-between gap-2 rounded-3 border p-3 overflow-hidden"
                            aria-expanded=move || open.get().to_string()
                            on:click=move |_| set_open.update(|open| *open = !*open)
                        >
                            {avatar}
                            <span class="text-truncate flex-grow-1 text-start">{name.to_owned()}</span>
                            <i class="fa-solid fa-chevron-down"></i>
                        </button>
                        <ul class="dropdown-menu w-100" class:show=move || open.get()>
                            <li>
                                <button
                                    type="button"
                                    class="dropdown-item d-flex align-items-center gap-2"
                                    on:click=move |_| {
                                        set_open.set(false);
                                        session.sign_out();
                                    }
                                >
                                    <i class="fa-solid fa-right-from-bracket"></i>
                                    "Sign out"
                                </button>
                            </li>
                        </ul>
                    </div>
                }
                .into_view(cx)
            }
        })
    }
}
