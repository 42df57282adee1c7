use std::rc::Rc;

use auth_flow::{navigation::active_item, routes::Page, session::SessionSnapshot};
use leptos::*;
use leptos_router::*;

use crate::{components::DashboardSidebar, Services, SessionContext};

/// Shell of every signed in page. Reads the session once per mount and hands it to the sidebar
/// and the routed page through [SessionContext].
#[component]
pub fn DashboardLayout(cx: Scope) -> impl IntoView {
    let services = Services::expect(cx);
    let gate = Rc::new(services.gate(cx));
    let fetch_gate = Rc::clone(&gate);
    let session = create_local_resource(
        cx,
        || (),
        move |_| {
            let gate = Rc::clone(&fetch_gate);
            async move { gate.current_session().await.session }
        },
    );
    let snapshot = Signal::derive(cx, move || SessionSnapshot {
        loading: session.loading().get(),
        session: session.read(cx).flatten(),
    });
    provide_context(cx, SessionContext { snapshot, gate });

    view! { cx,
        <div class="d-flex min-vh-100">
            <DashboardSidebar/>
            <main class="d-flex flex-column flex-grow-1 bg-body text-body">
                <Outlet/>
            </main>
        </div>
    }
}

/// Dashboard section whose content is not built yet
#[component]
pub fn Placeholder(cx: Scope, page: Page) -> impl IntoView {
    let label = active_item(page.path()).map_or("Aivia", |item| item.label);
    view! { cx,
        <div class="d-flex flex-column flex-grow-1 p-4">
            <h1 class="fs-3 fw-semibold">{label}</h1>
        </div>
    }
}
