use auth_flow::{
    navigation::{NavItem, SECTIONS},
    routes::Page,
};
use leptos::*;
use leptos_router::use_location;

use super::DashboardUserButton;

#[component]
fn SidebarItem(cx: Scope, item: &'static NavItem, pathname: Memo<String>) -> impl IntoView {
    let active = move || item.is_active(&pathname.get());
    view! { cx,
        <li class="nav-item">
            <a
                class="nav-link d-flex align-items-center gap-2 text-body border border-transparent"
                class:active=active
                aria-current=move || active().then_some("page")
                href=item.href()
            >
                <i class=format!("{} fa-fw", item.icon.class())></i>
                <span class="small fw-medium">{item.label}</span>
            </a>
        </li>
    }
}

/// Sidebar of the dashboard shell: brand link, navigation sections and the user button
#[component]
pub fn DashboardSidebar(cx: Scope) -> impl IntoView {
    let pathname = use_location(cx).pathname;
    let sections = SECTIONS
        .iter()
        .map(|section| {
            let items = section
                .iter()
                .map(|item| view! { cx, <SidebarItem item=item pathname=pathname/> })
                .collect::<Vec<_>>();
            view! { cx,
                <hr class="opacity-25 mx-2"/>
                <ul class="nav nav-pills flex-column gap-1 px-2">{items}</ul>
            }
        })
        .collect::<Vec<_>>();
    view! { cx,
        <nav class="d-flex flex-column flex-shrink-0 bg-body-tertiary" style="width: 16rem;">
            <a href=Page::Home.path() class="d-flex align-items-center gap-2 px-3 pt-3 text-decoration-none text-body">
                <img src="/logo.svg" height="36" width="36" alt="Aivia"/>
                <p class="fs-3 fw-semibold mb-0">"Aivia"</p>
            </a>
            {sections}
            <div class="mt-auto p-2">
                <DashboardUserButton/>
            </div>
        </nav>
    }
}
