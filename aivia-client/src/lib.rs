mod api;
mod components;
mod pages;

use std::rc::Rc;

use auth_flow::{
    collaborator::Navigator,
    config::ClientConfig,
    routes::Page,
    session::{SessionGate, SessionSnapshot},
    submission::SubmissionController,
};
use common::error::AvError;
use leptos::*;
use leptos_router::*;

use crate::{
    api::AuthApi,
    pages::{
        dashboard::{DashboardLayout, Placeholder},
        home::Home,
        sign_in::SignIn,
        sign_up::SignUp,
    },
};

/// Session gate wired to the browser's authentication client and router
pub type Gate = SessionGate<Rc<AuthApi>, RouterNavigator>;
/// Submission controller wired to the browser's authentication client and router
pub type Controller = SubmissionController<Rc<AuthApi>, RouterNavigator>;

/// [Navigator] backed by the Leptos router. Must be created under a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator(Rc<dyn Fn(&str)>);

impl RouterNavigator {
    pub fn new(cx: Scope) -> Self {
        let navigate = use_navigate(cx);
        Self(Rc::new(move |route: &str| {
            if let Err(error) = navigate(route, NavigateOptions::default()) {
                let error = AvError::Navigation {
                    route: route.to_owned(),
                    reason: format!("{error:?}"),
                };
                log::error!("{error}");
            }
        }))
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: &str) {
        (self.0)(route);
    }
}

/// Shared services every page pulls from context
#[derive(Clone)]
pub struct Services {
    pub config: ClientConfig,
    pub api: Rc<AuthApi>,
}

impl Services {
    /// Services provided by [App]. Panics when used outside of it.
    pub fn expect(cx: Scope) -> Self {
        expect_context::<Self>(cx)
    }

    /// Fresh submission controller for one form instance
    pub fn controller(&self, cx: Scope) -> Controller {
        SubmissionController::new(Rc::clone(&self.api), RouterNavigator::new(cx), &self.config)
    }

    /// Session gate for one dashboard instance
    pub fn gate(&self, cx: Scope) -> Gate {
        SessionGate::new(Rc::clone(&self.api), RouterNavigator::new(cx), &self.config)
    }
}

/// Session of the dashboard currently on screen, provided by [DashboardLayout]
#[derive(Clone)]
pub struct SessionContext {
    pub snapshot: Signal<SessionSnapshot>,
    pub gate: Rc<Gate>,
}

impl SessionContext {
    /// Session provided by the enclosing dashboard. Panics when used outside of it.
    pub fn expect(cx: Scope) -> Self {
        expect_context::<Self>(cx)
    }

    /// Sign out in the background. The gate logs failures and navigates on success.
    pub fn sign_out(&self) {
        let gate = Rc::clone(&self.gate);
        spawn_local(async move { gate.sign_out().await });
    }
}

#[component]
pub fn App(cx: Scope, config: ClientConfig) -> impl IntoView {
    log::info!("Using authentication service at {}", config.auth_base_url);
    provide_context(
        cx,
        Services {
            api: Rc::new(AuthApi::new(config.clone())),
            config,
        },
    );

    view! {
        cx,
        <Router>
            <Routes>
                <Route
                    path=Page::SignUp.path()
                    view=move |cx| view! { cx, <SignUp/> }
                />
                <Route
                    path=Page::SignIn.path()
                    view=move |cx| view! { cx, <SignIn/> }
                />
                <Route
                    path=""
                    view=move |cx| view! { cx, <DashboardLayout/> }
                >
                    <Route
                        path=""
                        view=move |cx| view! { cx, <Home/> }
                    />
                    <Route
                        path=Page::Meetings.path()
                        view=move |cx| view! { cx, <Placeholder page=Page::Meetings/> }
                    />
                    <Route
                        path=Page::Agents.path()
                        view=move |cx| view! { cx, <Placeholder page=Page::Agents/> }
                    />
                    <Route
                        path=Page::Upgrade.path()
                        view=move |cx| view! { cx, <Placeholder page=Page::Upgrade/> }
                    />
                </Route>
            </Routes>
        </Router>
    }
}
