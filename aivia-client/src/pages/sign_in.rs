use std::rc::Rc;

use auth_flow::{
    routes::Page,
    submission::SubmissionState,
    validation::{Field, FieldErrors, SignInForm},
};
use common::api::SocialProvider;
use leptos::*;
use leptos_router::*;

use crate::{
    components::{AuthCard, ErrorBanner, FormField, SocialButtons},
    Services,
};

#[component]
pub fn SignIn(cx: Scope) -> impl IntoView {
    let services = Services::expect(cx);
    let (state, set_state) = create_signal(cx, SubmissionState::Idle);
    let controller = Rc::new(services.controller(cx).with_observer(move |state| {
        let _ = set_state.try_set(state.clone());
    }));
    let abandon = Rc::clone(&controller);
    on_cleanup(cx, move || abandon.abandon());

    let (email, set_email) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());
    let (submitted, set_submitted) = create_signal(cx, false);
    let current_form = move || SignInForm {
        email: email.get(),
        password: password.get(),
    };
    let errors = create_memo(cx, move |_| {
        if !submitted.get() {
            return FieldErrors::default();
        }
        current_form().validate().err().unwrap_or_default()
    });
    let pending = Signal::derive(cx, move || state.with(SubmissionState::is_pending));
    let error = Signal::derive(cx, move || {
        state.with(|state| state.error_message().map(str::to_owned))
    });

    let on_submit = {
        let controller = Rc::clone(&controller);
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            set_submitted.set(true);
            let form = SignInForm {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                if let Err(errors) = controller.submit_sign_in_form(&form).await {
                    log::debug!("Sign in form has {} invalid field(s)", errors.len());
                }
            });
        }
    };
    let on_social = {
        let controller = Rc::clone(&controller);
        move |provider: SocialProvider| {
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.submit_social(provider).await;
            });
        }
    };
    let on_dismiss = move || controller.dismiss_error();

    view! { cx,
        <AuthCard>
            <form novalidate on:submit=on_submit class="d-flex flex-column gap-3">
                <div class="text-center">
                    <h1 class="fs-3 fw-bold">"Welcome Back"</h1>
                    <p class="text-body-secondary">"Login to your account"</p>
                </div>
                <div>
                    <FormField
                        field=Field::Email
                        label="Email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email.into()
                        error=Signal::derive(cx, move || errors.with(|errors| errors.get(Field::Email)))
                        on_input=move |value| set_email.set(value)
                    />
                    <FormField
                        field=Field::Password
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password.into()
                        error=Signal::derive(cx, move || errors.with(|errors| errors.get(Field::Password)))
                        on_input=move |value| set_password.set(value)
                    />
                </div>
                <ErrorBanner message=error on_dismiss=on_dismiss/>
                <button type="submit" class="btn btn-success w-100" prop:disabled=move || pending.get()>
                    "Sign In"
                </button>
                <SocialButtons disabled=pending on_select=on_social/>
                <div class="text-body-secondary text-center small">
                    "Don't have an account? "
                    <A href=Page::SignUp.path()>"Sign Up"</A>
                </div>
            </form>
        </AuthCard>
    }
}
