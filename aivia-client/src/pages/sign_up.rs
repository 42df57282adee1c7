use std::rc::Rc;

use auth_flow::{
    routes::Page,
    submission::SubmissionState,
    validation::{Field, FieldErrors, SignUpForm},
};
use common::api::SocialProvider;
use leptos::*;
use leptos_router::*;

use crate::{
    components::{AuthCard, ErrorBanner, FormField, SocialButtons},
    Services,
};

#[component]
pub fn SignUp(cx: Scope) -> impl IntoView {
    let services = Services::expect(cx);
    let (state, set_state) = create_signal(cx, SubmissionState::Idle);
    let controller = Rc::new(services.controller(cx).with_observer(move |state| {
        let _ = set_state.try_set(state.clone());
    }));
    let abandon = Rc::clone(&controller);
    on_cleanup(cx, move || abandon.abandon());

    let form = create_rw_signal(cx, SignUpForm::default());
    let (submitted, set_submitted) = create_signal(cx, false);
    // errors stay hidden until the first submit, then follow every keystroke
    let errors = create_memo(cx, move |_| {
        if !submitted.get() {
            return FieldErrors::default();
        }
        form.with(|form| form.validate().err().unwrap_or_default())
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
            let form = form.get_untracked();
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                if let Err(errors) = controller.submit_sign_up_form(&form).await {
                    log::debug!("Sign up form has {} invalid field(s)", errors.len());
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

    let field = move |field: Field, label, input_type, placeholder| {
        view! { cx,
            <FormField
                field=field
                label=label
                input_type=input_type
                placeholder=placeholder
                value=Signal::derive(cx, move || form.with(|form| form.value(field).to_owned()))
                error=Signal::derive(cx, move || errors.with(|errors| errors.get(field)))
                on_input=move |value| form.update(|form| form.set(field, value))
            />
        }
    };

    view! { cx,
        <AuthCard>
            <form novalidate on:submit=on_submit class="d-flex flex-column gap-3">
                <div class="text-center">
                    <h1 class="fs-3 fw-bold">"Let's Get Started"</h1>
                    <p class="text-body-secondary">"Create your account to continue"</p>
                </div>
                <div>
                    {field(Field::Name, "Name", "text", "Enter your name")}
                    {field(Field::Email, "Email", "email", "Enter your email")}
                    {field(Field::Password, "Password", "password", "Enter your password")}
                    {field(Field::ConfirmPassword, "Confirm Password", "password", "Confirm your password")}
                </div>
                <ErrorBanner message=error on_dismiss=on_dismiss/>
                <button type="submit" class="btn btn-success w-100" prop:disabled=move || pending.get()>
                    "Sign Up"
                </button>
                <SocialButtons disabled=pending on_select=on_social/>
                <div class="text-body-secondary text-center small">
                    "Already have an account? "
                    <A href=Page::SignIn.path()>"Sign In"</A>
                </div>
            </form>
        </AuthCard>
    }
}
