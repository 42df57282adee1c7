//! Submission state of the authentication forms.
//!
//! [SubmissionMachine] owns the state transitions and the request sequence, [SubmissionController]
//! drives it against an [AuthCollaborator]. A form instance owns one controller and every submit
//! action on that form shares its single pending flag.

use std::cell::RefCell;

use common::{
    api::{SignInEmailRequest, SignUpEmailRequest, SocialProvider, SocialSignInRequest},
    error::AvResult,
};
use log::{debug, error, info};

use crate::{
    collaborator::{AuthCollaborator, Navigator},
    config::ClientConfig,
    validation::{FieldErrors, SignInForm, SignInInput, SignUpForm, SignUpInput},
};

/// State of a form's submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Message of a failed submission, shown in the form's error banner
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Proof that a submission was started. Carries the sequence number the response must match to
/// settle the state.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Linear state machine `Idle -> Pending -> Succeeded | Failed` guarded by a monotonic request
/// sequence. Only the response to the most recent request may settle the state.
#[derive(Debug, Default)]
pub struct SubmissionMachine {
    /// Current state
    state: SubmissionState,
    /// Sequence number of the most recent request
    sequence: u64,
}

impl SubmissionMachine {
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Start a new submission. Returns [None] while another submission is pending.
    pub fn begin(&mut self) -> Option<SubmissionTicket> {
        if self.state.is_pending() {
            return None;
        }
        self.sequence += 1;
        self.state = SubmissionState::Pending;
        Some(SubmissionTicket(self.sequence))
    }

    /// Settle the submission identified by `ticket`. Returns false and leaves the state untouched
    /// when the ticket is stale or nothing is pending.
    pub fn settle(&mut self, ticket: &SubmissionTicket, outcome: Result<(), String>) -> bool {
        if ticket.0 != self.sequence || !self.state.is_pending() {
            return false;
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(message) => SubmissionState::Failed(message),
        };
        true
    }

    /// Forget the pending submission, if any. Its response will be discarded when it arrives.
    pub fn abandon(&mut self) -> bool {
        if !self.state.is_pending() {
            return false;
        }
        self.sequence += 1;
        self.state = SubmissionState::Idle;
        true
    }

    /// Clear a failure once the user dismisses the banner
    pub fn dismiss(&mut self) -> bool {
        if !matches!(self.state, SubmissionState::Failed(_)) {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}

/// What happens after the authentication service accepts a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnSuccess {
    /// Move to the configured callback route
    Navigate,
    /// The collaborator already redirected the browser
    Stay,
}

/// Callback told about every state change
type Observer = Box<dyn Fn(&SubmissionState)>;

/// Submits authentication forms to the [AuthCollaborator] and tracks the outcome
pub struct SubmissionController<C, N> {
    /// External authentication service
    collaborator: C,
    /// Router used after a successful sign up or sign in
    navigator: N,
    /// Route passed to the service and navigated to on success
    callback_url: String,
    /// Current submission state
    machine: RefCell<SubmissionMachine>,
    /// Optional listener, used by views to mirror the state into their reactive graph
    observer: Option<Observer>,
}

impl<C, N> SubmissionController<C, N>
where
    C: AuthCollaborator,
    N: Navigator,
{
    pub fn new(collaborator: C, navigator: N, config: &ClientConfig) -> Self {
        Self {
            collaborator,
            navigator,
            callback_url: config.callback_url.clone(),
            machine: RefCell::default(),
            observer: None,
        }
    }

    /// Register a listener called after every state change
    #[must_use]
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&SubmissionState) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SubmissionState {
        self.machine.borrow().state().clone()
    }

    /// True while a submission is in flight. Views disable every submit affordance on it.
    pub fn is_pending(&self) -> bool {
        self.machine.borrow().state().is_pending()
    }

    /// Register a new user with the validated sign up details. A call made while another
    /// submission is pending does nothing and returns [SubmissionState::Pending].
    pub async fn submit_sign_up(&self, input: &SignUpInput) -> SubmissionState {
        let Some(ticket) = self.begin("sign up") else {
            return self.state();
        };
        let request = SignUpEmailRequest {
            name: input.name().to_owned(),
            email: input.email().to_owned(),
            password: input.password().to_owned(),
            callback_url: self.callback_url.clone(),
        };
        let result = self.collaborator.sign_up_email(&request).await;
        self.finish(&ticket, "sign up", result, OnSuccess::Navigate)
    }

    /// Validate `form` and submit it. Nothing is sent when validation fails.
    /// # Errors
    /// This function will return an error if the form does not pass validation
    pub async fn submit_sign_up_form(
        &self,
        form: &SignUpForm,
    ) -> Result<SubmissionState, FieldErrors> {
        let input = form.validate().map_err(|errors| {
            debug!("Sign up blocked by validation. {errors}");
            errors
        })?;
        Ok(self.submit_sign_up(&input).await)
    }

    /// Sign in with the validated email and password
    pub async fn submit_sign_in(&self, input: &SignInInput) -> SubmissionState {
        let Some(ticket) = self.begin("sign in") else {
            return self.state();
        };
        let request = SignInEmailRequest {
            email: input.email().to_owned(),
            password: input.password().to_owned(),
            callback_url: self.callback_url.clone(),
        };
        let result = self.collaborator.sign_in_email(&request).await;
        self.finish(&ticket, "sign in", result, OnSuccess::Navigate)
    }

    /// Validate `form` and sign in with it. Nothing is sent when validation fails.
    /// # Errors
    /// This function will return an error if the form does not pass validation
    pub async fn submit_sign_in_form(
        &self,
        form: &SignInForm,
    ) -> Result<SubmissionState, FieldErrors> {
        let input = form.validate().map_err(|errors| {
            debug!("Sign in blocked by validation. {errors}");
            errors
        })?;
        Ok(self.submit_sign_in(&input).await)
    }

    /// Start an OAuth sign in with `provider`. On success the collaborator has already sent the
    /// browser to the provider so no local navigation happens.
    pub async fn submit_social(&self, provider: SocialProvider) -> SubmissionState {
        let Some(ticket) = self.begin("social sign in") else {
            return self.state();
        };
        let request = SocialSignInRequest {
            provider,
            callback_url: self.callback_url.clone(),
        };
        let result = self.collaborator.sign_in_social(&request).await;
        self.finish(&ticket, "social sign in", result, OnSuccess::Stay)
    }

    /// Clear the error banner
    pub fn dismiss_error(&self) {
        let dismissed = self.machine.borrow_mut().dismiss();
        if dismissed {
            self.notify();
        }
    }

    /// Forget the in-flight submission, e.g. when its form is torn down
    pub fn abandon(&self) {
        let abandoned = self.machine.borrow_mut().abandon();
        if abandoned {
            debug!("Abandoned pending submission");
            self.notify();
        }
    }

    /// Move to [SubmissionState::Pending] unless a submission is already in flight
    fn begin(&self, action: &str) -> Option<SubmissionTicket> {
        let ticket = self.machine.borrow_mut().begin();
        match ticket {
            Some(ticket) => {
                debug!("Starting {action} request {}", ticket.0);
                self.notify();
                Some(ticket)
            }
            None => {
                debug!("Ignoring {action}, another submission is pending");
                None
            }
        }
    }

    /// Settle the submission for `ticket` with the collaborator's `result`
    fn finish(
        &self,
        ticket: &SubmissionTicket,
        action: &str,
        result: AvResult<()>,
        on_success: OnSuccess,
    ) -> SubmissionState {
        let outcome = result.map_err(|error| {
            error!("Unable to {action}. {error}");
            error.user_message()
        });
        let succeeded = outcome.is_ok();
        let applied = self.machine.borrow_mut().settle(ticket, outcome);
        if !applied {
            debug!("Discarding stale {action} response {}", ticket.0);
            return self.state();
        }
        self.notify();
        if succeeded {
            info!("{action} request {} succeeded", ticket.0);
            if on_success == OnSuccess::Navigate {
                self.navigator.navigate(&self.callback_url);
            }
        }
        self.state()
    }

    /// Tell the observer about the current state
    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let state = self.state();
            observer(&state);
        }
    }
}
