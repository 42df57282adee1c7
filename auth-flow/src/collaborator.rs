//! Seams between the authentication flow and the outside world. The external authentication
//! service is reached through [AuthCollaborator] and [SessionProvider], route changes go through a
//! [Navigator]. Implementations are injected so views never touch global session state.

use std::rc::Rc;

use async_trait::async_trait;
use common::{
    api::{Session, SignInEmailRequest, SignUpEmailRequest, SocialSignInRequest},
    error::AvResult,
};
#[cfg(test)]
use mockall::automock;

/// Operations the external authentication service performs on behalf of the front end. Futures are
/// not [Send] since the browser runs every task on a single thread.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait AuthCollaborator {
    /// Register a new user with an email and password
    /// # Errors
    /// This function will return an error if the service rejects the registration or cannot be
    /// reached
    async fn sign_up_email(&self, request: &SignUpEmailRequest) -> AvResult<()>;
    /// Sign in an existing user with an email and password
    /// # Errors
    /// This function will return an error if the credentials are rejected or the service cannot be
    /// reached
    async fn sign_in_email(&self, request: &SignInEmailRequest) -> AvResult<()>;
    /// Start an OAuth sign in with a social provider. Any redirect to the provider is the
    /// implementor's responsibility.
    /// # Errors
    /// This function will return an error if the service refuses to start the flow or cannot be
    /// reached
    async fn sign_in_social(&self, request: &SocialSignInRequest) -> AvResult<()>;
    /// End the current session
    /// # Errors
    /// This function will return an error if the service cannot end the session
    async fn sign_out(&self) -> AvResult<()>;
}

/// Read access to the session the authentication service holds for this browser
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait SessionProvider {
    /// Fetch the current session. [None] means nobody is signed in.
    /// # Errors
    /// This function will return an error if the session could not be read
    async fn get_session(&self) -> AvResult<Option<Session>>;
}

/// Moves the application to another route
#[cfg_attr(test, automock)]
pub trait Navigator {
    /// Navigate to `route`. Failures are the implementor's to report.
    fn navigate(&self, route: &str);
}

#[async_trait(?Send)]
impl<T: AuthCollaborator + ?Sized> AuthCollaborator for Rc<T> {
    async fn sign_up_email(&self, request: &SignUpEmailRequest) -> AvResult<()> {
        (**self).sign_up_email(request).await
    }

    async fn sign_in_email(&self, request: &SignInEmailRequest) -> AvResult<()> {
        (**self).sign_in_email(request).await
    }

    async fn sign_in_social(&self, request: &SocialSignInRequest) -> AvResult<()> {
        (**self).sign_in_social(request).await
    }

    async fn sign_out(&self) -> AvResult<()> {
        (**self).sign_out().await
    }
}

#[async_trait(?Send)]
impl<T: SessionProvider + ?Sized> SessionProvider for Rc<T> {
    async fn get_session(&self) -> AvResult<Option<Session>> {
        (**self).get_session().await
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn navigate(&self, route: &str) {
        (**self).navigate(route);
    }
}
