//! Session gated rendering and sign out.
//!
//! The gate never holds the session itself. Views read it through an injected [SessionProvider]
//! and decide what to render with [SessionSnapshot::view].

use std::cell::Cell;

use common::api::Session;
use log::{debug, error, info};

use crate::{
    collaborator::{AuthCollaborator, Navigator, SessionProvider},
    config::ClientConfig,
};

/// What a view knows about the session at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// True while the session is being read
    pub loading: bool,
    /// Session read by the last completed fetch
    pub session: Option<Session>,
}

impl SessionSnapshot {
    /// Snapshot of a read that has not completed yet
    pub const fn loading() -> Self {
        Self {
            loading: true,
            session: None,
        }
    }

    /// Snapshot of a completed read
    pub const fn settled(session: Option<Session>) -> Self {
        Self {
            loading: false,
            session,
        }
    }

    /// Which view to render. Loading wins over a session kept from an earlier read.
    pub fn view(&self) -> SessionView<'_> {
        if self.loading {
            return SessionView::Loading;
        }
        match &self.session {
            Some(session) => SessionView::Authenticated {
                name: session.user_name(),
                image: session.user_image(),
            },
            None => SessionView::Unauthenticated,
        }
    }
}

/// The three things a session gated view can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView<'s> {
    Loading,
    Unauthenticated,
    Authenticated {
        name: &'s str,
        image: Option<&'s str>,
    },
}

/// Progress of a sign out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignOutState {
    /// Nothing requested yet, or the last attempt failed
    Active,
    /// Request in flight
    SigningOut,
    /// Session ended and the user was sent to the sign in route
    SignedOut,
}

/// Reads the session and ends it on request
pub struct SessionGate<S, N> {
    /// Authentication service holding the session
    service: S,
    /// Router used once the session has ended
    navigator: N,
    /// Route shown after signing out
    sign_in_route: String,
    /// Progress of sign out
    sign_out: Cell<SignOutState>,
}

impl<S, N> SessionGate<S, N>
where
    S: SessionProvider + AuthCollaborator,
    N: Navigator,
{
    pub fn new(service: S, navigator: N, config: &ClientConfig) -> Self {
        Self {
            service,
            navigator,
            sign_in_route: config.sign_in_route.clone(),
            sign_out: Cell::new(SignOutState::Active),
        }
    }

    /// Read the session from the service. A failed read is logged and treated as no session so a
    /// broken service shows the signed out view instead of an error.
    pub async fn current_session(&self) -> SessionSnapshot {
        match self.service.get_session().await {
            Ok(session) => {
                debug!("Session present: {}", session.is_some());
                SessionSnapshot::settled(session)
            }
            Err(error) => {
                error!("Could not read the current session. {error}");
                SessionSnapshot::settled(None)
            }
        }
    }

    /// End the session and move to the sign in route. Failures are logged and never shown to the
    /// user. Once signed out, or while a sign out is in flight, further calls do nothing.
    pub async fn sign_out(&self) {
        if self.sign_out.get() != SignOutState::Active {
            debug!("Ignoring sign out, state is {:?}", self.sign_out.get());
            return;
        }
        self.sign_out.set(SignOutState::SigningOut);
        match self.service.sign_out().await {
            Ok(()) => {
                info!("Signed out");
                self.sign_out.set(SignOutState::SignedOut);
                self.navigator.navigate(&self.sign_in_route);
            }
            Err(error) => {
                error!("Sign out error: {error}");
                self.sign_out.set(SignOutState::Active);
            }
        }
    }

    /// True once the session has been ended through this gate
    pub fn is_signed_out(&self) -> bool {
        self.sign_out.get() == SignOutState::SignedOut
    }
}

#[cfg(test)]
mod test {
    use async_trait::async_trait;
    use common::{
        api::{
            Session, SessionUser, SignInEmailRequest, SignUpEmailRequest, SocialSignInRequest,
        },
        error::{AvError, AvResult},
    };
    use mockall::mock;
    use rstest::{fixture, rstest};

    use super::{SessionGate, SessionSnapshot, SessionView};
    use crate::{
        collaborator::{AuthCollaborator, MockNavigator, SessionProvider},
        config::ClientConfig,
    };

    mock! {
        AuthService {}

        #[async_trait(?Send)]
        impl AuthCollaborator for AuthService {
            async fn sign_up_email(&self, request: &SignUpEmailRequest) -> AvResult<()>;
            async fn sign_in_email(&self, request: &SignInEmailRequest) -> AvResult<()>;
            async fn sign_in_social(&self, request: &SocialSignInRequest) -> AvResult<()>;
            async fn sign_out(&self) -> AvResult<()>;
        }

        #[async_trait(?Send)]
        impl SessionProvider for AuthService {
            async fn get_session(&self) -> AvResult<Option<Session>>;
        }
    }

    #[fixture]
    fn session() -> Session {
        Session {
            user: SessionUser {
                name: "Al".to_owned(),
                image: Some("https://example.com/al.png".to_owned()),
            },
        }
    }

    fn navigator_expecting(times: usize) -> MockNavigator {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|route: &str| route == "/sign-in")
            .times(times)
            .return_const(());
        navigator
    }

    #[rstest]
    fn view_should_show_loading_only_while_pending(session: Session) {
        assert_eq!(SessionSnapshot::loading().view(), SessionView::Loading);
        let refreshing = SessionSnapshot {
            loading: true,
            session: Some(session),
        };
        assert_eq!(refreshing.view(), SessionView::Loading);
    }

    #[rstest]
    fn view_should_follow_session_presence_once_settled(session: Session) {
        assert_eq!(
            SessionSnapshot::settled(None).view(),
            SessionView::Unauthenticated
        );

        let snapshot = SessionSnapshot::settled(Some(session));
        assert_eq!(
            snapshot.view(),
            SessionView::Authenticated {
                name: "Al",
                image: Some("https://example.com/al.png"),
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn current_session_should_return_service_session(session: Session) {
        let expected = session.clone();
        let mut service = MockAuthService::new();
        service
            .expect_get_session()
            .times(1)
            .returning(move || Ok(Some(session.clone())));
        let gate = SessionGate::new(service, navigator_expecting(0), &ClientConfig::default());

        let snapshot = gate.current_session().await;

        assert_eq!(snapshot, SessionSnapshot::settled(Some(expected)));
    }

    #[tokio::test]
    async fn current_session_should_treat_read_failure_as_absent() {
        let mut service = MockAuthService::new();
        service
            .expect_get_session()
            .returning(|| Err(AvError::Transport("offline".to_owned())));
        let gate = SessionGate::new(service, navigator_expecting(0), &ClientConfig::default());

        let snapshot = gate.current_session().await;

        assert_eq!(snapshot.view(), SessionView::Unauthenticated);
    }

    #[tokio::test]
    async fn sign_out_should_navigate_to_sign_in_exactly_once() {
        let mut service = MockAuthService::new();
        service.expect_sign_out().times(1).returning(|| Ok(()));
        let gate = SessionGate::new(service, navigator_expecting(1), &ClientConfig::default());

        gate.sign_out().await;
        gate.sign_out().await;

        assert!(gate.is_signed_out());
    }

    #[tokio::test]
    async fn sign_out_failure_should_stay_and_allow_retry() {
        let mut service = MockAuthService::new();
        let mut attempts = 0;
        service.expect_sign_out().times(2).returning(move || {
            attempts += 1;
            if attempts == 1 {
                Err(AvError::Rejected {
                    status: 500,
                    message: None,
                })
            } else {
                Ok(())
            }
        });
        let gate = SessionGate::new(service, navigator_expecting(1), &ClientConfig::default());

        gate.sign_out().await;
        assert!(!gate.is_signed_out());

        gate.sign_out().await;
        assert!(gate.is_signed_out());
    }

    #[tokio::test]
    async fn sign_out_should_use_configured_route() {
        let mut service = MockAuthService::new();
        service.expect_sign_out().returning(|| Ok(()));
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|route: &str| route == "/login")
            .times(1)
            .return_const(());
        let config = ClientConfig {
            sign_in_route: "/login".to_owned(),
            ..ClientConfig::default()
        };
        let gate = SessionGate::new(service, navigator, &config);

        gate.sign_out().await;
    }
}
