use async_trait::async_trait;
use auth_flow::{
    collaborator::{AuthCollaborator, SessionProvider},
    config::ClientConfig,
};
use common::{
    api::{
        ErrorBody, Session, SignInEmailRequest, SignUpEmailRequest, SocialSignInRequest,
        SocialSignInResponse,
    },
    error::{AvError, AvResult},
};
use gloo_net::http::{Request, Response};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Serialize,
};
use web_sys::RequestCredentials;

/// Client of the external authentication service. The session lives in an HTTP only cookie so
/// every request is sent with credentials.
#[derive(Clone)]
pub struct AuthApi {
    config: ClientConfig,
}

impl AuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> AvResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        parse_response(response).await
    }

    async fn get<T>(&self, path: &str) -> AvResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        parse_response(response).await
    }
}

#[async_trait(?Send)]
impl AuthCollaborator for AuthApi {
    async fn sign_up_email(&self, request: &SignUpEmailRequest) -> AvResult<()> {
        self.post::<_, IgnoredAny>("sign-up/email", request).await?;
        Ok(())
    }

    async fn sign_in_email(&self, request: &SignInEmailRequest) -> AvResult<()> {
        self.post::<_, IgnoredAny>("sign-in/email", request).await?;
        Ok(())
    }

    async fn sign_in_social(&self, request: &SocialSignInRequest) -> AvResult<()> {
        let response: SocialSignInResponse = self.post("sign-in/social", request).await?;
        let SocialSignInResponse {
            url: Some(url),
            redirect: true,
        } = response
        else {
            log::debug!("Social sign in with {} finished without a redirect", request.provider);
            return Ok(());
        };
        log::info!("Redirecting to {} for sign in", request.provider);
        leptos::window()
            .location()
            .set_href(&url)
            .map_err(|error| AvError::Navigation {
                route: url.clone(),
                reason: format!("{error:?}"),
            })
    }

    async fn sign_out(&self) -> AvResult<()> {
        self.post::<_, IgnoredAny>("sign-out", &serde_json::Map::new()).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl SessionProvider for AuthApi {
    async fn get_session(&self) -> AvResult<Option<Session>> {
        self.get("get-session").await
    }
}

fn transport(error: gloo_net::Error) -> AvError {
    AvError::Transport(error.to_string())
}

async fn parse_response<T>(response: Response) -> AvResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let text = response.text().await.map_err(transport)?;
    // ensure we've got 2xx status
    if !response.ok() {
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
        log::warn!(
            "Authentication service rejected request to {} with status {status}, code {}",
            response.url(),
            body.code().unwrap_or("none"),
        );
        return Err(AvError::Rejected {
            status,
            message: body.message().map(str::to_owned),
        });
    }
    let text = if text.trim().is_empty() { "null" } else { &text };
    serde_json::from_str(text).map_err(|error| {
        AvError::UnexpectedBody(format!("{error}. Status {status}, body `{text}`"))
    })
}
