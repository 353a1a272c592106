use std::time::Duration;

use percent_encoding::percent_decode_str;
use reqwest::header::LOCATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, HttpError, Result};

const LEGACY_PREFIX: &str = "auth";
const REALMS: &str = "realms";
const ADMIN: &str = "admin";
const OPENID_CONNECT: [&str; 2] = ["protocol", "openid-connect"];

/// Entry point to every Keycloak endpoint.
///
/// Holds nothing but the base URL and a `reqwest::Client`; each method sends
/// exactly one request.
#[derive(Clone, Debug)]
pub struct KeycloakClient {
    http: reqwest::Client,
    base_url: Url,
    legacy_wildfly_support: bool,
}

pub struct KeycloakClientBuilder {
    base_path: String,
    legacy_wildfly_support: bool,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http: Option<reqwest::Client>,
}

impl KeycloakClientBuilder {
    /// Keycloak before 17 served every endpoint under `/auth`.
    pub fn legacy_wildfly_support(mut self) -> Self {
        self.legacy_wildfly_support = true;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured client. `timeout` and `user_agent` are ignored then.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<KeycloakClient> {
        let base_url = Url::parse(&self.base_path)
            .map_err(|_| Error::InvalidBaseUrl(self.base_path.to_owned()))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl(self.base_path));
        }

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();

                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }

                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }

                builder.build().map_err(|source| Error::Transport {
                    context: "could not build http client",
                    source,
                })?
            }
        };

        log::debug!(
            "KeycloakClient created for {} (legacy_wildfly_support={})",
            base_url,
            self.legacy_wildfly_support
        );

        Ok(KeycloakClient {
            http,
            base_url,
            legacy_wildfly_support: self.legacy_wildfly_support,
        })
    }
}

impl KeycloakClient {
    pub fn new(base_path: &str) -> Result<KeycloakClient> {
        Self::builder(base_path).build()
    }

    pub fn builder(base_path: &str) -> KeycloakClientBuilder {
        KeycloakClientBuilder {
            base_path: base_path.to_owned(),
            legacy_wildfly_support: false,
            timeout: None,
            user_agent: None,
            http: None,
        }
    }

    pub fn base_path(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    fn url(&self, prefix: &[&str], path: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        // Checked in `build`: the base URL can always take path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();

            if self.legacy_wildfly_support {
                segments.push(LEGACY_PREFIX);
            }

            segments.extend(prefix).extend(path);
        }

        url
    }

    /// `{base}/realms/{realm}/{path...}`
    pub(crate) fn realm_url(&self, realm: &str, path: &[&str]) -> Url {
        self.url(&[REALMS, realm], path)
    }

    /// `{base}/admin/realms/{realm}/{path...}`
    pub(crate) fn admin_realm_url(&self, realm: &str, path: &[&str]) -> Url {
        self.url(&[ADMIN, REALMS, realm], path)
    }

    /// `{base}/admin/{path...}`
    pub(crate) fn admin_url(&self, path: &[&str]) -> Url {
        self.url(&[ADMIN], path)
    }

    /// `{base}/realms/{realm}/protocol/openid-connect/{path...}`
    pub(crate) fn openid_connect_url(&self, realm: &str, path: &[&str]) -> Url {
        self.url(&[REALMS, realm, OPENID_CONNECT[0], OPENID_CONNECT[1]], path)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    pub(crate) fn request_with_bearer_auth(
        &self,
        method: Method,
        url: Url,
        token: &str,
    ) -> RequestBuilder {
        self.request(method, url).bearer_auth(token)
    }

    /// Public clients have no secret, so the header is only set when one is
    /// given.
    pub(crate) fn request_with_basic_auth(
        &self,
        method: Method,
        url: Url,
        client_id: &str,
        client_secret: &str,
    ) -> RequestBuilder {
        let request = self.request(method, url);

        if client_secret.is_empty() {
            request
        } else {
            request.basic_auth(client_id, Some(client_secret))
        }
    }

    /// Sends the request and turns transport failures and non-2xx statuses
    /// into an [`Error`] tagged with `context`.
    pub(crate) async fn send(
        &self,
        context: &'static str,
        request: RequestBuilder,
    ) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| Error::Transport { context, source })?;

        check_for_error(context, response).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        context: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(context, request).await?;

        decode(context, response).await
    }

    pub(crate) async fn send_empty(
        &self,
        context: &'static str,
        request: RequestBuilder,
    ) -> Result<()> {
        self.send(context, request).await?;
        Ok(())
    }

    /// For create calls: the new resource's id from the `Location` header.
    pub(crate) async fn send_created(
        &self,
        context: &'static str,
        request: RequestBuilder,
    ) -> Result<String> {
        let response = self.send(context, request).await?;

        Ok(get_id(&response))
    }
}

async fn check_for_error(context: &'static str, response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    log::debug!("{} failed with {}: {}", context, status, body);

    Err(HttpError::new(context, status, body).into())
}

async fn decode<T: DeserializeOwned>(context: &'static str, response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| Error::Transport { context, source })?;

    serde_json::from_slice(&bytes).map_err(|source| Error::Decode { context, source })
}

fn get_id(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .and_then(|location| location.to_str().ok())
        .and_then(|location| location.trim_end_matches('/').rsplit('/').next())
        .map(|id| percent_decode_str(id).decode_utf8_lossy().into_owned())
        .unwrap_or_default()
}
