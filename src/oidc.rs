use reqwest::Method;
use serde_json::{Map, Value};

use crate::client::KeycloakClient;
use crate::error::Result;
use crate::models::{
    CertResponse, IntrospectTokenResult, IssuerResponse, Jwt, TokenOptions, UserInfo,
    WellKnownConfiguration,
};

const ADMIN_CLIENT_ID: &str = "admin-cli";

impl KeycloakClient {
    pub async fn get_well_known_openid_configuration(
        &self,
        realm: &str,
    ) -> Result<WellKnownConfiguration> {
        const ERR_MESSAGE: &str = "could not get openid configuration";

        let url = self.realm_url(realm, &[".well-known", "openid-configuration"]);

        self.send_json(ERR_MESSAGE, self.request(Method::GET, url))
            .await
    }

    /// Realm public key and service URLs.
    pub async fn get_issuer(&self, realm: &str) -> Result<IssuerResponse> {
        const ERR_MESSAGE: &str = "could not get issuer";

        self.send_json(ERR_MESSAGE, self.request(Method::GET, self.realm_url(realm, &[])))
            .await
    }

    /// JSON Web Key Set the realm signs tokens with.
    pub async fn get_certs(&self, realm: &str) -> Result<CertResponse> {
        const ERR_MESSAGE: &str = "could not get certs";

        let url = self.openid_connect_url(realm, &["certs"]);

        self.send_json(ERR_MESSAGE, self.request(Method::GET, url))
            .await
    }

    /// Sends a token request with arbitrary options. The client secret, when
    /// present, goes into a basic auth header.
    pub async fn get_token(&self, realm: &str, options: TokenOptions) -> Result<Jwt> {
        const ERR_MESSAGE: &str = "could not get token";

        log::debug!(
            "Requesting a token with grant_type={:?}...",
            options.grant_type
        );

        let url = self.openid_connect_url(realm, &["token"]);
        let request = match options.client_secret.as_deref() {
            Some(secret) if !secret.is_empty() => self.request_with_basic_auth(
                Method::POST,
                url,
                options.client_id.as_deref().unwrap_or_default(),
                secret,
            ),
            _ => self.request(Method::POST, url),
        };

        let token = self
            .send_json(ERR_MESSAGE, request.form(&options.form_data()))
            .await?;
        log::debug!("Token received");

        Ok(token)
    }

    /// Resource owner password grant with the `openid` scope.
    pub async fn login(
        &self,
        client_id: &str,
        client_secret: &str,
        realm: &str,
        username: &str,
        password: &str,
    ) -> Result<Jwt> {
        self.get_token(
            realm,
            TokenOptions {
                client_id: Some(client_id.to_owned()),
                client_secret: Some(client_secret.to_owned()),
                grant_type: Some("password".to_owned()),
                username: Some(username.to_owned()),
                password: Some(password.to_owned()),
                scope: Some("openid".to_owned()),
                ..Default::default()
            },
        )
        .await
    }

    /// Password grant for users with a second factor.
    pub async fn login_otp(
        &self,
        client_id: &str,
        client_secret: &str,
        realm: &str,
        username: &str,
        password: &str,
        totp: &str,
    ) -> Result<Jwt> {
        self.get_token(
            realm,
            TokenOptions {
                client_id: Some(client_id.to_owned()),
                client_secret: Some(client_secret.to_owned()),
                grant_type: Some("password".to_owned()),
                username: Some(username.to_owned()),
                password: Some(password.to_owned()),
                totp: Some(totp.to_owned()),
                scope: Some("openid".to_owned()),
                ..Default::default()
            },
        )
        .await
    }

    /// Logs in through the built-in `admin-cli` client.
    pub async fn login_admin(&self, username: &str, password: &str, realm: &str) -> Result<Jwt> {
        self.get_token(
            realm,
            TokenOptions {
                client_id: Some(ADMIN_CLIENT_ID.to_owned()),
                grant_type: Some("password".to_owned()),
                username: Some(username.to_owned()),
                password: Some(password.to_owned()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn login_client(
        &self,
        client_id: &str,
        client_secret: &str,
        realm: &str,
    ) -> Result<Jwt> {
        self.get_token(
            realm,
            TokenOptions {
                client_id: Some(client_id.to_owned()),
                client_secret: Some(client_secret.to_owned()),
                grant_type: Some("client_credentials".to_owned()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn refresh_token(
        &self,
        refresh_token: &str,
        client_id: &str,
        client_secret: &str,
        realm: &str,
    ) -> Result<Jwt> {
        self.get_token(
            realm,
            TokenOptions {
                client_id: Some(client_id.to_owned()),
                client_secret: Some(client_secret.to_owned()),
                grant_type: Some("refresh_token".to_owned()),
                refresh_token: Some(refresh_token.to_owned()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn get_user_info(&self, access_token: &str, realm: &str) -> Result<UserInfo> {
        const ERR_MESSAGE: &str = "could not get user info";

        let url = self.openid_connect_url(realm, &["userinfo"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, access_token),
        )
        .await
    }

    /// Userinfo including custom claims added by protocol mappers.
    pub async fn get_raw_user_info(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<Map<String, Value>> {
        const ERR_MESSAGE: &str = "could not get user info";

        let url = self.openid_connect_url(realm, &["userinfo"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, access_token),
        )
        .await
    }

    /// Introspects an access token or RPT. Permissions are only populated for
    /// RPTs.
    pub async fn introspect_token(
        &self,
        token: &str,
        client_id: &str,
        client_secret: &str,
        realm: &str,
    ) -> Result<IntrospectTokenResult> {
        const ERR_MESSAGE: &str = "could not introspect requesting party token";

        let url = self.openid_connect_url(realm, &["token", "introspect"]);
        let request = self
            .request_with_basic_auth(Method::POST, url, client_id, client_secret)
            .form(&[
                ("token_type_hint", "requesting_party_token"),
                ("token", token),
            ]);

        self.send_json(ERR_MESSAGE, request).await
    }

    /// Ends the session the refresh token belongs to.
    pub async fn logout(
        &self,
        client_id: &str,
        client_secret: &str,
        realm: &str,
        refresh_token: &str,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not logout";

        let url = self.openid_connect_url(realm, &["logout"]);
        let request = self
            .request_with_basic_auth(Method::POST, url, client_id, client_secret)
            .form(&[("client_id", client_id), ("refresh_token", refresh_token)]);

        self.send_empty(ERR_MESSAGE, request).await
    }

    /// Logout for clients without a secret: the access token authenticates the
    /// call instead.
    pub async fn logout_public_client(
        &self,
        client_id: &str,
        realm: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not logout public client";

        let url = self.openid_connect_url(realm, &["logout"]);
        let request = self
            .request_with_bearer_auth(Method::POST, url, access_token)
            .form(&[("client_id", client_id), ("refresh_token", refresh_token)]);

        self.send_empty(ERR_MESSAGE, request).await
    }

    pub async fn revoke_token(
        &self,
        realm: &str,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not revoke token";

        let url = self.openid_connect_url(realm, &["revoke"]);
        let request = self.request(Method::POST, url).form(&[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("token", refresh_token),
        ]);

        self.send_empty(ERR_MESSAGE, request).await
    }
}
