use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::client::KeycloakClient;
use crate::error::Result;
use crate::models::{
    Jwt, RequestingPartyPermission, RequestingPartyPermissionDecision,
    RequestingPartyTokenOptions, UMA_TICKET_GRANT,
};

impl KeycloakClient {
    async fn get_requesting_party<T: DeserializeOwned>(
        &self,
        context: &'static str,
        token: &str,
        realm: &str,
        options: &RequestingPartyTokenOptions,
    ) -> Result<T> {
        let url = self.openid_connect_url(realm, &["token"]);
        let request = self
            .request_with_bearer_auth(Method::POST, url, token)
            .form(&options.form_data());

        self.send_json(context, request).await
    }

    /// Exchanges an access token for a requesting party token (RPT) carrying
    /// the granted permissions.
    pub async fn get_requesting_party_token(
        &self,
        token: &str,
        realm: &str,
        options: RequestingPartyTokenOptions,
    ) -> Result<Jwt> {
        const ERR_MESSAGE: &str = "could not get requesting party token";

        log::debug!(
            "Requesting party token for permissions {:?}...",
            options.permissions
        );

        self.get_requesting_party(ERR_MESSAGE, token, realm, &options)
            .await
    }

    /// Asks for the granted permissions themselves instead of an RPT.
    pub async fn get_requesting_party_permissions(
        &self,
        token: &str,
        realm: &str,
        mut options: RequestingPartyTokenOptions,
    ) -> Result<Vec<RequestingPartyPermission>> {
        const ERR_MESSAGE: &str = "could not get requesting party token";

        options.response_mode = Some("permissions".to_owned());

        self.get_requesting_party(ERR_MESSAGE, token, realm, &options)
            .await
    }

    /// Asks only whether all requested permissions are granted.
    pub async fn get_requesting_party_permission_decision(
        &self,
        token: &str,
        realm: &str,
        mut options: RequestingPartyTokenOptions,
    ) -> Result<RequestingPartyPermissionDecision> {
        const ERR_MESSAGE: &str = "could not get requesting party token";

        options.response_mode = Some("decision".to_owned());

        self.get_requesting_party(ERR_MESSAGE, token, realm, &options)
            .await
    }

    /// UMA ticket grant for `permissions` (`resource#scope`) on `audience`.
    ///
    /// An empty `response_mode` asks for a token.
    pub async fn evaluate_permission(
        &self,
        user_token: &str,
        realm: &str,
        audience: &str,
        response_mode: &str,
        permissions: &[String],
    ) -> Result<Jwt> {
        self.get_requesting_party_token(
            user_token,
            realm,
            RequestingPartyTokenOptions {
                grant_type: Some(UMA_TICKET_GRANT.to_owned()),
                audience: Some(audience.to_owned()),
                response_mode: Some(response_mode.to_owned()).filter(|mode| !mode.is_empty()),
                permissions: Some(permissions.to_vec()),
                ..Default::default()
            },
        )
        .await
    }
}
