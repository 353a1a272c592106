use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const UMA_TICKET_GRANT: &str = "urn:ietf:params:oauth:grant-type:uma-ticket";

/// Token endpoint response.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Jwt {
    pub access_token: String,

    pub token_type: String,

    pub expires_in: i64,

    /// `0` for offline tokens.
    pub refresh_expires_in: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    #[serde(rename = "not-before-policy")]
    pub not_before_policy: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Form parameters of a token request.
///
/// `client_secret` is never sent as a form field: it authenticates the client
/// through HTTP basic auth.
#[derive(Clone, Debug, Default)]
pub struct TokenOptions {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub grant_type: Option<String>,
    pub refresh_token: Option<String>,
    /// Joined with spaces into `scope`; wins over `scope` when non-empty.
    pub scopes: Option<Vec<String>>,
    pub scope: Option<String>,
    /// Joined with spaces into `response_type`; wins over `response_type`
    /// when non-empty.
    pub response_types: Option<Vec<String>>,
    pub response_type: Option<String>,
    pub permission: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub totp: Option<String>,
    pub code: Option<String>,
    pub redirect_uri: Option<String>,
    pub client_assertion_type: Option<String>,
    pub client_assertion: Option<String>,
    pub subject_token: Option<String>,
    pub requested_subject: Option<String>,
    pub audience: Option<String>,
    pub requested_token_type: Option<String>,
}

fn joined(values: &Option<Vec<String>>) -> Option<String> {
    values
        .as_ref()
        .filter(|values| !values.is_empty())
        .map(|values| values.join(" "))
}

fn push(form: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        form.push((name, value.to_owned()));
    }
}

impl TokenOptions {
    pub fn form_data(&self) -> Vec<(&'static str, String)> {
        let scope = joined(&self.scopes).or_else(|| self.scope.to_owned());
        let response_type = joined(&self.response_types)
            .or_else(|| self.response_type.to_owned())
            .filter(|response_type| !response_type.is_empty())
            .unwrap_or_else(|| "token".to_owned());

        let mut form = Vec::new();
        push(&mut form, "client_id", &self.client_id);
        push(&mut form, "grant_type", &self.grant_type);
        push(&mut form, "refresh_token", &self.refresh_token);
        push(&mut form, "scope", &scope);
        form.push(("response_type", response_type));
        push(&mut form, "permission", &self.permission);
        push(&mut form, "username", &self.username);
        push(&mut form, "password", &self.password);
        push(&mut form, "totp", &self.totp);
        push(&mut form, "code", &self.code);
        push(&mut form, "redirect_uri", &self.redirect_uri);
        push(&mut form, "client_assertion_type", &self.client_assertion_type);
        push(&mut form, "client_assertion", &self.client_assertion);
        push(&mut form, "subject_token", &self.subject_token);
        push(&mut form, "requested_subject", &self.requested_subject);
        push(&mut form, "audience", &self.audience);
        push(&mut form, "requested_token_type", &self.requested_token_type);
        form
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct UserInfoAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Standard claims returned by the userinfo endpoint.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct UserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<UserInfoAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// `aud` is either a single string or a list.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum StringOrArray {
    One(String),
    Many(Vec<String>),
}

impl StringOrArray {
    pub fn contains(&self, value: &str) -> bool {
        match self {
            StringOrArray::One(one) => one == value,
            StringOrArray::Many(many) => many.iter().any(|v| v == value),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ResourcePermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<HashMap<String, Value>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct IntrospectTokenResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ResourcePermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<StringOrArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Form parameters of a UMA requesting party token request.
#[derive(Clone, Debug, Default)]
pub struct RequestingPartyTokenOptions {
    /// Defaults to the UMA ticket grant.
    pub grant_type: Option<String>,
    pub ticket: Option<String>,
    pub claim_token: Option<String>,
    pub claim_token_format: Option<String>,
    pub rpt: Option<String>,
    /// Each entry is sent as its own `permission` field, e.g.
    /// `"Resource A#view"`.
    pub permissions: Option<Vec<String>>,
    pub audience: Option<String>,
    /// Defaults to `true`.
    pub response_include_resource_name: Option<bool>,
    pub response_permissions_limit: Option<u32>,
    pub submit_request: Option<bool>,
    pub response_mode: Option<String>,
    pub subject_token: Option<String>,
}

impl RequestingPartyTokenOptions {
    pub fn form_data(&self) -> Vec<(&'static str, String)> {
        let grant_type = self
            .grant_type
            .to_owned()
            .filter(|grant_type| !grant_type.is_empty())
            .unwrap_or_else(|| UMA_TICKET_GRANT.to_owned());
        let include_resource_name = self.response_include_resource_name.unwrap_or(true);

        let mut form = vec![("grant_type", grant_type)];
        push(&mut form, "ticket", &self.ticket);
        push(&mut form, "claim_token", &self.claim_token);
        push(&mut form, "claim_token_format", &self.claim_token_format);
        push(&mut form, "rpt", &self.rpt);
        push(&mut form, "audience", &self.audience);
        form.push((
            "response_include_resource_name",
            include_resource_name.to_string(),
        ));
        push(
            &mut form,
            "response_permissions_limit",
            &self.response_permissions_limit.map(|limit| limit.to_string()),
        );
        push(
            &mut form,
            "submit_request",
            &self.submit_request.map(|submit| submit.to_string()),
        );
        push(&mut form, "response_mode", &self.response_mode);
        push(&mut form, "subject_token", &self.subject_token);

        for permission in self.permissions.iter().flatten() {
            form.push(("permission", permission.to_owned()));
        }

        form
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct RequestingPartyPermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct RequestingPartyPermissionDecision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
}

/// `.well-known/openid-configuration` of a realm. Only the endpoints are
/// typed, everything else lands in `extra`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct WellKnownConfiguration {
    pub issuer: String,

    pub authorization_endpoint: String,

    pub token_endpoint: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub introspection_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_session_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_types_supported: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CertKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5c: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5t: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CertResponse {
    #[serde(default)]
    pub keys: Vec<CertKey>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct IssuerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(rename = "token-service", skip_serializing_if = "Option::is_none")]
    pub token_service: Option<String>,
    #[serde(rename = "account-service", skip_serializing_if = "Option::is_none")]
    pub account_service: Option<String>,
    #[serde(rename = "tokens-not-before", skip_serializing_if = "Option::is_none")]
    pub tokens_not_before: Option<i64>,
}
