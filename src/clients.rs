use reqwest::Method;

use crate::client::KeycloakClient;
use crate::error::{Error, Result};
use crate::models::{Client, CredentialRepresentation, GetClientsParams};
use crate::query::to_query_params;

impl KeycloakClient {
    /// Lists clients. Filter by `client_id` to resolve the UUID that the
    /// client role calls take as `id_of_client`.
    pub async fn get_clients(
        &self,
        token: &str,
        realm: &str,
        params: &GetClientsParams,
    ) -> Result<Vec<Client>> {
        const ERR_MESSAGE: &str = "could not get clients";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["clients"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    pub async fn get_client(&self, token: &str, realm: &str, id_of_client: &str) -> Result<Client> {
        const ERR_MESSAGE: &str = "could not get client";

        let url = self.admin_realm_url(realm, &["clients", id_of_client]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    pub async fn create_client(&self, token: &str, realm: &str, client: &Client) -> Result<String> {
        const ERR_MESSAGE: &str = "could not create client";

        let url = self.admin_realm_url(realm, &["clients"]);

        self.send_created(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(client),
        )
        .await
    }

    /// Updates the client identified by `client.id`.
    pub async fn update_client(&self, token: &str, realm: &str, client: &Client) -> Result<()> {
        const ERR_MESSAGE: &str = "could not update client";

        let id_of_client = match client.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(Error::invalid_argument(ERR_MESSAGE, "client id is required")),
        };
        let url = self.admin_realm_url(realm, &["clients", id_of_client]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::PUT, url, token)
                .json(client),
        )
        .await
    }

    pub async fn delete_client(&self, token: &str, realm: &str, id_of_client: &str) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete client";

        let url = self.admin_realm_url(realm, &["clients", id_of_client]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token),
        )
        .await
    }

    pub async fn get_client_secret(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
    ) -> Result<CredentialRepresentation> {
        const ERR_MESSAGE: &str = "could not get client secret";

        let url = self.admin_realm_url(realm, &["clients", id_of_client, "client-secret"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    /// Replaces the client secret; the old one stops working immediately.
    pub async fn regenerate_client_secret(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
    ) -> Result<CredentialRepresentation> {
        const ERR_MESSAGE: &str = "could not regenerate client secret";

        let url = self.admin_realm_url(realm, &["clients", id_of_client, "client-secret"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token),
        )
        .await
    }
}
