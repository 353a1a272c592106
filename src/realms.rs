use reqwest::Method;

use crate::client::KeycloakClient;
use crate::error::{Error, Result};
use crate::models::{RealmRepresentation, ServerInfoRepresentation};

impl KeycloakClient {
    pub async fn get_server_info(&self, token: &str) -> Result<ServerInfoRepresentation> {
        const ERR_MESSAGE: &str = "could not get server info";

        let url = self.admin_url(&["serverinfo"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    /// Every realm the token may view.
    pub async fn get_realms(&self, token: &str) -> Result<Vec<RealmRepresentation>> {
        const ERR_MESSAGE: &str = "could not get realms";

        let url = self.admin_url(&["realms"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    pub async fn get_realm(&self, token: &str, realm: &str) -> Result<RealmRepresentation> {
        const ERR_MESSAGE: &str = "could not get realm";

        let url = self.admin_realm_url(realm, &[]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    /// Imports `realm` (users, clients and roles included) and returns its
    /// name.
    pub async fn create_realm(&self, token: &str, realm: &RealmRepresentation) -> Result<String> {
        const ERR_MESSAGE: &str = "could not create realm";

        let url = self.admin_url(&["realms"]);

        self.send_created(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(realm),
        )
        .await
    }

    /// Updates the realm named by `realm.realm`.
    pub async fn update_realm(&self, token: &str, realm: &RealmRepresentation) -> Result<()> {
        const ERR_MESSAGE: &str = "could not update realm";

        let name = match realm.realm.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::invalid_argument(ERR_MESSAGE, "realm name is required")),
        };
        let url = self.admin_realm_url(name, &[]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::PUT, url, token)
                .json(realm),
        )
        .await
    }

    pub async fn delete_realm(&self, token: &str, realm: &str) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete realm";

        let url = self.admin_realm_url(realm, &[]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token),
        )
        .await
    }

    pub async fn clear_realm_cache(&self, token: &str, realm: &str) -> Result<()> {
        const ERR_MESSAGE: &str = "could not clear realm cache";

        let url = self.admin_realm_url(realm, &["clear-realm-cache"]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token),
        )
        .await
    }

    pub async fn clear_user_cache(&self, token: &str, realm: &str) -> Result<()> {
        const ERR_MESSAGE: &str = "could not clear user cache";

        let url = self.admin_realm_url(realm, &["clear-user-cache"]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token),
        )
        .await
    }
}
