use reqwest::Method;

use crate::client::KeycloakClient;
use crate::error::{Error, Result};
use crate::models::{
    FederatedIdentityRepresentation, GetGroupsParams, GetUsersByRoleParams, GetUsersParams, Group,
    Role, SetPasswordRequest, User, UserSessionRepresentation,
};
use crate::query::to_query_params;

impl KeycloakClient {
    /// Creates the user and returns its id.
    ///
    /// Realm and client roles in `user` are ignored by the server; assign them
    /// with the role mapping calls afterwards.
    pub async fn create_user(&self, token: &str, realm: &str, user: &User) -> Result<String> {
        const ERR_MESSAGE: &str = "could not create user";

        let url = self.admin_realm_url(realm, &["users"]);

        self.send_created(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(user),
        )
        .await
    }

    pub async fn delete_user(&self, token: &str, realm: &str, user_id: &str) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete user";

        let url = self.admin_realm_url(realm, &["users", user_id]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token),
        )
        .await
    }

    pub async fn get_user_by_id(&self, token: &str, realm: &str, user_id: &str) -> Result<User> {
        const ERR_MESSAGE: &str = "could not get user by id";

        // An empty id would address the user collection instead.
        if user_id.is_empty() {
            return Err(Error::invalid_argument(
                ERR_MESSAGE,
                "user id must not be empty",
            ));
        }

        let url = self.admin_realm_url(realm, &["users", user_id]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    pub async fn get_user_count(
        &self,
        token: &str,
        realm: &str,
        params: &GetUsersParams,
    ) -> Result<i32> {
        const ERR_MESSAGE: &str = "could not get user count";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["users", "count"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    pub async fn get_user_groups(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        params: &GetGroupsParams,
    ) -> Result<Vec<Group>> {
        const ERR_MESSAGE: &str = "could not get user groups";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["users", user_id, "groups"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    pub async fn get_users(
        &self,
        token: &str,
        realm: &str,
        params: &GetUsersParams,
    ) -> Result<Vec<User>> {
        const ERR_MESSAGE: &str = "could not get users";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["users"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    /// Users holding the realm role directly (not through groups or
    /// composites).
    pub async fn get_users_by_role_name(
        &self,
        token: &str,
        realm: &str,
        role_name: &str,
        params: &GetUsersByRoleParams,
    ) -> Result<Vec<User>> {
        const ERR_MESSAGE: &str = "could not get users by role name";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["roles", role_name, "users"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    pub async fn get_users_by_client_role_name(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role_name: &str,
        params: &GetUsersByRoleParams,
    ) -> Result<Vec<User>> {
        const ERR_MESSAGE: &str = "could not get users by client role name";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(
            realm,
            &["clients", id_of_client, "roles", role_name, "users"],
        );

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    /// Resets the password credential. Needs `manage-users`.
    pub async fn set_password(
        &self,
        token: &str,
        user_id: &str,
        realm: &str,
        password: &str,
        temporary: bool,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not set password";

        let body = SetPasswordRequest {
            kind: "password".to_owned(),
            temporary,
            password: password.to_owned(),
        };
        let url = self.admin_realm_url(realm, &["users", user_id, "reset-password"]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::PUT, url, token)
                .json(&body),
        )
        .await
    }

    /// Updates the user identified by `user.id`.
    pub async fn update_user(&self, token: &str, realm: &str, user: &User) -> Result<()> {
        const ERR_MESSAGE: &str = "could not update user";

        let user_id = match user.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(Error::invalid_argument(ERR_MESSAGE, "user id is required")),
        };
        let url = self.admin_realm_url(realm, &["users", user_id]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::PUT, url, token)
                .json(user),
        )
        .await
    }

    pub async fn add_user_to_group(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        group_id: &str,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not add user to group";

        let url = self.admin_realm_url(realm, &["users", user_id, "groups", group_id]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::PUT, url, token),
        )
        .await
    }

    pub async fn delete_user_from_group(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        group_id: &str,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete user from group";

        let url = self.admin_realm_url(realm, &["users", user_id, "groups", group_id]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token),
        )
        .await
    }

    pub async fn get_user_sessions(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<UserSessionRepresentation>> {
        const ERR_MESSAGE: &str = "could not get user sessions";

        let url = self.admin_realm_url(realm, &["users", user_id, "sessions"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    pub async fn get_user_offline_sessions_for_client(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        id_of_client: &str,
    ) -> Result<Vec<UserSessionRepresentation>> {
        const ERR_MESSAGE: &str = "could not get user offline sessions for client";

        let url = self.admin_realm_url(
            realm,
            &["users", user_id, "offline-sessions", id_of_client],
        );

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    /// Removes every session of the user.
    pub async fn logout_all_sessions(&self, token: &str, realm: &str, user_id: &str) -> Result<()> {
        const ERR_MESSAGE: &str = "could not logout all sessions";

        let url = self.admin_realm_url(realm, &["users", user_id, "logout"]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token),
        )
        .await
    }

    pub async fn add_client_roles_to_user(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        user_id: &str,
        roles: &[Role],
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not add client role to user";

        let url = self.admin_realm_url(
            realm,
            &["users", user_id, "role-mappings", "clients", id_of_client],
        );

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(roles),
        )
        .await
    }

    pub async fn delete_client_roles_from_user(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        user_id: &str,
        roles: &[Role],
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete client role from user";

        let url = self.admin_realm_url(
            realm,
            &["users", user_id, "role-mappings", "clients", id_of_client],
        );

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token)
                .json(roles),
        )
        .await
    }

    pub async fn get_user_federated_identities(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<FederatedIdentityRepresentation>> {
        const ERR_MESSAGE: &str = "could not get user federated identities";

        let url = self.admin_realm_url(realm, &["users", user_id, "federated-identity"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    /// Links the user to an account at identity provider `provider_id`.
    pub async fn create_user_federated_identity(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        provider_id: &str,
        federated_identity: &FederatedIdentityRepresentation,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not create user federated identity";

        let url = self.admin_realm_url(
            realm,
            &["users", user_id, "federated-identity", provider_id],
        );

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(federated_identity),
        )
        .await
    }

    pub async fn delete_user_federated_identity(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        provider_id: &str,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete user federated identity";

        let url = self.admin_realm_url(
            realm,
            &["users", user_id, "federated-identity", provider_id],
        );

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token),
        )
        .await
    }
}
