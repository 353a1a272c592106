use reqwest::Method;

use crate::client::KeycloakClient;
use crate::error::Result;
use crate::models::{GetRoleParams, Role};
use crate::query::to_query_params;

impl KeycloakClient {
    async fn get_roles_at(
        &self,
        context: &'static str,
        token: &str,
        realm: &str,
        path: &[&str],
    ) -> Result<Vec<Role>> {
        let url = self.admin_realm_url(realm, path);

        self.send_json(context, self.request_with_bearer_auth(Method::GET, url, token))
            .await
    }

    async fn send_roles_to(
        &self,
        context: &'static str,
        method: Method,
        token: &str,
        realm: &str,
        path: &[&str],
        roles: &[Role],
    ) -> Result<()> {
        let url = self.admin_realm_url(realm, path);

        self.send_empty(
            context,
            self.request_with_bearer_auth(method, url, token).json(roles),
        )
        .await
    }

    // -----------
    // Realm roles
    // -----------

    pub async fn create_realm_role(&self, token: &str, realm: &str, role: &Role) -> Result<String> {
        const ERR_MESSAGE: &str = "could not create realm role";

        let url = self.admin_realm_url(realm, &["roles"]);

        self.send_created(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(role),
        )
        .await
    }

    pub async fn get_realm_role(&self, token: &str, realm: &str, role_name: &str) -> Result<Role> {
        const ERR_MESSAGE: &str = "could not get realm role";

        let url = self.admin_realm_url(realm, &["roles", role_name]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    pub async fn get_realm_role_by_id(
        &self,
        token: &str,
        realm: &str,
        role_id: &str,
    ) -> Result<Role> {
        const ERR_MESSAGE: &str = "could not get realm role";

        let url = self.admin_realm_url(realm, &["roles-by-id", role_id]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    pub async fn get_realm_roles(
        &self,
        token: &str,
        realm: &str,
        params: &GetRoleParams,
    ) -> Result<Vec<Role>> {
        const ERR_MESSAGE: &str = "could not get realm roles";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["roles"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    pub async fn get_realm_roles_by_user_id(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get realm roles by user id",
            token,
            realm,
            &["users", user_id, "role-mappings", "realm"],
        )
        .await
    }

    pub async fn get_realm_roles_by_group_id(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get realm roles by group id",
            token,
            realm,
            &["groups", group_id, "role-mappings", "realm"],
        )
        .await
    }

    pub async fn update_realm_role(
        &self,
        token: &str,
        realm: &str,
        role_name: &str,
        role: &Role,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not update realm role";

        let url = self.admin_realm_url(realm, &["roles", role_name]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::PUT, url, token)
                .json(role),
        )
        .await
    }

    pub async fn update_realm_role_by_id(
        &self,
        token: &str,
        realm: &str,
        role_id: &str,
        role: &Role,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not update realm role";

        let url = self.admin_realm_url(realm, &["roles-by-id", role_id]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::PUT, url, token)
                .json(role),
        )
        .await
    }

    pub async fn delete_realm_role(&self, token: &str, realm: &str, role_name: &str) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete realm role";

        let url = self.admin_realm_url(realm, &["roles", role_name]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token),
        )
        .await
    }

    pub async fn add_realm_role_to_user(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        roles: &[Role],
    ) -> Result<()> {
        self.send_roles_to(
            "could not add realm role to user",
            Method::POST,
            token,
            realm,
            &["users", user_id, "role-mappings", "realm"],
            roles,
        )
        .await
    }

    pub async fn delete_realm_role_from_user(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
        roles: &[Role],
    ) -> Result<()> {
        self.send_roles_to(
            "could not delete realm role from user",
            Method::DELETE,
            token,
            realm,
            &["users", user_id, "role-mappings", "realm"],
            roles,
        )
        .await
    }

    pub async fn add_realm_role_to_group(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
        roles: &[Role],
    ) -> Result<()> {
        self.send_roles_to(
            "could not add realm role to group",
            Method::POST,
            token,
            realm,
            &["groups", group_id, "role-mappings", "realm"],
            roles,
        )
        .await
    }

    pub async fn delete_realm_role_from_group(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
        roles: &[Role],
    ) -> Result<()> {
        self.send_roles_to(
            "could not delete realm role from group",
            Method::DELETE,
            token,
            realm,
            &["groups", group_id, "role-mappings", "realm"],
            roles,
        )
        .await
    }

    /// Makes `role_name` a composite containing `roles`.
    pub async fn add_realm_role_composite(
        &self,
        token: &str,
        realm: &str,
        role_name: &str,
        roles: &[Role],
    ) -> Result<()> {
        self.send_roles_to(
            "could not add realm role composite",
            Method::POST,
            token,
            realm,
            &["roles", role_name, "composites"],
            roles,
        )
        .await
    }

    pub async fn delete_realm_role_composite(
        &self,
        token: &str,
        realm: &str,
        role_name: &str,
        roles: &[Role],
    ) -> Result<()> {
        self.send_roles_to(
            "could not delete realm role composite",
            Method::DELETE,
            token,
            realm,
            &["roles", role_name, "composites"],
            roles,
        )
        .await
    }

    pub async fn get_composite_realm_roles(
        &self,
        token: &str,
        realm: &str,
        role_name: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get composite realm roles by role",
            token,
            realm,
            &["roles", role_name, "composites"],
        )
        .await
    }

    /// Realm and client roles contained in the composite role `role_id`.
    pub async fn get_composite_roles_by_role_id(
        &self,
        token: &str,
        realm: &str,
        role_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get composite roles by role id",
            token,
            realm,
            &["roles-by-id", role_id, "composites"],
        )
        .await
    }

    pub async fn get_composite_realm_roles_by_role_id(
        &self,
        token: &str,
        realm: &str,
        role_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get composite realm roles by role id",
            token,
            realm,
            &["roles-by-id", role_id, "composites", "realm"],
        )
        .await
    }

    /// Effective realm roles of the user, composites expanded.
    pub async fn get_composite_realm_roles_by_user_id(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get composite realm roles by user id",
            token,
            realm,
            &["users", user_id, "role-mappings", "realm", "composite"],
        )
        .await
    }

    pub async fn get_composite_realm_roles_by_group_id(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get composite realm roles by group id",
            token,
            realm,
            &["groups", group_id, "role-mappings", "realm", "composite"],
        )
        .await
    }

    /// Realm roles that can still be mapped to the user.
    pub async fn get_available_realm_roles_by_user_id(
        &self,
        token: &str,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get available realm roles by user id",
            token,
            realm,
            &["users", user_id, "role-mappings", "realm", "available"],
        )
        .await
    }

    pub async fn get_available_realm_roles_by_group_id(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get available realm roles by group id",
            token,
            realm,
            &["groups", group_id, "role-mappings", "realm", "available"],
        )
        .await
    }

    // ------------
    // Client roles
    // ------------

    pub async fn create_client_role(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role: &Role,
    ) -> Result<String> {
        const ERR_MESSAGE: &str = "could not create client role";

        let url = self.admin_realm_url(realm, &["clients", id_of_client, "roles"]);

        self.send_created(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(role),
        )
        .await
    }

    pub async fn get_client_roles(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        params: &GetRoleParams,
    ) -> Result<Vec<Role>> {
        const ERR_MESSAGE: &str = "could not get client roles";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["clients", id_of_client, "roles"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    pub async fn get_client_role(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role_name: &str,
    ) -> Result<Role> {
        const ERR_MESSAGE: &str = "could not get client role";

        let url = self.admin_realm_url(realm, &["clients", id_of_client, "roles", role_name]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    pub async fn delete_client_role(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        role_name: &str,
    ) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete client role";

        let url = self.admin_realm_url(realm, &["clients", id_of_client, "roles", role_name]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token),
        )
        .await
    }

    pub async fn get_client_roles_by_user_id(
        &self,
        token: &str,
        realm: &str,
        id_of_client: &str,
        user_id: &str,
    ) -> Result<Vec<Role>> {
        self.get_roles_at(
            "could not get client roles by user id",
            token,
            realm,
            &["users", user_id, "role-mappings", "clients", id_of_client],
        )
        .await
    }
}
