use reqwest::Method;

use crate::client::KeycloakClient;
use crate::error::{Error, Result};
use crate::models::{GetGroupsParams, Group, GroupsCount, User};
use crate::query::to_query_params;

impl KeycloakClient {
    pub async fn create_group(&self, token: &str, realm: &str, group: &Group) -> Result<String> {
        const ERR_MESSAGE: &str = "could not create group";

        let url = self.admin_realm_url(realm, &["groups"]);

        self.send_created(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(group),
        )
        .await
    }

    /// Creates `group` below `group_id` and returns the new group's id.
    pub async fn create_child_group(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
        group: &Group,
    ) -> Result<String> {
        const ERR_MESSAGE: &str = "could not create child group";

        let url = self.admin_realm_url(realm, &["groups", group_id, "children"]);

        self.send_created(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::POST, url, token)
                .json(group),
        )
        .await
    }

    pub async fn get_groups(
        &self,
        token: &str,
        realm: &str,
        params: &GetGroupsParams,
    ) -> Result<Vec<Group>> {
        const ERR_MESSAGE: &str = "could not get groups";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["groups"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }

    pub async fn get_group(&self, token: &str, realm: &str, group_id: &str) -> Result<Group> {
        const ERR_MESSAGE: &str = "could not get group";

        if group_id.is_empty() {
            return Err(Error::invalid_argument(
                ERR_MESSAGE,
                "group id must not be empty",
            ));
        }

        let url = self.admin_realm_url(realm, &["groups", group_id]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    /// Looks a group up by its full path, e.g. `/parent/child`.
    pub async fn get_group_by_path(&self, token: &str, realm: &str, path: &str) -> Result<Group> {
        const ERR_MESSAGE: &str = "could not get group by path";

        let mut segments = vec!["group-by-path"];
        segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
        let url = self.admin_realm_url(realm, &segments);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token),
        )
        .await
    }

    pub async fn get_groups_count(
        &self,
        token: &str,
        realm: &str,
        params: &GetGroupsParams,
    ) -> Result<i32> {
        const ERR_MESSAGE: &str = "could not get groups count";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["groups", "count"]);

        let count: GroupsCount = self
            .send_json(
                ERR_MESSAGE,
                self.request_with_bearer_auth(Method::GET, url, token)
                    .query(&query),
            )
            .await?;

        Ok(count.count)
    }

    /// Updates the group identified by `group.id`.
    pub async fn update_group(&self, token: &str, realm: &str, group: &Group) -> Result<()> {
        const ERR_MESSAGE: &str = "could not update group";

        let group_id = match group.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(Error::invalid_argument(ERR_MESSAGE, "group id is required")),
        };
        let url = self.admin_realm_url(realm, &["groups", group_id]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::PUT, url, token)
                .json(group),
        )
        .await
    }

    pub async fn delete_group(&self, token: &str, realm: &str, group_id: &str) -> Result<()> {
        const ERR_MESSAGE: &str = "could not delete group";

        let url = self.admin_realm_url(realm, &["groups", group_id]);

        self.send_empty(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::DELETE, url, token),
        )
        .await
    }

    pub async fn get_group_members(
        &self,
        token: &str,
        realm: &str,
        group_id: &str,
        params: &GetGroupsParams,
    ) -> Result<Vec<User>> {
        const ERR_MESSAGE: &str = "could not get group members";

        let query = to_query_params(ERR_MESSAGE, params)?;
        let url = self.admin_realm_url(realm, &["groups", group_id, "members"]);

        self.send_json(
            ERR_MESSAGE,
            self.request_with_bearer_auth(Method::GET, url, token)
                .query(&query),
        )
        .await
    }
}
