//! Query parameters of the admin list endpoints. Unset members are left out
//! of the query string.

use serde::Serialize;

#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersParams {
    pub brief_representation: Option<bool>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub enabled: Option<bool>,
    pub exact: Option<bool>,
    pub first: Option<i32>,
    pub first_name: Option<String>,
    pub idp_alias: Option<String>,
    pub idp_user_id: Option<String>,
    pub last_name: Option<String>,
    pub max: Option<i32>,
    /// Attribute search, `key1:value1 key2:value2`.
    pub q: Option<String>,
    pub search: Option<String>,
    pub username: Option<String>,
}

#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersByRoleParams {
    pub first: Option<i32>,
    pub max: Option<i32>,
    pub brief_representation: Option<bool>,
}

#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetGroupsParams {
    pub brief_representation: Option<bool>,
    pub exact: Option<bool>,
    pub first: Option<i32>,
    pub max: Option<i32>,
    pub q: Option<String>,
    pub search: Option<String>,
    pub populate_hierarchy: Option<bool>,
}

#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetRoleParams {
    pub brief_representation: Option<bool>,
    pub first: Option<i32>,
    pub max: Option<i32>,
    pub search: Option<String>,
}

#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetClientsParams {
    pub client_id: Option<String>,
    pub first: Option<i32>,
    pub max: Option<i32>,
    pub q: Option<String>,
    pub search: Option<bool>,
    pub viewable_only: Option<bool>,
}
