mod client;
mod group;
mod params;
mod realm;
mod role;
mod token;
mod user;

pub use client::Client;
pub use group::{Group, GroupsCount};
pub use params::{
    GetClientsParams, GetGroupsParams, GetRoleParams, GetUsersByRoleParams, GetUsersParams,
};
pub use realm::{
    MemoryInfoRepresentation, RealmRepresentation, ServerInfoRepresentation,
    SystemInfoRepresentation,
};
pub use role::{CompositesRepresentation, Role, RolesRepresentation};
pub use token::{
    CertKey, CertResponse, IntrospectTokenResult, IssuerResponse, Jwt, RequestingPartyPermission,
    RequestingPartyPermissionDecision, RequestingPartyTokenOptions, ResourcePermission,
    StringOrArray, TokenOptions, UMA_TICKET_GRANT, UserInfo, UserInfoAddress,
    WellKnownConfiguration,
};
pub use user::{
    CredentialRepresentation, FederatedIdentityRepresentation, SetPasswordRequest, User,
    UserSessionRepresentation,
};
