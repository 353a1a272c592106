//! Typed client for the Keycloak OpenID Connect and admin REST APIs.
//!
//! Every operation is a method on [`KeycloakClient`]. Admin calls take the
//! access token of an authenticated admin, e.g. from
//! [`KeycloakClient::login_admin`].

pub use crate::client::{KeycloakClient, KeycloakClientBuilder};
pub use crate::commands::run;
pub use crate::error::{Error, HttpError, Result};
pub use crate::jwt::decode_claims_unverified;
pub use crate::query::to_query_params;

pub mod args;
mod authz;
mod client;
mod clients;
mod commands;
pub mod config_file;
pub mod error;
mod groups;
mod jwt;
pub mod models;
mod oidc;
mod query;
mod realms;
mod roles;
mod users;
