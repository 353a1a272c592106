use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::args::{Arguments, Command, UsersCommand};
use crate::client::KeycloakClient;
use crate::config_file::ConfigFile;
use crate::jwt::decode_claims_unverified;
use crate::models::{GetGroupsParams, GetRoleParams, GetUsersParams, Jwt};

const DEFAULT_REALM: &str = "master";
const DEFAULT_CLIENT_ID: &str = "admin-cli";

/// Arguments after profile merging, with defaults applied.
struct Settings {
    realm: String,
    auth_realm: String,
    client_id: String,
    client_secret: String,
    username: Option<String>,
    password: Option<String>,
}

impl Settings {
    fn resolve(args: &Arguments) -> Result<Settings> {
        let realm = args.realm.to_owned().unwrap_or_else(|| DEFAULT_REALM.to_owned());
        let password = if args.password_stdin {
            Some(rpassword::prompt_password("Password: ").context("Failed to read the password")?)
        } else {
            args.password.to_owned()
        };

        Ok(Settings {
            auth_realm: args.auth_realm.to_owned().unwrap_or_else(|| realm.to_owned()),
            realm,
            client_id: args
                .client_id
                .to_owned()
                .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_owned()),
            client_secret: args.client_secret.to_owned().unwrap_or_default(),
            username: args.username.to_owned(),
            password,
        })
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize the response")
}

/// Works offline: no server, no credentials.
fn print_claims(token: &str) -> Result<String> {
    let claims: Map<String, Value> = decode_claims_unverified(token)?;
    to_json(&claims)
}

async fn obtain_token(client: &KeycloakClient, settings: &Settings) -> Result<Jwt> {
    match &settings.username {
        Some(username) => {
            log::debug!("Logging in as {}...", username);
            let password = settings
                .password
                .as_deref()
                .context("`--password` or `--password-stdin` is required with `--username`")?;

            Ok(client
                .login(
                    &settings.client_id,
                    &settings.client_secret,
                    &settings.auth_realm,
                    username,
                    password,
                )
                .await?)
        }
        None => {
            log::debug!("Logging in as client {}...", settings.client_id);

            Ok(client
                .login_client(
                    &settings.client_id,
                    &settings.client_secret,
                    &settings.auth_realm,
                )
                .await?)
        }
    }
}

/// Runs one command and returns what should be printed.
pub async fn run(args: Arguments) -> Result<String> {
    if let Command::Claims { token } = &args.command {
        return print_claims(token);
    }

    let args = match args.profile.to_owned() {
        Some(name) => {
            let profile = ConfigFile::new()?.profile(&name).await?;
            args.with_profile(&profile)
        }
        None => args,
    };

    let server_url = args
        .server_url
        .to_owned()
        .context("`--server-url` is required")?;

    let mut builder = KeycloakClient::builder(&server_url);
    if args.legacy_wildfly {
        builder = builder.legacy_wildfly_support();
    }
    let client = builder.build()?;
    let settings = Settings::resolve(&args)?;

    match args.command {
        Command::Token { full } => {
            let token = obtain_token(&client, &settings)
                .await
                .context("Failed to retrieve a token")?;

            if full {
                to_json(&token)
            } else {
                Ok(token.access_token)
            }
        }
        Command::Userinfo { token } => {
            to_json(&client.get_raw_user_info(&token, &settings.realm).await?)
        }
        Command::Introspect { token } => to_json(
            &client
                .introspect_token(
                    &token,
                    &settings.client_id,
                    &settings.client_secret,
                    &settings.realm,
                )
                .await?,
        ),
        Command::Claims { token } => print_claims(&token),
        Command::Revoke { token } => {
            client
                .revoke_token(
                    &settings.realm,
                    &settings.client_id,
                    &settings.client_secret,
                    &token,
                )
                .await?;
            Ok("Token revoked".to_owned())
        }
        Command::Logout { refresh_token } => {
            client
                .logout(
                    &settings.client_id,
                    &settings.client_secret,
                    &settings.realm,
                    &refresh_token,
                )
                .await?;
            Ok("Logged out".to_owned())
        }
        Command::Users { command } => {
            let token = obtain_token(&client, &settings).await?.access_token;

            match command {
                UsersCommand::List { search, first, max } => to_json(
                    &client
                        .get_users(
                            &token,
                            &settings.realm,
                            &GetUsersParams {
                                search,
                                first,
                                max,
                                ..Default::default()
                            },
                        )
                        .await?,
                ),
                UsersCommand::Count { search } => Ok(client
                    .get_user_count(
                        &token,
                        &settings.realm,
                        &GetUsersParams {
                            search,
                            ..Default::default()
                        },
                    )
                    .await?
                    .to_string()),
                UsersCommand::Get { id } => {
                    to_json(&client.get_user_by_id(&token, &settings.realm, &id).await?)
                }
            }
        }
        Command::Realms => {
            let token = obtain_token(&client, &settings).await?.access_token;
            let realms = client.get_realms(&token).await?;
            let names: Vec<&str> = realms
                .iter()
                .filter_map(|realm| realm.realm.as_deref())
                .collect();

            to_json(&names)
        }
        Command::Roles => {
            let token = obtain_token(&client, &settings).await?.access_token;

            to_json(
                &client
                    .get_realm_roles(&token, &settings.realm, &GetRoleParams::default())
                    .await?,
            )
        }
        Command::Groups => {
            let token = obtain_token(&client, &settings).await?.access_token;

            to_json(
                &client
                    .get_groups(&token, &settings.realm, &GetGroupsParams::default())
                    .await?,
            )
        }
    }
}
