use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenv::dotenv;

use crate::config_file::Profile;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum UsersCommand {
    /// List users of `--realm`
    List {
        /// Substring of username, first/last name or email
        #[arg(long)]
        search: Option<String>,

        /// Pagination offset
        #[arg(long)]
        first: Option<i32>,

        /// Maximum number of results
        #[arg(long)]
        max: Option<i32>,
    },
    /// Number of users in `--realm`
    Count {
        #[arg(long)]
        search: Option<String>,
    },
    /// A single user by id
    Get { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Obtain a token. Password grant when `--username` is set, Client Credentials Grant otherwise
    Token {
        /// Print the whole token response instead of the access token
        #[arg(long)]
        full: bool,
    },
    /// OpenID Connect userinfo of an access token
    Userinfo {
        #[arg(long, env = "KCREST_TOKEN")]
        token: String,
    },
    /// Introspect an access token or requesting party token
    Introspect {
        #[arg(long, env = "KCREST_TOKEN")]
        token: String,
    },
    /// Print the claims of a token without verifying its signature
    Claims {
        #[arg(long, env = "KCREST_TOKEN")]
        token: String,
    },
    /// Revoke a refresh token <https://www.rfc-editor.org/rfc/rfc7009>
    Revoke {
        #[arg(long)]
        token: String,
    },
    /// End the session of a refresh token
    Logout {
        #[arg(long)]
        refresh_token: String,
    },
    /// Manage users
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
    /// List realms visible to the authenticated user
    Realms,
    /// List realm roles of `--realm`
    Roles,
    /// List top-level groups of `--realm`
    Groups,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,

    /// Keycloak base URL, e.g. `http://localhost:8080`
    #[arg(long, global = true, env = "KCREST_SERVER_URL")]
    pub server_url: Option<String>,

    /// Realm to operate on. Defaults to `master`
    #[arg(long, global = true, env = "KCREST_REALM")]
    pub realm: Option<String>,

    /// Realm to authenticate against. Defaults to `--realm`
    #[arg(long, global = true, env = "KCREST_AUTH_REALM")]
    pub auth_realm: Option<String>,

    /// OAuth 2.0 Client Identifier <https://www.rfc-editor.org/rfc/rfc6749#section-2.2>. Defaults to `admin-cli`
    #[arg(long, global = true, env = "KCREST_CLIENT_ID")]
    pub client_id: Option<String>,

    /// OAuth 2.0 Client Secret <https://www.rfc-editor.org/rfc/rfc6749#section-2.3.1>
    #[arg(long, global = true, env = "KCREST_CLIENT_SECRET")]
    pub client_secret: Option<String>,

    /// Resource Owner Password Credentials Grant's username <https://www.rfc-editor.org/rfc/rfc6749#section-4.3.2>
    #[arg(long, global = true, env = "KCREST_USERNAME")]
    pub username: Option<String>,

    /// Resource Owner Password Credentials Grant's password. Prefer `--password-stdin`, it doesn't end up in a shell history
    #[arg(long, global = true, env = "KCREST_PASSWORD")]
    pub password: Option<String>,

    /// Prompt for the password
    #[arg(long, global = true)]
    pub password_stdin: bool,

    /// Profile from `~/.kcrest/config.toml` providing defaults for the arguments above
    #[arg(long, global = true, env = "KCREST_PROFILE")]
    pub profile: Option<String>,

    /// Server serves everything below `/auth` (Keycloak before 17)
    #[arg(long, global = true)]
    pub legacy_wildfly: bool,

    /// Enable debug logs unless `RUST_LOG` is set
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// `.env` file the environment was extended from
    #[arg(skip)]
    pub env_file: Option<PathBuf>,
}

impl Arguments {
    /// Fills every argument that was not given on the command line or through
    /// the environment from `profile`.
    pub fn with_profile(mut self, profile: &Profile) -> Arguments {
        fn fill(target: &mut Option<String>, fallback: &Option<String>) {
            if target.is_none() {
                target.clone_from(fallback);
            }
        }

        fill(&mut self.server_url, &profile.server_url);
        fill(&mut self.realm, &profile.realm);
        fill(&mut self.auth_realm, &profile.auth_realm);
        fill(&mut self.client_id, &profile.client_id);
        fill(&mut self.client_secret, &profile.client_secret);
        fill(&mut self.username, &profile.username);
        fill(&mut self.password, &profile.password);
        self.legacy_wildfly |= profile.legacy_wildfly.unwrap_or(false);

        self
    }
}

#[cfg(test)]
impl Arguments {
    /// Nothing but `command`, independent of `KCREST_*` variables.
    pub(crate) fn without_environment(command: Command) -> Arguments {
        Arguments {
            command,
            server_url: None,
            realm: None,
            auth_realm: None,
            client_id: None,
            client_secret: None,
            username: None,
            password: None,
            password_stdin: false,
            profile: None,
            legacy_wildfly: false,
            debug: false,
            env_file: None,
        }
    }
}

pub struct Args;

impl Args {
    /// Loads `.env` before parsing so its variables back the `env` options.
    pub fn parse() -> Arguments {
        let env_file = dotenv().ok();

        Arguments {
            env_file,
            ..Arguments::parse()
        }
    }
}
