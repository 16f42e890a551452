//! `pantry-app token`: API bearer tokens for pantry users.

use clap::{Args, Subcommand};

mod create;
mod list;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Issue a bearer token for a user and print it once
    #[command(alias = "issue")]
    Create(create::CreateTokenArgs),

    /// Show the tokens a user holds
    #[command(alias = "ls")]
    List(list::ListTokensArgs),

    /// Revoke a token so requests carrying it are rejected
    Revoke(revoke::RevokeTokenArgs),
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Create(args) => create::run(args).await,
        TokenSubcommand::List(args) => list::run(args).await,
        TokenSubcommand::Revoke(args) => revoke::run(args).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TokenCli {
        #[command(flatten)]
        token: TokenCommand,
    }

    #[test]
    fn issue_is_an_alias_for_create() {
        let cli = TokenCli::try_parse_from([
            "token",
            "issue",
            "--database-url",
            "postgres://pantry@localhost/pantry",
            "--user-uuid",
            "0190b6a4-1b2c-7d3e-8f40-5a6b7c8d9e0f",
        ]);

        assert!(
            matches!(cli.map(|cli| cli.token.command), Ok(TokenSubcommand::Create(_))),
            "expected the create subcommand"
        );
    }
}
