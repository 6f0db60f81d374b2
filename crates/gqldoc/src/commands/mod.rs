mod check;
mod print;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use print::PrintCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqldoc")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report syntax errors.
    Check(Box<CheckCmd>),

    /// Print a GraphQL file in canonical form.
    Print(Box<PrintCmd>),

    /// Dump the token stream of a GraphQL file.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    /// The subcommand as typed on the command line.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Check(_) => "check",
            Self::Print(_) => "print",
            Self::Tokens(_) => "tokens",
        }
    }

    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
