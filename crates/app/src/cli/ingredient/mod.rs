use clap::{Args, Subcommand};

mod import;

#[derive(Debug, Args)]
pub(crate) struct IngredientCommand {
    #[command(subcommand)]
    command: IngredientSubcommand,
}

#[derive(Debug, Subcommand)]
enum IngredientSubcommand {
    Import(import::ImportIngredientsArgs),
}

pub(crate) async fn run(command: IngredientCommand) -> Result<(), String> {
    match command.command {
        IngredientSubcommand::Import(args) => import::run(args).await,
    }
}
