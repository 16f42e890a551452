use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pantry_app::{
    database::{self, Db},
    domain::ingredients::{
        IngredientsService, PgIngredientsService,
        data::{IngredientFileFormat, parse_ingredients},
    },
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ImportFormat {
    Csv,
    Json,
}

impl From<ImportFormat> for IngredientFileFormat {
    fn from(format: ImportFormat) -> Self {
        match format {
            ImportFormat::Csv => Self::Csv,
            ImportFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct ImportIngredientsArgs {
    /// Headerless `name,measurement_unit` CSV, or a JSON array of
    /// `{"name", "measurement_unit"}` objects
    #[arg(long)]
    path: PathBuf,

    /// File layout; taken from the `.csv` or `.json` extension when omitted
    #[arg(long, value_enum)]
    format: Option<ImportFormat>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ImportIngredientsArgs) -> Result<(), String> {
    let contents = tokio::fs::read_to_string(&args.path)
        .await
        .map_err(|error| format!("failed to read {}: {error}", args.path.display()))?;

    let format = args
        .format
        .map(IngredientFileFormat::from)
        .or_else(|| IngredientFileFormat::from_path(&args.path))
        .ok_or_else(|| {
            format!(
                "cannot tell the format of {}, pass --format csv|json",
                args.path.display()
            )
        })?;

    let ingredients = parse_ingredients(&contents, format)
        .map_err(|error| format!("failed to parse {}: {error}", args.path.display()))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let summary = PgIngredientsService::new(Db::new(pool))
        .import_ingredients(ingredients)
        .await
        .map_err(|error| format!("failed to import ingredients: {error}"))?;

    println!("created: {}", summary.created);
    println!("already present: {}", summary.existing);

    Ok(())
}
