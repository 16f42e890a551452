use clap::Args;
use pantry_app::{
    database::{self, Db},
    domain::tags::{PgTagsService, TagsService, data::NewTag, records::TagUuid},
};

#[derive(Debug, Args)]
pub(crate) struct CreateTagArgs {
    /// Display name, at most 32 characters
    #[arg(long)]
    name: String,

    /// URL slug made of letters, digits, `-` and `_`
    #[arg(long)]
    slug: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateTagArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let tag = PgTagsService::new(Db::new(pool))
        .create_tag(NewTag {
            uuid: TagUuid::new(),
            name: args.name,
            slug: args.slug,
        })
        .await
        .map_err(|error| format!("failed to create tag: {error}"))?;

    println!("tag_uuid: {}", tag.uuid);
    println!("tag_name: {}", tag.name);
    println!("tag_slug: {}", tag.slug);

    Ok(())
}
