//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::anyhow;
use clap::Parser;
use hero_registry::{
    cli::{Commands, HeroCli},
    commands::{
        handle_init,
        heroes::{handle_delete, handle_list, handle_update, ListParams},
        open_database,
        seed::handle_seed,
        serve::handle_serve,
    },
};
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let app = HeroCli::parse();

    // One handle for the whole process
    let db = open_database(&app.store)?;

    match app.command {
        Commands::Init => handle_init(&db)?,

        Commands::Seed => {
            handle_seed(&db)?;
        }

        Commands::List {
            max_age,
            name,
            offset,
            limit,
            json,
        } => {
            handle_list(
                &db,
                ListParams {
                    max_age,
                    name,
                    offset,
                    limit,
                    as_json: json,
                },
            )?;
        }

        Commands::Update {
            name,
            age,
            clear_age,
        } => {
            let age = if clear_age { None } else { age };
            handle_update(&db, &name, age)?;
        }

        Commands::Delete { name } => {
            handle_delete(&db, &name)?;
        }

        Commands::Serve { bind, port } => handle_serve(db, bind, port).await?,
    }

    Ok(())
}
