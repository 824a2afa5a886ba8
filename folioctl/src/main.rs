//! `folioctl`: query a project catalog from the command line.

mod render;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_config::{ConfigLoader, FolioConfig};
use folio_core::{CatalogStore, QuerySession, query::QueryStateBuilder};
use folio_model::{FilterDimension, ProjectId, SortMode};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "folioctl",
    about = "Search, filter and sort a project catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct CatalogArgs {
    /// JSON catalog to load (defaults to the configured catalog, then the
    /// built-in demo catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List the projects matching a search, filters and sort order
    Query {
        #[command(flatten)]
        source: CatalogArgs,
        /// Case-insensitive text matched against title, description,
        /// industry and tech stack
        #[arg(long)]
        search: Option<String>,
        /// Project type to keep (repeatable)
        #[arg(long = "type", value_name = "TYPE")]
        project_types: Vec<String>,
        /// Industry to keep (repeatable)
        #[arg(long = "industry", value_name = "INDUSTRY")]
        industries: Vec<String>,
        /// Complexity label to keep (repeatable)
        #[arg(long = "complexity", value_name = "LABEL")]
        complexities: Vec<String>,
        /// Result ordering (defaults to the configured sort)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the filter values available in the catalog
    Facets {
        #[command(flatten)]
        source: CatalogArgs,
        #[arg(long)]
        json: bool,
    },
    /// Print the details of one project
    Show {
        id: ProjectId,
        #[command(flatten)]
        source: CatalogArgs,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Featured,
    Newest,
    Complexity,
}

impl From<SortArg> for SortMode {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::Featured => SortMode::Featured,
            SortArg::Newest => SortMode::Newest,
            SortArg::Complexity => SortMode::Complexity,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let load = ConfigLoader::from_process_env()
        .load()
        .context("failed to load folio configuration")?;
    let config = load.config;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    debug!(source = ?load.source, "configuration loaded");

    match cli.command {
        Command::Query {
            source,
            search,
            project_types,
            industries,
            complexities,
            sort,
            json,
        } => {
            let catalog = open_catalog(source.catalog, &config)?;
            let mut builder = QueryStateBuilder::new().sort_by(
                sort.map(SortMode::from).unwrap_or(config.default_sort),
            );
            if let Some(text) = search {
                builder = builder.search(text);
            }
            for value in project_types {
                builder = builder.with_type(value);
            }
            for value in industries {
                builder = builder.with_industry(value);
            }
            for value in complexities {
                builder = builder.with_complexity(value);
            }

            let mut session =
                QuerySession::with_state(Arc::new(catalog), builder.build());
            let view = session.view();

            if json {
                let payload = serde_json::json!({
                    "query": &*view.state,
                    "counts": view.counts,
                    "projects": view
                        .records
                        .iter()
                        .map(|record| &**record)
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!("{}", render::result_rows(&view.records, view.counts));
            }
        }
        Command::Facets { source, json } => {
            let catalog = open_catalog(source.catalog, &config)?;
            let facets = catalog.facets();

            if json {
                let mut payload = serde_json::Map::new();
                for &dimension in FilterDimension::all() {
                    payload.insert(
                        dimension.key().to_string(),
                        serde_json::to_value(
                            facets.rows(dimension, catalog.records()),
                        )?,
                    );
                }
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!(
                    "{}",
                    render::facet_listing(
                        &facets,
                        catalog.records(),
                        config.show_facet_counts,
                    )
                );
            }
        }
        Command::Show { id, source, json } => {
            let catalog = open_catalog(source.catalog, &config)?;
            let mut session = QuerySession::new(Arc::new(catalog));
            let record = session.select_project(id)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&*record)?);
            } else {
                print!("{}", render::project_details(&record));
            }
        }
    }

    Ok(())
}

fn open_catalog(
    explicit: Option<PathBuf>,
    config: &FolioConfig,
) -> Result<CatalogStore> {
    match explicit.or_else(|| config.catalog_path.clone()) {
        Some(path) => CatalogStore::load_from_file(&path).with_context(|| {
            format!("failed to load catalog {}", path.display())
        }),
        None => {
            CatalogStore::demo().context("built-in demo catalog is invalid")
        }
    }
}
