use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lexique_config::Config;
use lexique_data::DatasetClient;
use lexique_types::VerbGroup;

pub mod pages;


/// Browse the French curriculum datasets from the terminal
#[derive(Parser)]
#[command(name = "lexique", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Vocabulary grouped by unit and lesson
    Vocab {
        /// Unit code ("U1", ...) or "all"
        #[arg(long, default_value = "all")]
        unit: String,
        /// Lesson code ("L1", ...) or "all"
        #[arg(long, default_value = "all")]
        lesson: String,
        /// Keyword matched against headword, gloss and tag
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Vocabulary classified by part of speech
    Pos,
    /// Grammar notes grouped by category
    Grammar,
    /// Conjugation tables grouped by verb group
    Verbs {
        /// Restrict to one conjugation group
        #[arg(long, value_enum)]
        group: Option<GroupArg>,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Bilingual reading passages
    Texts {
        #[arg(long, default_value = "all")]
        unit: String,
    },
    /// Record counts per dataset
    Stats,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum GroupArg {
    First,
    Second,
    Third,
}

impl From<GroupArg> for VerbGroup {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::First => VerbGroup::First,
            GroupArg::Second => VerbGroup::Second,
            GroupArg::Third => VerbGroup::Third,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::new();
    let client = DatasetClient::new(&config.source).context("Failed to build HTTP client")?;

    match cli.command {
        Command::Vocab {
            unit,
            lesson,
            search,
        } => pages::vocabulary(&client, &unit, &lesson, &search).await,
        Command::Pos => pages::part_of_speech(&client).await,
        Command::Grammar => pages::grammar(&client).await,
        Command::Verbs { group, search } => {
            pages::verbs(&client, group.map(VerbGroup::from), &search).await
        }
        Command::Texts { unit } => pages::texts(&client, &unit).await,
        Command::Stats => pages::stats(&client).await,
    }
}
