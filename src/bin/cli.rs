//! CLI binary for wikigen.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wikigen::config::api_key_from_env;
use wikigen::generation::openai::{OpenAiConfig, OpenAiGenerator};
use wikigen::{export_references, generate_article, ArticleRequest, ArtifactWriter, WikiConfig};
use wikigen_research::orchestrator::planner::plan;
use wikigen_research::{CachedBackend, Category, ExaBackend};

/// wikigen: research a subject and write an encyclopedia article about it.
#[derive(Parser)]
#[command(name = "wikigen", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Research a subject and generate infobox, references and article.
    Generate {
        /// Subject to write about.
        subject: String,
        /// Subject category: place, organization or person.
        #[arg(short = 'k', long, value_parser = parse_category)]
        category: Category,
        /// Output language code.
        #[arg(short, long, default_value = "en")]
        language: String,
        /// Output directory (overrides the config file).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run research only and print the ranked references.
    Research {
        /// Subject to research.
        subject: String,
        /// Subject category: place, organization or person.
        #[arg(short = 'k', long, value_parser = parse_category)]
        category: Category,
        /// Print the exported reference list as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the planned search queries without running them.
    Plan {
        /// Subject to plan queries for.
        subject: String,
        /// Subject category: place, organization or person.
        #[arg(short = 'k', long, value_parser = parse_category)]
        category: Category,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Users can override with RUST_LOG=debug to see per-query detail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wikigen=info,wikigen_research=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => WikiConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            let default_path = WikiConfig::default_config_path();
            if default_path.exists() {
                WikiConfig::from_file(&default_path)?
            } else {
                WikiConfig::default()
            }
        }
    };
    config.validate()?;

    match cli.command {
        Command::Generate {
            subject,
            category,
            language,
            output,
        } => run_generate(&config, subject, category, language, output).await,
        Command::Research {
            subject,
            category,
            json,
        } => run_research(&config, &subject, category, json).await,
        Command::Plan { subject, category } => {
            for query in plan(&subject, category) {
                println!("{query}");
            }
            Ok(())
        }
    }
}

fn search_backend(config: &WikiConfig) -> anyhow::Result<CachedBackend<ExaBackend>> {
    let key = api_key_from_env(&config.search.api_key_env)?;
    let backend = ExaBackend::new(key, &config.research)?.with_base_url(&config.search.base_url);
    Ok(CachedBackend::new(backend, config.research.cache_ttl_seconds))
}

fn generator(config: &WikiConfig) -> anyhow::Result<OpenAiGenerator> {
    let settings = &config.generation;
    let key = api_key_from_env(&settings.api_key_env)?;
    let openai = OpenAiConfig::new(key, &settings.model)
        .with_base_url(&settings.base_url)
        .with_temperature(settings.temperature)
        .with_timeout_seconds(settings.timeout_seconds);
    Ok(OpenAiGenerator::new(openai)?)
}

async fn run_generate(
    config: &WikiConfig,
    subject: String,
    category: Category,
    language: String,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let backend = search_backend(config)?;
    let generator = generator(config)?;
    let request = ArticleRequest::new(subject, category).with_language(language);

    let article =
        generate_article(&request, &backend, &generator, &generator, &config.research).await?;

    let writer = ArtifactWriter::new(output.unwrap_or_else(|| config.output.dir.clone()));
    let paths = writer.write(&article)?;

    println!(
        "Wrote \"{}\" ({}, {} references) to {}",
        article.subject,
        article.language,
        article.references.len(),
        paths.dir.display()
    );
    Ok(())
}

async fn run_research(
    config: &WikiConfig,
    subject: &str,
    category: Category,
    json: bool,
) -> anyhow::Result<()> {
    let backend = search_backend(config)?;
    let outcome = wikigen_research::research(&backend, subject, category, &config.research).await?;
    let exported = export_references(&outcome.references);

    if json {
        println!("{}", serde_json::to_string_pretty(&exported)?);
        return Ok(());
    }

    for reference in &exported {
        println!("{:>3}. {} <{}>", reference.id, reference.title, reference.url);
    }
    println!(
        "\n{} references, {} failed queries, knowledge base {} chars",
        exported.len(),
        outcome.failed_queries,
        outcome.knowledge_base.len()
    );
    Ok(())
}
