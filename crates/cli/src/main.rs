use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use repolens_client::{AnalysisRequest, HttpAnalysisClient};
use repolens_dashboard::{AnalysisOutcome, Analyzer, DashboardReport, DashboardState};
use repolens_normalizer::normalize;
use repolens_protocol::{AnalysisResult, ExplainResult, NormalizedAnalysis, TreeNode};
use repolens_text::{
    extract_bullets, extract_flow, extract_folder_roots, extract_steps, parse_tree, render_tree,
    split_database, FlowEntry,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

mod config;
mod input;
mod render;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "repolens")]
#[command(about = "Turn repository analyses into readable dashboards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (overrides REPOLENS_CONFIG and ./repolens.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Analysis API base URL (overrides config and REPOLENS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw analysis payload into analysis and explain records
    Normalize(InputArgs),

    /// Parse folder-tree text (tree art or a path list)
    Tree(InputArgs),

    /// Numbered steps from execution-flow text
    Steps(InputArgs),

    /// Bullets from README-style text
    Bullets(LimitArgs),

    /// Steps with `routes:` blocks grouped
    Flow(LimitArgs),

    /// Top-level names from folder-tree text
    Roots(LimitArgs),

    /// Entities and fields from a `Name: a, b; Other` description
    Database(InputArgs),

    /// Dashboard summary of a raw analysis payload
    Report(InputArgs),

    /// Analyze a repository through the analysis API
    Analyze(AnalyzeArgs),

    /// Print the JSON schema of an output record
    Schema(SchemaArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Input file; stdin when omitted or `-`
    input: Option<PathBuf>,
}

#[derive(Args)]
struct LimitArgs {
    /// Input file; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Maximum number of entries
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args)]
#[command(group(clap::ArgGroup::new("source").required(true)))]
struct AnalyzeArgs {
    /// Repository URL
    #[arg(long, group = "source")]
    repo_url: Option<String>,

    /// ZIP archive of the repository
    #[arg(long, group = "source")]
    zip: Option<PathBuf>,

    /// Also fetch the explanation after the analysis
    #[arg(long)]
    explain: bool,
}

#[derive(Args)]
struct SchemaArgs {
    #[arg(value_enum)]
    record: SchemaRecord,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaRecord {
    Analysis,
    Explain,
    Normalized,
    Tree,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let mut config = CliConfig::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        config.api_url = url.to_string();
    }
    let json = cli.json;

    match cli.command {
        Commands::Normalize(args) => {
            let raw = input::read_payload(args.input.as_deref())?;
            print_json(&normalize(&raw))?;
        }
        Commands::Tree(args) => run_tree(args.input.as_deref(), json)?,
        Commands::Steps(args) => {
            let text = input::read_text(args.input.as_deref())?;
            print_list(&extract_steps(&text), json, true)?;
        }
        Commands::Bullets(args) => {
            let text = input::read_text(args.input.as_deref())?;
            let limit = args.limit.unwrap_or(config.limits.readme_bullets);
            print_list(&extract_bullets(&text, limit), json, false)?;
        }
        Commands::Flow(args) => {
            let text = input::read_text(args.input.as_deref())?;
            let limit = args.limit.unwrap_or(config.report_limits().flow_entries);
            run_flow(&extract_flow(&text, limit), json)?;
        }
        Commands::Roots(args) => {
            let text = input::read_text(args.input.as_deref())?;
            let limit = args.limit.unwrap_or(config.limits.folder_roots);
            print_list(&extract_folder_roots(&text, limit), json, false)?;
        }
        Commands::Database(args) => {
            let text = input::read_text(args.input.as_deref())?;
            let entries = split_database(&text);
            if json {
                print_json(&entries)?;
            } else {
                for entry in &entries {
                    if entry.fields.is_empty() {
                        println!("{}", entry.name);
                    } else {
                        println!("{}: {}", entry.name, entry.fields.join(", "));
                    }
                }
            }
        }
        Commands::Report(args) => {
            let raw = input::read_payload(args.input.as_deref())?;
            let mut state = DashboardState::new();
            state.apply(normalize(&raw));
            print_report(&state, &config, json)?;
        }
        Commands::Analyze(args) => run_analyze(args, &config, json).await?,
        Commands::Schema(args) => print_schema(args.record)?,
    }

    Ok(())
}

fn run_tree(path: Option<&Path>, json: bool) -> Result<()> {
    let text = input::read_text(path)?;
    let nodes = parse_tree(&text);
    if json {
        print_json(&nodes)?;
    } else {
        print!("{}", render_tree(&nodes));
    }
    Ok(())
}

fn run_flow(entries: &[FlowEntry], json: bool) -> Result<()> {
    if json {
        return print_json(&entries);
    }
    for entry in entries {
        match entry {
            FlowEntry::Step(step) => println!("{step}"),
            FlowEntry::Routes(routes) => {
                for route in routes {
                    println!("  {route}");
                }
            }
        }
    }
    Ok(())
}

async fn run_analyze(args: AnalyzeArgs, config: &CliConfig, json: bool) -> Result<()> {
    let request = match (args.repo_url, args.zip) {
        (Some(url), _) => AnalysisRequest::RepoUrl(url),
        (None, Some(zip)) => AnalysisRequest::Zip(zip),
        (None, None) => anyhow::bail!("Pass --repo-url or --zip"),
    };

    let client = HttpAnalysisClient::new(config.client_config())
        .context("Failed to create analysis client")?;
    let analyzer = Analyzer::new(client);

    fail_on_error(analyzer.analyze(request).await)?;
    if args.explain {
        fail_on_error(analyzer.refresh_explain().await)?;
    }

    let state = analyzer.into_state();
    print_report(&state, config, json)
}

fn fail_on_error(outcome: AnalysisOutcome) -> Result<()> {
    match outcome {
        AnalysisOutcome::Applied { repo_id } => {
            log::info!("analysis applied for {repo_id}");
            Ok(())
        }
        AnalysisOutcome::Failed { message } => anyhow::bail!(message),
        AnalysisOutcome::Superseded => anyhow::bail!("Analysis was superseded by a newer request"),
    }
}

fn print_report(state: &DashboardState, config: &CliConfig, json: bool) -> Result<()> {
    let report = DashboardReport::build(&state.view(), config.report_limits());
    if json {
        print_json(&report)
    } else {
        print!("{}", render::render_report(&report));
        Ok(())
    }
}

fn print_list(items: &[String], json: bool, numbered: bool) -> Result<()> {
    if json {
        return print_json(&items);
    }
    for (idx, item) in items.iter().enumerate() {
        if numbered {
            println!("{}. {item}", idx + 1);
        } else {
            println!("{item}");
        }
    }
    Ok(())
}

fn print_schema(record: SchemaRecord) -> Result<()> {
    let schema = match record {
        SchemaRecord::Analysis => schemars::schema_for!(AnalysisResult),
        SchemaRecord::Explain => schemars::schema_for!(ExplainResult),
        SchemaRecord::Normalized => schemars::schema_for!(NormalizedAnalysis),
        SchemaRecord::Tree => schemars::schema_for!(Vec<TreeNode>),
    };
    print_json(&schema)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}
