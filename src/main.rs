mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hashtag_gen::config::HashtagConfig;
use hashtag_gen::{generate_hashtags, HashtagInput, HashtagOutput};

#[derive(Parser)]
#[command(name = "hashtag-gen", about = "YouTube hashtag generator")]
struct Cli {
    /// Path to a TOML config file (defaults to $HASHTAG_CONFIG_PATH or config/hashtags.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Serve(ServeArgs),
    /// Print the tool listing with its input schema
    Tools,
    /// Write the default config to disk
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// Video concept; read from stdin when omitted
    #[arg(long)]
    concept: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    niche: Option<String>,
    #[arg(long)]
    style: Option<String>,
    #[arg(long)]
    audience: Option<String>,
    #[arg(long)]
    max: Option<usize>,
    #[arg(long)]
    no_trending: bool,
    #[arg(long = "primary-keyword")]
    primary_keywords: Vec<String>,
    #[arg(long = "secondary-keyword")]
    secondary_keywords: Vec<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/hashtags.toml")]
    path: PathBuf,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = HashtagConfig::load(cli.config)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        debug!(path = %path.display(), "loaded config");
    }

    match cli.command {
        Command::Generate(args) => run_generate(args, &config),
        Command::Serve(args) => server::serve(args, config).await,
        Command::Tools => {
            let listing = serde_json::to_string_pretty(&api::tool_list())
                .map_err(|err| format!("failed to serialize tools: {}", err))?;
            println!("{}", listing);
            Ok(())
        }
        Command::InitConfig(args) => {
            HashtagConfig::default().write(&args.path)?;
            println!("Wrote {}", args.path.display());
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs, config: &HashtagConfig) -> Result<(), String> {
    let mut input = HashtagInput::new(read_concept(args.concept)?);
    input.options = config.defaults.clone();
    input.title = args.title;
    input.target_audience = args.audience;
    input.primary_keywords = args.primary_keywords;
    input.secondary_keywords = args.secondary_keywords;
    if let Some(niche) = args.niche {
        input.options.niche = niche;
    }
    if let Some(style) = args.style {
        input.options.content_style = style;
    }
    if let Some(max) = args.max {
        input.options.max_hashtags = max;
    }
    if args.no_trending {
        input.options.prioritize_trending = false;
    }

    let output = generate_hashtags(&input, config).map_err(|err| err.to_string())?;

    if args.json {
        let payload = serde_json::to_string_pretty(&output)
            .map_err(|err| format!("failed to serialize result: {}", err))?;
        println!("{}", payload);
    } else {
        print_summary(&output);
    }
    Ok(())
}

fn print_summary(output: &HashtagOutput) {
    println!("Concept: {} ({} / {})", output.concept, output.niche, output.content_style);
    println!("Above title: {}", output.hashtags.above_title.formatted);
    if !output.hashtags.in_description.hashtags.is_empty() {
        println!("In description: {}", output.hashtags.in_description.formatted);
    }

    println!("\nRanked hashtags:");
    for candidate in &output.hashtags.all {
        println!(
            "  {:<30} {:>3}  {:<9} {}",
            candidate.tag,
            candidate.priority,
            candidate.category.label(),
            candidate.reason
        );
    }

    let by_type: Vec<String> = output
        .statistics
        .by_type
        .iter()
        .map(|(category, count)| format!("{} {}", category.label(), count))
        .collect();
    println!(
        "\nTotal {} | avg length {} | {}",
        output.statistics.total,
        output.statistics.average_length,
        by_type.join(" | ")
    );

    println!("\nRecommendations:");
    for recommendation in &output.recommendations {
        println!("- {}", recommendation);
    }
}

fn read_concept(arg: Option<String>) -> Result<String, String> {
    if let Some(concept) = arg {
        if !concept.trim().is_empty() {
            return Ok(concept.trim().to_string());
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing video concept: pass --concept or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hashtag_gen=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
