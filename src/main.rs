//! Starseed - Entry Point
//!
//! Generates a galaxy from a seed and prints it as JSON or a text summary, or
//! surveys many seeds at once to check that they produce distinct galaxies.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use starseed::core::types::Position;
use starseed::galaxy::survey::{numbered_seeds, survey};
use starseed::galaxy::{random_seed, BodyKind};
use starseed::{
    generate_galaxy_with_limits, GenerationLimits, GenerationParams, GeneratorConfig, Preset,
    Result,
};

/// Deterministic procedural galaxy generator
#[derive(Parser, Debug)]
#[command(name = "starseed")]
#[command(about = "Generate reproducible galaxies from a seed string")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one galaxy
    Generate(GenerateArgs),
    /// Generate many galaxies and report how distinct they are
    Survey(SurveyArgs),
}

#[derive(clap::Args, Debug)]
struct ParamArgs {
    /// Named parameter set (lightweight or classic)
    #[arg(long)]
    preset: Option<String>,

    /// TOML file with seed, params and limits
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    galaxy_size: Option<f64>,

    #[arg(long)]
    star_density: Option<f64>,

    #[arg(long)]
    planet_probability: Option<f64>,

    #[arg(long)]
    life_probability: Option<f64>,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Seed string; a random one is chosen when omitted
    #[arg(long)]
    seed: Option<String>,

    #[command(flatten)]
    params: ParamArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Write JSON here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Print the body under this point (galaxy units), e.g. --pick 12.5,-3
    #[arg(long, value_parser = parse_point)]
    pick: Option<Position>,
}

#[derive(clap::Args, Debug)]
struct SurveyArgs {
    /// Number of seeds to generate
    #[arg(long, default_value_t = 1000)]
    count: usize,

    /// Seeds are `{prefix}0`, `{prefix}1`, ...
    #[arg(long, default_value = "seed-")]
    prefix: String,

    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn parse_point(s: &str) -> std::result::Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Position::new(x, y))
}

/// Resolve params and limits: config file or preset first, then explicit flags
fn resolve(args: &ParamArgs) -> Result<(Option<String>, GenerationParams, GenerationLimits)> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let mut params = match &args.preset {
        Some(name) => {
            let preset = name.parse::<Preset>()?;
            tracing::info!("Using {} preset", preset.name());
            preset.params()
        }
        None => config.resolved_params(),
    };

    if let Some(v) = args.galaxy_size {
        params.galaxy_size = v;
    }
    if let Some(v) = args.star_density {
        params.star_density = v;
    }
    if let Some(v) = args.planet_probability {
        params.planet_probability = v;
    }
    if let Some(v) = args.life_probability {
        params.life_probability = v;
    }

    if let Err(e) = params.validate() {
        tracing::warn!("{}; generating anyway", e);
    }
    if let Err(e) = config.limits.validate() {
        tracing::warn!("{}; limits will be clamped", e);
    }

    Ok((config.seed, params, config.limits))
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let (config_seed, params, limits) = resolve(&args.params)?;
    let seed = args
        .seed
        .or(config_seed)
        .unwrap_or_else(random_seed);

    tracing::info!("Generating galaxy from seed \"{}\"", seed);
    let galaxy = generate_galaxy_with_limits(&seed, &params, &limits);

    match (args.format, &args.output) {
        (_, Some(path)) => galaxy.write_json(path)?,
        (Format::Json, None) => println!("{}", galaxy.to_json()),
        (Format::Text, None) => {
            println!("{}", galaxy.summary());
            println!();
            for body in galaxy.bodies() {
                let indent = match body.kind {
                    BodyKind::Star => "",
                    BodyKind::Planet => "  ",
                    _ => "    ",
                };
                let life = if body.has_life { " [life]" } else { "" };
                println!(
                    "{}{} ({}) at ({:.1}, {:.1}), {:.0}K{}",
                    indent,
                    body.name,
                    body.kind,
                    body.position.x,
                    body.position.y,
                    body.temperature,
                    life
                );
            }
        }
    }

    if let Some(point) = args.pick {
        match galaxy.body_at(point) {
            Some(body) => eprintln!("Picked {} ({})", body.name, body.id),
            None => eprintln!("Nothing at ({}, {})", point.x, point.y),
        }
    }

    Ok(())
}

fn run_survey(args: SurveyArgs) -> Result<()> {
    let (_, params, limits) = resolve(&args.params)?;
    let seeds = numbered_seeds(&args.prefix, args.count);

    tracing::info!("Surveying {} seeds", seeds.len());
    let report = survey(&seeds, &params, &limits);

    println!("Samples:               {}", report.samples.len());
    println!("Distinct fingerprints: {}", report.distinct_fingerprints);
    println!("Distinct body counts:  {}", report.distinct_body_counts);
    println!("Collision rate:        {:.4}", report.collision_rate);
    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("starseed=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Survey(args) => run_survey(args),
    }
}
