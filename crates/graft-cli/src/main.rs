mod config;

use std::io::Read as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use graft_core::PlatformSignal;
use graft_dom::Page;
use graft_enhance::{enhance, EnhanceConfig};
use tracing::info;
use url::Url;

#[derive(Parser)]
#[command(name = "graft")]
#[command(about = "Detect WordPress pages and graft reader enhancements onto them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Enhance {
        #[arg(help = "HTML file to enhance, or - for stdin")]
        input: String,
        #[arg(short, long, help = "Write the enhanced page here instead of stdout")]
        output: Option<PathBuf>,
        #[arg(long, help = "URL the page was served from; drives the comment anchor state")]
        url: Option<String>,
        #[arg(short = 'f', long, help = "Path to a graft.toml config file")]
        config: Option<String>,
        #[arg(long, help = "Print a json report to stdout; the page is only written with -o")]
        report: bool,
    },
    Detect {
        #[arg(help = "HTML file to inspect, or - for stdin")]
        input: String,
        #[arg(short = 'f', long, help = "Path to a graft.toml config file")]
        config: Option<String>,
    },
}

#[derive(serde::Serialize)]
struct Report<'a> {
    wordpress: bool,
    platform: Option<&'a PlatformSignal>,
    dates_inserted: bool,
    toggler_inserted: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Enhance {
            input,
            output,
            url,
            config,
            report,
        } => run_enhance(input, output, url, config, report),
        Commands::Detect { input, config } => run_detect(input, config),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_enhance(
    input: String,
    output: Option<PathBuf>,
    url: Option<String>,
    config_path: Option<String>,
    report: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_input(&input)?;
    let enhance_config = load_config(config_path)?;

    let mut page = Page::parse(&source);
    if let Some(url) = url {
        page = page.with_url(Url::parse(&url)?);
    }

    let outcome = enhance(&page, &enhance_config)?;

    if report {
        let report = Report {
            wordpress: outcome.platform.is_some(),
            platform: outcome.platform.as_ref(),
            dates_inserted: outcome.dates_inserted,
            toggler_inserted: outcome.toggler_inserted,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    // a page that is not wordpress-generated passes through unchanged
    let rendered = outcome.html.as_deref().unwrap_or(&source);
    match output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            info!(path = %path.display(), "enhanced page written");
        }
        None => {
            if !report {
                print!("{}", rendered);
            }
        }
    }

    eprintln!("--- enhance results ---");
    match &outcome.platform {
        Some(signal) => eprintln!("platform: wordpress ({})", signal.evidence),
        None => eprintln!("platform: not wordpress"),
    }
    eprintln!(
        "date banner: {}",
        if outcome.dates_inserted { "inserted" } else { "skipped" }
    );
    eprintln!(
        "comment toggler: {}",
        if outcome.toggler_inserted { "inserted" } else { "skipped" }
    );

    Ok(())
}

fn run_detect(
    input: String,
    config_path: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_input(&input)?;
    let enhance_config = load_config(config_path)?;
    let page = Page::parse(&source);

    match graft_detect::detect_with(&page, &enhance_config.platform_candidates) {
        Some(signal) => {
            println!("wordpress: yes");
            println!("signal: {:?}", signal.kind);
            println!("evidence: {}", signal.evidence);
        }
        None => println!("wordpress: no"),
    }

    Ok(())
}

fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
    }
}

fn load_config(path: Option<String>) -> Result<EnhanceConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => config::GraftConfig::from_file(&path)?,
        None => config::GraftConfig::default(),
    };
    Ok(config.into_enhance_config())
}
