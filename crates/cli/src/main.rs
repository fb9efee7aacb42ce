use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ocherk_core::{
    FetchConfig, Settings, decode_body, extract_article, extract_article_with_url, fetch_url, output_path,
    write_article,
};
use owo_colors::OwoColorize;

mod echo;

use echo::{print_banner, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Save a web article as wrapped plain text
#[derive(Parser, Debug)]
#[command(name = "ocherk")]
#[command(author = "Ocherk Contributors")]
#[command(version)]
#[command(about = "Save web articles as wrapped plain text", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: a path mirroring the URL; stdout for file/stdin input)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Settings file with file_format and text_width
    #[arg(long, default_value = ocherk_core::SETTINGS_FILE, value_name = "FILE")]
    settings: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let settings = Settings::load_or_init(&args.settings);

    let mut fetch_config = FetchConfig { timeout: args.timeout, ..Default::default() };
    if let Some(user_agent) = args.user_agent {
        fetch_config.user_agent = user_agent;
    }

    let is_url = args.input.starts_with("http://") || args.input.starts_with("https://");

    let html = if args.input == "-" {
        if args.verbose {
            print_step(1, 4, "Reading from stdin");
        }
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;
        decode_body(&buffer, &fetch_config.encodings).context("Failed to decode stdin")?
    } else if is_url {
        if args.verbose {
            print_step(
                1,
                4,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }
        fetch_url(&args.input, &fetch_config)
            .await
            .context("Failed to fetch URL")?
    } else {
        if args.verbose {
            print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        let bytes = fs::read(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?;
        decode_body(&bytes, &fetch_config.encodings)
            .with_context(|| format!("Failed to decode file: {}", args.input))?
    };

    if args.verbose {
        eprintln!("  {} {} B", "Size:".dimmed(), html.len().to_string().bright_white());
        eprintln!();
        print_step(2, 4, "Extracting article");
    }

    let article = if is_url {
        extract_article_with_url(&html, &args.input)
    } else {
        extract_article(&html)
    };

    if args.verbose {
        if !article.headline.is_empty() {
            eprintln!("  {} {}", "Headline:".dimmed(), article.headline.bright_white());
        }
        eprintln!(
            "  {} {}",
            "Paragraphs:".dimmed(),
            article.paragraphs.len().to_string().bright_white()
        );
        eprintln!();
        print_step(3, 4, &format!("Reflowing at {} columns", settings.text_width));
    }

    let rendered = article.render(settings.text_width);

    if args.verbose {
        print_step(4, 4, "Writing output");
        eprintln!();
    }

    let destination = match &args.output {
        Some(path) => Some(path.clone()),
        None if is_url => Some(output_path(&args.input, &settings.file_format).context("Failed to derive output path")?),
        None => None,
    };

    match destination {
        Some(path) => {
            write_article(&path, &rendered).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Article saved to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}
