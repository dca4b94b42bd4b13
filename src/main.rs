use clap::Parser;
use sitemapper::{generator, Config};
use std::path::Path;
use std::process::ExitCode;

/// Config file looked up in the working directory; built-in defaults apply
/// when it is absent.
const CONFIG_FILE: &str = "sitemapper.toml";

#[derive(Parser)]
#[command(name = "sitemapper")]
#[command(about = "Generate sitemap.xml for the static site in the current directory")]
#[command(version)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Errors go to stdout alongside the progress lines
            println!("❌ Error generating sitemap: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> sitemapper::Result<()> {
    let config_path = Path::new(CONFIG_FILE);
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    generator::generate(&config, Path::new("."))
}
