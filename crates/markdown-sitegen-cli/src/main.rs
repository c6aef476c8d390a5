use anyhow::{Context, Result};
use clap::Parser;
use markdown_sitegen_config::{SiteConfig, normalize_base_path};
use markdown_sitegen_engine::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a directory of Markdown files")]
struct Cli {
    /// Prefix for root-relative links, e.g. `/my-repo/`
    base_path: Option<String>,

    /// Config file (defaults to ./sitegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page template
    #[arg(short, long)]
    template: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective config: flags override the file, the file
    /// overrides defaults.
    fn resolve(self) -> Result<SiteConfig> {
        let config_path = self.config.clone().unwrap_or_else(SiteConfig::default_path);
        log::info!("Config path: {}", config_path.display());

        let mut config = match SiteConfig::load_from_path(&config_path)? {
            Some(config) => config,
            None if self.config.is_some() => {
                anyhow::bail!("Config file not found: {}", config_path.display())
            }
            None => SiteConfig::default(),
        };

        if let Some(base_path) = self.base_path {
            config.base_path = normalize_base_path(&base_path);
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        Ok(config)
    }
}

fn build(config: &SiteConfig) -> Result<usize> {
    io::copy_dir_recursive(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "copying static files from {} to {}",
            config.static_dir.display(),
            config.output_dir.display()
        )
    })?;

    let pages = io::generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.base_path,
    )
    .with_context(|| format!("generating pages from {}", config.content_dir.display()))?;

    Ok(pages.len())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let result = Cli::parse().resolve().and_then(|config| {
        log::info!("Building site with base path {}", config.base_path);
        build(&config)
    });

    match result {
        Ok(count) => log::info!("Generated {count} pages"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
