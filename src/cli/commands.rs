use crate::bootstrap::build_service;
use crate::config::SiteConfig;
use crate::posts::PostStore;
use crate::runtime_config::RuntimeConfig;
use crate::server::{HttpServer, ServerHandle};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Desktop-style personal site server
#[derive(Parser, Debug)]
#[command(name = "deskfolio", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand that needs the site config.
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// YAML site config; defaults are used if the file is missing
    #[arg(short, long, env = "DESKFOLIO_CONFIG", default_value = "config/config.yaml")]
    pub config: PathBuf,

    /// Directory of markdown posts
    #[arg(long)]
    pub posts_dir: Option<PathBuf>,
}

impl SiteArgs {
    fn load(&self) -> Result<SiteConfig> {
        let mut config = SiteConfig::load(&self.config)?;
        if let Some(dir) = &self.posts_dir {
            config.posts_dir = dir.clone();
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the site until interrupted
    Serve {
        #[command(flatten)]
        site: SiteArgs,

        /// Listen address, e.g. 127.0.0.1:8080
        #[arg(long, env = "DESKFOLIO_ADDR")]
        addr: Option<String>,

        /// Directory of minijinja templates
        #[arg(long)]
        templates_dir: Option<PathBuf>,
    },
    /// List the posts the explorer window would show
    Posts {
        #[command(flatten)]
        site: SiteArgs,
    },
}

pub fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            site,
            addr,
            templates_dir,
        } => {
            let mut config = site.load()?;
            if let Some(addr) = addr {
                config.addr = addr;
            }
            if let Some(dir) = templates_dir {
                config.templates_dir = dir;
            }
            serve(&config)
        }
        Commands::Posts { site } => {
            let config = site.load()?;
            let store = PostStore::new(&config.posts_dir);
            let posts = store
                .list()
                .with_context(|| format!("failed to list {}", store.dir().display()))?;
            for post in posts {
                println!("{}\t{}", post.filename, post.title);
            }
            Ok(())
        }
    }
}

fn serve(config: &SiteConfig) -> Result<()> {
    let runtime = RuntimeConfig::from_env();
    runtime.apply();
    info!(stack_size = runtime.stack_size, "coroutine runtime configured");

    let service = build_service(config)?;
    let handle = HttpServer(service)
        .start(config.addr.as_str())
        .with_context(|| format!("failed to bind {}", config.addr))?;
    handle.wait_ready().context("server did not become ready")?;
    info!(addr = %handle.addr(), "deskfolio ready");

    wait_for_shutdown(handle)
}

#[cfg(unix)]
fn wait_for_shutdown(handle: ServerHandle) -> Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("failed to register signal handlers")?;
    if let Some(signal) = signals.forever().next() {
        info!(signal, "shutdown signal received");
    }
    handle.stop();
    Ok(())
}

#[cfg(not(unix))]
fn wait_for_shutdown(handle: ServerHandle) -> Result<()> {
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("server thread panicked"))
}
