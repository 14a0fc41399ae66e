//! # CLI Module
//!
//! Command-line entry points for the `deskfolio` binary.
//!
//! ### `serve`
//!
//! Load the site config, seed the desktop and serve until SIGINT/SIGTERM:
//!
//! ```bash
//! deskfolio serve --config config/config.yaml --addr 127.0.0.1:8080
//! ```
//!
//! `--addr`, `--posts-dir` and `--templates-dir` override the config file.
//!
//! ### `posts`
//!
//! Print the posts the explorer window would list:
//!
//! ```bash
//! deskfolio posts --posts-dir posts
//! ```

mod commands;

pub use commands::{run_cli, Cli, Commands, SiteArgs};
