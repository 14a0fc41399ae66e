//! # deskfolio
//!
//! **deskfolio** serves a personal website styled as a desktop operating
//! system: draggable windows and folder icons on a single page, with new
//! windows spawned on demand as server-rendered HTML fragments. It runs on
//! the `may` coroutine runtime via `may_minihttp`.
//!
//! ## Architecture
//!
//! - **[`layout`]** - the placement model ([`layout::Value`], anchors, sizes,
//!   constraints) and [`layout::resolve`], which turns it into CSS properties
//! - **[`desktop`]** - windows, folders and the shared in-memory
//!   [`desktop::Registry`]
//! - **[`posts`]** - the markdown blog-post directory
//! - **[`render`]** - minijinja templates behind the [`render::FragmentRenderer`] seam
//! - **[`router`]** - maps method and path to a [`router::Route`]
//! - **[`handlers`]** - one module per route
//! - **[`server`]** - request parsing, response writing and the HTTP server
//! - **[`config`]**, **[`runtime_config`]**, **[`telemetry`]** - ambient setup
//!
//! ### Request Handling Flow
//!
//! ```text
//! may_minihttp ──► AppService::call ──► parse_request
//!                        │
//!                        ▼
//!                  Router::route ──► 404 / 405
//!                        │
//!                        ▼
//!                 handlers::dispatch ──► Registry (insert / remove / list)
//!                        │                    │
//!                        ▼                    ▼
//!                 FragmentRenderer ◄──── snapshot / new window
//!                        │
//!                        ▼
//!                  write_response
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | GET | `/` | the full desktop page |
//! | POST | `/window/add` | a new "Blog Posts" explorer window fragment |
//! | GET | `/window/add/post/{filename}` | a new window showing one post |
//! | DELETE | `/window/delete/{id}` | removes a window; always 200 |
//! | GET | `/preview/{filename}` | a post wrapped for hover preview |
//! | GET | `/images/{path}` | static image files |
//!
//! New windows stack above everything already on the desktop. Clients may
//! send `X-Highest-Z-Index` with the highest stacking value they show; the
//! server treats it as a floor, never as the answer.
//!
//! ## Quick Start
//!
//! ```bash
//! deskfolio serve --config config/config.yaml --addr 127.0.0.1:8080
//! ```
//!
//! ```rust,no_run
//! use deskfolio::bootstrap::build_service;
//! use deskfolio::config::SiteConfig;
//! use deskfolio::server::HttpServer;
//!
//! let config = SiteConfig::default();
//! let service = build_service(&config).unwrap();
//! let handle = HttpServer(service).start("127.0.0.1:8080").unwrap();
//! handle.join().unwrap();
//! ```
//!
//! ## Runtime Considerations
//!
//! Each connection runs in its own coroutine. Handlers render templates and
//! markdown on that stack, so the default coroutine stack is 64 KB; tune it
//! with `DESKFOLIO_STACK_SIZE` (see [`runtime_config`]).

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod desktop;
pub mod error;
pub mod handlers;
pub mod layout;
pub mod posts;
pub mod render;
pub mod router;
pub mod runtime_config;
pub mod server;
pub mod static_files;
pub mod telemetry;

pub use error::SiteError;
pub use layout::{resolve, Anchor, Constraints, Position, Size, StyleMap, Value};
