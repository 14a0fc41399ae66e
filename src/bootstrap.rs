//! Wiring: turn a [`SiteConfig`] into a ready-to-serve [`AppService`].

use crate::config::{SeedContent, SiteConfig};
use crate::desktop::{Entity, Folder, Frame, Registry, Window};
use crate::handlers::SiteState;
use crate::posts::PostStore;
use crate::render::{FragmentRenderer, TemplateRenderer};
use crate::router::Router;
use crate::server::AppService;
use crate::static_files::StaticFiles;
use anyhow::{Context, Result};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the service with minijinja templates from `config.templates_dir`.
pub fn build_service(config: &SiteConfig) -> Result<AppService> {
    if !config.templates_dir.is_dir() {
        warn!(dir = %config.templates_dir.display(), "templates directory not found");
    }
    let renderer: Arc<dyn FragmentRenderer> = Arc::new(TemplateRenderer::new(&config.templates_dir));
    build_service_with_renderer(config, renderer)
}

/// Build the service around an existing renderer and seed the desktop.
pub fn build_service_with_renderer(
    config: &SiteConfig,
    renderer: Arc<dyn FragmentRenderer>,
) -> Result<AppService> {
    let registry = Arc::new(Registry::with_z_index_base(config.z_index_base));
    let posts = PostStore::new(&config.posts_dir);
    let images = config
        .images
        .dir
        .as_ref()
        .map(StaticFiles::new);

    seed_desktop(&registry, renderer.as_ref(), &posts, config)?;

    let router = Router::new(&config.images.prefix);
    let state = SiteState {
        registry,
        renderer,
        posts,
        images,
    };
    Ok(AppService::new(router, state))
}

/// Register the configured windows and folders.
///
/// Seeds without an explicit z-index are stacked above everything seeded
/// before them.
pub fn seed_desktop(
    registry: &Registry,
    renderer: &dyn FragmentRenderer,
    posts: &PostStore,
    config: &SiteConfig,
) -> Result<()> {
    for seed in &config.windows {
        let id = seed_id(registry, &seed.id, "window");
        let content = match &seed.content {
            SeedContent::Html(html) => html.clone(),
            SeedContent::Template(name) => renderer
                .render(name, &json!({}))
                .with_context(|| format!("failed to render seed window {id}"))?,
        };
        let z_index = seed
            .z_index
            .unwrap_or_else(|| registry.allocate_z_index(None));
        registry.insert(Entity::Window(Window {
            id,
            title: seed.title.clone(),
            frame: Frame::new(seed.position, seed.size, seed.constraints).with_z_index(z_index),
            content,
        }));
    }

    let post_names: Vec<String> = if config.folders.iter().any(|f| f.include_posts) {
        posts.list_or_empty().into_iter().map(|p| p.filename).collect()
    } else {
        Vec::new()
    };

    for seed in &config.folders {
        let mut items = seed.items.clone();
        if seed.include_posts {
            items.extend(post_names.iter().cloned());
        }
        let z_index = seed
            .z_index
            .unwrap_or_else(|| registry.allocate_z_index(None));
        registry.insert(Entity::Folder(Folder {
            id: seed_id(registry, &seed.id, "folder"),
            title: seed.title.clone(),
            frame: Frame::new(seed.position, seed.size, seed.constraints).with_z_index(z_index),
            items,
        }));
    }

    info!(entities = registry.len(), "desktop seeded");
    Ok(())
}

fn seed_id(registry: &Registry, configured: &str, prefix: &str) -> String {
    if configured.is_empty() {
        registry.generate_id_with_prefix(prefix)
    } else {
        configured.to_string()
    }
}
