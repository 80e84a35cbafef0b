use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use compositor::compose::render_html;
use compositor::share::{resolve_share_url, StaticResolver};
use compositor::{LayoutConfig, PageCompositor, PassOutcome, ResumeDocument};

/// Base URL for the demo share-link resolver; real deployments plug in their
/// own `ShareLinkResolver`.
const SHARE_BASE_URL: &str = "https://resume.example.com/r";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting compositor v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .context("usage: compositor <resume.json> [out.html]")?;
    let output = args.next().unwrap_or_else(|| "resume-pages.html".to_string());

    let raw = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read resume document '{input}'"))?;
    let doc: ResumeDocument =
        serde_json::from_str(&raw).context("failed to parse resume document JSON")?;

    let config = LayoutConfig::default();
    info!(
        page_width = config.page_width_px(),
        page_height = config.page_height_px(),
        max_content = config.max_content_height_px(),
        "layout config"
    );

    let resolver = StaticResolver::new(SHARE_BASE_URL);
    let share_url = resolve_share_url(&resolver, &doc).await;
    if share_url.is_none() {
        info!("document not persisted, scannable-code widget stays hidden");
    }

    let compositor = PageCompositor::new(config.clone());
    let token = compositor.document_changed();
    match compositor.run_pass(&doc, token, share_url).await? {
        PassOutcome::Applied(result) => {
            for page in &result.pages {
                info!(
                    page = page.number,
                    of = page.total,
                    blocks = page.blocks.len(),
                    "page composed"
                );
            }
            let html = render_html(&result, &config);
            std::fs::write(&output, &html)
                .with_context(|| format!("failed to write export document '{output}'"))?;
            info!(
                pages = result.pages.len(),
                bytes = html.len(),
                output = %output,
                "export document written"
            );
        }
        PassOutcome::Superseded => {
            // A single-shot run can't be superseded; log it rather than erroring.
            warn!("pagination pass superseded before completion");
        }
    }

    Ok(())
}
