//! Height Prober — measures the rendered height of each block before packing.
//!
//! The browser reference rendered blocks into a hidden, layout-participating
//! DOM container and read back box heights after a fixed settle delay. Here
//! the probe surface is a trait: `MetricProbe` (the default) simulates text
//! layout with static font-metric tables and greedy word wrap, while the
//! async `settle` hook keeps the reference's timing contract: measurement
//! only starts once layout dependencies (fonts, images) have had time to
//! load. Callers with a real content-ready signal implement their own
//! `ProbeSurface`.
//!
//! A pass measures *all* blocks before packing begins, and the result vector
//! is rebuilt from scratch every pass; heights never leak across passes.

use async_trait::async_trait;
use tracing::warn;

use crate::compose::flatten::{BlockContent, RenderableBlock};
use crate::compose::font_metrics::get_metrics;
use crate::config::LayoutConfig;
use crate::errors::CompositorError;

/// Substituted when a single block fails to measure, so one bad block
/// degrades its own page break instead of aborting the whole pass.
pub const DEFAULT_BLOCK_HEIGHT_PX: f32 = 60.0;

/// Height of the decorative rule under a section title, in px.
const SECTION_TITLE_RULE_PX: f32 = 2.0;

/// The measurement surface used by a pagination pass.
///
/// Carried by the engine as `Arc<dyn ProbeSurface>`-style generic state, the
/// same pluggable-backend seam the rest of the codebase uses for external
/// collaborators.
#[async_trait]
pub trait ProbeSurface: Send + Sync {
    /// Waits for asynchronous layout dependencies to settle before any
    /// measurement is read.
    async fn settle(&self, config: &LayoutConfig);

    /// Measures one block's rendered box height in px, vertical margins
    /// included, at the current content width.
    fn measure_block(
        &self,
        block: &RenderableBlock,
        config: &LayoutConfig,
    ) -> Result<f32, CompositorError>;
}

/// Default probe: font-metric line simulation instead of a live DOM.
pub struct MetricProbe;

#[async_trait]
impl ProbeSurface for MetricProbe {
    async fn settle(&self, config: &LayoutConfig) {
        // Fixed delay rather than a content-ready signal, matching the
        // reference behavior. Override the trait to integrate a real signal.
        tokio::time::sleep(std::time::Duration::from_millis(config.settle_delay_ms)).await;
    }

    fn measure_block(
        &self,
        block: &RenderableBlock,
        config: &LayoutConfig,
    ) -> Result<f32, CompositorError> {
        let width = config.content_width_px();
        let metrics = get_metrics(&config.font);

        let height = match &block.content {
            BlockContent::Summary { text } => {
                let lines = metrics
                    .wrapped_line_count(text, width, config.body_font_px)
                    .max(1);
                lines as f32 * config.body_line_px() + config.block_gap_px
            }

            BlockContent::SocialLinks { links } => {
                let per_row = (width / config.social_chip_width_px).floor().max(1.0) as usize;
                let rows = links.len().div_ceil(per_row);
                rows as f32 * config.social_row_height_px + config.block_gap_px
            }

            BlockContent::SectionTitle { .. } => {
                config.section_title_line_px() + SECTION_TITLE_RULE_PX + config.block_gap_px
            }

            BlockContent::Item { item, .. } => {
                let title_lines = metrics
                    .wrapped_line_count(&item.title, width, config.item_title_font_px)
                    .max(1);
                let mut h = title_lines as f32 * config.item_title_line_px();

                // Meta line: organization and/or date range, rendered on one line.
                let has_org = item.organization.as_deref().is_some_and(|o| !o.is_empty());
                if has_org || item.date_line().is_some() {
                    h += config.body_line_px();
                }

                if !item.description.trim().is_empty() {
                    let desc_lines =
                        metrics.wrapped_line_count(&item.description, width, config.body_font_px);
                    h += desc_lines as f32 * config.body_line_px();
                }

                // Credential reference renders as one extra line.
                if item.credential.is_some() || item.credential_url.is_some() {
                    h += config.body_line_px();
                }

                h + config.block_gap_px
            }
        };

        if height.is_finite() && height > 0.0 {
            Ok(height)
        } else {
            Err(CompositorError::Measurement {
                key: block.key.clone(),
                reason: format!("non-finite or non-positive height {height}"),
            })
        }
    }
}

/// Measures every block in sequence, substituting the default height for any
/// block whose measurement fails.
///
/// Returns a fresh parallel vector of heights, never an accumulation over
/// a previous pass.
pub fn measure_blocks<P: ProbeSurface + ?Sized>(
    probe: &P,
    blocks: &[RenderableBlock],
    config: &LayoutConfig,
) -> Vec<f32> {
    blocks
        .iter()
        .map(|block| match probe.measure_block(block, config) {
            Ok(height) => height,
            Err(e) => {
                warn!(
                    key = %block.key,
                    error = %e,
                    "block measurement failed, substituting default height"
                );
                DEFAULT_BLOCK_HEIGHT_PX
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
