//! Pagination pass engine — drives flatten → measure → pack → render.
//!
//! # Architecture
//! - `run_pass` is the public async entry point for one full pass.
//! - Measurement is CPU-bound width summation over all blocks; it runs via
//!   `tokio::task::spawn_blocking` with owned snapshots so the scheduler
//!   stays unblocked.
//! - Triggers (document change, viewport resize) bump a monotonic generation
//!   counter. A pass re-checks its token after every await point and reports
//!   `Superseded` instead of applying stale results; only the most recent
//!   pass's pages may apply.
//!
//! Every pass recomputes everything from scratch. At resume scale (tens of
//! blocks) a full pass is cheap; there is no block-level diffing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::compose::flatten::flatten_document;
use crate::compose::measure::{measure_blocks, MetricProbe, ProbeSurface};
use crate::compose::pack::pack_into_pages;
use crate::compose::render::{build_frames, PaginatedResume};
use crate::config::LayoutConfig;
use crate::errors::CompositorError;
use crate::models::ResumeDocument;

/// The phases of one pagination pass. `Measuring` is the only phase with an
/// await point; everything else is synchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    Idle,
    Flattening,
    Measuring,
    Packing,
    Rendered,
}

/// A claim on one pagination pass, minted by a trigger.
#[derive(Debug, Clone, Copy)]
pub struct PassToken {
    generation: u64,
}

impl PassToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of a pass: either the freshly rendered pages, or notice that a
/// newer trigger fired while this pass was in flight.
#[derive(Debug)]
pub enum PassOutcome {
    Applied(PaginatedResume),
    Superseded,
}

/// The pagination engine. One instance per editing session; owns the probe
/// surface and the pass generation counter.
pub struct PageCompositor<P: ProbeSurface + 'static = MetricProbe> {
    config: LayoutConfig,
    probe: Arc<P>,
    generation: AtomicU64,
}

impl PageCompositor<MetricProbe> {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_probe(config, Arc::new(MetricProbe))
    }
}

impl<P: ProbeSurface + 'static> PageCompositor<P> {
    pub fn with_probe(config: LayoutConfig, probe: Arc<P>) -> Self {
        PageCompositor {
            config,
            probe,
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Mints a token for a new pass, superseding any pass still in flight.
    pub fn begin_pass(&self) -> PassToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        PassToken { generation }
    }

    /// Trigger: the resume document was edited or reloaded.
    pub fn document_changed(&self) -> PassToken {
        let token = self.begin_pass();
        debug!(generation = token.generation, "document change triggered repagination");
        token
    }

    /// Trigger: the viewport width changed, invalidating all measured heights.
    pub fn viewport_resized(&self) -> PassToken {
        let token = self.begin_pass();
        debug!(generation = token.generation, "viewport resize triggered repagination");
        token
    }

    fn is_current(&self, token: &PassToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation
    }

    /// Runs one full pagination pass.
    ///
    /// `share_url` is the pre-resolved canonical link for the scannable-code
    /// widget (`None` keeps the widget hidden). Measurement of all blocks
    /// completes before packing begins; a pass whose token has been
    /// superseded returns `PassOutcome::Superseded` without rendering.
    pub async fn run_pass(
        &self,
        doc: &ResumeDocument,
        token: PassToken,
        share_url: Option<String>,
    ) -> Result<PassOutcome, CompositorError> {
        debug!(
            state = ?PassState::Flattening,
            generation = token.generation,
            "pagination pass started"
        );
        let blocks = flatten_document(doc);

        debug!(
            state = ?PassState::Measuring,
            blocks = blocks.len(),
            "waiting for layout to settle"
        );
        self.probe.settle(&self.config).await;
        if !self.is_current(&token) {
            debug!(generation = token.generation, "pass superseded during settle");
            return Ok(PassOutcome::Superseded);
        }

        // CPU-bound measurement over owned snapshots, off the async executor.
        let probe = Arc::clone(&self.probe);
        let config = self.config.clone();
        let snapshot = blocks.clone();
        let heights: Vec<f32> = tokio::task::spawn_blocking(move || {
            measure_blocks(probe.as_ref(), &snapshot, &config)
        })
        .await
        .map_err(|e| {
            CompositorError::Internal(anyhow::anyhow!("spawn_blocking failed in measurement: {e}"))
        })?;

        if !self.is_current(&token) {
            debug!(generation = token.generation, "pass superseded after measurement");
            return Ok(PassOutcome::Superseded);
        }

        debug!(state = ?PassState::Packing, "partitioning blocks into pages");
        let packed = pack_into_pages(blocks, &heights, self.config.max_content_height_px());
        let frames = build_frames(doc, packed, share_url);

        if !self.is_current(&token) {
            debug!(generation = token.generation, "pass superseded before apply");
            return Ok(PassOutcome::Superseded);
        }

        debug!(
            state = ?PassState::Rendered,
            generation = token.generation,
            pages = frames.len(),
            "pagination pass complete"
        );
        Ok(PassOutcome::Applied(PaginatedResume {
            generation: token.generation,
            pages: frames,
        }))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
