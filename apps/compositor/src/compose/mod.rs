// The pagination pipeline: flatten → measure → pack → render, driven by the
// pass engine. Measurement must finish for every block before packing runs.

pub mod engine;
pub mod flatten;
pub mod font_metrics;
pub mod measure;
pub mod pack;
pub mod render;

// Re-export the public API consumed by the binary and downstream callers.
pub use engine::{PageCompositor, PassOutcome, PassState, PassToken};
pub use flatten::{flatten_document, BlockContent, RenderableBlock};
pub use measure::{measure_blocks, MetricProbe, ProbeSurface, DEFAULT_BLOCK_HEIGHT_PX};
pub use pack::pack_into_pages;
pub use render::{build_frames, render_html, PageFrame, PaginatedResume, EXPORT_ROOT_ID};
