//! Resume page compositor.
//!
//! Takes a structured resume document, flattens it into atomic renderable
//! blocks, measures each block's height under the current layout config,
//! greedily packs blocks into fixed-size A4 virtual pages without splitting
//! any block, and renders fixed-dimension page frames exportable as HTML.

pub mod compose;
pub mod config;
pub mod errors;
pub mod models;
pub mod share;

pub use compose::{
    render_html, PageCompositor, PaginatedResume, PassOutcome, PassToken, EXPORT_ROOT_ID,
};
pub use config::LayoutConfig;
pub use errors::CompositorError;
pub use models::ResumeDocument;
