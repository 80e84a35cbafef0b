//! Layout configuration — fixed page geometry and type metrics for pagination.
//!
//! All dimensions are invariant configuration, not environment-driven: the
//! compositor always targets A4 at 96 dpi with a fixed header/footer chrome.
//! `LayoutConfig::default()` is the single source of truth; callers that need
//! a different font family construct a config and swap the field.

use serde::{Deserialize, Serialize};

use crate::compose::font_metrics::FontFamily;

/// Physical page width (A4) in millimeters.
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// Physical page height (A4) in millimeters.
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Pixels per millimeter at 96 dpi (25.4 mm per inch).
pub const PX_PER_MM: f32 = 3.7795;

/// Layout parameters for a pagination pass.
///
/// The content budget available to the packer is
/// `page height − header − footer − vertical padding − safety margin`;
/// the safety margin keeps the last block from crowding the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub font: FontFamily,
    /// Fixed header region height in px (name, city, scannable code).
    pub header_height_px: f32,
    /// Fixed footer region height in px (name, page X of Y, contact line).
    pub footer_height_px: f32,
    /// Content region padding, top and bottom, in px.
    pub content_padding_px: f32,
    /// Horizontal text margin on each side of the content region, in px.
    pub side_padding_px: f32,
    /// Subtracted from the usable content height before packing.
    pub safety_margin_px: f32,
    /// Fixed delay before measurement, letting fonts and images settle.
    pub settle_delay_ms: u64,
    pub body_font_px: f32,
    pub item_title_font_px: f32,
    pub section_title_font_px: f32,
    pub line_height_factor: f32,
    /// Vertical margin after every block, in px.
    pub block_gap_px: f32,
    /// Width of one social-link chip, used to compute chips per row.
    pub social_chip_width_px: f32,
    /// Height of one row of social-link chips, in px.
    pub social_row_height_px: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            font: FontFamily::Helvetica,
            header_height_px: 125.0,
            footer_height_px: 90.0,
            content_padding_px: 15.0,
            side_padding_px: 48.0,
            safety_margin_px: 20.0,
            settle_delay_ms: 300,
            body_font_px: 13.0,
            item_title_font_px: 15.0,
            section_title_font_px: 18.0,
            line_height_factor: 1.5,
            block_gap_px: 12.0,
            social_chip_width_px: 180.0,
            social_row_height_px: 28.0,
        }
    }
}

impl LayoutConfig {
    /// Full page width in px (A4 at 96 dpi, ~794 px).
    pub fn page_width_px(&self) -> f32 {
        PAGE_WIDTH_MM * PX_PER_MM
    }

    /// Full page height in px (A4 at 96 dpi, ~1123 px).
    pub fn page_height_px(&self) -> f32 {
        PAGE_HEIGHT_MM * PX_PER_MM
    }

    /// Width available for block text, after side padding.
    pub fn content_width_px(&self) -> f32 {
        self.page_width_px() - 2.0 * self.side_padding_px
    }

    /// Height of the content region between header and footer chrome.
    pub fn content_region_px(&self) -> f32 {
        self.page_height_px() - self.header_height_px - self.footer_height_px
    }

    /// The packer's per-page budget: content region minus padding and
    /// safety margin.
    pub fn max_content_height_px(&self) -> f32 {
        self.content_region_px() - 2.0 * self.content_padding_px - self.safety_margin_px
    }

    /// Line height in px for body text.
    pub fn body_line_px(&self) -> f32 {
        self.body_font_px * self.line_height_factor
    }

    /// Line height in px for item titles.
    pub fn item_title_line_px(&self) -> f32 {
        self.item_title_font_px * self.line_height_factor
    }

    /// Line height in px for section titles.
    pub fn section_title_line_px(&self) -> f32 {
        self.section_title_font_px * self.line_height_factor
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
