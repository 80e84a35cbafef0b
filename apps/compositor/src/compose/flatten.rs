//! Content Flattener — converts a hierarchical resume document into a flat,
//! ordered sequence of atomic renderable blocks.
//!
//! A block is the unit of pagination: it is never split across pages. The
//! sequence is rebuilt wholesale on every pass (no block-level diffing), but
//! the keys are stable, so an unchanged document always yields the same key
//! sequence.

use serde::{Deserialize, Serialize};

use crate::models::{ResumeDocument, SectionItem, SectionKind, SocialLink};

/// An atomic, non-splittable unit of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableBlock {
    /// Stable identity: `summary`, `social`, `title:<section>`, `item:<uuid>`.
    pub key: String,
    pub content: BlockContent,
}

/// The data a block needs to render itself, owned by the block so pages can
/// outlive the borrow of the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockContent {
    Summary { text: String },
    SocialLinks { links: Vec<SocialLink> },
    SectionTitle { kind: SectionKind },
    Item { section: SectionKind, item: SectionItem },
}

/// Flattens a document into display order:
/// summary (if present), social links (if any), then for each non-empty
/// section in taxonomy order one title block followed by one block per item.
///
/// Sections with zero items are omitted entirely. Items with empty fields
/// still produce blocks; per-item emptiness is the renderer's concern.
pub fn flatten_document(doc: &ResumeDocument) -> Vec<RenderableBlock> {
    let mut blocks = Vec::new();

    if let Some(text) = &doc.summary {
        blocks.push(RenderableBlock {
            key: "summary".to_string(),
            content: BlockContent::Summary { text: text.clone() },
        });
    }

    if !doc.social_links.is_empty() {
        blocks.push(RenderableBlock {
            key: "social".to_string(),
            content: BlockContent::SocialLinks {
                links: doc.social_links.clone(),
            },
        });
    }

    for kind in SectionKind::ORDER {
        // Same-kind sections merge; document storage order within a kind is kept.
        let items: Vec<&SectionItem> = doc
            .sections
            .iter()
            .filter(|s| s.kind == kind)
            .flat_map(|s| s.items.iter())
            .collect();

        if items.is_empty() {
            continue;
        }

        blocks.push(RenderableBlock {
            key: format!("title:{}", kind.display_title().to_lowercase()),
            content: BlockContent::SectionTitle { kind },
        });

        for item in items {
            blocks.push(RenderableBlock {
                key: format!("item:{}", item.id),
                content: BlockContent::Item {
                    section: kind,
                    item: item.clone(),
                },
            });
        }
    }

    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
