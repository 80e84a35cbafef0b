//! Page Renderer — fixed-size A4 page frames and the exportable HTML document.
//!
//! Each frame carries a header region of fixed height, a content region sized
//! `page height − header − footer`, and a footer region of fixed height. The
//! HTML export exposes the documented root id so an external PDF routine can
//! snapshot it, and the `@media print` rules collapse the on-screen page
//! separation (margins, shadows).

use serde::{Deserialize, Serialize};

use crate::compose::flatten::{BlockContent, RenderableBlock};
use crate::config::LayoutConfig;
use crate::models::{ResumeDocument, SectionItem, VerificationStatus};

/// Root element id of the export document. External PDF export snapshots the
/// element with this id; treat it as a public contract.
pub const EXPORT_ROOT_ID: &str = "resume-print-root";

/// Header chrome, denormalized from the document so frames are self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderChrome {
    pub full_name: String,
    pub city: Option<String>,
    /// Canonical shareable URL, when resolved. The scannable-code widget is
    /// only rendered when this is set.
    pub share_url: Option<String>,
}

/// Footer chrome: name, page position, and contact line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterChrome {
    pub full_name: String,
    pub page_number: usize,
    pub total_pages: usize,
    pub contact_line: String,
    pub share_url: Option<String>,
}

/// One fixed-dimension virtual page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFrame {
    pub number: usize,
    pub total: usize,
    pub header: HeaderChrome,
    pub blocks: Vec<RenderableBlock>,
    pub footer: FooterChrome,
}

/// The result of one completed pagination pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResume {
    /// Generation of the pass that produced these pages.
    pub generation: u64,
    pub pages: Vec<PageFrame>,
}

/// Builds the final page frames from the packer's partition.
pub fn build_frames(
    doc: &ResumeDocument,
    packed: Vec<Vec<RenderableBlock>>,
    share_url: Option<String>,
) -> Vec<PageFrame> {
    let total = packed.len();
    packed
        .into_iter()
        .enumerate()
        .map(|(i, blocks)| PageFrame {
            number: i + 1,
            total,
            header: HeaderChrome {
                full_name: doc.contact.full_name.clone(),
                city: doc.contact.city.clone(),
                share_url: share_url.clone(),
            },
            blocks,
            footer: FooterChrome {
                full_name: doc.contact.full_name.clone(),
                page_number: i + 1,
                total_pages: total,
                contact_line: doc.contact.contact_line(),
                share_url: share_url.clone(),
            },
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// HTML export
// ────────────────────────────────────────────────────────────────────────────

/// Renders the paginated resume as a standalone HTML document.
pub fn render_html(result: &PaginatedResume, config: &LayoutConfig) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
    out.push_str(&page_css(config));
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&format!("<div id=\"{EXPORT_ROOT_ID}\">\n"));

    for page in &result.pages {
        render_page(&mut out, page, config);
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn page_css(config: &LayoutConfig) -> String {
    let font = match config.font {
        crate::compose::font_metrics::FontFamily::Helvetica => "Helvetica, Arial, sans-serif",
        crate::compose::font_metrics::FontFamily::Georgia => "Georgia, serif",
    };
    format!(
        "body {{ background: #e5e5e5; font-family: {font}; margin: 0; }}\n\
         .page {{ width: {w:.0}px; height: {h:.0}px; background: #fff; \
         margin: 16px auto; box-shadow: 0 2px 8px rgba(0,0,0,0.25); \
         display: flex; flex-direction: column; overflow: hidden; }}\n\
         .page-header {{ height: {hh:.0}px; padding: 0 {sp:.0}px; }}\n\
         .page-content {{ height: {ch:.0}px; padding: {cp:.0}px {sp:.0}px; }}\n\
         .page-footer {{ height: {fh:.0}px; padding: 0 {sp:.0}px; font-size: 11px; }}\n\
         @media print {{\n\
         \x20 body {{ background: none; }}\n\
         \x20 .page {{ margin: 0; box-shadow: none; page-break-after: always; }}\n\
         }}\n",
        w = config.page_width_px(),
        h = config.page_height_px(),
        hh = config.header_height_px,
        ch = config.content_region_px(),
        fh = config.footer_height_px,
        cp = config.content_padding_px,
        sp = config.side_padding_px,
    )
}

fn render_page(out: &mut String, page: &PageFrame, _config: &LayoutConfig) {
    out.push_str("<section class=\"page\">\n");

    // Header
    out.push_str("<header class=\"page-header\">");
    out.push_str(&format!("<h1>{}</h1>", escape(&page.header.full_name)));
    if let Some(city) = &page.header.city {
        out.push_str(&format!("<span class=\"city\">{}</span>", escape(city)));
    }
    push_share_code(out, page.header.share_url.as_deref());
    out.push_str("</header>\n");

    // Content
    out.push_str("<main class=\"page-content\">\n");
    for block in &page.blocks {
        render_block(out, block);
    }
    out.push_str("</main>\n");

    // Footer
    out.push_str("<footer class=\"page-footer\">");
    out.push_str(&format!(
        "<span>{}</span> <span class=\"page-count\">page {} of {}</span> <span>{}</span>",
        escape(&page.footer.full_name),
        page.footer.page_number,
        page.footer.total_pages,
        escape(&page.footer.contact_line),
    ));
    push_share_code(out, page.footer.share_url.as_deref());
    out.push_str("</footer>\n");

    out.push_str("</section>\n");
}

/// Emits the scannable-code widget only when a share URL has resolved;
/// otherwise nothing. The widget stays hidden, it never blocks rendering.
fn push_share_code(out: &mut String, share_url: Option<&str>) {
    if let Some(url) = share_url {
        out.push_str(&format!(
            "<figure class=\"share-code\" data-share-url=\"{}\"></figure>",
            escape(url)
        ));
    }
}

fn render_block(out: &mut String, block: &RenderableBlock) {
    match &block.content {
        BlockContent::Summary { text } => {
            out.push_str(&format!("<p class=\"summary\">{}</p>\n", escape(text)));
        }
        BlockContent::SocialLinks { links } => {
            out.push_str("<ul class=\"social\">");
            for link in links {
                out.push_str(&format!(
                    "<li><a href=\"{}\">{}</a></li>",
                    escape(&link.url),
                    escape(&link.label)
                ));
            }
            out.push_str("</ul>\n");
        }
        BlockContent::SectionTitle { kind } => {
            out.push_str(&format!(
                "<h2 class=\"section-title\">{}</h2>\n",
                escape(kind.display_title())
            ));
        }
        BlockContent::Item { item, .. } => render_item(out, item),
    }
}

fn render_item(out: &mut String, item: &SectionItem) {
    out.push_str("<article class=\"item\">");
    out.push_str(&format!("<h3>{}</h3>", escape(&item.title)));
    if item.verification == VerificationStatus::Verified {
        out.push_str("<span class=\"verified\">✓ Verified</span>");
    }

    let mut meta: Vec<String> = Vec::new();
    if let Some(org) = item.organization.as_deref().filter(|o| !o.is_empty()) {
        meta.push(escape(org));
    }
    if let Some(dates) = item.date_line() {
        meta.push(escape(&dates));
    }
    if !meta.is_empty() {
        out.push_str(&format!("<p class=\"meta\">{}</p>", meta.join(" · ")));
    }

    if !item.description.trim().is_empty() {
        out.push_str(&format!(
            "<p class=\"description\">{}</p>",
            escape(&item.description)
        ));
    }

    if let Some(credential) = &item.credential {
        out.push_str(&format!(
            "<p class=\"credential\">Issued by {}</p>",
            escape(&credential.issuer)
        ));
    } else if let Some(url) = &item.credential_url {
        out.push_str(&format!(
            "<p class=\"credential\"><a href=\"{0}\">{0}</a></p>",
            escape(url)
        ));
    }

    out.push_str("</article>\n");
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::flatten::flatten_document;
    use crate::models::{ContactInfo, Section, SectionKind};
    use uuid::Uuid;

    fn make_doc() -> ResumeDocument {
        ResumeDocument {
            persisted_id: Some(Uuid::new_v4()),
            contact: ContactInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: Some("+44 20 7946 0958".to_string()),
                city: Some("London".to_string()),
            },
            summary: Some("Mathematician & engineer.".to_string()),
            social_links: vec![],
            sections: vec![Section {
                kind: SectionKind::Experience,
                items: vec![SectionItem {
                    id: Uuid::new_v4(),
                    title: "Analyst <Lead>".to_string(),
                    organization: Some("Analytical Engine Co".to_string()),
                    start_date: None,
                    end_date: None,
                    duration: Some("9 years".to_string()),
                    description: "Wrote the first published algorithm.".to_string(),
                    verification: VerificationStatus::Verified,
                    credential: None,
                    credential_url: None,
                }],
            }],
        }
    }

    fn paginate(doc: &ResumeDocument, share_url: Option<String>) -> PaginatedResume {
        let blocks = flatten_document(doc);
        let frames = build_frames(doc, vec![blocks], share_url);
        PaginatedResume {
            generation: 1,
            pages: frames,
        }
    }

    #[test]
    fn test_build_frames_numbers_pages() {
        let doc = make_doc();
        let frames = build_frames(&doc, vec![vec![], vec![], vec![]], None);
        assert_eq!(frames.len(), 3);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.number, i + 1);
            assert_eq!(frame.total, 3);
            assert_eq!(frame.footer.page_number, i + 1);
            assert_eq!(frame.footer.total_pages, 3);
        }
    }

    #[test]
    fn test_frames_denormalize_contact_data() {
        let doc = make_doc();
        let frames = build_frames(&doc, vec![vec![]], None);
        assert_eq!(frames[0].header.full_name, "Ada Lovelace");
        assert_eq!(frames[0].header.city.as_deref(), Some("London"));
        assert!(frames[0].footer.contact_line.contains("ada@example.com"));
    }

    #[test]
    fn test_export_root_id_present() {
        let html = render_html(&paginate(&make_doc(), None), &LayoutConfig::default());
        assert!(html.contains(&format!("id=\"{EXPORT_ROOT_ID}\"")));
    }

    #[test]
    fn test_share_code_hidden_without_url() {
        let html = render_html(&paginate(&make_doc(), None), &LayoutConfig::default());
        assert!(!html.contains("share-code"));
    }

    #[test]
    fn test_share_code_rendered_with_url() {
        let url = "https://resume.example.com/r/abc".to_string();
        let html = render_html(&paginate(&make_doc(), Some(url.clone())), &LayoutConfig::default());
        assert!(html.contains("share-code"));
        assert!(html.contains(&url));
    }

    #[test]
    fn test_print_rules_collapse_page_chrome() {
        let html = render_html(&paginate(&make_doc(), None), &LayoutConfig::default());
        assert!(html.contains("@media print"));
        assert!(html.contains("box-shadow: none"));
        assert!(html.contains("page-break-after: always"));
    }

    #[test]
    fn test_item_markup_escapes_and_badges() {
        let html = render_html(&paginate(&make_doc(), None), &LayoutConfig::default());
        assert!(html.contains("Analyst &lt;Lead&gt;"), "title must be escaped");
        assert!(html.contains("✓ Verified"));
        assert!(html.contains("Analytical Engine Co · 9 years"));
    }

    #[test]
    fn test_export_document_round_trips_through_disk() {
        let html = render_html(&paginate(&make_doc(), None), &LayoutConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume-pages.html");
        std::fs::write(&path, &html).unwrap();
        let read_back = std::fs::read_to_string(&path).unwrap();
        assert!(read_back.contains(EXPORT_ROOT_ID));
        assert_eq!(read_back, html);
    }

    #[test]
    fn test_page_count_line_rendered() {
        let doc = make_doc();
        let frames = build_frames(&doc, vec![vec![], vec![]], None);
        let html = render_html(
            &PaginatedResume {
                generation: 1,
                pages: frames,
            },
            &LayoutConfig::default(),
        );
        assert!(html.contains("page 1 of 2"));
        assert!(html.contains("page 2 of 2"));
    }
}
