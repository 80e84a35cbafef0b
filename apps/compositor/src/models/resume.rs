//! The resume document model consumed by the pagination engine.
//!
//! Owned and mutated by the (external) editing session; this subsystem only
//! ever reads it. Everything derives `serde` so documents round-trip as JSON
//! from the state manager.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::credential::StructuredCredential;

/// The fixed section taxonomy, in display order.
///
/// The flattener emits sections in this order regardless of how the document
/// stores them; kinds missing from a document simply produce no blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Certifications,
    Education,
    Skills,
    Affiliations,
    Languages,
    Hobbies,
    Projects,
    Publications,
    VolunteerWork,
}

impl SectionKind {
    /// All kinds in display order.
    pub const ORDER: [SectionKind; 10] = [
        SectionKind::Experience,
        SectionKind::Certifications,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Affiliations,
        SectionKind::Languages,
        SectionKind::Hobbies,
        SectionKind::Projects,
        SectionKind::Publications,
        SectionKind::VolunteerWork,
    ];

    pub fn display_title(&self) -> &'static str {
        match self {
            SectionKind::Experience => "Experience",
            SectionKind::Certifications => "Certifications",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Affiliations => "Affiliations",
            SectionKind::Languages => "Languages",
            SectionKind::Hobbies => "Hobbies",
            SectionKind::Projects => "Projects",
            SectionKind::Publications => "Publications",
            SectionKind::VolunteerWork => "Volunteer Work",
        }
    }
}

/// Verification state of a section item against an externally-issued
/// credential. Verification logic itself is out of scope; the renderer only
/// shows a badge for `Verified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Unverified,
    Pending,
    Verified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl ContactInfo {
    /// The footer contact line: email and phone joined with a separator.
    pub fn contact_line(&self) -> String {
        match &self.phone {
            Some(phone) if !phone.is_empty() => format!("{} · {}", self.email, phone),
            _ => self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// One entry in a resume section.
///
/// `credential` and `credential_url` are deliberately separate, explicitly
/// typed fields; the legacy single-string form is only accepted at the
/// boundary via `models::credential::parse_credential_link`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionItem {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Free-form duration string ("3 years") when exact dates are unknown.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub verification: VerificationStatus,
    #[serde(default)]
    pub credential: Option<StructuredCredential>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

impl SectionItem {
    /// The rendered date line: "Jan 2021 – Mar 2023", "Jan 2021 – Present",
    /// the free-form duration string, or nothing.
    pub fn date_line(&self) -> Option<String> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(format!(
                "{} – {}",
                start.format("%b %Y"),
                end.format("%b %Y")
            )),
            (Some(start), None) => Some(format!("{} – Present", start.format("%b %Y"))),
            _ => self.duration.clone().filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    #[serde(default)]
    pub items: Vec<SectionItem>,
}

/// The full resume document.
///
/// `persisted_id` is set once the document has been saved by the (external)
/// persistence layer; the share-link widget stays hidden until then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default)]
    pub persisted_id: Option<Uuid>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
