//! Share-link resolution — pluggable, trait-based resolver for the canonical
//! "view this resume" URL shown in the page chrome's scannable-code widget.
//!
//! Default: `StaticResolver` (base URL + persisted id, deterministic, fully
//! testable). Real deployments implement `ShareLinkResolver` against their
//! link service; the compositor only consumes the resolved URL.

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::errors::CompositorError;
use crate::models::ResumeDocument;

/// Resolves the canonical shareable URL for a persisted resume.
#[async_trait]
pub trait ShareLinkResolver: Send + Sync {
    async fn resolve(&self, resume_id: Uuid) -> Result<String, CompositorError>;
}

/// Base-URL resolver: `<base>/<persisted id>`.
pub struct StaticResolver {
    base_url: String,
}

impl StaticResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        StaticResolver {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ShareLinkResolver for StaticResolver {
    async fn resolve(&self, resume_id: Uuid) -> Result<String, CompositorError> {
        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), resume_id))
    }
}

/// Resolves the share URL for a document, or `None` when the widget should
/// stay hidden: the document has never been persisted, or the resolver
/// failed. Resolution is best-effort; a missing code never blocks a page.
pub async fn resolve_share_url<R: ShareLinkResolver + ?Sized>(
    resolver: &R,
    doc: &ResumeDocument,
) -> Option<String> {
    let id = doc.persisted_id?;
    match resolver.resolve(id).await {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(resume_id = %id, error = %e, "share link resolution failed, widget stays hidden");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactInfo;

    fn make_doc(persisted: bool) -> ResumeDocument {
        ResumeDocument {
            persisted_id: persisted.then(Uuid::new_v4),
            contact: ContactInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
                city: None,
            },
            summary: None,
            social_links: vec![],
            sections: vec![],
        }
    }

    #[tokio::test]
    async fn test_static_resolver_joins_base_and_id() {
        let resolver = StaticResolver::new("https://resume.example.com/r/");
        let id = Uuid::new_v4();
        let url = resolver.resolve(id).await.unwrap();
        assert_eq!(url, format!("https://resume.example.com/r/{id}"));
    }

    #[tokio::test]
    async fn test_unpersisted_document_resolves_to_none() {
        let resolver = StaticResolver::new("https://resume.example.com/r");
        assert!(resolve_share_url(&resolver, &make_doc(false)).await.is_none());
    }

    #[tokio::test]
    async fn test_persisted_document_resolves_to_url() {
        let resolver = StaticResolver::new("https://resume.example.com/r");
        let doc = make_doc(true);
        let url = resolve_share_url(&resolver, &doc).await.unwrap();
        assert!(url.ends_with(&doc.persisted_id.unwrap().to_string()));
    }

    struct FailingResolver;

    #[async_trait]
    impl ShareLinkResolver for FailingResolver {
        async fn resolve(&self, _resume_id: Uuid) -> Result<String, CompositorError> {
            Err(CompositorError::ShareLink("link service unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_resolver_failure_degrades_to_hidden() {
        assert!(resolve_share_url(&FailingResolver, &make_doc(true)).await.is_none());
    }
}
