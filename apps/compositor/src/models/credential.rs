//! Credential linkage — typed credential references and the legacy
//! dual-format boundary parser.
//!
//! The upstream credential subsystem historically delivered a single string
//! that was *either* a URL *or* a JSON-serialized credential object. The
//! model keeps those as two separate, explicitly typed fields on
//! `SectionItem`; `parse_credential_link` is the only place the ambiguity is
//! allowed to exist, and it never lets a malformed value past the boundary.

use serde::{Deserialize, Serialize};

use crate::errors::CompositorError;

/// A structured reference to an externally-issued verifiable credential.
///
/// Verification of the credential itself is out of scope; this is display
/// data plus enough identity to hand back to the credential subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredCredential {
    pub issuer: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub issued_on: Option<String>,
    #[serde(default)]
    pub credential_type: Option<String>,
}

/// The two legal interpretations of a legacy credential-link string.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialLink {
    Structured(StructuredCredential),
    Url(String),
}

/// Parses a legacy credential-link string into its typed form.
///
/// Branches on whether the string parses as JSON: a JSON credential object
/// becomes `Structured`, anything non-JSON is taken as a URL. A string that
/// is valid JSON but not a credential object is rejected rather than being
/// silently treated as a URL.
pub fn parse_credential_link(raw: &str) -> Result<CredentialLink, CompositorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CompositorError::InvalidDocument(
            "empty credential link".to_string(),
        ));
    }

    if let Ok(credential) = serde_json::from_str::<StructuredCredential>(trimmed) {
        return Ok(CredentialLink::Structured(credential));
    }

    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return Err(CompositorError::InvalidDocument(
            "credential link is JSON but not a credential object".to_string(),
        ));
    }

    Ok(CredentialLink::Url(trimmed.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_form() {
        let link = parse_credential_link("https://credentials.example.com/c/abc123").unwrap();
        assert_eq!(
            link,
            CredentialLink::Url("https://credentials.example.com/c/abc123".to_string())
        );
    }

    #[test]
    fn test_parse_structured_form() {
        let raw = r#"{"issuer":"Example University","credential_id":"cred-42"}"#;
        match parse_credential_link(raw).unwrap() {
            CredentialLink::Structured(c) => {
                assert_eq!(c.issuer, "Example University");
                assert_eq!(c.credential_id.as_deref(), Some("cred-42"));
                assert!(c.issued_on.is_none());
            }
            other => panic!("expected Structured, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_but_not_credential_rejected() {
        // Valid JSON, wrong shape: must not be misread as a URL
        let err = parse_credential_link(r#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, CompositorError::InvalidDocument(_)));
    }

    #[test]
    fn test_parse_empty_rejected() {
        let err = parse_credential_link("   ").unwrap_err();
        assert!(matches!(err, CompositorError::InvalidDocument(_)));
    }

    #[test]
    fn test_parse_trims_whitespace_around_url() {
        let link = parse_credential_link("  https://example.com/c/1  ").unwrap();
        assert_eq!(link, CredentialLink::Url("https://example.com/c/1".to_string()));
    }
}
