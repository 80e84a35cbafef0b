pub mod credential;
pub mod resume;

pub use credential::{parse_credential_link, CredentialLink, StructuredCredential};
pub use resume::{
    ContactInfo, ResumeDocument, Section, SectionItem, SectionKind, SocialLink,
    VerificationStatus,
};
