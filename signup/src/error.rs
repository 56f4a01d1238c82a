use {amplify_registry::RegistryError, thiserror::Error};

/// Errors surfaced by the signup controller.
///
/// The only source is the registry, and the controller's own guards make
/// every variant unreachable from a correctly wired page. A caller that sees
/// one should log it as a defect and offer a retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Why an inbound cross-context message was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// The sender's origin is not on the allow-list (or is not a URL).
    #[error("Message origin {0:?} is not allowed")]
    UntrustedOrigin(String),

    /// The payload does not have a recognised shape.
    #[error("Malformed form message: {0}")]
    Malformed(String),

    /// A well-formed message for a different embedded form.
    #[error("Message is for form {received:?}, expected {expected:?}")]
    FormMismatch { expected: String, received: String },
}

/// Invalid third-party integration settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrationConfigError {
    #[error("Invalid payment URL {url:?}: {reason}")]
    InvalidPaymentUrl { url: String, reason: String },

    #[error("form_id must not be empty")]
    EmptyFormId,

    #[error("Invalid allowed origin {0:?}")]
    InvalidOrigin(String),

    #[error("allowed_origins must list at least one origin when the embedded form is enabled")]
    NoAllowedOrigins,
}
