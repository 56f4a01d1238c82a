//! Third-party integration settings.

use {
    crate::{error::IntegrationConfigError, message::tuple_origin},
    serde::{Deserialize, Serialize},
    std::time::Duration,
    url::Url,
};

/// Settings for the embedded enrollment form and the payment redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Hosted checkout page opened in a new context when the embedded form
    /// is disabled.
    pub payment_url: String,

    /// Identifier of the embedded enrollment form.
    pub form_id: String,

    /// Base URL the embedded form is served from; the form id is appended.
    pub form_base_url: String,

    /// Render the embedded form (true) or send users to `payment_url` (false).
    pub use_embedded_form: bool,

    /// Origins allowed to send completion messages, e.g.
    /// `https://form.jotform.com`.
    pub allowed_origins: Vec<String>,

    /// Delay before a redirect-path attempt is treated as complete.
    pub completion_delay_ms: u64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            payment_url: "https://buy.stripe.com/test_6oE7sC9vW5".to_string(),
            form_id: "241234567890123".to_string(),
            form_base_url: "https://form.jotform.com".to_string(),
            use_embedded_form: true,
            allowed_origins: vec![
                "https://form.jotform.com".to_string(),
                "https://submit.jotform.com".to_string(),
            ],
            completion_delay_ms: 1_500,
        }
    }
}

impl IntegrationConfig {
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Parsed payment URL; only `http` and `https` are accepted.
    pub fn payment_url(&self) -> Result<Url, IntegrationConfigError> {
        let invalid = |reason: String| IntegrationConfigError::InvalidPaymentUrl {
            url: self.payment_url.clone(),
            reason,
        };
        let url = Url::parse(&self.payment_url).map_err(|err| invalid(err.to_string()))?;
        match url.scheme() {
            "https" | "http" => Ok(url),
            scheme => Err(invalid(format!("unsupported scheme {scheme}"))),
        }
    }

    /// `src` of the embedded form frame.
    pub fn form_url(&self) -> String {
        format!(
            "{}/{}",
            self.form_base_url.trim_end_matches('/'),
            self.form_id
        )
    }

    pub fn validate(&self) -> Result<(), IntegrationConfigError> {
        self.payment_url()?;
        if self.form_id.trim().is_empty() {
            return Err(IntegrationConfigError::EmptyFormId);
        }
        if self.use_embedded_form && self.allowed_origins.is_empty() {
            return Err(IntegrationConfigError::NoAllowedOrigins);
        }
        for origin in &self.allowed_origins {
            tuple_origin(origin)
                .ok_or_else(|| IntegrationConfigError::InvalidOrigin(origin.clone()))?;
        }
        Ok(())
    }
}
