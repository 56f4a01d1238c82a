//! Validation of messages posted by the embedded enrollment form.

use {
    crate::{
        config::IntegrationConfig,
        error::{IntegrationConfigError, MessageError},
    },
    log::*,
    serde::Deserialize,
    url::Url,
};

const SUBMISSION_COMPLETED: &str = "submission-completed";

/// Frame bookkeeping the form emits that carries no signup meaning.
const HOUSEKEEPING_ACTIONS: &[&str] = &[
    "set-height",
    "setheight",
    "scroll-into-view",
    "scrollintoview",
    "load-script",
    "loadscript",
    "collapse-error-page",
    "collapseerrorpage",
];

/// What an accepted message means for the signup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSignal {
    /// The form reports a finished submission.
    Completed,
    /// A recognised message with no effect on the flow.
    Ignored,
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    action: String,
    #[serde(rename = "formID", default)]
    form_id: Option<FormIdValue>,
}

/// Form ids arrive both as strings and as bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FormIdValue {
    Text(String),
    Number(u64),
}

impl FormIdValue {
    fn into_string(self) -> String {
        match self {
            FormIdValue::Text(text) => text,
            FormIdValue::Number(number) => number.to_string(),
        }
    }
}

/// Serialized scheme/host/port origin of `url`, or `None` when it does not
/// parse or its origin is opaque. All opaque origins serialize to `"null"`.
pub(crate) fn tuple_origin(url: &str) -> Option<String> {
    let origin = Url::parse(url).ok()?.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

/// Origin allow-list plus payload parser for inbound form messages.
///
/// A message is trusted only as a signal that the current attempt finished;
/// nothing in its payload reaches the registry.
#[derive(Debug, Clone)]
pub struct FormMessageGate {
    allowed_origins: Vec<String>,
    form_id: String,
}

impl FormMessageGate {
    pub fn new<S: AsRef<str>>(
        allowed_origins: &[S],
        form_id: impl Into<String>,
    ) -> Result<Self, IntegrationConfigError> {
        let allowed_origins = allowed_origins
            .iter()
            .map(|origin| {
                let origin = origin.as_ref();
                tuple_origin(origin)
                    .ok_or_else(|| IntegrationConfigError::InvalidOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let form_id = form_id.into();
        if form_id.trim().is_empty() {
            return Err(IntegrationConfigError::EmptyFormId);
        }
        Ok(Self {
            allowed_origins,
            form_id: form_id.trim().to_string(),
        })
    }

    pub fn from_config(config: &IntegrationConfig) -> Result<Self, IntegrationConfigError> {
        Self::new(config.allowed_origins.as_slice(), config.form_id.as_str())
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Compare scheme, host and port of `origin` against the allow-list.
    /// Opaque origins (`null`, `file:`, `data:`, sandboxed frames) are never
    /// trusted.
    pub fn is_trusted_origin(&self, origin: &str) -> bool {
        tuple_origin(origin).is_some_and(|origin| self.allowed_origins.contains(&origin))
    }

    /// Classify one message received from `origin`.
    pub fn classify(&self, origin: &str, payload: &str) -> Result<FormSignal, MessageError> {
        if !self.is_trusted_origin(origin) {
            warn!("Rejected form message from untrusted origin {origin:?}");
            return Err(MessageError::UntrustedOrigin(origin.to_string()));
        }

        let (action, form_id) = parse_payload(payload)?;
        if let Some(received) = form_id {
            if received != self.form_id {
                debug!("Form message for form {received:?} ignored");
                return Err(MessageError::FormMismatch {
                    expected: self.form_id.clone(),
                    received,
                });
            }
        }

        let action = action.trim().to_ascii_lowercase();
        if action == SUBMISSION_COMPLETED {
            info!("Embedded form reported a completed submission");
            Ok(FormSignal::Completed)
        } else if HOUSEKEEPING_ACTIONS.contains(&action.as_str()) {
            trace!("Form housekeeping message {action:?}");
            Ok(FormSignal::Ignored)
        } else {
            Err(MessageError::Malformed(format!(
                "unrecognised action {action:?}"
            )))
        }
    }
}

/// Split a payload into its action and optional form id.
///
/// Accepted shapes are a JSON object with `action` and `formID`, a JSON
/// string, and plain text of the form `action[:arg...]` where the last
/// argument of a completion is the form id.
fn parse_payload(payload: &str) -> Result<(String, Option<String>), MessageError> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(MessageError::Malformed("empty payload".to_string()));
    }

    if payload.starts_with('{') {
        let message: WireMessage = serde_json::from_str(payload)
            .map_err(|err| MessageError::Malformed(err.to_string()))?;
        return Ok((
            message.action,
            message.form_id.map(FormIdValue::into_string),
        ));
    }

    let text = if payload.starts_with('"') {
        serde_json::from_str::<String>(payload)
            .map_err(|err| MessageError::Malformed(err.to_string()))?
    } else {
        payload.to_string()
    };

    let mut parts = text.split(':');
    let action = parts.next().unwrap_or_default().to_string();
    let form_id = if action.trim().eq_ignore_ascii_case(SUBMISSION_COMPLETED) {
        parts.last().map(|id| id.trim().to_string())
    } else {
        None
    };
    Ok((action, form_id))
}
