//! The payment redirect path of the checkout.

use {
    crate::{
        config::IntegrationConfig, controller::AttemptId, controller::SignupController,
        error::IntegrationConfigError,
    },
    log::*,
    std::time::Duration,
    url::Url,
};

/// Opens a URL outside the current page, e.g. in a new browser tab.
pub trait ExternalOpener {
    fn open_in_new_context(&mut self, url: &Url);
}

impl<T: ExternalOpener + ?Sized> ExternalOpener for Box<T> {
    fn open_in_new_context(&mut self, url: &Url) {
        (**self).open_in_new_context(url)
    }
}

/// Records opened URLs instead of opening them.
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    opened: Vec<Url>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> &[Url] {
        &self.opened
    }
}

impl ExternalOpener for RecordingOpener {
    fn open_in_new_context(&mut self, url: &Url) {
        self.opened.push(url.clone());
    }
}

/// A completion the host must deliver once `fire_after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCompletion {
    pub attempt: AttemptId,
    pub fire_after: Duration,
}

/// Starts a checkout submission that finishes after a fixed delay.
#[derive(Debug, Clone)]
pub struct PaymentRedirect {
    payment_url: Url,
    delay: Duration,
    open_external: bool,
}

impl PaymentRedirect {
    pub fn new(payment_url: Url, delay: Duration, open_external: bool) -> Self {
        Self {
            payment_url,
            delay,
            open_external,
        }
    }

    /// The external page is opened only when the embedded form is disabled.
    pub fn from_config(config: &IntegrationConfig) -> Result<Self, IntegrationConfigError> {
        Ok(Self::new(
            config.payment_url()?,
            config.completion_delay(),
            !config.use_embedded_form,
        ))
    }

    pub fn payment_url(&self) -> &Url {
        &self.payment_url
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Begin the submission and hand back the completion to schedule.
    ///
    /// Returns `None` when the controller is already submitting or complete,
    /// in which case nothing is opened.
    pub fn start<O: ExternalOpener + ?Sized>(
        &self,
        controller: &mut SignupController,
        opener: &mut O,
    ) -> Option<PendingCompletion> {
        let attempt = controller.begin_submission()?;
        if self.open_external {
            info!("Opening payment page for attempt {attempt}");
            opener.open_in_new_context(&self.payment_url);
        }
        debug!(
            "Attempt {attempt} completes in {}ms",
            self.delay.as_millis()
        );
        Some(PendingCompletion {
            attempt,
            fire_after: self.delay,
        })
    }
}
