//! The signup flow controller.

use {
    crate::error::SignupError,
    amplify_catalog::{TierCatalog, TierId},
    amplify_registry::{CommunityAggregate, CommunityRegistry},
    log::*,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Generation token for one checkout attempt.
///
/// Every [`SignupController::reset_for_new_attempt`], and every selection
/// change made while submitting, moves to a new id, so a completion that was
/// scheduled for an abandoned attempt can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttemptId(u64);

impl AttemptId {
    pub fn get(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the user has chosen in the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupSelection {
    pub selected_tier_id: TierId,
    pub selected_community_name: String,
    pub is_submitting: bool,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupStatus {
    Idle,
    Submitting,
    Complete,
    /// The last completion hit a registry error; the attempt can be retried.
    Failed,
}

/// Result of delivering a completion to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The signup was recorded; carries the community's new aggregate.
    Committed(CommunityAggregate),
    /// The attempt had already completed. Nothing changed.
    Duplicate,
    /// The completion belongs to an abandoned attempt. Nothing changed.
    Stale { attempt: AttemptId, current: AttemptId },
}

impl CompletionOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CompletionOutcome::Committed(_))
    }
}

/// Read-only view of the attempt for the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub tier: TierId,
    pub monthly_price: u64,
    pub headline_prize: String,
    pub combined_odds: String,
    /// Present only when the user picked a community other than the default.
    pub community: Option<String>,
}

/// Owns one attempt's selection and the transition that commits it.
#[derive(Debug, Clone)]
pub struct SignupController {
    default_tier: TierId,
    default_community: String,
    selection: SignupSelection,
    attempt: AttemptId,
    failed: bool,
}

impl SignupController {
    /// A controller whose defaults are `default_tier` and the registry's
    /// default community.
    pub fn new(registry: &CommunityRegistry, default_tier: TierId) -> Self {
        let default_community = registry.default_name().to_string();
        Self {
            selection: SignupSelection {
                selected_tier_id: default_tier,
                selected_community_name: default_community.clone(),
                is_submitting: false,
                is_complete: false,
            },
            default_tier,
            default_community,
            attempt: AttemptId(0),
            failed: false,
        }
    }

    pub fn selection(&self) -> &SignupSelection {
        &self.selection
    }

    pub fn selected_tier(&self) -> TierId {
        self.selection.selected_tier_id
    }

    pub fn selected_community(&self) -> &str {
        &self.selection.selected_community_name
    }

    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    pub fn is_submitting(&self) -> bool {
        self.selection.is_submitting
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete
    }

    pub fn status(&self) -> SignupStatus {
        if self.selection.is_complete {
            SignupStatus::Complete
        } else if self.selection.is_submitting {
            SignupStatus::Submitting
        } else if self.failed {
            SignupStatus::Failed
        } else {
            SignupStatus::Idle
        }
    }

    /// Select `tier`. Changing the tier while submitting abandons the
    /// in-flight attempt; its completion will come back stale.
    pub fn select_tier(&mut self, tier: TierId) {
        if self.selection.selected_tier_id == tier {
            return;
        }
        self.supersede_in_flight();
        debug!("Attempt {}: tier {tier}", self.attempt);
        self.selection.selected_tier_id = tier;
    }

    /// Select the community called `name`, creating it first if needed.
    ///
    /// The name is trimmed. A blank name is rejected and leaves the previous
    /// selection in place. Switching community while submitting abandons the
    /// in-flight attempt, as [`select_tier`](Self::select_tier) does.
    pub fn select_community(
        &mut self,
        registry: &mut CommunityRegistry,
        name: &str,
    ) -> Result<(), SignupError> {
        registry.ensure_exists(name)?;
        let name = name.trim();
        if name != self.selection.selected_community_name {
            self.supersede_in_flight();
        }
        debug!("Attempt {}: community \"{name}\"", self.attempt);
        self.selection.selected_community_name = name.to_string();
        Ok(())
    }

    /// Mark the attempt as submitting.
    ///
    /// Returns the id a later completion must carry, or `None` when the
    /// attempt is already submitting or complete.
    pub fn begin_submission(&mut self) -> Option<AttemptId> {
        if self.selection.is_submitting || self.selection.is_complete {
            debug!("Attempt {}: submission already in progress", self.attempt);
            return None;
        }
        self.selection.is_submitting = true;
        self.failed = false;
        debug!("Attempt {}: submitting", self.attempt);
        Some(self.attempt)
    }

    /// Commit the attempt identified by `attempt` into `registry`.
    ///
    /// This is the only place a signup is counted. Completion signals are
    /// at-least-once: repeats return [`CompletionOutcome::Duplicate`], and
    /// completions for an abandoned attempt return
    /// [`CompletionOutcome::Stale`]. Neither touches the registry.
    ///
    /// Completion does not require a prior
    /// [`begin_submission`](Self::begin_submission): the embedded form can
    /// report success on its own.
    pub fn complete_signup(
        &mut self,
        registry: &mut CommunityRegistry,
        attempt: AttemptId,
    ) -> Result<CompletionOutcome, SignupError> {
        if attempt != self.attempt {
            debug!(
                "Ignoring completion for stale attempt {attempt} (current {})",
                self.attempt
            );
            return Ok(CompletionOutcome::Stale {
                attempt,
                current: self.attempt,
            });
        }
        if self.selection.is_complete {
            debug!("Ignoring duplicate completion for attempt {attempt}");
            return Ok(CompletionOutcome::Duplicate);
        }

        let tier = self.selection.selected_tier_id;
        match registry.record_signup(&self.selection.selected_community_name, tier) {
            Ok(aggregate) => {
                self.selection.is_submitting = false;
                self.selection.is_complete = true;
                self.failed = false;
                info!(
                    "Attempt {attempt} complete: {tier} for \"{}\"",
                    aggregate.name
                );
                Ok(CompletionOutcome::Committed(aggregate))
            }
            Err(err) => {
                error!("Attempt {attempt} failed to record signup: {err}");
                self.selection.is_submitting = false;
                self.failed = true;
                Err(err.into())
            }
        }
    }

    /// Complete the current attempt right away.
    pub fn complete_current(
        &mut self,
        registry: &mut CommunityRegistry,
    ) -> Result<CompletionOutcome, SignupError> {
        self.complete_signup(registry, self.attempt)
    }

    /// Start a fresh attempt with default tier and community.
    pub fn reset_for_new_attempt(&mut self) {
        self.attempt = self.attempt.next();
        self.selection = SignupSelection {
            selected_tier_id: self.default_tier,
            selected_community_name: self.default_community.clone(),
            is_submitting: false,
            is_complete: false,
        };
        self.failed = false;
        debug!("Started attempt {}", self.attempt);
    }

    /// Move to a new attempt that keeps the current selection, so a
    /// completion for the submitted one is stale.
    fn supersede_in_flight(&mut self) {
        if !self.selection.is_submitting {
            return;
        }
        let abandoned = self.attempt;
        self.attempt = self.attempt.next();
        self.selection.is_submitting = false;
        debug!(
            "Selection changed while attempt {abandoned} was submitting; now attempt {}",
            self.attempt
        );
    }

    pub fn summary(&self, catalog: &TierCatalog) -> CheckoutSummary {
        let tier = catalog.get(self.selection.selected_tier_id);
        let community = (self.selection.selected_community_name != self.default_community)
            .then(|| self.selection.selected_community_name.clone());
        CheckoutSummary {
            tier: tier.id,
            monthly_price: tier.monthly_price,
            headline_prize: tier.headline_prize.clone(),
            combined_odds: tier.combined_odds.clone(),
            community,
        }
    }
}
