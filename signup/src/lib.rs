//! # Amplify Signup Flow
//!
//! Owns the ephemeral state of one checkout attempt and the single
//! transition that commits a finished signup into the community registry.
//!
//! ## Attempt lifecycle
//!
//! ```text
//!            select_tier / select_community
//!                   ┌─────────┐
//!                   ▼         │
//!   reset ──►  [ Idle ] ──────┘
//!                 │ begin_submission()  ──► AttemptId
//!                 ▼
//!           [ Submitting ]
//!                 │ complete_signup(attempt)   (at-least-once)
//!                 ▼
//!            [ Complete ]  ── further completions: Duplicate
//!
//!   reset_for_new_attempt() from any state bumps the attempt id;
//!   completions carrying an older id are Stale and change nothing.
//! ```
//!
//! The embedded enrollment form is trusted only as a *signal* that the
//! attempt finished ([`FormMessageGate`]). Tier and community always come
//! from the controller's own selection, never from a message payload.

pub mod config;
pub mod controller;
pub mod error;
pub mod message;
pub mod payment;


pub use config::IntegrationConfig;
pub use controller::{
    AttemptId, CheckoutSummary, CompletionOutcome, SignupController, SignupSelection, SignupStatus,
};
pub use error::{IntegrationConfigError, MessageError, SignupError};
pub use message::{FormMessageGate, FormSignal};
pub use payment::{ExternalOpener, PaymentRedirect, PendingCompletion, RecordingOpener};
