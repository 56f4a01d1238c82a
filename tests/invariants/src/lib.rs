//! Amplify Property-Based Invariant Tests
//!
//! Uses proptest to verify the system invariants across:
//! - Community aggregate consistency, creation idempotency and ordering
//! - Route round-trips and fragment parsing
//! - Completion idempotency and stale-completion safety

pub mod signup_invariants;
