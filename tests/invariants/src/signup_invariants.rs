//! Property-based tests for the signup completion path.
//!
//! Properties tested:
//! 1. Idempotent completion: any number of deliveries of one attempt's
//!    completion counts exactly one signup.
//! 2. Stale safety: completions for abandoned attempts never touch the
//!    registry, whatever order they arrive in.
//! 3. Submitted selection: a committed attempt counts the tier and community
//!    that were selected when it began submitting.

#[cfg(test)]
mod tests {
    use {
        amplify_catalog::{TierCatalog, TierId},
        amplify_registry::{CommunityRegistry, CommunitySeed},
        amplify_signup::{AttemptId, CompletionOutcome, SignupController},
        proptest::prelude::*,
        std::collections::HashMap,
    };

    const DEFAULT: &str = "General Circle";
    const COMMUNITIES: [&str; 3] = ["Teaneck", "Miami", "Austin"];

    #[derive(Debug, Clone)]
    enum Step {
        SelectTier(TierId),
        SelectCommunity(usize),
        Begin,
        /// Deliver a completion for the attempt recorded at this index.
        Complete(usize),
        CompleteCurrent,
        Reset,
    }

    fn tier() -> impl Strategy<Value = TierId> {
        prop_oneof![
            Just(TierId::Silver),
            Just(TierId::Gold),
            Just(TierId::Diamond),
        ]
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            tier().prop_map(Step::SelectTier),
            (0..COMMUNITIES.len()).prop_map(Step::SelectCommunity),
            Just(Step::Begin),
            any::<usize>().prop_map(Step::Complete),
            Just(Step::CompleteCurrent),
            Just(Step::Reset),
        ]
    }

    fn setup() -> (CommunityRegistry, SignupController) {
        let registry = CommunityRegistry::with_seeds(
            TierCatalog::default(),
            DEFAULT,
            &[CommunitySeed::new("Teaneck"), CommunitySeed::new("Miami")],
        )
        .unwrap();
        let controller = SignupController::new(&registry, TierId::Silver);
        (registry, controller)
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  Property 1: One attempt, many deliveries, one count
    // ═══════════════════════════════════════════════════════════════════════

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn repeated_completion_counts_once(
            tier in tier(),
            community in 0..COMMUNITIES.len(),
            deliveries in 1..10usize,
        ) {
            let (mut registry, mut controller) = setup();
            controller.select_tier(tier);
            controller.select_community(&mut registry, COMMUNITIES[community]).unwrap();
            let attempt = controller.begin_submission().unwrap();

            let mut committed = 0usize;
            for _ in 0..deliveries {
                match controller.complete_signup(&mut registry, attempt).unwrap() {
                    CompletionOutcome::Committed(_) => committed += 1,
                    CompletionOutcome::Duplicate => {}
                    other => prop_assert!(false, "unexpected outcome {:?}", other),
                }
            }

            prop_assert_eq!(committed, 1);
            let aggregate = registry.lookup(COMMUNITIES[community]).unwrap();
            prop_assert_eq!(aggregate.member_count, 1);
            prop_assert_eq!(aggregate.tier_counts.get(tier), 1);
            prop_assert_eq!(aggregate.monthly_total, registry.catalog().price(tier));
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  Properties 2 and 3: Only the live attempt commits, as submitted
    // ═══════════════════════════════════════════════════════════════════════

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn only_live_attempts_commit(steps in prop::collection::vec(step(), 0..40)) {
            let (mut registry, mut controller) = setup();
            let mut issued: Vec<AttemptId> = vec![controller.attempt()];
            let mut committed_attempts: Vec<AttemptId> = Vec::new();
            let mut submitted: HashMap<AttemptId, (TierId, String)> = HashMap::new();

            for step in steps {
                let members_before = registry.totals().member_count;
                let attempt_before = controller.attempt();
                match step {
                    Step::SelectTier(tier) => controller.select_tier(tier),
                    Step::SelectCommunity(index) => {
                        controller
                            .select_community(&mut registry, COMMUNITIES[index])
                            .unwrap();
                    }
                    Step::Begin => {
                        if let Some(attempt) = controller.begin_submission() {
                            prop_assert_eq!(attempt, controller.attempt());
                            submitted.insert(
                                attempt,
                                (
                                    controller.selected_tier(),
                                    controller.selected_community().to_string(),
                                ),
                            );
                        }
                    }
                    Step::Complete(index) => {
                        let attempt = issued[index % issued.len()];
                        let live = attempt == controller.attempt();
                        let outcome = controller.complete_signup(&mut registry, attempt).unwrap();
                        match outcome {
                            CompletionOutcome::Stale { .. } => {
                                prop_assert!(!live);
                                prop_assert_eq!(registry.totals().member_count, members_before);
                            }
                            CompletionOutcome::Duplicate => {
                                prop_assert!(live);
                                prop_assert_eq!(registry.totals().member_count, members_before);
                            }
                            CompletionOutcome::Committed(aggregate) => {
                                prop_assert!(live);
                                if let Some((tier, name)) = submitted.get(&attempt) {
                                    prop_assert_eq!(&aggregate.name, name);
                                    prop_assert_eq!(controller.selected_tier(), *tier);
                                }
                                committed_attempts.push(attempt);
                            }
                        }
                    }
                    Step::CompleteCurrent => {
                        let attempt = controller.attempt();
                        if let CompletionOutcome::Committed(aggregate) =
                            controller.complete_current(&mut registry).unwrap()
                        {
                            if let Some((tier, name)) = submitted.get(&attempt) {
                                prop_assert_eq!(&aggregate.name, name);
                                prop_assert_eq!(controller.selected_tier(), *tier);
                            }
                            committed_attempts.push(attempt);
                        }
                    }
                    Step::Reset => controller.reset_for_new_attempt(),
                }

                // Resets and mid-submission selection changes open new attempts.
                if controller.attempt() != attempt_before {
                    prop_assert!(!issued.contains(&controller.attempt()));
                    issued.push(controller.attempt());
                }
            }

            // Each attempt commits at most once, and every commit is one member.
            let mut unique = committed_attempts.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), committed_attempts.len());
            prop_assert_eq!(
                registry.totals().member_count,
                committed_attempts.len() as u64
            );
            for aggregate in registry.aggregates() {
                prop_assert!(aggregate.is_consistent(registry.catalog()));
            }
        }
    }
}
