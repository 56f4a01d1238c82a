//! The application state container.

use {
    crate::{
        config::{AmplifyConfig, ConfigError},
        events::{AppEvent, DispatchError},
        snapshot::{AppSnapshot, FaqItem, PickerSnapshot},
        ui::{CommunityBrowser, FaqPanel},
    },
    amplify_catalog::{FaqCatalog, TierId},
    amplify_registry::{CommunityPicker, CommunityRegistry},
    amplify_router::{Location, MemoryLocation, MemoryViewport, View, ViewRouter, Viewport},
    amplify_signup::{
        AttemptId, CompletionOutcome, ExternalOpener, FormMessageGate, FormSignal,
        IntegrationConfig, PaymentRedirect, RecordingOpener, SignupController, SignupError,
    },
    log::*,
    std::time::Duration,
};

/// Anchor of the pricing section.
pub const TIERS_ANCHOR: &str = "tiers";

/// Handle returned by [`AmplifyApp::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AppSnapshot)>;

/// A payment-path completion waiting for the virtual clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledCompletion {
    due: Duration,
    seq: u64,
    attempt: AttemptId,
}

/// Owns every piece of page state and applies events to it.
///
/// Components are never reached through globals; hosts construct one
/// container per page and feed it [`AppEvent`]s. After every event the
/// container drains queued location changes into the router and hands a
/// fresh [`AppSnapshot`] to each subscriber.
pub struct AmplifyApp<L = MemoryLocation, V = MemoryViewport, O = RecordingOpener> {
    registry: CommunityRegistry,
    faq_catalog: FaqCatalog,
    integration: IntegrationConfig,
    router: ViewRouter<L, V>,
    controller: SignupController,
    picker: CommunityPicker,
    gate: FormMessageGate,
    redirect: PaymentRedirect,
    opener: O,
    faq: FaqPanel,
    browser: CommunityBrowser,
    menu_open: bool,
    clock: Duration,
    timers: Vec<ScheduledCompletion>,
    next_timer_seq: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl AmplifyApp {
    /// A container over in-memory location, viewport and opener.
    pub fn headless(config: AmplifyConfig) -> Result<Self, ConfigError> {
        Self::new(
            config,
            MemoryLocation::default(),
            MemoryViewport::new(),
            RecordingOpener::new(),
        )
    }
}

impl<L: Location, V: Viewport, O: ExternalOpener> AmplifyApp<L, V, O> {
    pub fn new(
        config: AmplifyConfig,
        location: L,
        viewport: V,
        opener: O,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = config.build_registry()?;
        let controller = SignupController::new(&registry, config.default_tier());
        let gate = FormMessageGate::from_config(&config.integration)?;
        let redirect = PaymentRedirect::from_config(&config.integration)?;
        let router = ViewRouter::new(config.router, location, viewport);
        info!(
            "Amplify app ready: {} communities, default tier {}",
            registry.len(),
            controller.selected_tier()
        );
        Ok(Self {
            registry,
            faq_catalog: config.faq,
            integration: config.integration,
            router,
            controller,
            picker: CommunityPicker::new(),
            gate,
            redirect,
            opener,
            faq: FaqPanel::new(),
            browser: CommunityBrowser::new(),
            menu_open: false,
            clock: Duration::ZERO,
            timers: Vec::new(),
            next_timer_seq: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn registry(&self) -> &CommunityRegistry {
        &self.registry
    }

    pub fn controller(&self) -> &SignupController {
        &self.controller
    }

    pub fn current_view(&self) -> View {
        self.router.current_view()
    }

    pub fn router(&self) -> &ViewRouter<L, V> {
        &self.router
    }

    /// Host access to the location, e.g. for back/forward. Changes queued
    /// here are applied by the next [`pump`](Self::pump) or dispatch.
    pub fn location_mut(&mut self) -> &mut L {
        self.router.location_mut()
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        self.router.viewport_mut()
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn picker(&self) -> &CommunityPicker {
        &self.picker
    }

    pub fn faq(&self) -> &FaqPanel {
        &self.faq
    }

    pub fn browser(&self) -> &CommunityBrowser {
        &self.browser
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Time elapsed on the virtual clock.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn pending_completions(&self) -> usize {
        self.timers.len()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns whether `id` was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(candidate, _)| *candidate != id);
        self.subscribers.len() != before
    }

    /// Apply one event, then sync the router and notify subscribers.
    ///
    /// A failed event is logged and returned. State stays consistent and the
    /// user can retry.
    pub fn dispatch(&mut self, event: AppEvent) -> Result<(), DispatchError> {
        trace!("Dispatching {event:?}");
        let result = self.apply(event);
        if let Err(err) = &result {
            warn!("Event failed: {err}");
        }
        self.drain_location_changes();
        self.notify();
        result
    }

    /// Apply location changes queued by the host (back/forward, typed
    /// URLs). Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let applied = self.drain_location_changes();
        if applied > 0 {
            self.notify();
        }
        applied
    }

    /// Advance the virtual clock and fire every completion that fell due,
    /// oldest first. Returns how many fired.
    pub fn advance_time(&mut self, elapsed: Duration) -> usize {
        self.clock = self.clock.saturating_add(elapsed);
        let now = self.clock;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|timer| timer.due <= now);
        self.timers = pending;
        due.sort_by_key(|timer| (timer.due, timer.seq));

        for timer in &due {
            match self
                .controller
                .complete_signup(&mut self.registry, timer.attempt)
            {
                Ok(CompletionOutcome::Committed(aggregate)) => debug!(
                    "Payment completion for attempt {} committed to \"{}\"",
                    timer.attempt, aggregate.name
                ),
                Ok(outcome) => debug!(
                    "Payment completion for attempt {} ignored: {outcome:?}",
                    timer.attempt
                ),
                Err(err) => warn!(
                    "Payment completion for attempt {} failed: {err}",
                    timer.attempt
                ),
            }
        }
        if !due.is_empty() {
            self.notify();
        }
        due.len()
    }

    pub fn snapshot(&self) -> AppSnapshot {
        let catalog = self.registry.catalog();
        AppSnapshot {
            view: self.router.current_view(),
            fragment: self.router.location().fragment(),
            menu_open: self.menu_open,
            tiers: catalog.iter().cloned().collect(),
            communities: self.registry.aggregates().cloned().collect(),
            totals: self.registry.totals(),
            active_community: self
                .browser
                .active()
                .and_then(|name| self.registry.lookup(name).ok())
                .cloned(),
            selection: self.controller.selection().clone(),
            status: self.controller.status(),
            attempt: self.controller.attempt(),
            summary: self.controller.summary(catalog),
            picker: PickerSnapshot {
                query: self.picker.query().to_string(),
                is_open: self.picker.is_open(),
                options: self.picker.options(&self.registry),
            },
            embedded_form_url: self
                .integration
                .use_embedded_form
                .then(|| self.integration.form_url()),
            pending_completions: self.timers.len(),
            faq: self
                .faq
                .visible(&self.faq_catalog)
                .into_iter()
                .map(|(key, entry, open)| FaqItem {
                    key,
                    question: entry.question.clone(),
                    answer: entry.answer.clone(),
                    open,
                })
                .collect(),
            show_all_faqs: self.faq.shows_all(),
        }
    }

    fn apply(&mut self, event: AppEvent) -> Result<(), DispatchError> {
        match event {
            AppEvent::Navigate(view) => {
                self.menu_open = false;
                self.router.navigate_to(view);
            }
            AppEvent::LocationChanged(fragment) => self.change_location(&fragment),
            AppEvent::ScrollToAnchor(anchor) => {
                self.menu_open = false;
                self.router.scroll_to_anchor(&anchor);
            }
            AppEvent::Rendered => self.router.on_rendered(),

            AppEvent::ChooseTier(tier) => self.choose_tier(tier),
            AppEvent::SelectTier(tier) => self.controller.select_tier(tier),
            AppEvent::SelectCommunity(name) => self.select_community(&name)?,
            AppEvent::OpenPicker => self.picker.open(),
            AppEvent::ClosePicker => self.picker.close(),
            AppEvent::PickerQuery(query) => self.picker.set_query(query),
            AppEvent::PickerChoose(option) => {
                let name = self.picker.choose(&option);
                self.select_community(&name)?;
            }

            AppEvent::Submit => self.submit(),
            AppEvent::FormMessage { origin, payload } => self.form_message(&origin, &payload)?,
            AppEvent::SimulateSuccess => {
                self.controller.complete_current(&mut self.registry)?;
            }
            AppEvent::StartOver => {
                self.controller.reset_for_new_attempt();
                self.picker.close();
                self.router.navigate_to(View::Home);
            }

            AppEvent::ToggleFaq(key) => {
                if !self.faq.toggle(&self.faq_catalog, key) {
                    debug!("Ignoring toggle of hidden or unknown FAQ entry {key:?}");
                }
            }
            AppEvent::ToggleAllFaqs => self.faq.toggle_show_all(),
            AppEvent::ToggleCommunity(name) => self.browser.toggle(&name),
            AppEvent::CloseCommunity => self.browser.close(),
            AppEvent::JoinCommunity(name) => {
                self.finish_cycle();
                self.select_community(&name)?;
                self.browser.close();
                self.menu_open = false;
                self.router.scroll_to_anchor(TIERS_ANCHOR);
            }
            AppEvent::OpenMenu => self.menu_open = true,
            AppEvent::CloseMenu => self.menu_open = false,
        }
        Ok(())
    }

    /// Start over if the previous attempt already completed.
    fn finish_cycle(&mut self) {
        if self.controller.is_complete() {
            self.controller.reset_for_new_attempt();
        }
    }

    fn choose_tier(&mut self, tier: TierId) {
        self.finish_cycle();
        self.controller.select_tier(tier);
        self.menu_open = false;
        self.router.navigate_to(View::Checkout);
    }

    fn select_community(&mut self, name: &str) -> Result<(), SignupError> {
        self.controller.select_community(&mut self.registry, name)
    }

    fn submit(&mut self) {
        let Some(pending) = self.redirect.start(&mut self.controller, &mut self.opener) else {
            debug!("Submit ignored: attempt already submitting or complete");
            return;
        };
        let timer = ScheduledCompletion {
            due: self.clock.saturating_add(pending.fire_after),
            seq: self.next_timer_seq,
            attempt: pending.attempt,
        };
        self.next_timer_seq = self.next_timer_seq.wrapping_add(1);
        self.timers.push(timer);
    }

    fn form_message(&mut self, origin: &str, payload: &str) -> Result<(), DispatchError> {
        match self.gate.classify(origin, payload)? {
            FormSignal::Ignored => Ok(()),
            FormSignal::Completed if self.router.current_view() != View::Checkout => {
                // The form is only mounted on the checkout view.
                warn!("Completion message received outside checkout; ignored");
                Ok(())
            }
            FormSignal::Completed => {
                self.controller.complete_current(&mut self.registry)?;
                Ok(())
            }
        }
    }

    fn drain_location_changes(&mut self) -> usize {
        let mut applied = 0usize;
        while let Some(fragment) = self.router.location_mut().take_change() {
            self.change_location(&fragment);
            applied = applied.saturating_add(1);
        }
        applied
    }

    fn change_location(&mut self, fragment: &str) {
        let previous = self.router.current_view();
        let next = self.router.on_location_changed(fragment);
        if previous == next {
            return;
        }
        self.menu_open = false;
        if next == View::Checkout && self.controller.is_complete() {
            debug!("Entering checkout after a finished attempt; starting over");
            self.controller.reset_for_new_attempt();
        }
        if previous == View::Checkout {
            self.picker.close();
            if self.controller.is_submitting() {
                info!(
                    "Checkout left with attempt {} in flight; abandoning it",
                    self.controller.attempt()
                );
                self.controller.reset_for_new_attempt();
            }
        }
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&snapshot);
        }
    }
}
