//! # Amplify Application State
//!
//! Wires the catalog, community registry, view router and signup controller
//! into one injectable container, [`AmplifyApp`].
//!
//! ```text
//!   host event ─► AmplifyApp::dispatch(AppEvent)
//!                     │
//!                     ├─► SignupController / CommunityRegistry
//!                     ├─► ViewRouter::navigate_to ─► Location
//!                     │                                  │
//!                     │   ◄── queued location changes ───┘
//!                     ├─► checkout lifecycle rules
//!                     └─► subscribers(AppSnapshot)
//! ```
//!
//! The payment redirect path schedules its completion on a virtual clock;
//! hosts forward real timer ticks through [`AmplifyApp::advance_time`].
//!
//! ```
//! use amplify_app::{AmplifyApp, AmplifyConfig, AppEvent};
//! use amplify_catalog::TierId;
//!
//! let mut app = AmplifyApp::headless(AmplifyConfig::default()).unwrap();
//! app.dispatch(AppEvent::ChooseTier(TierId::Gold)).unwrap();
//! app.dispatch(AppEvent::SelectCommunity("Teaneck".into())).unwrap();
//! app.dispatch(AppEvent::SimulateSuccess).unwrap();
//!
//! let teaneck = app.registry().lookup("Teaneck").unwrap();
//! assert_eq!(teaneck.monthly_total, 500);
//! ```

pub mod config;
pub mod events;
pub mod snapshot;
pub mod store;
pub mod ui;


pub use config::{AmplifyConfig, ConfigError, DEFAULT_COMMUNITY, LAUNCH_COMMUNITIES};
pub use events::{AppEvent, DispatchError};
pub use snapshot::{AppSnapshot, FaqItem, PickerSnapshot};
pub use store::{AmplifyApp, SubscriptionId, TIERS_ANCHOR};
pub use ui::{CommunityBrowser, FaqPanel};
