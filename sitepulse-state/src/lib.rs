//! Reactive state for the SitePulse construction dashboard.
//!
//! Four leaf stores (projects, safety alerts, quality issues, equipment) feed
//! per-domain analytics, which merge into one analytics record, which in turn
//! drives the recommendations and the dashboard overview. Writes to a leaf
//! propagate synchronously through that graph.
//!
//! ```
//! use sitepulse_state::SiteState;
//!
//! let mut state = SiteState::with_mock_data();
//! assert_eq!(state.safety_analytics().critical_alerts, 1);
//!
//! state.resolve_alert("SA002");
//! assert_eq!(state.safety_analytics().critical_alerts, 0);
//! assert_eq!(state.dashboard_metrics().alerts_trend, 3.2);
//! ```

pub mod domain;
mod error;
pub mod graph;
mod seed;
mod state;

pub use error::SeedError;
pub use graph::{NodeId, SubscriptionId};
pub use seed::Seed;
pub use state::node;
pub use state::{Nodes, SiteState};
