//! Business logic services for the Flood & Weather Alert server

pub mod subscription;
pub mod weather;

pub use subscription::{SubscriptionOutcome, SubscriptionService};
pub use weather::WeatherService;
