//! HTTP handlers for the Flood & Weather Alert server

mod alert;
mod health;
mod subscription;
mod weather;

pub use alert::*;
pub use health::*;
pub use subscription::*;
pub use weather::*;
