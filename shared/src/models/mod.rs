//! Domain models for the Flood & Weather Alert System

mod alert;
mod forecast;
mod report;
mod subscription;
mod weather;

pub use alert::*;
pub use forecast::*;
pub use report::*;
pub use subscription::*;
pub use weather::*;
