//! Domain types for share reconstruction
//!
//! This module contains validated newtypes and configuration for recovering a secret:
//! - [`Threshold`] - Minimum shares required for reconstruction (k >= 2)
//! - [`ShareCount`] - Total number of shares the document declares (n >= 1)
//! - [`Point`] - A decoded share as an `(x, y)` pair of big integers
//! - [`RecoveryConfig`] - Threshold together with the declared share count

mod config;
mod point;
mod share_count;
mod threshold;

pub use config::RecoveryConfig;
pub use point::Point;
pub use share_count::ShareCount;
pub use threshold::Threshold;
