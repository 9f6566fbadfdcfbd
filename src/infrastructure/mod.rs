// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the ports in `application::port`, plus the
//! tokio runtime host for the slide rotator.
//!
//! # Available Adapters
//!
//! - [`web3forms`]: Contact delivery over HTTP (implements [`ContactRelay`])
//! - [`rotation_driver`]: Runs a rotator's timers on tokio
//! - [`remote_image`]: Downloads slides referenced by URL through one shared client
//!
//! [`ContactRelay`]: crate::application::port::ContactRelay

pub mod remote_image;
pub mod rotation_driver;
pub mod web3forms;

pub use remote_image::ImageFetcher;
pub use rotation_driver::{RotationHandle, Snapshot, TimerGuard};
pub use web3forms::Web3FormsRelay;
