// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Ports use domain types only; infrastructure adapters implement them.
//!
//! - [`contact`]: Contact form delivery

pub mod contact;

pub use contact::ContactRelay;
