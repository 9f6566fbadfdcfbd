// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports the presentation layer talks through.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer holds ports as trait objects

pub mod port;
