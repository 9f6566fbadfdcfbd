// SPDX-License-Identifier: MPL-2.0
//! Contact relay port definition.
//!
//! A relay takes one validated [`ContactSubmission`] and delivers it to a
//! third party. There is exactly one outbound request per call; retries,
//! idempotency keys, and offline queuing are left to callers (none do).

use crate::domain::contact::ContactSubmission;
use crate::error::RelayError;
use futures_util::future::BoxFuture;

/// Port for delivering contact submissions.
///
/// The returned future is `'static` so the UI can hand it straight to
/// `Task::perform` without borrowing the relay.
///
/// # Example
///
/// ```ignore
/// use iced_showcase::application::port::ContactRelay;
///
/// async fn send(relay: &dyn ContactRelay, submission: ContactSubmission) {
///     match relay.submit(submission).await {
///         Ok(()) => println!("sent"),
///         Err(e) => eprintln!("{e}"),
///     }
/// }
/// ```
pub trait ContactRelay: Send + Sync {
    /// Sends one submission.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] when the request cannot be made, the relay
    /// answers with a non-success status, or the relay reports failure.
    fn submit(&self, submission: ContactSubmission) -> BoxFuture<'static, Result<(), RelayError>>;
}
