//! # CLI Module
//!
//! User-facing commands. Each one loads what it needs from [`crate::config`],
//! connects accounts through [`crate::spotify`] and hands over to the
//! long-running loops in [`crate::scheduler`] and [`crate::autoplay`].
//!
//! - [`run`] - prime every account's shuffle bags and poll forever
//! - [`auth`] - authorize one account
//! - [`status`] - table of accounts, playlist sizes and current playback
//! - [`autoplay`] - idle takeover for one account
//!
//! ```bash
//! trueshuffle auth zoey
//! trueshuffle status
//! trueshuffle run --require-shuffle
//! trueshuffle autoplay zoey --device "Pi Spotify"
//! ```
//!
//! Start-up failures exit through `error!`; once a loop is running, failures
//! are reported with `warning!` and the loop carries on.

mod auth;
mod autoplay;
mod run;
mod status;

pub use auth::auth;
pub use autoplay::autoplay;
pub use run::run;
pub use status::status;
