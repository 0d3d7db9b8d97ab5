//! The polling loop.
//!
//! Every interval the scheduler walks its accounts in order. For each one it
//! refreshes the playback snapshot and, when the account is playing a managed
//! playlist (and shuffling, if required), runs the reconciler. Accounts are
//! handled one after another; a failure only ends that account's turn in the
//! current tick.

use std::time::Duration;

use tokio::time::sleep;

use crate::{
    account::Account,
    config, info,
    shuffle::{Outcome, ReconcileError},
    spotify::{PlaybackService, ServiceError},
    success, warning,
};

#[derive(Debug, Clone)]
pub struct PollOptions {
    pub interval: Duration,
    pub lookahead: usize,
    pub require_shuffle: bool,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(config::DEFAULT_POLL_INTERVAL_SECS),
            lookahead: config::DEFAULT_LOOKAHEAD,
            require_shuffle: false,
        }
    }
}

impl PollOptions {
    /// Options from the environment.
    pub fn from_env() -> Self {
        Self {
            interval: config::poll_interval(),
            lookahead: config::lookahead(),
            require_shuffle: config::require_shuffle(),
        }
    }
}

/// Result of one account's turn in a tick.
#[derive(Debug)]
pub enum PollStatus {
    /// The snapshot could not be fetched; the previous one is kept.
    Unavailable(ServiceError),
    NotPlaying,
    Unmanaged,
    ShuffleOff,
    Reconciled(Outcome),
    Failed(ReconcileError),
}

impl<S: PlaybackService> Account<S> {
    /// One account's turn: refresh, gate, reconcile.
    pub async fn poll(&mut self, options: &PollOptions) -> PollStatus {
        if let Err(e) = self.refresh_playback().await {
            return PollStatus::Unavailable(e);
        }

        let monitor = self.monitor();
        if !monitor.is_playing() {
            return PollStatus::NotPlaying;
        }
        if !monitor.is_managed_playlist(&self.config.managed_playlist_ids) {
            return PollStatus::Unmanaged;
        }
        if options.require_shuffle && !monitor.is_shuffle_enabled() {
            return PollStatus::ShuffleOff;
        }

        match self.reconcile(options.lookahead).await {
            Ok(outcome) => PollStatus::Reconciled(outcome),
            Err(e) => PollStatus::Failed(e),
        }
    }
}

pub struct Scheduler<S> {
    accounts: Vec<Account<S>>,
    options: PollOptions,
}

impl<S: PlaybackService> Scheduler<S> {
    pub fn new(accounts: Vec<Account<S>>, options: PollOptions) -> Self {
        Self { accounts, options }
    }

    pub fn accounts(&self) -> &[Account<S>] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut [Account<S>] {
        &mut self.accounts
    }

    /// Polls every account once and reports each turn.
    pub async fn tick(&mut self) -> Vec<(String, PollStatus)> {
        let mut statuses = Vec::with_capacity(self.accounts.len());

        for account in self.accounts.iter_mut() {
            let status = account.poll(&self.options).await;
            report(account.alias(), &status);
            statuses.push((account.alias().to_string(), status));
        }

        statuses
    }

    /// Ticks forever, starting immediately.
    pub async fn run(mut self) {
        info!(
            "Polling {} account(s) every {}s",
            self.accounts.len(),
            self.options.interval.as_secs()
        );

        loop {
            self.tick().await;
            sleep(self.options.interval).await;
        }
    }
}

fn report(alias: &str, status: &PollStatus) {
    match status {
        PollStatus::Unavailable(e) => warning!("Failed to fetch playback for {}: {}", alias, e),
        PollStatus::NotPlaying => info!("{} not playing anything, waiting...", alias),
        PollStatus::Unmanaged => info!("{} not playing a managed playlist, waiting...", alias),
        PollStatus::ShuffleOff => info!("{} has shuffle off, waiting...", alias),
        PollStatus::Reconciled(Outcome::Queued(track)) => {
            success!("Added {} to queue for {}", track, alias)
        }
        PollStatus::Reconciled(Outcome::Pending(track)) => {
            info!("Queued track {} still pending for {}, skipping add...", track, alias)
        }
        PollStatus::Reconciled(Outcome::NothingToQueue(playlist)) => {
            info!("Nothing left to queue from {} for {}", playlist, alias)
        }
        PollStatus::Failed(e @ ReconcileError::PlaylistMismatch(_))
        | PollStatus::Failed(e @ ReconcileError::EmptyBag(_)) => {
            warning!("BUG: skipping cycle for {}: {}", alias, e)
        }
        PollStatus::Failed(e) => warning!("Skipping cycle for {}: {}", alias, e),
    }
}
