//! Idle takeover.
//!
//! Moves playback to a configured device once the account has not been
//! playing anywhere for a while, for example to keep a speaker such as a
//! Raspberry Pi running librespot busy. Independent of the shuffle logic.

use std::time::Duration;

use tokio::time::sleep;

use crate::{
    account::Account,
    config, info,
    spotify::{PlaybackService, ServiceError},
    success, utils, warning,
};

#[derive(Debug)]
pub enum TakeoverStatus {
    /// Something is playing; the idle time was reset.
    Playing,
    /// Idle for the given time, below the timeout.
    Idle(Duration),
    /// Playback was transferred to the device with this id.
    TookOver(String),
    DeviceNotFound,
    Unavailable(ServiceError),
    Failed(ServiceError),
}

pub struct Takeover {
    device_name: String,
    interval: Duration,
    timeout: Duration,
    volume: u8,
    idle_for: Duration,
}

impl Takeover {
    pub fn new(device_name: String) -> Self {
        Self {
            device_name,
            interval: Duration::from_secs(config::DEFAULT_AUTOPLAY_INTERVAL_SECS),
            timeout: Duration::from_secs(config::DEFAULT_AUTOPLAY_TIMEOUT_SECS),
            volume: 0,
            idle_for: Duration::ZERO,
        }
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn volume(mut self, volume: u8) -> Self {
        self.volume = volume.min(100);
        self
    }

    pub fn idle_for(&self) -> Duration {
        self.idle_for
    }

    /// One check, `interval` after the previous one.
    ///
    /// The idle time is not reset by a takeover; it is reset only once
    /// playback is observed, so a failed takeover is retried on the next check.
    pub async fn check<S: PlaybackService>(&mut self, account: &mut Account<S>) -> TakeoverStatus {
        if let Err(e) = account.refresh_playback().await {
            return TakeoverStatus::Unavailable(e);
        }

        if account.monitor().is_playing() {
            self.idle_for = Duration::ZERO;
            return TakeoverStatus::Playing;
        }

        if self.idle_for >= self.timeout {
            return self.take_over(account).await;
        }

        self.idle_for += self.interval;
        TakeoverStatus::Idle(self.idle_for)
    }

    async fn take_over<S: PlaybackService>(&self, account: &mut Account<S>) -> TakeoverStatus {
        let devices = match account.service_mut().devices().await {
            Ok(devices) => devices,
            Err(e) => return TakeoverStatus::Unavailable(e),
        };

        let Some(device_id) = utils::find_device(&devices, &self.device_name)
            .and_then(|device| device.id.clone())
        else {
            return TakeoverStatus::DeviceNotFound;
        };

        let service = account.service_mut();
        if let Err(e) = service.set_volume(self.volume, &device_id).await {
            return TakeoverStatus::Failed(e);
        }
        if let Err(e) = service.transfer_playback(&device_id, true).await {
            return TakeoverStatus::Failed(e);
        }

        TakeoverStatus::TookOver(device_id)
    }

    /// Checks forever, first check after one interval.
    pub async fn run<S: PlaybackService>(mut self, mut account: Account<S>) {
        info!(
            "Watching {} for {}s of silence, taking over on {}",
            account.alias(),
            self.timeout.as_secs(),
            self.device_name
        );

        loop {
            sleep(self.interval).await;

            match self.check(&mut account).await {
                TakeoverStatus::Playing => info!("Playing somewhere, ignoring..."),
                TakeoverStatus::Idle(idle) => {
                    info!("Haven't been playing for {} seconds.", idle.as_secs())
                }
                TakeoverStatus::TookOver(_) => {
                    success!("Took over playback on {}", self.device_name)
                }
                TakeoverStatus::DeviceNotFound => warning!(
                    "Device {} not among available devices, is the player running?",
                    self.device_name
                ),
                TakeoverStatus::Unavailable(e) => warning!("Failed to fetch playback: {}", e),
                TakeoverStatus::Failed(e) => warning!("Failed to take over playback: {}", e),
            }
        }
    }
}
