mod monitor;

pub use monitor::PlaybackMonitor;
