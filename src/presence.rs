//! Periodic refresh of the bot activity.
//!
//! Discord may drop the activity of a bot over time, so the "playing" label is
//! set as soon as the session is ready and then set again at a fixed period.

use std::time::Duration;

use log::{debug, info};
use tokio::{task::JoinHandle, time};

/// Sets the displayed activity of the bot account.
///
/// Failures are not reported: the activity is purely cosmetic.
pub trait PresenceSink: Send + Sync + 'static {
    /// Shows the bot as playing `label`.
    fn set_playing(&self, label: &str);
}

/// Configuration of the presence refresh task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceUpdater {
    /// Activity label shown as "Playing {label}"
    activity: String,
    /// Delay between two refreshes
    period: Duration,
}

impl PresenceUpdater {
    /// Create a new [PresenceUpdater].
    ///
    /// # Arguments
    ///
    /// * `activity` - The label displayed as the bot activity
    /// * `period` - The delay between two refreshes, must not be zero
    pub fn new(activity: &str, period: Duration) -> Self {
        PresenceUpdater {
            activity: activity.to_owned(),
            period,
        }
    }

    /// Starts the refresh task in the background.
    ///
    /// The activity is set immediately, then once per period. The task runs
    /// until the returned handle is aborted or the process ends.
    pub fn spawn<S: PresenceSink>(&self, sink: S) -> JoinHandle<()> {
        let activity = self.activity.clone();
        let period = self.period;

        tokio::spawn(async move {
            info!(
                "refreshing activity '{}' every {} seconds",
                activity,
                period.as_secs()
            );
            // The first tick completes immediately
            let mut interval = time::interval(period);

            loop {
                interval.tick().await;
                debug!("set activity '{}'", activity);
                sink.set_playing(&activity);
            }
        })
    }
}
