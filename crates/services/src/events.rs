//! In-process change notifications between screens.
//!
//! Writers publish a payload-free signal after touching the store; screens
//! that show derived progress subscribe and reload. Dropping a
//! [`ProgressSubscription`] is the unsubscribe.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

const DEFAULT_CAPACITY: usize = 16;

/// Names of the change notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressSignal {
    StampsUpdated,
    PointsUpdated,
}

impl ProgressSignal {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ProgressSignal::StampsUpdated => "stampsUpdated",
            ProgressSignal::PointsUpdated => "pointsUpdated",
        }
    }
}

/// What a subscription yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressNotice {
    /// A subscribed signal was published.
    Signal(ProgressSignal),
    /// The receiver fell behind and dropped `skipped` signals. Which ones is
    /// unknown, so listeners should treat this as "reload".
    Missed { skipped: u64 },
}

/// Signals the home screen reloads on.
pub const HOME_SIGNALS: [ProgressSignal; 2] =
    [ProgressSignal::StampsUpdated, ProgressSignal::PointsUpdated];

/// Broadcast hub shared by writers and screens. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ProgressEvents {
    sender: broadcast::Sender<ProgressSignal>,
}

impl ProgressEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Fire-and-forget. Publishing with nobody listening is fine.
    pub fn publish(&self, signal: ProgressSignal) {
        match self.sender.send(signal) {
            Ok(receivers) => {
                tracing::debug!(signal = signal.name(), receivers, "published progress signal");
            }
            Err(_) => {
                tracing::debug!(signal = signal.name(), "progress signal had no subscribers");
            }
        }
    }

    /// Listen for the given signals until the subscription is dropped.
    #[must_use]
    pub fn subscribe(&self, signals: &[ProgressSignal]) -> ProgressSubscription {
        ProgressSubscription {
            receiver: self.sender.subscribe(),
            signals: signals.to_vec(),
        }
    }

    /// Live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ProgressEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// A filtered view of the signal stream.
#[derive(Debug)]
pub struct ProgressSubscription {
    receiver: broadcast::Receiver<ProgressSignal>,
    signals: Vec<ProgressSignal>,
}

impl ProgressSubscription {
    /// Wait for the next matching signal.
    ///
    /// Returns `None` once every publisher is gone.
    pub async fn recv(&mut self) -> Option<ProgressNotice> {
        loop {
            match self.receiver.recv().await {
                Ok(signal) if self.signals.contains(&signal) => {
                    return Some(ProgressNotice::Signal(signal));
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "progress subscription lagged");
                    return Some(ProgressNotice::Missed { skipped });
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn delivers_subscribed_signals_only() {
        let events = ProgressEvents::new();
        let mut stamps_only = events.subscribe(&[ProgressSignal::StampsUpdated]);

        events.publish(ProgressSignal::PointsUpdated);
        events.publish(ProgressSignal::StampsUpdated);

        assert_eq!(
            stamps_only.recv().await,
            Some(ProgressNotice::Signal(ProgressSignal::StampsUpdated))
        );
    }

    #[tokio::test]
    async fn home_subscription_sees_both_signals() {
        let events = ProgressEvents::new();
        let mut home = events.subscribe(&HOME_SIGNALS);

        events.publish(ProgressSignal::PointsUpdated);
        events.publish(ProgressSignal::StampsUpdated);

        assert_eq!(
            home.recv().await,
            Some(ProgressNotice::Signal(ProgressSignal::PointsUpdated))
        );
        assert_eq!(
            home.recv().await,
            Some(ProgressNotice::Signal(ProgressSignal::StampsUpdated))
        );
    }

    #[tokio::test]
    async fn dropping_subscription_unsubscribes() {
        let events = ProgressEvents::new();
        let first = events.subscribe(&HOME_SIGNALS);
        let second = events.subscribe(&HOME_SIGNALS);
        assert_eq!(events.subscriber_count(), 2);

        drop(first);
        assert_eq!(events.subscriber_count(), 1);
        drop(second);
        assert_eq!(events.subscriber_count(), 0);

        events.publish(ProgressSignal::StampsUpdated);
    }

    #[tokio::test]
    async fn closes_when_publishers_are_gone() {
        let events = ProgressEvents::new();
        let mut sub = events.subscribe(&HOME_SIGNALS);
        drop(events);
        assert_eq!(sub.recv().await, None);
    }

    #[tokio::test]
    async fn lagged_subscription_reports_missed_signals() {
        let events = ProgressEvents::with_capacity(1);
        let mut sub = events.subscribe(&HOME_SIGNALS);
        for _ in 0..4 {
            events.publish(ProgressSignal::PointsUpdated);
        }

        let got = tokio::time::timeout(Duration::from_millis(100), sub.recv())
            .await
            .expect("signal");
        assert_eq!(got, Some(ProgressNotice::Signal(ProgressSignal::StampsUpdated)));
    }

    #[test]
    fn signal_names_match_wire_names() {
        assert_eq!(ProgressSignal::StampsUpdated.name(), "stampsUpdated");
        assert_eq!(ProgressSignal::PointsUpdated.name(), "pointsUpdated");
    }
}
