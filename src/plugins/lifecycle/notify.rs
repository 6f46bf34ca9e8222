//! Death notification side channel.
//!
//! Fire-and-forget: a sink gets at most one report per `notify_interval`, failures are logged
//! and never reach gameplay.

use std::time::Duration;

use bevy::prelude::*;
use thiserror::Error;

use crate::plugins::combat::state::DeathReport;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notification sink unavailable: {0}")]
    Unavailable(String),
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Receives the tail of the damage log whenever Buddy dies.
pub trait DeathNotifier: Send + Sync {
    fn notify(&self, report: &DeathReport) -> Result<(), NotifyError>;
}

/// Default sink: writes a short coroner's note to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub const SUBJECT: &'static str = "Buddy died again";

    pub fn compose(report: &DeathReport) -> String {
        if report.recent_damage.is_empty() {
            return "He died of natural cardboard causes.".to_string();
        }
        format!(
            "Cause of death: cumulative damage. Last recorded: {}.",
            report.recent_damage.join(", ")
        )
    }
}

impl DeathNotifier for LogNotifier {
    fn notify(&self, report: &DeathReport) -> Result<(), NotifyError> {
        info!("{}: {}", Self::SUBJECT, Self::compose(report));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    RateLimited,
    Failed(NotifyError),
}

/// The installed sink plus its rate limit.
#[derive(Resource)]
pub struct DeathNotifications {
    sink: Box<dyn DeathNotifier>,
    last_sent: Option<Duration>,
}

impl DeathNotifications {
    pub fn new(sink: impl DeathNotifier + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            last_sent: None,
        }
    }

    /// Hand `report` to the sink unless one was attempted less than `interval` ago.
    ///
    /// A failed attempt still counts against the rate limit.
    pub fn dispatch(&mut self, report: &DeathReport, now: Duration, interval: Duration) -> NotifyOutcome {
        let limited = self
            .last_sent
            .is_some_and(|last| now.saturating_sub(last) < interval);
        if limited {
            debug!("Death notification skipped (rate limited)");
            return NotifyOutcome::RateLimited;
        }

        self.last_sent = Some(now);
        match self.sink.notify(report) {
            Ok(()) => NotifyOutcome::Sent,
            Err(err) => {
                warn!("Death notification failed: {err}");
                NotifyOutcome::Failed(err)
            }
        }
    }
}

impl Default for DeathNotifications {
    fn default() -> Self {
        Self::new(LogNotifier)
    }
}
