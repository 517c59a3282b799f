//! Dispatch over a populated [`Registry`].

use crate::{config::FlagMatching, registry::Registry};
use keiro_core::{DispatchError, Flag, Payload};

/// Summary of one dispatch call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Whether a listener stopped propagation.
    pub stopped: bool,
    /// Number of listeners invoked.
    pub invoked_count: usize,
    /// Number of matching placeholder slots that were skipped.
    pub skipped_count: usize,
}

/// Walks a group's listeners in priority order, honoring flags and stop
/// signals.
///
/// A dispatcher only borrows the registry; it holds no state of its own and
/// is cheap to create per call.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r Registry,
    flag_matching: FlagMatching,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher over `registry`.
    pub fn new(registry: &'r Registry, flag_matching: FlagMatching) -> Self {
        Self {
            registry,
            flag_matching,
        }
    }

    /// Dispatch to every listener of `group` with no payload.
    pub fn dispatch(&self, group: &str) -> Result<DispatchOutcome, DispatchError> {
        self.dispatch_with(group, Flag::ALL, &Payload::new())
    }

    /// Dispatch to the listeners of `group` matching `flag`, with no payload.
    pub fn dispatch_flagged(
        &self,
        group: &str,
        flag: impl Into<Flag>,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.dispatch_with(group, flag, &Payload::new())
    }

    /// Dispatch `payload` to every listener of `group`.
    pub fn dispatch_payload(
        &self,
        group: &str,
        payload: &Payload,
    ) -> Result<DispatchOutcome, DispatchError> {
        self.dispatch_with(group, Flag::ALL, payload)
    }

    /// Dispatch `payload` to the listeners of `group` matching `flag`.
    ///
    /// Listeners run on the caller's thread in ascending priority order until
    /// one returns `Ok(true)`. An unknown group is a no-op. The first listener
    /// error aborts the call; listeners after it are not invoked.
    pub fn dispatch_with(
        &self,
        group: &str,
        flag: impl Into<Flag>,
        payload: &Payload,
    ) -> Result<DispatchOutcome, DispatchError> {
        let flag = flag.into();
        let mut outcome = DispatchOutcome::default();

        let Some(entries) = self.registry.listeners_of(group) else {
            tracing::trace!(group, %flag, "no such group");
            return Ok(outcome);
        };

        let matching = entries
            .iter()
            .filter(|entry| self.flag_matching.matches(entry.record().flag(), flag));

        for entry in matching {
            let Some(listener) = entry.listener() else {
                outcome.skipped_count += 1;
                continue;
            };

            outcome.invoked_count += 1;
            let stop = listener
                .on_receive(payload)
                .map_err(|source| DispatchError::Listener {
                    group: group.to_owned(),
                    identity: entry.record().identity().name().to_owned(),
                    source,
                })?;

            if stop {
                outcome.stopped = true;
                break;
            }
        }

        tracing::trace!(
            group,
            %flag,
            invoked = outcome.invoked_count,
            stopped = outcome.stopped,
            "dispatched"
        );
        Ok(outcome)
    }
}
