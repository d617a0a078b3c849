use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;

use super::clock::Clock;
use crate::component::is_ignored;

/// Sleep used when nothing is scheduled; any event or finished run wakes the loop first.
pub(super) const IDLE_SLEEP: Duration = Duration::from_secs(86400);

/// Debouncer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No change waiting to be processed.
    Idle,
    /// A change arrived; a run fires once `deadline` passes without another.
    Pending { deadline: Instant },
}

/// Pure debouncer: only handles timing and run exclusion.
///
/// Every change (re)starts the quiet timer. When it elapses the caller gets
/// one trigger and the debouncer is marked running; until `finish()` no
/// further trigger is handed out. Changes arriving meanwhile are coalesced
/// into a single trailing run.
pub struct Debouncer<C> {
    clock: C,
    quiet: Duration,
    phase: Phase,
    running: bool,
    /// Changed paths since the last trigger (for logging only)
    changed: FxHashSet<PathBuf>,
}

impl<C: Clock> Debouncer<C> {
    pub fn new(clock: C, quiet: Duration) -> Self {
        Self {
            clock,
            quiet,
            phase: Phase::Idle,
            running: false,
            changed: FxHashSet::default(),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Record a change: enter `Pending` and restart the quiet timer.
    pub fn touch(&mut self) {
        self.phase = Phase::Pending {
            deadline: self.clock.now() + self.quiet,
        };
    }

    /// Record a notify event.
    ///
    /// Returns `false` for events that cannot change generated output:
    /// access events, metadata-only changes and editor temp files.
    pub fn add_event(&mut self, event: &notify::Event) -> bool {
        use notify::EventKind;
        use notify::event::ModifyKind;

        match event.kind {
            EventKind::Create(_) | EventKind::Remove(_) => {}
            // mtime/chmod noise
            EventKind::Modify(ModifyKind::Metadata(_)) => return false,
            EventKind::Modify(_) => {}
            _ => return false,
        }

        crate::debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);

        let relevant: Vec<_> = event
            .paths
            .iter()
            .filter(|p| !is_temp_file(p))
            .collect();
        if relevant.is_empty() && !event.paths.is_empty() {
            return false;
        }

        self.changed.extend(relevant.into_iter().cloned());
        self.touch();
        true
    }

    /// Hand out a trigger if the quiet window elapsed and no run is active.
    ///
    /// Returns the changed paths collected since the previous trigger.
    pub fn take_if_ready(&mut self) -> Option<Vec<PathBuf>> {
        let Phase::Pending { deadline } = self.phase else {
            return None;
        };
        if self.running || self.clock.now() < deadline {
            return None;
        }

        self.phase = Phase::Idle;
        self.running = true;

        let mut changed: Vec<_> = self.changed.drain().collect();
        changed.sort();
        Some(changed)
    }

    /// Mark the active run as complete.
    pub fn finish(&mut self) {
        self.running = false;
    }

    /// Time until the next trigger could be handed out.
    pub fn sleep_duration(&self) -> Duration {
        match self.phase {
            Phase::Pending { deadline } if !self.running => deadline
                .saturating_duration_since(self.clock.now())
                .max(Duration::from_millis(1)),
            _ => IDLE_SLEEP,
        }
    }
}

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(is_ignored)
}
