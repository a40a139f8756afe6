// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounded diagnostics log with dedupe, so recoverable failures stay observable.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Mutation asked for a category outside the fixed set.
    InvalidCategory,
    /// Persisted snapshot was discarded on load.
    MalformedSnapshot,
    /// Snapshot could not be read from durable storage.
    PersistenceReadFailure,
    /// Snapshot could not be written; the store is now memory-only.
    PersistenceWriteFailure,
}

/// Identifier for a diagnostic entry.
pub type DiagnosticId = u64;

/// One recorded diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Stable identifier.
    pub id: DiagnosticId,
    /// Category of failure.
    pub kind: DiagnosticKind,
    /// Human-readable detail.
    pub message: String,
    /// Last time this diagnostic was raised.
    pub raised: Instant,
    /// How many times it was raised inside the dedupe window.
    pub count: u32,
}

/// In-memory diagnostics queue with a length cap and dedupe window.
#[derive(Debug)]
pub struct DiagnosticsLog {
    queue: VecDeque<Diagnostic>,
    max: usize,
    dedupe_window: Duration,
    next_id: DiagnosticId,
}

impl DiagnosticsLog {
    /// Create a new log holding at most `max` entries.
    pub fn new(max: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            max: max.max(1),
            dedupe_window: Duration::from_millis(500),
            next_id: 1,
        }
    }

    /// Record a diagnostic, folding it into the latest entry when that one is
    /// identical and was raised within the dedupe window.
    pub fn push<M>(&mut self, kind: DiagnosticKind, message: M, now: Instant) -> DiagnosticId
    where
        M: Into<String>,
    {
        let message = message.into();
        let window = self.dedupe_window;

        if let Some(latest) = self.queue.back_mut().filter(|d| {
            d.kind == kind
                && d.message == message
                && now.saturating_duration_since(d.raised) <= window
        }) {
            latest.raised = now;
            latest.count = latest.count.saturating_add(1);
            return latest.id;
        }

        let id = self.next_id;
        self.next_id += 1;
        if self.queue.len() == self.max {
            self.queue.pop_front();
        }
        self.queue.push_back(Diagnostic {
            id,
            kind,
            message,
            raised: now,
            count: 1,
        });
        id
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.queue.iter()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&Diagnostic> {
        self.queue.back()
    }

    /// Whether any retained entry has the given kind.
    pub fn has(&self, kind: DiagnosticKind) -> bool {
        self.queue.iter().any(|d| d.kind == kind)
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing has been recorded (or everything was drained).
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove and return all entries.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        self.queue.drain(..).collect()
    }
}
