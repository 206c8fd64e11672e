//! Cooperative pairing scheduler.
//!
//! [`PairingJob`] is a resumable unit of work: each [`PairingJob::step`]
//! processes one chunk of term pairs (bounded by a pair count and a
//! wall-clock budget) and hands control back. Any host can drain it;
//! [`drive`] does so on tokio, yielding to the runtime between chunks.

use crate::core::config::SchedulerConfig;
use crate::core::pairing::generator::{priority, PairingGenerator, PairingOutcome, TermPair};
use crate::core::pairing::records::TermRecords;
use crate::core::pairing::token::RequestToken;
use crate::core::types::{Progress, VersePairing};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Chunk bounds for one job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPolicy {
    pub chunk_size: usize,
    pub yield_budget: Duration,
}

impl From<&SchedulerConfig> for ChunkPolicy {
    fn from(config: &SchedulerConfig) -> Self {
        Self {
            chunk_size: config.chunk_size.max(1),
            yield_budget: config.yield_budget(),
        }
    }
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        Self::from(&SchedulerConfig::default())
    }
}

/// What one step of a job produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A chunk finished and work remains
    Yielded(Progress),
    /// All pairs processed, or a cap ended the run
    Finished(Progress),
    /// The request token went stale; the job stopped without finishing
    Superseded,
}

/// Sort term pairs by descending priority, keeping input order among ties
pub fn prioritize(pairs: &mut [TermPair], records: &TermRecords) {
    pairs.sort_by_cached_key(|pair| {
        let n1 = records.verses(&pair.term1).len();
        let n2 = records.verses(&pair.term2).len();
        std::cmp::Reverse(priority(n1, n2))
    });
}

/// A prioritized, resumable pairing run
#[derive(Debug)]
pub struct PairingJob {
    generator: PairingGenerator,
    records: Arc<TermRecords>,
    queue: Vec<TermPair>,
    next: usize,
    pairings: Vec<VersePairing>,
    truncated: bool,
    superseded: bool,
    finished: bool,
    policy: ChunkPolicy,
    token: RequestToken,
}

impl PairingJob {
    /// Create a job; `pairs` are reordered by priority here
    pub fn new(
        generator: PairingGenerator,
        mut pairs: Vec<TermPair>,
        records: Arc<TermRecords>,
        policy: ChunkPolicy,
        token: RequestToken,
    ) -> Self {
        prioritize(&mut pairs, &records);
        Self {
            generator,
            records,
            queue: pairs,
            next: 0,
            pairings: Vec::new(),
            truncated: false,
            superseded: false,
            finished: false,
            policy,
            token,
        }
    }

    /// Term pairs in processing order
    pub fn queue(&self) -> &[TermPair] {
        &self.queue
    }

    pub fn records(&self) -> &Arc<TermRecords> {
        &self.records
    }

    pub fn progress(&self) -> Progress {
        Progress {
            processed: self.next,
            total: self.queue.len(),
            pairings: self.pairings.len(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.finished || self.superseded
    }

    /// Process one chunk.
    ///
    /// The token is checked before any work; a stale token ends the job
    /// as [`Step::Superseded`]. At least one term pair is processed per
    /// call so a zero budget still makes progress.
    pub fn step(&mut self) -> Step {
        if self.superseded {
            return Step::Superseded;
        }
        if self.finished {
            return Step::Finished(self.progress());
        }
        if !self.token.is_current() {
            tracing::debug!(
                "Pairing request {} superseded at {}/{}",
                self.token.id(),
                self.next,
                self.queue.len()
            );
            self.superseded = true;
            return Step::Superseded;
        }

        let limits = *self.generator.limits();
        let started = Instant::now();
        let mut done_in_chunk = 0;
        let mut cut_short = false;

        while self.next < self.queue.len() {
            let remaining = limits
                .max_total_pairings
                .saturating_sub(self.pairings.len());

            let pair = &self.queue[self.next];
            let (found, capped) = self.generator.pairings_for(pair, &self.records, remaining);
            if capped {
                tracing::debug!("Pair {} hit its cap", pair.label());
            }
            self.truncated |= capped;
            self.pairings.extend(found);
            self.next += 1;
            done_in_chunk += 1;

            // A pairing cut at the global cap ends the whole run
            if capped && self.pairings.len() >= limits.max_total_pairings {
                cut_short = true;
                break;
            }
            if done_in_chunk >= self.policy.chunk_size
                || started.elapsed() >= self.policy.yield_budget
            {
                break;
            }
        }

        if self.next >= self.queue.len() || cut_short {
            self.finished = true;
            if self.truncated {
                tracing::warn!(
                    "Pairing truncated at {} pairings ({}/{} term pairs processed)",
                    self.pairings.len(),
                    self.next,
                    self.queue.len()
                );
            }
            return Step::Finished(self.progress());
        }

        tracing::debug!(
            "Pairing chunk: {}/{} term pairs, {} pairings",
            self.next,
            self.queue.len(),
            self.pairings.len()
        );
        Step::Yielded(self.progress())
    }

    /// Consume the job, returning whatever was collected
    pub fn into_outcome(self) -> PairingOutcome {
        let progress = self.progress();
        PairingOutcome {
            pairings: self.pairings,
            truncated: self.truncated,
            superseded: self.superseded,
            progress,
        }
    }
}

/// Drain a job to completion on the tokio runtime
pub async fn drive(job: PairingJob) -> PairingOutcome {
    drive_with_progress(job, |_| {}).await
}

/// Drain a job, reporting progress after every chunk and yielding in between
pub async fn drive_with_progress<F>(mut job: PairingJob, mut on_progress: F) -> PairingOutcome
where
    F: FnMut(Progress),
{
    loop {
        match job.step() {
            Step::Yielded(progress) => {
                on_progress(progress);
                tokio::task::yield_now().await;
            }
            Step::Finished(progress) => {
                on_progress(progress);
                break;
            }
            Step::Superseded => break,
        }
    }
    job.into_outcome()
}
