//! Scan coordinator
//!
//! Fans out one status probe per directory and fans their entries back in.
//!
//! Probes report through a bounded channel while the coordinator waits on the
//! completion of every probe. Draining the channel and waiting for completion
//! run side by side, so a probe blocked on a full channel is always unblocked
//! by the drain and the capacity never has to cover the directory count.
//!
//! A fatal probe error aborts the remaining probes; dropping an aborted probe
//! also drops its git child process.

use crate::areas::git::GitRunner;
use crate::artifacts::entry::entry::Entry;
use crate::artifacts::scan::options::ScanOptions;
use crate::artifacts::scan::probe::{ProbeTarget, StatusMarkers, StatusProbe};
use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::debug;

pub struct ScanCoordinator<R: GitRunner> {
    runner: Arc<R>,
    markers: Arc<StatusMarkers>,
    limiter: Option<Arc<Semaphore>>,
    options: ScanOptions,
}

impl<R: GitRunner> ScanCoordinator<R> {
    pub fn new(runner: Arc<R>, options: ScanOptions) -> anyhow::Result<Self> {
        let limiter = match options.max_concurrency {
            Some(0) => anyhow::bail!("At least one probe must be allowed to run"),
            Some(limit) => Some(Arc::new(Semaphore::new(limit))),
            None => None,
        };

        Ok(ScanCoordinator {
            runner,
            markers: Arc::new(StatusMarkers::new()?),
            limiter,
            options,
        })
    }

    /// Probe every target and return the reported entries in submission order.
    ///
    /// Directories dropped in dirty-only mode are absent from the result.
    pub async fn scan(&self, targets: Vec<ProbeTarget>) -> anyhow::Result<Vec<Entry>> {
        let started = Instant::now();
        let (sender, mut receiver) =
            mpsc::channel::<(usize, Entry)>(self.options.channel_capacity.max(1));
        let mut probes = JoinSet::new();

        for (slot, target) in targets.into_iter().enumerate() {
            let sender = sender.clone();
            let runner = Arc::clone(&self.runner);
            let markers = Arc::clone(&self.markers);
            let limiter = self.limiter.clone();
            let options = self.options.probe;

            debug!(name = %target.name, "starting probe");
            probes.spawn(async move {
                let _permit = match limiter {
                    Some(limiter) => Some(limiter.acquire_owned().await?),
                    None => None,
                };

                let name = target.name.clone();
                let probe = StatusProbe::new(runner.as_ref(), markers.as_ref(), options);
                if let Some(entry) = probe.run(target).await? {
                    sender
                        .send((slot, entry))
                        .await
                        .map_err(|_| anyhow::anyhow!("Scan stopped before {} reported", name))?;
                }

                Ok::<(), anyhow::Error>(())
            });
        }
        // only the probes hold senders now, the drain ends once they all finish
        drop(sender);

        let launched = probes.len();
        debug!(launched, "all probes started");

        let drain = async {
            let mut reported = Vec::with_capacity(launched);
            while let Some(report) = receiver.recv().await {
                reported.push(report);
            }
            reported
        };
        let barrier = async {
            while let Some(joined) = probes.join_next().await {
                let outcome = joined
                    .context("Status probe panicked")
                    .and_then(|outcome| outcome);
                if let Err(e) = outcome {
                    probes.abort_all();
                    return Err(e);
                }
            }
            Ok(())
        };

        let (mut reported, completed) = tokio::join!(drain, barrier);
        completed?;

        debug!(
            launched,
            reported = reported.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "all probes finished"
        );

        reported.sort_by_key(|(slot, _)| *slot);
        Ok(reported.into_iter().map(|(_, entry)| entry).collect())
    }
}
