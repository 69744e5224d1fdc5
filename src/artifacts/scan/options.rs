/// Capacity of the channel probes report through. Draining runs alongside the
/// completion barrier, so this only bounds how far producers can run ahead.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;

/// Per-probe configuration, copied into every probe at launch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Only report directories with uncommitted changes, skipping every
    /// network-dependent step
    pub dirty_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub probe: ProbeOptions,
    pub channel_capacity: usize,
    /// Upper bound on probes running at once; `None` launches all of them together
    pub max_concurrency: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            probe: ProbeOptions::default(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_concurrency: None,
        }
    }
}
