use crate::areas::git::GitRunner;
use crate::areas::listing::Listing;
use crate::artifacts::entry::entry::{Entry, EntryKind};
use crate::artifacts::entry::sort::sort_entries;
use crate::artifacts::layout::terminal::DEFAULT_TERMINAL_WIDTH;
use crate::artifacts::scan::coordinator::ScanCoordinator;
use crate::artifacts::scan::options::ScanOptions;
use crate::artifacts::scan::probe::ProbeTarget;
use crate::{DisplayMode, SortOrder};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub include_hidden: bool,
    pub display: DisplayMode,
    pub sort: SortOrder,
    pub scan: ScanOptions,
    pub width: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            include_hidden: false,
            display: DisplayMode::Grid,
            sort: SortOrder::Name,
            scan: ScanOptions::default(),
            width: DEFAULT_TERMINAL_WIDTH,
        }
    }
}

impl<R: GitRunner> Listing<R> {
    pub async fn list(&self, opts: &ListOptions) -> anyhow::Result<()> {
        let entries = self.collect_entries(opts).await?;

        match opts.display {
            DisplayMode::Grid => self.show_grid(&entries, opts.width)?,
            DisplayMode::Detail => self.show_detail(&entries)?,
        }

        self.writer().flush()?;
        Ok(())
    }

    /// Enumerate the root, probe its directories and return the sorted entries
    pub async fn collect_entries(&self, opts: &ListOptions) -> anyhow::Result<Vec<Entry>> {
        let (directories, files): (Vec<_>, Vec<_>) = self
            .workspace()
            .list_dir(opts.include_hidden)?
            .into_iter()
            .partition(|child| child.kind == EntryKind::Directory);
        debug!(
            root = %self.path().display(),
            directories = directories.len(),
            files = files.len(),
            "enumerated"
        );

        let mut entries = if opts.scan.probe.dirty_only {
            Vec::new()
        } else {
            files
                .into_iter()
                .map(|file| Entry::file(file.name, file.metadata))
                .collect::<Vec<_>>()
        };

        let coordinator = ScanCoordinator::new(self.runner(), opts.scan)?;
        let targets = directories.into_iter().map(ProbeTarget::from).collect();
        entries.extend(coordinator.scan(targets).await?);

        sort_entries(&mut entries, opts.sort);
        Ok(entries)
    }
}
