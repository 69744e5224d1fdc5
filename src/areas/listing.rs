use crate::areas::git::GitRunner;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;

/// A listing of one root directory
///
/// Owns everything a listing command needs: the root, the workspace to
/// enumerate, the git runner probes go through and the writer output goes to.
pub struct Listing<R: GitRunner> {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    runner: Arc<R>,
}

impl<R: GitRunner> Listing<R> {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>, runner: R) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Cannot list {}", path.display()))?;

        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Listing {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
            runner: Arc::new(runner),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn runner(&self) -> Arc<R> {
        Arc::clone(&self.runner)
    }
}
