use tracing::{info, instrument};

use super::{Error, Repo, Result};

use crate::clock::Clock;
use crate::config::Config;
use crate::object::{Commit, Id, Kind, Object};

/// Assembles commit objects and stores them in a repository.
///
/// The identity, time zone, and clock are fixed when the writer is created.
/// The same attribution (and the same instant) is used for both the author
/// and committer lines.
#[derive(Debug)]
pub struct CommitWriter<C: Clock> {
    config: Config,
    clock: C,
}

impl<C: Clock> CommitWriter<C> {
    pub fn new(config: &Config, clock: C) -> CommitWriter<C> {
        CommitWriter {
            config: config.clone(),
            clock,
        }
    }

    /// Write a commit pointing at `tree_hex` with at most one parent.
    ///
    /// Fails with `InvalidArgument` if either ID is not 40 lowercase hex
    /// digits. Neither the tree nor the parent has to exist in `repo`.
    #[instrument(skip(self, repo, message))]
    pub fn write<R: Repo + ?Sized>(
        &self,
        repo: &mut R,
        tree_hex: &str,
        parent_hex: Option<&str>,
        message: &str,
    ) -> Result<Id> {
        let tree = parse_arg("tree", tree_hex)?;
        let parents = match parent_hex {
            Some(hex) => vec![parse_arg("parent", hex)?],
            None => vec![],
        };

        let attribution = self.config.attribution(self.clock.now())?;
        let commit = Commit::new(tree, parents, attribution.clone(), attribution, message);

        let object = Object::new(Kind::Commit, Box::new(commit.to_payload()))?;
        let id = repo.put_loose_object(&object)?;

        info!(%id, %tree, "wrote commit");
        Ok(id)
    }
}

fn parse_arg(what: &str, hex: &str) -> Result<Id> {
    Id::from_hex(hex).map_err(|e| Error::InvalidArgument(format!("{} `{}`: {}", what, hex, e)))
}
