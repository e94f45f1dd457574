use std::io::Write;

use super::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use objstore::clock::SystemClock;
use objstore::repo::CommitWriter;

use crate::find_repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("commit-tree")
        .about("Create a new commit object")
        .arg(Arg::with_name("tree").required(true))
        .arg(
            Arg::with_name("p")
                .short("p")
                .value_name("parent")
                .takes_value(true)
                .help("ID of the parent commit"),
        )
        .arg(
            Arg::with_name("m")
                .short("m")
                .value_name("message")
                .takes_value(true)
                .required(true)
                .help("Commit message"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_app(app)?;

    let tree = args.value_of("tree").unwrap_or_default();
    let message = args.value_of("m").unwrap_or_default();

    let writer = CommitWriter::new(repo.config(), SystemClock);
    let id = writer.write(&mut repo, tree, args.value_of("p"), message)?;

    writeln!(app, "{}", id)?;

    Ok(())
}
