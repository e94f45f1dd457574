use std::io::Write;

use super::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use objstore::object::Id;
use objstore::repo::{Error, Repo};

use crate::find_repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("ls-tree")
        .about("List the contents of a tree object")
        .arg(
            Arg::with_name("name-only")
                .long("name-only")
                .help("List only entry names"),
        )
        .arg(Arg::with_name("tree").required(true))
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let id: Id = args
        .value_of("tree")
        .unwrap_or_default()
        .parse()
        .map_err(Error::from)?;

    let repo = find_repo::from_app(app)?;

    if args.is_present("name-only") {
        for name in repo.list_tree_names(&id)? {
            writeln!(app, "{}", name)?;
        }
    } else {
        for entry in repo.read_tree(&id)?.entries() {
            writeln!(app, "{}", entry)?;
        }
    }

    Ok(())
}
