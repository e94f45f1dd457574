use std::io::Write;

use super::{App, Result};

use clap::{Arg, ArgGroup, ArgMatches, SubCommand};
use objstore::object::{Id, Kind, Tree};
use objstore::repo::{Error, Repo};

use crate::find_repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Provide content, type, or size of a stored object")
        .arg(
            Arg::with_name("p")
                .short("p")
                .help("Pretty-print the object's content"),
        )
        .arg(Arg::with_name("t").short("t").help("Show the object's type"))
        .arg(Arg::with_name("s").short("s").help("Show the object's size"))
        .group(ArgGroup::with_name("mode").args(&["p", "t", "s"]).required(true))
        .arg(Arg::with_name("object").required(true))
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let id: Id = args
        .value_of("object")
        .unwrap_or_default()
        .parse()
        .map_err(Error::from)?;

    let repo = find_repo::from_app(app)?;
    let (kind, payload) = repo.read_object(&id)?;

    if args.is_present("t") {
        writeln!(app, "{}", kind)?;
    } else if args.is_present("s") {
        writeln!(app, "{}", payload.len())?;
    } else if kind == Kind::Tree {
        for entry in Tree::parse(&payload)?.entries() {
            writeln!(app, "{}", entry)?;
        }
    } else {
        app.write_all(&payload)?;
    }

    Ok(())
}
