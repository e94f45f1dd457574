use std::io::Write;

use super::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use objstore::object::{FileContentSource, Kind, Object};
use objstore::repo::Repo;

use crate::find_repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute the blob ID of a file and optionally store it")
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object database"),
        )
        .arg(Arg::with_name("file").required(true))
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let file = args.value_of("file").unwrap_or_default();
    let path = app.resolve(file);

    let id = if args.is_present("w") {
        let mut repo = find_repo::from_app(app)?;
        repo.hash_object(&path, true)?
    } else {
        // No repository needed just to compute the ID.
        Object::new(Kind::Blob, Box::new(FileContentSource::new(&path)?))?.id()
    };

    writeln!(app, "{}", id)?;

    Ok(())
}
