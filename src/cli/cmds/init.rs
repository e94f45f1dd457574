use std::io::Write;

use super::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use objstore::repo::on_disk::{InitOutcome, OnDisk};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty repository")
        .arg(
            Arg::with_name("directory")
                .help("The directory to create (default: the current directory)"),
        )
}

pub(crate) fn run(app: &mut App, init_matches: &ArgMatches) -> Result<()> {
    let path = match init_matches.value_of("directory") {
        Some(dir) => app.resolve(dir),
        None => app.base_dir(),
    };

    let (_, outcome) = OnDisk::init(&path)?;

    let verb = match outcome {
        InitOutcome::Created => "Initialized empty",
        InitOutcome::AlreadyInitialized => "Reinitialized existing",
    };

    writeln!(app, "{} repository in {}", verb, path.display())?;

    Ok(())
}
