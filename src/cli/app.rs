#![deny(warnings)]

use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(test)]
use std::ffi::OsString;

use crate::{cmds, Result};

use clap::{crate_version, AppSettings, Arg, ArgMatches};

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    let app = clap::App::new("objstore")
        .version(crate_version!())
        .about("A minimal content-addressable object store")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("C")
                .short("C")
                .value_name("dir")
                .takes_value(true)
                .help("Run as if started in <dir>"),
        );

    cmds::add_subcommands(app)
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdout: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn run(&mut self) -> Result<()> {
        cmds::dispatch(self)
    }

    /// Directory that relative paths are resolved against (`-C`, or the current directory).
    pub fn base_dir(&self) -> PathBuf {
        match self.arg_matches.value_of("C") {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from("."),
        }
    }

    /// Resolve a path given on the command line against `base_dir`.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.base_dir().join(path)
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("objstore"));

        let mut stdout = Vec::new();

        App {
            arg_matches: clap_app().get_matches_from_safe(args)?,
            stdout: &mut stdout,
        }
        .run()?;

        Ok(stdout)
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn no_subcommand_prints_help() {
        let mut cmd = Command::cargo_bin("objstore").unwrap();
        cmd.assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::starts_with("objstore 0."))
            .stderr(predicate::str::contains("USAGE:"));
    }

    #[test]
    fn version() {
        let mut cmd = Command::cargo_bin("objstore").unwrap();
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("objstore 0."))
            .stderr("");
    }

    #[test]
    fn errors_are_reported() {
        let temp = tempfile::tempdir().unwrap();

        let mut cmd = Command::cargo_bin("objstore").unwrap();
        cmd.arg("-C")
            .arg(temp.path())
            .arg("write-tree")
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::starts_with("ERROR: not a repository"));
    }
}
