use std::io::Write;

use super::{App, Result};

use clap::{ArgMatches, SubCommand};
use objstore::repo::TreeBuilder;

use crate::find_repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("write-tree")
        .about("Store the working directory as a tree and print its ID")
}

pub(crate) fn run(app: &mut App, _args: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_app(app)?;
    let work_dir = repo.work_dir().to_path_buf();

    let id = TreeBuilder::new(repo.config().tree.symlinks).build(&mut repo, &work_dir)?;

    writeln!(app, "{}", id)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::cmds::test_support::{run, temp_repo, write_file};

    #[test]
    fn empty() {
        let (_temp, dir) = temp_repo();

        assert_eq!(
            run(&["-C", &dir, "write-tree"]),
            "4b825dc642cb6eb9a060e54bf8d69288fbee4904\n"
        );
    }

    #[test]
    fn single_file() {
        let (temp, dir) = temp_repo();
        write_file(temp.path(), "hello.txt", "world");

        assert_eq!(
            run(&["-C", &dir, "write-tree"]),
            "324ec1ee6443d763cf4540e8b6d6fa6ec541b1c7\n"
        );
        assert_eq!(
            run(&["-C", &dir, "cat-file", "-p", "04fea06420ca60892f73becee3614f6d023a4b7f"]),
            "world"
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlink_policy_from_config() {
        let (temp, dir) = temp_repo();
        write_file(temp.path(), "target", "world");
        std::os::unix::fs::symlink("target", temp.path().join("link")).unwrap();

        let followed = run(&["-C", &dir, "write-tree"]);
        let followed = followed.trim_end();
        assert!(run(&["-C", &dir, "ls-tree", followed]).starts_with("100644 blob "));

        fs::write(
            temp.path().join(".git/config.toml"),
            "[tree]\nsymlinks = \"record\"\n",
        )
        .unwrap();

        let recorded = run(&["-C", &dir, "write-tree"]);
        let recorded = recorded.trim_end();
        assert!(run(&["-C", &dir, "ls-tree", recorded]).starts_with("120000 blob "));
    }
}
