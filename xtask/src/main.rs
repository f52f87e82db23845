use std::{
    env,
    path::{Path, PathBuf},
};

use xshell::{Shell, cmd};

xflags::xflags! {
    cmd xtask {
        /// Run the test suite of every crate in the workspace
        cmd test {
            /// Only run tests containing `filter` as substring.
            optional filter: String
            /// Also run the tests in release mode, where postconditions and loop invariants are
            /// not checked by default.
            optional --release
        }
        /// Evaluate one of the example functions, e.g. `cargo xtask run -- div -7 2`
        cmd run {
            /// Function name followed by its integer arguments
            repeated args: String
        }
        /// Show the code generated for the contract attributes of the example functions.
        /// Requires a nightly toolchain.
        cmd expand { }
        /// Build the documentation
        cmd doc {
            optional -o,--open
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cmd = match Xtask::from_env() {
        Ok(cmd) => cmd,
        Err(err) => {
            if err.is_help() {
                std::process::exit(0);
            } else {
                eprintln!("error: {err}\n");
                println!("{}", Xtask::HELP_);
                std::process::exit(2);
            }
        }
    };

    let sh = Shell::new()?;
    sh.change_dir(project_root());
    match cmd.subcommand {
        XtaskCmd::Test(args) => test(&sh, args),
        XtaskCmd::Run(args) => run(&sh, args),
        XtaskCmd::Expand(_) => expand(&sh),
        XtaskCmd::Doc(args) => doc(&sh, args),
    }
}

fn test(sh: &Shell, args: Test) -> anyhow::Result<()> {
    let Test { filter, release } = args;
    let filter = filter.as_slice();
    cmd!(sh, "cargo test --workspace --exclude xtask -- {filter...}").run()?;
    if release {
        cmd!(sh, "cargo test --workspace --exclude xtask --release -- {filter...}").run()?;
    }
    Ok(())
}

fn run(sh: &Shell, args: Run) -> anyhow::Result<()> {
    let Run { args } = args;
    cmd!(sh, "cargo run --quiet -p contracts-bin --bin contracts -- {args...}").run()?;
    Ok(())
}

fn expand(sh: &Shell) -> anyhow::Result<()> {
    cmd!(sh, "cargo +nightly rustc -p contracts-examples --lib --profile=check -- -Zunpretty=expanded")
        .run()?;
    Ok(())
}

fn doc(sh: &Shell, args: Doc) -> anyhow::Result<()> {
    cmd!(sh, "cargo doc --workspace --exclude xtask --no-deps").run()?;
    if args.open {
        opener::open("target/doc/contracts_rs/index.html")?;
    }
    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(
        &env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| env!("CARGO_MANIFEST_DIR").to_owned()),
    )
    .ancestors()
    .nth(1)
    .unwrap()
    .to_path_buf()
}
