// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! Fixture options.

use clap::{Arg, Command};

/// Which fixture the options are parsed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureKind {
    Class,
    Indirect,
}

impl FixtureKind {
    fn name(self) -> &'static str {
        match self {
            FixtureKind::Class => "cpplang",
            FixtureKind::Indirect => "indirect",
        }
    }
}

/// Creates the clap::Command metadata for argument parsing.
fn make_options_parser(kind: FixtureKind) -> Command<'static> {
    let parser = Command::new(kind.name())
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"));
    match kind {
        FixtureKind::Class => parser
            .about("Constructs an A, calls A::f and f(5), then destroys the A."),
        FixtureKind::Indirect => parser
            .about("Calls a or b through a function pointer table, then calls c.")
            .arg(Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(i64))
                .help("Seed the generator with this value instead of the current time.")),
    }
}

#[derive(Clone, Debug, Default)]
pub struct FixtureOptions {
    /// Forced seed. When absent the wall clock is used.
    pub seed: Option<i64>,
}

impl FixtureOptions {
    /// Parses options from a list of strings, excluding the binary name.
    pub fn try_parse_from_args(&mut self, kind: FixtureKind, args: &[String]) -> Result<(), clap::Error> {
        let matches = make_options_parser(kind).try_get_matches_from(args.iter())?;
        if kind == FixtureKind::Indirect {
            self.seed = matches.get_one::<i64>("seed").copied();
        }
        Ok(())
    }

    /// Like [`FixtureOptions::try_parse_from_args`], but prints the help, the version
    /// or the usage error and exits the process when parsing does not yield options.
    pub fn parse_from_args(&mut self, kind: FixtureKind, args: &[String]) {
        if let Err(e) = self.try_parse_from_args(kind, args) {
            e.exit();
        }
    }
}
