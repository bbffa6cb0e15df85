// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! The indirect call fixture: prints `a` or `b` through a function pointer
//! table chosen by a clock seeded generator, then `c`.

use anyhow::Context;
use log::*;
use std::env;
use std::io::{self, Write};

use pta_fixtures::indirect;
use pta_fixtures::util;
use pta_fixtures::util::options::{FixtureKind, FixtureOptions};

fn main() -> anyhow::Result<()> {
    util::init_logger();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let mut options = FixtureOptions::default();
    options.parse_from_args(FixtureKind::Indirect, &args);
    info!("Fixture Options: {:?}", options);

    let seed = options.seed.unwrap_or_else(indirect::wall_clock_seed);
    let mut out = io::stdout().lock();
    let index = indirect::run(&mut out, seed).context("failed to write the indirect fixture output")?;
    debug!("Took funcs[{index}]");
    out.flush().context("failed to flush standard output")?;
    Ok(())
}
