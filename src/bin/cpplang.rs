// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! The class fixture: prints `A::A`, `A::f`, `5` and `A::~A`.

use anyhow::Context;
use log::*;
use std::cell::RefCell;
use std::env;
use std::io::{self, Write};

use pta_fixtures::class;
use pta_fixtures::util;
use pta_fixtures::util::options::{FixtureKind, FixtureOptions};

fn main() -> anyhow::Result<()> {
    util::init_logger();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let mut options = FixtureOptions::default();
    options.parse_from_args(FixtureKind::Class, &args);
    info!("Fixture Options: {:?}", options);

    let out = RefCell::new(io::stdout().lock());
    class::run(&out).context("failed to write the class fixture output")?;
    out.into_inner().flush().context("failed to flush standard output")?;
    Ok(())
}
