// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! A fixture of class construction, a member call, a free call and scoped destruction.
//!
//! Running [`run`] writes exactly `A::A\nA::f\n5A::~A\n` to the sink.

use log::{debug, error};
use std::cell::RefCell;
use std::io::{self, Write};

/// A type with observable construction and destruction.
///
/// `A` owns no data of its own, it only borrows the sink it reports to.
pub struct A<'o, W: Write> {
    out: &'o RefCell<W>,
}

impl<'o, W: Write> A<'o, W> {
    pub fn new(out: &'o RefCell<W>) -> io::Result<Self> {
        writeln!(out.borrow_mut(), "A::A")?;
        Ok(A { out })
    }

    /// Member `f`, unrelated to the free function [`f`].
    pub fn f(&self) -> io::Result<()> {
        writeln!(self.out.borrow_mut(), "A::f")
    }
}

impl<W: Write> Drop for A<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "A::~A") {
            error!("Unable to report the destruction of A: {e}");
        }
    }
}

/// Free `f`, prints `i` with no trailing newline.
pub fn f<W: Write>(out: &RefCell<W>, i: i32) -> io::Result<()> {
    write!(out.borrow_mut(), "{i}")
}

/// The entry routine of the fixture. `a1` is destroyed when this returns.
pub fn run<W: Write>(out: &RefCell<W>) -> io::Result<()> {
    let a1 = A::new(out)?;
    a1.f()?;
    f(out, 5)?;
    debug!("Leaving the scope of a1");
    Ok(())
}
