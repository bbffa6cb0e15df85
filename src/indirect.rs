// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! A fixture of indirect calls through a function pointer table.
//!
//! One of `a` or `b` is picked from the table by the low bit of the first
//! pseudo-random draw, `c` is then called directly and a 100 byte region
//! is acquired and released. The output is either `a\nc\n` or `b\nc\n`.

use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::alloc::{self, Layout};
use std::io::{self, Write};
use std::ptr::NonNull;
use std::time::{Duration, SystemTime};

/// The signature shared by every routine of the fixture.
pub type Routine = fn(&mut dyn Write) -> io::Result<()>;

/// Size of the region acquired and released at the end of a run.
pub const SCRATCH_SIZE: usize = 100;

pub fn a(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "a")
}

pub fn b(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "b")
}

/// Called directly, never through the table.
pub fn c(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "c")
}

/// Returns the dispatch table in declaration order.
pub fn funcs() -> [Routine; 2] {
    [a, b]
}

/// Returns the current time in whole seconds since the Unix epoch,
/// or `-1` if the clock cannot be read.
pub fn wall_clock_seed() -> i64 {
    // SAFETY: `time` accepts a null output pointer.
    let now = unsafe { libc::time(std::ptr::null_mut()) };
    i64::from(now)
}

/// Creates the generator for `seed`. Negative seeds are reinterpreted bitwise.
fn seeded(seed: i64) -> StdRng {
    StdRng::seed_from_u64(seed as u64)
}

/// Reduces a draw to an index into the table.
fn table_index(draw: u32) -> usize {
    (draw % 2) as usize
}

/// Returns the table index a run seeded with `seed` takes.
pub fn first_index(seed: i64) -> usize {
    table_index(seeded(seed).next_u32())
}

/// Runs the fixture against `out` and returns the table index that was taken.
pub fn run(out: &mut dyn Write, seed: i64) -> io::Result<usize> {
    let funcs = funcs();

    log_seed(seed);
    let mut rng = seeded(seed);
    let index = table_index(rng.next_u32());
    debug!("Dispatching through funcs[{index}]");

    funcs[index](out)?;
    c(out)?;
    Region::acquire(SCRATCH_SIZE).release();
    Ok(index)
}

fn log_seed(seed: i64) {
    match u64::try_from(seed) {
        Ok(secs) => {
            let at = SystemTime::UNIX_EPOCH.checked_add(Duration::from_secs(secs));
            match at {
                Some(at) => debug!("Seed: {seed} ({})", humantime::format_rfc3339_seconds(at)),
                None => debug!("Seed: {seed}"),
            }
        }
        Err(_) => debug!("Seed: {seed} (clock unavailable or forced)"),
    }
}

/// A raw heap region that is never read or written.
///
/// A failed acquisition yields an empty region; releasing it does nothing.
#[derive(Debug)]
pub struct Region {
    ptr: Option<NonNull<u8>>,
    layout: Option<Layout>,
}

impl Region {
    pub fn acquire(size: usize) -> Self {
        let layout = match Layout::array::<u8>(size) {
            Ok(layout) if layout.size() > 0 => layout,
            _ => return Region { ptr: None, layout: None },
        };
        // SAFETY: `layout` has a non-zero size.
        let ptr = NonNull::new(unsafe { alloc::alloc(layout) });
        Region { ptr, layout: Some(layout) }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    pub fn release(mut self) {
        self.free();
    }

    fn free(&mut self) {
        if let (Some(ptr), Some(layout)) = (self.ptr.take(), self.layout) {
            // SAFETY: `ptr` was returned by `alloc` with this same `layout` and is freed once.
            unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
        }
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        self.free();
    }
}
