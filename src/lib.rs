// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! Small fixture programs for call graph and pointer analysis tools.
//!
//! Each fixture lives in its own module and writes to a caller supplied sink,
//! the binaries under `src/bin` wire them to standard output.

pub mod class;
pub mod indirect;
pub mod util;
