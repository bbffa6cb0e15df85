// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

pub mod mem_watcher;
pub mod options;

/// Environment variable holding the `env_logger` filter of the fixtures.
pub const FIXTURE_LOG: &str = "FIXTURE_LOG";

/// Initializes the logger if `FIXTURE_LOG` is set. Otherwise nothing is ever
/// written to standard error.
///
/// `FIXTURE_LOG` and `FIXTURE_LOG_STYLE` are the only environment variables
/// the fixtures read; a caller expecting an empty stderr must leave
/// `FIXTURE_LOG` unset.
pub fn init_logger() {
    if std::env::var(FIXTURE_LOG).is_ok() {
        let e = env_logger::Env::new()
            .filter(FIXTURE_LOG)
            .write_style("FIXTURE_LOG_STYLE");
        // A second initialization in the same process is ignored.
        let _ = env_logger::try_init_from_env(e);
    }
}
