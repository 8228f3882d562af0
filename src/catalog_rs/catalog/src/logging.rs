/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Log output for the catalog.
//!
//! The catalog emits events through [`tracing`]. Which of them are shown is
//! controlled by the `RUST_LOG` environment variable, using the
//! [`EnvFilter`] directive syntax (for example `RUST_LOG=catalog=debug`).
//! Without `RUST_LOG`, events at `info` and above are shown.

use std::error::Error;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Installs a global subscriber that writes catalog events to stderr.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init() {
    try_init().expect("Unable to install global tracing subscriber")
}

/// Installs a global subscriber that writes catalog events to stderr, if
/// one is not already set.
///
/// # Errors
///
/// Returns an Error if the initialization was unsuccessful, likely because
/// a global subscriber was already installed by another call to `try_init`.
pub fn try_init() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
}
