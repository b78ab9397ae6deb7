//! Headless helpers for driving a [`Gui`](crate::Gui) without a renderer.
//!
//! These are compiled into the library so integration tests and host test
//! suites can use them.

/// Recording graphics backend.
pub mod graphics;
/// Test harness wrapping a `Gui`.
pub mod harness;
/// Recording listener.
pub mod listener;
/// Hook-recording widget.
pub mod probe;

use tracing::Level;

pub use graphics::{DrawOp, RecordingGraphics};
pub use harness::Harness;
pub use listener::{Recorded, RecordingListener};
pub use probe::{Log, Probe};

/// Install a `tracing` subscriber that writes through the test harness's
/// captured output. Safe to call from every test.
pub fn init_tracing() {
    // A subscriber may already be installed by an earlier test.
    tracing_subscriber::fmt()
        .with_test_writer()
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::TRACE)
        .try_init()
        .ok();
}
