//! Service context bundling all port trait objects.

use chrono::{DateTime, Utc};

use crate::adapters::live::{LiveClock, LiveFileSystem, LiveIdGenerator};
use crate::adapters::memory::{FixedClock, MemoryFileSystem, SequenceIdGenerator};
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Commands receive
/// the context by reference and never reach into ambient global state.
pub struct AppContext {
    /// Clock for stamping generation passes.
    pub clock: Box<dyn Clock>,
    /// Filesystem for manifest and artifact I/O.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for pass identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl AppContext {
    /// Creates a live context with real adapters for all ports.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Creates a deterministic in-memory context for tests.
    ///
    /// The filesystem starts empty, the clock is pinned to `now`, and pass
    /// IDs come out as `pass-1`, `pass-2`, ...
    #[must_use]
    pub fn in_memory(now: DateTime<Utc>) -> Self {
        Self {
            clock: Box::new(FixedClock::new(now)),
            fs: Box::new(MemoryFileSystem::new()),
            id_gen: Box::new(SequenceIdGenerator::default()),
        }
    }
}
