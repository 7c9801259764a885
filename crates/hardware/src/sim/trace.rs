//! Hit/miss trace output.
//!
//! A run can record one line per processed request to a text destination.
//! It provides:
//! 1. **Events:** [`TraceEvent`], whose `Display` form is the on-disk line format.
//! 2. **Sinks:** The [`TraceSink`] trait, a no-op [`NullSink`] and the
//!    line-oriented [`TextSink`].
//! 3. **Opening:** [`open`], which picks a sink from an optional path.
//!
//! A file sink is released when it is dropped, so every exit path of a run
//! closes it exactly once.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::common::{PhysAddr, SimError, VirtAddr};

/// Outcome of one processed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// The TLB held the translation.
    Hit {
        /// Requested virtual address.
        vaddr: VirtAddr,
        /// Physical address resolved from the TLB entry.
        paddr: PhysAddr,
    },
    /// The TLB missed and the address was translated by formula.
    Miss {
        /// Requested virtual address.
        vaddr: VirtAddr,
        /// Translated physical address, now installed in the TLB.
        paddr: PhysAddr,
    },
}

impl TraceEvent {
    /// Returns true for hits.
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// Virtual address of the request.
    pub const fn vaddr(&self) -> VirtAddr {
        match self {
            Self::Hit { vaddr, .. } | Self::Miss { vaddr, .. } => *vaddr,
        }
    }

    /// Resolved (hit) or translated (miss) physical address.
    pub const fn paddr(&self) -> PhysAddr {
        match self {
            Self::Hit { paddr, .. } | Self::Miss { paddr, .. } => *paddr,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit { vaddr, paddr } => {
                write!(f, "Hit: Virtual Address {vaddr}, Physical Address {paddr}")
            }
            Self::Miss { vaddr, paddr } => write!(
                f,
                "Miss: Virtual Address {vaddr}, Translated Physical Address {paddr}"
            ),
        }
    }
}

/// Write-only destination for trace events.
pub trait TraceSink {
    /// Appends one event.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the record could not be written.
    fn record(&mut self, event: &TraceEvent) -> io::Result<()>;
}

/// Sink used when no trace path is configured; discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _event: &TraceEvent) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one line per event and flushes after each record.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    /// Wraps any writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextSink<BufWriter<File>> {
    /// Creates (or truncates) the trace file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TraceOpen`] if the file cannot be opened for writing.
    pub fn create(path: &Path) -> Result<Self, SimError> {
        let file = File::create(path).map_err(|source| SimError::TraceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TraceSink for TextSink<W> {
    fn record(&mut self, event: &TraceEvent) -> io::Result<()> {
        writeln!(self.out, "{event}")?;
        self.out.flush()
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn record(&mut self, event: &TraceEvent) -> io::Result<()> {
        (**self).record(event)
    }
}

impl<T: TraceSink + ?Sized> TraceSink for Box<T> {
    fn record(&mut self, event: &TraceEvent) -> io::Result<()> {
        (**self).record(event)
    }
}

/// Opens the sink for a run: a [`TextSink`] over `path` if one is given,
/// otherwise a [`NullSink`].
///
/// # Errors
///
/// Returns [`SimError::TraceOpen`] if the file cannot be created.
pub fn open(path: Option<&Path>) -> Result<Box<dyn TraceSink>, SimError> {
    match path {
        Some(path) => {
            let sink = TextSink::create(path)?;
            tracing::info!(path = %path.display(), "trace file opened");
            Ok(Box::new(sink))
        }
        None => Ok(Box::new(NullSink)),
    }
}
