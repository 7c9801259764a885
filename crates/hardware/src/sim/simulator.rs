//! Simulator: owns the TLB and the per-run counters side-by-side.
//!
//! Requests are resolved strictly one at a time. Each one is looked up,
//! charged its latency against the cycle budget, optionally traced, and on a
//! miss translated and installed. "Waiting N cycles" is just adding N to the
//! counter; there is no clock or event queue.

use tracing::{debug, info, warn};

use crate::common::{MemoryRequest, SimError};
use crate::config::SimulationConfig;
use crate::cost;
use crate::mmu::{self, tlb::Tlb};
use crate::sim::trace::{self, TraceEvent, TraceSink};
use crate::stats::{INCOMPLETE_CYCLES, SimulationResult};

/// Drives one run of a request trace against a fresh TLB.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    tlb: Tlb,
    cycles: u64,
    hits: usize,
    misses: usize,
}

impl Simulator {
    /// Validates `config` and builds an empty TLB for it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the configuration is rejected.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimError> {
        let geometry = config.validate()?;
        debug!(
            offset_bits = geometry.offset_bits,
            index_bits = geometry.index_bits,
            tag_bits = geometry.tag_bits,
            "TLB geometry"
        );
        Ok(Self {
            config: config.clone(),
            tlb: Tlb::with_geometry(geometry),
            cycles: 0,
            hits: 0,
            misses: 0,
        })
    }

    /// Configuration this simulator was built from.
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The TLB in its current state.
    pub const fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    /// Cycles consumed so far.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Hits so far.
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Misses so far.
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Requests processed so far.
    pub const fn processed(&self) -> usize {
        self.hits + self.misses
    }

    /// Processes one request.
    ///
    /// The request is only taken if its whole latency fits in what is left of
    /// the cycle budget; the lookup used to price it does not touch the TLB.
    ///
    /// # Returns
    ///
    /// `Some(event)` describing the hit or miss, or `None` if the budget
    /// cannot cover the request. In that case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TraceWrite`] if the sink rejects the record.
    pub fn step<S>(
        &mut self,
        req: &MemoryRequest,
        sink: &mut S,
    ) -> Result<Option<TraceEvent>, SimError>
    where
        S: TraceSink + ?Sized,
    {
        let vaddr = req.addr;
        let hit = self.tlb.lookup(vaddr);

        let tlb_latency = u64::from(self.config.tlb_latency);
        let latency = match hit {
            Some(_) => tlb_latency,
            None => tlb_latency + u64::from(self.config.memory_latency),
        };
        if self.cycles.saturating_add(latency) > self.config.cycles {
            return Ok(None);
        }
        self.cycles += latency;

        let event = match hit {
            Some(paddr) => {
                self.hits += 1;
                TraceEvent::Hit { vaddr, paddr }
            }
            None => {
                self.misses += 1;
                let paddr = mmu::translate(
                    vaddr,
                    self.config.v2b_block_offset,
                    self.config.block_size,
                );
                TraceEvent::Miss { vaddr, paddr }
            }
        };

        sink.record(&event).map_err(SimError::TraceWrite)?;

        if let TraceEvent::Miss { vaddr, paddr } = event {
            self.tlb.install(vaddr, paddr);
        }

        debug!(
            cycle = self.cycles,
            request = self.processed(),
            hit = event.is_hit(),
            "request resolved"
        );
        Ok(Some(event))
    }

    /// Runs `requests` front to back until they drain or the budget runs out.
    ///
    /// Consumes the simulator, so no counter or TLB state outlives the run.
    /// If requests remain when the budget is exhausted the reported cycle
    /// count is [`INCOMPLETE_CYCLES`]; hits and misses still reflect what was
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TraceWrite`] if a trace record cannot be written.
    pub fn run<S>(
        mut self,
        requests: &[MemoryRequest],
        sink: &mut S,
    ) -> Result<SimulationResult, SimError>
    where
        S: TraceSink + ?Sized,
    {
        info!(
            cycles = self.config.cycles,
            tlb_size = self.config.tlb_size,
            tlb_latency = self.config.tlb_latency,
            block_size = self.config.block_size,
            v2b_block_offset = self.config.v2b_block_offset,
            memory_latency = self.config.memory_latency,
            requests = requests.len(),
            "simulation started"
        );

        for req in requests {
            if self.step(req, sink)?.is_none() {
                break;
            }
        }

        let drained = self.processed() == requests.len();
        if !drained {
            warn!(
                processed = self.processed(),
                remaining = requests.len() - self.processed(),
                budget = self.config.cycles,
                "cycle budget exhausted before the trace drained"
            );
        }

        let result = self.finish(drained);
        info!(
            cycles = result.cycles,
            hits = result.hits,
            misses = result.misses,
            "simulation finished"
        );
        Ok(result)
    }

    fn finish(&self, drained: bool) -> SimulationResult {
        SimulationResult {
            cycles: if drained {
                self.cycles as usize
            } else {
                INCOMPLETE_CYCLES
            },
            hits: self.hits,
            misses: self.misses,
            primitive_gate_count: cost::primitive_gate_count(&self.config),
        }
    }
}

/// Runs a whole simulation: validates the configuration, opens the
/// configured trace sink, replays `requests` and reports the counters.
///
/// The configuration is checked before the sink is opened, so a rejected
/// configuration never creates a trace file. Once opened, the sink is closed
/// on every return path.
///
/// # Errors
///
/// [`SimError::Config`] for a rejected configuration,
/// [`SimError::TraceOpen`] if the trace file cannot be created, and
/// [`SimError::TraceWrite`] if writing to it fails.
pub fn run_simulation(
    config: &SimulationConfig,
    requests: &[MemoryRequest],
) -> Result<SimulationResult, SimError> {
    let sim = Simulator::new(config)?;
    let mut sink = trace::open(config.trace_file.as_deref())?;
    sim.run(requests, &mut sink)
}
