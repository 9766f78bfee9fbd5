//! Run/stop bookkeeping for a self-rescheduling frame loop.
//!
//! The host requests one frame at a time and each frame requests the next,
//! forming a chain. Every chain carries the generation it was started in.
//! Stopping bumps the generation, so a frame that was already requested when
//! the loop stopped finds its token stale once it runs and ends its chain
//! instead of running alongside the one started by [`LoopGate::resume`].

/// Identifies one chain of frame requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainToken(u64);

#[derive(Debug)]
pub struct LoopGate {
    running: bool,
    generation: u64,
}

impl LoopGate {
    /// A running gate and the token for its first chain.
    pub fn start() -> (Self, ChainToken) {
        let gate = Self {
            running: true,
            generation: 0,
        };
        (gate, ChainToken(0))
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a frame of the chain holding `token` may run and request the
    /// next one.
    #[inline]
    pub fn admits(&self, token: ChainToken) -> bool {
        self.running && token.0 == self.generation
    }

    /// Returns `false` when the loop was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Token for a fresh chain, or `None` when the loop is still running and
    /// its current chain carries on.
    pub fn resume(&mut self) -> Option<ChainToken> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(ChainToken(self.generation))
    }
}
