/// Counters for the tick loop
#[derive(Clone, Debug, Default)]
pub struct BridgeStats {
    pub(super) ticks: u64,
    pub(super) steps: u64,
    pub(super) last_tick_ms: f64,
    pub(super) last_tick_stepped: bool,
}

impl BridgeStats {
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Wall time of the last tick (step + write-back)
    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }

    pub fn last_tick_stepped(&self) -> bool {
        self.last_tick_stepped
    }

    pub(super) fn record(&mut self, stepped: bool, elapsed_ms: f64) {
        self.ticks += 1;
        if stepped {
            self.steps += 1;
        }
        self.last_tick_stepped = stepped;
        self.last_tick_ms = elapsed_ms;
    }
}
