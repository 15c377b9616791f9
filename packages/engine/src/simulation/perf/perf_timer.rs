// Monotonic where the target has one; wasm32 only gets `Date.now()`.
#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

fn stamp() -> Stamp {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

fn millis_since(start: &Stamp) -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() - start
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Wall time of one tick, for `BridgeStats`
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start: stamp() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        millis_since(&self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_never_goes_backwards() {
        let timer = PerfTimer::start();
        let first = timer.elapsed_ms();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = timer.elapsed_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
        assert!(second >= 1.0, "slept 2ms, measured {}", second);
    }
}
