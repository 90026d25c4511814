/// Wall-clock stopwatch that works in the browser, where `std::time::Instant` panics.
#[derive(Debug, Clone, Copy)]
pub struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    pub fn now() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            started_ms: js_sys::Date::now(),
            #[cfg(not(target_arch = "wasm32"))]
            started_at: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            (js_sys::Date::now() - self.started_ms).max(0.0) as u64
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started_at.elapsed().as_millis() as u64
        }
    }
}

#[inline]
pub fn log_perf(scope: &str, started_at: PerfTimer, details: &str) {
    let elapsed_ms = started_at.elapsed_ms();
    if details.trim().is_empty() {
        tracing::debug!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        tracing::debug!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}
