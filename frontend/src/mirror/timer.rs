use gloo_timers::callback::Timeout;

/// How long the mirror pretends to analyze a photo.
pub const SCAN_DELAY_MS: u32 = 3_000;

/// Schedules the end of a scan. Dropping the returned handle cancels the callback.
pub trait ScanTimer {
    type Handle;

    fn schedule(&self, delay_ms: u32, on_elapsed: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserTimer;

impl ScanTimer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, on_elapsed: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, on_elapsed)
    }
}

#[cfg(test)]
pub use virtual_clock::VirtualTimer;
