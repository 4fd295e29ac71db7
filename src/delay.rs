use std::thread;
use std::time::Duration;

/// Blocking sleep used for the sensor's power-on settle time. Injectable so
/// tests run without real wall-clock delays.
pub trait Delay {
    fn delay_ms(&mut self, ms: u16);
}

/// [`Delay`] backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysDelay;

impl Delay for SysDelay {
    fn delay_ms(&mut self, ms: u16) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
