use crate::delay::{Delay, SysDelay};
use crate::{Error, Result, Transport};

/// Fixed 7-bit bus address of the sensor with the ADDR pin strapped low. A
/// high strapping moves the device to 0x5c; this driver assumes the default
/// and cannot discover the strapping over the bus.
pub const ADDRESS: u8 = 0x23;

/// Internal refresh cadence of the sensor in continuous high-resolution mode.
/// Polling faster than this repeats the previous sample; it is not an error.
pub const MEASUREMENT_CYCLE_MS: u16 = 120;

#[allow(dead_code)]
mod commands {
    pub const CMD_POWER_DOWN: u8 = 0x00;
    pub const CMD_POWER_ON: u8 = 0x01;
    pub const CMD_RESET: u8 = 0x07; // only defined while powered on
    pub const CMD_CONT_HIRES: u8 = 0x10; // 1 lx resolution, ~120 ms cycle
}
use commands::*;

// datasheet scale factor, valid only for the default measurement-time
// register (MTreg = 69) which this driver never changes
const LUX_PER_COUNT: f32 = 1.2;

// settle time between waking the device and the first configuration command
const SETTLE_MS: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Uninitialized,
    Continuous,
}

/// BH1750 ambient light sensor on a [`Transport`]. One instance owns the bus
/// capability and its view of the device state; concurrent use requires
/// external serialization by the caller.
pub struct Bh1750<B, D = SysDelay> {
    bus: B,
    delay: D,
    mode: Mode,
}

impl<B: Transport> Bh1750<B> {
    pub fn new(bus: B) -> Self {
        Self::with_delay(bus, SysDelay)
    }
}

impl<B: Transport, D: Delay> Bh1750<B, D> {
    /// Like [`Bh1750::new`] but with an injected settle-delay implementation.
    pub fn with_delay(bus: B, delay: D) -> Self {
        Self {
            bus,
            delay,
            mode: Mode::Uninitialized,
        }
    }

    /// Wakes, resets and switches the sensor into continuous high-resolution
    /// measurement mode.
    ///
    /// The command sequence is order-dependent: RESET is only defined while
    /// the device is powered on, and the mode command only takes effect once
    /// powered. The first failing write aborts the sequence and is returned
    /// as-is; no retries happen at this layer and the driver stays
    /// uninitialized. Calling again after a successful initialization is a
    /// no-op, the device keeps measuring on its own.
    pub fn initialize(&mut self) -> Result<()> {
        if self.mode == Mode::Continuous {
            return Ok(());
        }
        self.bus.write_command(ADDRESS, CMD_POWER_ON)?;
        self.delay.delay_ms(SETTLE_MS);
        self.bus.write_command(ADDRESS, CMD_RESET)?;
        self.bus.write_command(ADDRESS, CMD_CONT_HIRES)?;
        self.mode = Mode::Continuous;
        Ok(())
    }

    /// Fetches the current raw 16-bit sample, most significant byte first on
    /// the wire. Requires a successful [`Bh1750::initialize`] beforehand.
    pub fn read_raw(&mut self) -> Result<u16> {
        if self.mode != Mode::Continuous {
            return Err(Error::NotInitialized);
        }
        let mut buf = [0u8; 2];
        self.bus.read_bytes(ADDRESS, &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Current illuminance in lux. Exactly one bus transaction per call; the
    /// device refreshes its sample every [`MEASUREMENT_CYCLE_MS`], so faster
    /// polling returns the previous value again.
    pub fn read_illuminance(&mut self) -> Result<f32> {
        Ok(f32::from(self.read_raw()?) / LUX_PER_COUNT)
    }

    /// Consumes the driver and hands the bus capability back. The device
    /// keeps measuring; there is no power-down path.
    pub fn release(self) -> B {
        self.bus
    }
}
