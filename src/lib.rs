//! Driver for the BH1750 ambient light sensor.
//!
//! The sensor is woken, reset and switched into continuous high-resolution
//! mode once; after that every read is a single two-byte bus transaction
//! converted to lux. The bus itself sits behind the [`Transport`] trait, and
//! [`I2cTransport`] adapts any master implementing the `i2c` crate's traits.
//!
//! ```no_run
//! use bh1750::{Bh1750, Transport};
//!
//! fn poll(bus: impl Transport) -> Result<(), bh1750::Error> {
//!     let mut sensor = Bh1750::new(bus);
//!     sensor.initialize()?;
//!     loop {
//!         println!("{:.1} lx", sensor.read_illuminance()?);
//!         std::thread::sleep(std::time::Duration::from_millis(250));
//!     }
//! }
//! ```

mod delay;
mod driver;
mod error;
mod transport;

pub use delay::*;
pub use driver::*;
pub use error::*;
pub use transport::{I2cTransport, Transport};
pub use i2c;
