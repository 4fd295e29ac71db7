use std::io;

use crate::{Error, Result};

/// Byte-level access to the two-wire bus, qualified by device address. This is
/// the only capability the driver needs; it can be replaced with
/// `mock::MockTransport` for testing.
pub trait Transport {
    /// Sends a single opcode byte to the addressed device. Any bus-level
    /// failure (no acknowledgement, arbitration loss, timeout) is an error.
    fn write_command(&mut self, address: u8, opcode: u8) -> Result<()>;

    /// Reads exactly `buf.len()` bytes from the addressed device. A short
    /// read is an error, never a partial result.
    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> Result<()>;
}

/// Adapts any bus master exposing the `i2c` crate's addressed read/write
/// interface (e.g. an i2c-tiny-usb adapter or a Linux i2cdev handle) into a
/// [`Transport`].
pub struct I2cTransport<T>(pub T);

impl<T> Transport for I2cTransport<T>
where
    T: i2c::Address + io::Read + io::Write,
    <T as i2c::Master>::Error: Into<io::Error>,
{
    fn write_command(&mut self, address: u8, opcode: u8) -> Result<()> {
        self.0
            .set_slave_address(u16::from(address), false)
            .map_err(|e| Error::from(e.into()))?;
        self.0.write_all(&[opcode])?;
        Ok(())
    }

    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> Result<()> {
        self.0
            .set_slave_address(u16::from(address), false)
            .map_err(|e| Error::from(e.into()))?;
        self.0.read_exact(buf)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted transport: records every attempted write and serves reads
    /// from a queue of scheduled responses.
    #[derive(Default)]
    pub struct MockTransport {
        /// every `write_command` as `(address, opcode)`, in call order
        pub writes: Vec<(u8, u8)>,
        /// outcome per upcoming write; an empty queue means success
        pub next_write_results: VecDeque<Result<()>>,
        /// response per upcoming read; a payload shorter than the request
        /// simulates a short read
        pub next_reads: VecDeque<Result<Vec<u8>>>,
        /// number of `read_bytes` calls attempted
        pub reads_attempted: usize,
    }

    impl Transport for MockTransport {
        fn write_command(&mut self, address: u8, opcode: u8) -> Result<()> {
            self.writes.push((address, opcode));
            self.next_write_results.pop_front().unwrap_or(Ok(()))
        }

        fn read_bytes(&mut self, _address: u8, buf: &mut [u8]) -> Result<()> {
            self.reads_attempted += 1;
            let data = match self.next_reads.pop_front() {
                None => return Err(Error::Nack),
                Some(r) => r?,
            };
            if data.len() != buf.len() {
                return Err(Error::Bus(io::ErrorKind::UnexpectedEof.into()));
            }
            buf.copy_from_slice(&data);
            Ok(())
        }
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn schedule_read(&mut self, data: &[u8]) {
            self.next_reads.push_back(Ok(data.into()));
        }

        pub fn schedule_read_error(&mut self, err: Error) {
            self.next_reads.push_back(Err(err));
        }

        pub fn schedule_write_result(&mut self, result: Result<()>) {
            self.next_write_results.push_back(result);
        }
    }
}
