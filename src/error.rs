#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("bus transaction failed")]
    Bus(#[source] std::io::Error),

    #[error("no acknowledgement from the sensor")]
    Nack,

    #[error("sensor was not initialized")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        match value.kind() {
            // bus adapters following the i2c-tiny-usb convention report a
            // missing device acknowledgement as NotConnected
            std::io::ErrorKind::NotConnected => Error::Nack,
            _ => Error::Bus(value),
        }
    }
}
