use core::fmt;

use crate::Regs;

/// Misuse of the driver API that is caught before anything is sent on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// Pin index outside of `0..=15`.
    PinOutOfRange(i32),
    /// Pin mode value other than `OUTPUT`, `INPUT` or `INPUT_PULLUP`.
    InvalidMode(u8),
    /// Output level other than `LOW` or `HIGH`.
    InvalidLevel(i32),
    /// Device address does not fit into 7 bits.
    InvalidAddress(u8),
    /// Device path is not of the form `/dev/i2c-N`.
    InvalidDevicePath,
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::PinOutOfRange(p) => write!(f, "invalid pin number {}", p),
            ArgumentError::InvalidMode(m) => write!(f, "invalid pin mode {}", m),
            ArgumentError::InvalidLevel(v) => write!(f, "invalid output value {}", v),
            ArgumentError::InvalidAddress(a) => write!(f, "invalid device address {:#04x}", a),
            ArgumentError::InvalidDevicePath => f.write_str("invalid i2c device filename"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArgumentError {}

/// Failure of an asynchronous driver operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transaction for `register` failed.
    Bus { register: Regs, source: E },
    /// The value passed to `digital_write()` is not a valid output level.
    InvalidLevel,
}

impl<E> Error<E> {
    /// The register whose transaction failed, if this is a bus error.
    pub fn register(&self) -> Option<Regs> {
        match self {
            Error::Bus { register, .. } => Some(*register),
            Error::InvalidLevel => None,
        }
    }

    /// The upstream bus error, if any.
    pub fn bus_error(&self) -> Option<&E> {
        match self {
            Error::Bus { source, .. } => Some(source),
            Error::InvalidLevel => None,
        }
    }
}

impl<E: embedded_hal::i2c::Error> Error<E> {
    /// Classify the error the way `embedded-hal` classifies I2C errors.
    pub fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        match self {
            Error::Bus { source, .. } => source.kind(),
            Error::InvalidLevel => embedded_hal::i2c::ErrorKind::Other,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus { register, source } => {
                write!(f, "bus error on register {:?}: {:?}", register, source)
            }
            Error::InvalidLevel => f.write_str("invalid output value"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
