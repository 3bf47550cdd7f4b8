use crate::ArgumentError;
use embedded_hal::digital::PinState;

/// Mode value for [`PinMode::Output`].
pub const OUTPUT: u8 = 0;
/// Mode value for [`PinMode::Input`].
pub const INPUT: u8 = 1;
/// Mode value for [`PinMode::InputPullUp`].
pub const INPUT_PULLUP: u8 = 2;

/// Value for [`Level::Low`].
pub const LOW: u8 = 0;
/// Value for [`Level::High`].
pub const HIGH: u8 = 1;

/// One of the two eight-bit GPIO ports of the expander.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    A,
    B,
}

/// A pin of the expander, numbered 0 to 15 across both banks.
///
/// Pins 0..=7 are `GPA0..=GPA7`, pins 8..=15 are `GPB0..=GPB7`.  A `Pin` can only be built from a
/// valid index, so every driver operation taking one is already past the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pin(u8);

impl Pin {
    /// Number of pins on the device.
    pub const COUNT: u8 = 16;

    pub const fn new(pin_number: u8) -> Result<Self, ArgumentError> {
        if pin_number < Self::COUNT {
            Ok(Self(pin_number))
        } else {
            Err(ArgumentError::PinOutOfRange(pin_number as i32))
        }
    }

    /// All 16 pins in order.
    pub fn all() -> impl Iterator<Item = Pin> {
        (0..Self::COUNT).map(Pin)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn bank(self) -> Bank {
        if self.0 < 8 {
            Bank::A
        } else {
            Bank::B
        }
    }

    /// Bit index of this pin within its bank.
    pub fn bit(self) -> u8 {
        self.0 & 0x07
    }

    /// Mask of this pin within its bank's registers.
    pub fn mask(self) -> u8 {
        1 << self.bit()
    }
}

impl TryFrom<u8> for Pin {
    type Error = ArgumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pin::new(value)
    }
}

impl TryFrom<i32> for Pin {
    type Error = ArgumentError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if v < Pin::COUNT => Ok(Pin(v)),
            _ => Err(ArgumentError::PinOutOfRange(value)),
        }
    }
}

impl TryFrom<usize> for Pin {
    type Error = ArgumentError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if v < Pin::COUNT => Ok(Pin(v)),
            _ => Err(ArgumentError::PinOutOfRange(
                i32::try_from(value).unwrap_or(i32::MAX),
            )),
        }
    }
}

impl From<Pin> for u8 {
    fn from(p: Pin) -> u8 {
        p.0
    }
}

/// Electrical configuration of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Output = 0,
    Input = 1,
    /// Input with the internal 100k pull-up enabled.
    InputPullUp = 2,
}

impl TryFrom<u8> for PinMode {
    type Error = ArgumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            OUTPUT => Ok(PinMode::Output),
            INPUT => Ok(PinMode::Input),
            INPUT_PULLUP => Ok(PinMode::InputPullUp),
            v => Err(ArgumentError::InvalidMode(v)),
        }
    }
}

impl From<PinMode> for u8 {
    fn from(m: PinMode) -> u8 {
        m as u8
    }
}

/// Logic level of an output pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low = 0,
    High = 1,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// The opposite level.
    pub fn flipped(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = ArgumentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            LOW => Ok(Level::Low),
            HIGH => Ok(Level::High),
            v => Err(ArgumentError::InvalidLevel(v as i32)),
        }
    }
}

impl TryFrom<i32> for Level {
    type Error = ArgumentError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Low),
            1 => Ok(Level::High),
            v => Err(ArgumentError::InvalidLevel(v)),
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(l: Level) -> bool {
        l.is_high()
    }
}

impl From<PinState> for Level {
    fn from(s: PinState) -> Self {
        match s {
            PinState::Low => Level::Low,
            PinState::High => Level::High,
        }
    }
}

impl From<Level> for PinState {
    fn from(l: Level) -> Self {
        match l {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}
