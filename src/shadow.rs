//! In-memory copies of the direction, pull-up and output latch registers.
//!
//! The driver never reads these registers back from the chip.  Instead each bank keeps the last
//! byte that was sent to the register, and pin operations are turned into a new byte for the
//! register plus a flag telling whether the byte differs from the cached one.  Only dirty
//! registers are written.
use crate::{Bank, Level, Pin, PinMode};

/// Direction after power-on: every pin is an input.
pub const DIRECTION_DEFAULT: u8 = 0xff;
/// Pull-ups after power-on: all disabled.
pub const PULL_UP_DEFAULT: u8 = 0x00;
/// Output latches after power-on: all low.
pub const OUTPUT_DEFAULT: u8 = 0x00;

/// New value for one register, and whether it needs to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Update {
    pub value: u8,
    pub dirty: bool,
}

impl Update {
    fn new(old: u8, value: u8) -> Self {
        Self {
            value,
            dirty: old != value,
        }
    }
}

/// Cached registers of one bank.
///
/// Direction bits are 1 for input and 0 for output, the same as `IODIR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankShadow {
    pub direction: u8,
    pub pull_up: u8,
    pub output: u8,
}

impl BankShadow {
    pub const fn new() -> Self {
        Self {
            direction: DIRECTION_DEFAULT,
            pull_up: PULL_UP_DEFAULT,
            output: OUTPUT_DEFAULT,
        }
    }

    /// Direction byte needed for `mode` on the pin(s) in `mask`.
    pub(crate) fn plan_direction(&self, mask: u8, mode: PinMode) -> Update {
        let value = match mode {
            PinMode::Output => self.direction & !mask,
            PinMode::Input | PinMode::InputPullUp => self.direction | mask,
        };
        Update::new(self.direction, value)
    }

    /// Pull-up byte needed for `mode`.
    ///
    /// Pull-ups are only ever switched on here.  Moving a pin away from `InputPullUp` keeps its
    /// pull-up bit; for an output the chip ignores it.
    pub(crate) fn plan_pull_up(&self, mask: u8, mode: PinMode) -> Update {
        let value = match mode {
            PinMode::InputPullUp => self.pull_up | mask,
            PinMode::Output | PinMode::Input => self.pull_up,
        };
        Update::new(self.pull_up, value)
    }

    /// Output latch byte with the pin(s) in `mask` driven to `level`.
    pub(crate) fn plan_output(&self, mask: u8, level: Level) -> Update {
        let value = match level {
            Level::High => self.output | mask,
            Level::Low => self.output & !mask,
        };
        Update::new(self.output, value)
    }

    pub fn mode(&self, mask: u8) -> PinMode {
        if self.direction & mask == 0 {
            PinMode::Output
        } else if self.pull_up & mask != 0 {
            PinMode::InputPullUp
        } else {
            PinMode::Input
        }
    }

    pub fn output_level(&self, mask: u8) -> Level {
        Level::from(self.output & mask != 0)
    }
}

impl Default for BankShadow {
    fn default() -> Self {
        Self::new()
    }
}

/// Cached registers of both banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shadow {
    pub a: BankShadow,
    pub b: BankShadow,
}

impl Shadow {
    pub const fn new() -> Self {
        Self {
            a: BankShadow::new(),
            b: BankShadow::new(),
        }
    }

    pub fn bank(&self, bank: Bank) -> &BankShadow {
        match bank {
            Bank::A => &self.a,
            Bank::B => &self.b,
        }
    }

    pub(crate) fn bank_mut(&mut self, bank: Bank) -> &mut BankShadow {
        match bank {
            Bank::A => &mut self.a,
            Bank::B => &mut self.b,
        }
    }

    /// Cached configuration of `pin`.
    pub fn mode(&self, pin: Pin) -> PinMode {
        self.bank(pin.bank()).mode(pin.mask())
    }

    /// Cached output latch level of `pin`.
    pub fn output_level(&self, pin: Pin) -> Level {
        self.bank(pin.bank()).output_level(pin.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let shadow = Shadow::new();
        for pin in Pin::all() {
            assert_eq!(shadow.mode(pin), PinMode::Input);
            assert_eq!(shadow.output_level(pin), Level::Low);
        }
        assert_eq!(shadow, Shadow::default());
    }

    #[test]
    fn direction_only_dirty_on_change() {
        let bank = BankShadow::new();

        let upd = bank.plan_direction(0x04, PinMode::Output);
        assert_eq!(upd, Update { value: 0xfb, dirty: true });

        let upd = bank.plan_direction(0x04, PinMode::Input);
        assert_eq!(upd, Update { value: 0xff, dirty: false });

        let bank = BankShadow {
            direction: 0xfb,
            ..BankShadow::new()
        };
        assert!(!bank.plan_direction(0x04, PinMode::Output).dirty);
        assert_eq!(
            bank.plan_direction(0x04, PinMode::InputPullUp),
            Update { value: 0xff, dirty: true }
        );
    }

    #[test]
    fn pull_up_is_never_cleared() {
        let bank = BankShadow {
            pull_up: 0x10,
            ..BankShadow::new()
        };
        assert_eq!(
            bank.plan_pull_up(0x10, PinMode::Output),
            Update { value: 0x10, dirty: false }
        );
        assert_eq!(
            bank.plan_pull_up(0x10, PinMode::Input),
            Update { value: 0x10, dirty: false }
        );
        assert!(!bank.plan_pull_up(0x10, PinMode::InputPullUp).dirty);
        assert_eq!(
            bank.plan_pull_up(0x01, PinMode::InputPullUp),
            Update { value: 0x11, dirty: true }
        );
    }

    #[test]
    fn output_levels() {
        let bank = BankShadow::new();
        assert!(!bank.plan_output(0x80, Level::Low).dirty);
        assert_eq!(
            bank.plan_output(0x80, Level::High),
            Update { value: 0x80, dirty: true }
        );

        let bank = BankShadow {
            output: 0x81,
            ..BankShadow::new()
        };
        assert_eq!(
            bank.plan_output(0x80, Level::Low),
            Update { value: 0x01, dirty: true }
        );
        assert_eq!(bank.output_level(0x01), Level::High);
        assert_eq!(bank.output_level(0x02), Level::Low);
    }

    #[test]
    fn mode_from_masks() {
        let bank = BankShadow {
            direction: 0b1111_1100,
            pull_up: 0b0000_0101,
            output: 0,
        };
        assert_eq!(bank.mode(0x01), PinMode::Output);
        assert_eq!(bank.mode(0x02), PinMode::Output);
        assert_eq!(bank.mode(0x04), PinMode::InputPullUp);
        assert_eq!(bank.mode(0x08), PinMode::Input);
    }
}
