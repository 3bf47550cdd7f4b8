//! Support for the `MCP23017` "16-Bit I/O Expander with Serial Interface"
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/devicedoc/20001952c.pdf
//!
//! The MCP23017 offers two eight-bit GPIO ports.  It has three
//! address pins, so eight devices can coexist on an I2C bus.
//!
//! The driver keeps a copy of the direction, pull-up and output latch registers of both ports
//! (see [`Shadow`]) and only talks to the chip when a pin operation actually changes one of
//! them.  Pins are numbered 0 to 15; 0..=7 are port A, 8..=15 are port B.
//!
//! Operations on one device must not overlap.  All methods take `&mut self`, so this holds as
//! long as the driver is not shared behind something that hands out several futures at once.
use crate::shadow::{DIRECTION_DEFAULT, OUTPUT_DEFAULT};
use crate::{Bank, Config, Error, I2cRegisterBus, Level, Pin, PinMode, RegisterBus, Shadow};

macro_rules! trace {
    ($enabled:expr, $($arg:tt)+) => {
        if $enabled {
            log::debug!($($arg)+);
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// N.B.: These values are for BANK=0, which is the reset state of
/// the chip (and this driver does not change).
///
/// Only the registers this driver touches are listed.
pub enum Regs {
    /// IODIR: input/output direction: 0=output; 1=input
    IODIRA = 0x00,
    /// IODIR: input/output direction: 0=output; 1=input
    IODIRB = 0x01,
    /// GPPU: GPIO pull-ups: enables weak internal pull-ups on each pin (when configured
    ///   as an input)
    GPPUA = 0x0c,
    /// GPPU: GPIO pull-ups: enables weak internal pull-ups on each pin (when configured
    ///   as an input)
    GPPUB = 0x0d,
    /// GPIO: reflects logic level on pins
    GPIOA = 0x12,
    /// GPIO: reflects logic level on pins
    GPIOB = 0x13,
    /// OLAT: output latches: sets state for pins configured as outputs
    OLATA = 0x14,
    /// OLAT: output latches: sets state for pins configured as outputs
    OLATB = 0x15,
}

impl Regs {
    pub fn direction(bank: Bank) -> Self {
        match bank {
            Bank::A => Regs::IODIRA,
            Bank::B => Regs::IODIRB,
        }
    }

    pub fn pull_up(bank: Bank) -> Self {
        match bank {
            Bank::A => Regs::GPPUA,
            Bank::B => Regs::GPPUB,
        }
    }

    /// Register to read pin levels from.
    pub fn input(bank: Bank) -> Self {
        match bank {
            Bank::A => Regs::GPIOA,
            Bank::B => Regs::GPIOB,
        }
    }

    /// Register to write output levels to.
    pub fn output(bank: Bank) -> Self {
        match bank {
            Bank::A => Regs::OLATA,
            Bank::B => Regs::OLATB,
        }
    }
}

impl From<Regs> for u8 {
    fn from(r: Regs) -> u8 {
        r as u8
    }
}

fn mode_name(mode: PinMode) -> &'static str {
    match mode {
        PinMode::Output => "an OUTPUT",
        PinMode::Input => "an INPUT",
        PinMode::InputPullUp => "an INPUT_PULLUP",
    }
}

/// `MCP23017` "16-Bit I/O Expander with Serial Interface"
pub struct Mcp23017<B> {
    bus: B,
    addr: u8,
    shadow: Shadow,
    debug: bool,
}

impl<I2C> Mcp23017<I2cRegisterBus<I2C>>
where
    I2C: crate::I2cBus,
{
    /// Create a driver for the device at `config.address` on an already opened I2C bus.
    ///
    /// Nothing is sent to the chip until [`initialize()`][Self::initialize] or the first pin
    /// operation.
    pub fn new(i2c: I2C, config: Config) -> Self {
        Self::with_bus(I2cRegisterBus(i2c), config)
    }
}

impl<B: RegisterBus> Mcp23017<B> {
    pub fn with_bus(bus: B, config: Config) -> Self {
        Self {
            bus,
            addr: config.address,
            shadow: Shadow::new(),
            debug: config.debug,
        }
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    /// The cached register values.
    pub fn shadow(&self) -> &Shadow {
        &self.shadow
    }

    /// Destroy the driver and give back the bus.
    pub fn release(self) -> B {
        self.bus
    }

    async fn write(&mut self, reg: Regs, value: u8) -> Result<(), Error<B::BusError>> {
        let debug = self.debug;
        self.bus
            .write_reg(self.addr, reg, value)
            .await
            .map_err(|source| {
                trace!(debug, "writing {:#04x} to {:?} failed", value, reg);
                Error::Bus {
                    register: reg,
                    source,
                }
            })?;
        trace!(debug, "register: {:?}, value: {:#04x}", reg, value);
        Ok(())
    }

    async fn init_bank(&mut self, bank: Bank) -> Result<(), Error<B::BusError>> {
        let direction = self.shadow.bank(bank).direction;
        self.write(Regs::direction(bank), direction).await?;
        self.write(Regs::output(bank), OUTPUT_DEFAULT).await?;
        self.shadow.bank_mut(bank).output = OUTPUT_DEFAULT;
        Ok(())
    }

    /// Push the cached pin directions to the chip and drive all outputs low.
    ///
    /// Writes `IODIRA`, `OLATA`, `IODIRB`, `OLATB` in this order and stops at the first failing
    /// write.
    pub async fn initialize(&mut self) -> Result<(), Error<B::BusError>> {
        self.init_bank(Bank::A).await?;
        self.init_bank(Bank::B).await?;
        Ok(())
    }

    /// Make all pins inputs again, then [`initialize()`][Self::initialize].
    ///
    /// Pull-up settings are left as they are.
    pub async fn reset(&mut self) -> Result<(), Error<B::BusError>> {
        self.shadow.a.direction = DIRECTION_DEFAULT;
        self.shadow.b.direction = DIRECTION_DEFAULT;
        self.initialize().await
    }

    /// Configure `pin` as output, input or input with pull-up.
    ///
    /// The direction register is written first (if it changes), then the pull-up register (if it
    /// changes).  When the direction write fails the pull-up register is left alone, both on the
    /// chip and in the cache.  A pin that is already in `mode` causes no bus traffic at all.
    pub async fn set_pin_mode(&mut self, pin: Pin, mode: PinMode) -> Result<(), Error<B::BusError>> {
        let bank = pin.bank();
        let mask = pin.mask();
        let direction = self.shadow.bank(bank).plan_direction(mask, mode);
        let pull_up = self.shadow.bank(bank).plan_pull_up(mask, mode);

        if direction.dirty {
            trace!(self.debug, "setting pin {} as {}", pin.number(), mode_name(mode));
            self.shadow.bank_mut(bank).direction = direction.value;
            self.write(Regs::direction(bank), direction.value).await?;
        } else {
            trace!(self.debug, "pin {} already {}", pin.number(), mode_name(mode));
        }

        if pull_up.dirty {
            trace!(self.debug, "activate INPUT_PULLUP for pin {}", pin.number());
            self.shadow.bank_mut(bank).pull_up = pull_up.value;
            self.write(Regs::pull_up(bank), pull_up.value).await?;
        } else if mode == PinMode::InputPullUp {
            trace!(self.debug, "pin {} already activated INPUT_PULLUP", pin.number());
        }
        Ok(())
    }

    /// Drive `pin` to `value`.
    ///
    /// `value` can be a [`Level`], a `bool`, a `PinState`, or a raw `u8`/`i32` of `LOW`/`HIGH`.  Any
    /// other raw value resolves to [`Error::InvalidLevel`] without touching the bus or the cache.
    ///
    /// When the cached output latch already holds `value` nothing is written.  Otherwise the
    /// cache is updated before the write; if the write fails, the cache keeps the new level even
    /// though the chip may not.
    pub async fn digital_write<V>(&mut self, pin: Pin, value: V) -> Result<(), Error<B::BusError>>
    where
        V: TryInto<Level>,
    {
        let level = value
            .try_into()
            .map_err(|_| Error::<B::BusError>::InvalidLevel)?;
        self.set_level(pin, level).await
    }

    /// Flip the output level of `pin`, based on the cached output latch.
    pub async fn toggle(&mut self, pin: Pin) -> Result<(), Error<B::BusError>> {
        let level = self.shadow.output_level(pin).flipped();
        self.set_level(pin, level).await
    }

    async fn set_level(&mut self, pin: Pin, level: Level) -> Result<(), Error<B::BusError>> {
        let bank = pin.bank();
        let output = self.shadow.bank(bank).plan_output(pin.mask(), level);
        if !output.dirty {
            trace!(self.debug, "pin {} already {:?}", pin.number(), level);
            return Ok(());
        }
        self.shadow.bank_mut(bank).output = output.value;
        self.write(Regs::output(bank), output.value).await
    }

    /// Read the current level of `pin` from the chip.
    ///
    /// This always goes to the bus; the cache is neither consulted nor updated.
    pub async fn digital_read(&mut self, pin: Pin) -> Result<bool, Error<B::BusError>> {
        let reg = Regs::input(pin.bank());
        let value = self
            .bus
            .read_reg(self.addr, reg)
            .await
            .map_err(|source| Error::Bus {
                register: reg,
                source,
            })?;
        trace!(self.debug, "register: {:?}, read: {:#04x}", reg, value);
        Ok(value & pin.mask() != 0)
    }

    /// Whether `pin` was last driven HIGH.  No bus access.
    pub fn is_set_high(&self, pin: Pin) -> bool {
        self.shadow.output_level(pin).is_high()
    }

    /// Whether `pin` was last driven LOW.  No bus access.
    pub fn is_set_low(&self, pin: Pin) -> bool {
        !self.is_set_high(pin)
    }

    /// The configuration of `pin` as far as the driver knows.  No bus access.
    pub fn pin_mode(&self, pin: Pin) -> PinMode {
        self.shadow.mode(pin)
    }
}
