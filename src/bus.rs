use embedded_hal_async::i2c as async_i2c;

/// Blanket trait for types implementing `embedded_hal_async::i2c::I2c`
pub trait I2cBus: async_i2c::I2c {
    type BusError: From<<Self as async_i2c::ErrorType>::Error>;
}

impl<T, E> I2cBus for T
where
    T: async_i2c::I2c<Error = E>,
{
    type BusError = E;
}

pub(crate) trait I2cExt {
    type Error;

    async fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error>;
    async fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error>;
}

impl<I2C: I2cBus> I2cExt for I2C {
    type Error = I2C::BusError;

    async fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error> {
        self.write(addr, &[reg.into(), value]).await?;
        Ok(())
    }

    async fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error> {
        let mut buf = [0x00];
        self.write_read(addr, &[reg.into()], &mut buf).await?;
        Ok(buf[0])
    }
}

/// Single-register access to an expander.
///
/// This is the only way the driver talks to the chip: every operation is one byte to or from one
/// register, there is no burst or sequential addressing.  Implement it for transports other than
/// a plain I2C bus (or for a test double).
pub trait RegisterBus {
    type BusError;

    /// Write `value` into register `reg` of the device at `addr`.
    async fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8)
        -> Result<(), Self::BusError>;

    /// Read one byte from register `reg` of the device at `addr`.
    async fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::BusError>;
}

/// [`RegisterBus`] over an async I2C bus.
///
/// Each write is a single `[reg, value]` write transaction, each read a `[reg]` write followed by
/// a one byte read.
pub struct I2cRegisterBus<I2C>(pub I2C);

impl<I2C> I2cRegisterBus<I2C> {
    /// Give back the wrapped bus.
    pub fn into_inner(self) -> I2C {
        self.0
    }
}

impl<I2C: I2cBus> RegisterBus for I2cRegisterBus<I2C> {
    type BusError = I2C::BusError;

    async fn write_reg<R: Into<u8>>(
        &mut self,
        addr: u8,
        reg: R,
        value: u8,
    ) -> Result<(), Self::BusError> {
        self.0.write_reg(addr, reg, value).await
    }

    async fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::BusError> {
        self.0.read_reg(addr, reg).await
    }
}
