use crate::ArgumentError;

/// Device address with all three address pins pulled low.
pub const DEFAULT_ADDRESS: u8 = 0x20;
/// Bus device used when none is configured.
pub const DEFAULT_DEVICE: &str = "/dev/i2c-1";

const DEVICE_PREFIX: &str = "/dev/i2c-";

/// Extract the bus number from an i2c-dev path like `/dev/i2c-1`.
pub fn parse_device_path(path: &str) -> Result<u32, ArgumentError> {
    let index = path
        .strip_prefix(DEVICE_PREFIX)
        .ok_or(ArgumentError::InvalidDevicePath)?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArgumentError::InvalidDevicePath);
    }
    index.parse().map_err(|_| ArgumentError::InvalidDevicePath)
}

/// Settings for one expander.
///
/// The bus itself is opened by the caller; `bus_index` only records which bus the configured
/// device path names.
///
/// ```
/// let config = mcp23017_shadow::Config::new()
///     .address_pins(true, false, false)
///     .device("/dev/i2c-3")
///     .unwrap()
///     .debug(true);
/// assert_eq!(config.address, 0x21);
/// assert_eq!(config.bus_index, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// 7-bit bus address of the device.
    pub address: u8,
    /// Number of the i2c-dev bus the device sits on.
    pub bus_index: u32,
    /// Emit diagnostics through `log`.
    pub debug: bool,
}

impl Config {
    /// Address 0x20 on `/dev/i2c-1`, diagnostics off.
    pub const fn new() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            bus_index: 1,
            debug: false,
        }
    }

    /// Set the 7-bit device address.
    pub fn address(mut self, address: u8) -> Result<Self, ArgumentError> {
        if address > 0x7f {
            return Err(ArgumentError::InvalidAddress(address));
        }
        self.address = address;
        Ok(self)
    }

    /// Set the address from the levels of the `A0`, `A1` and `A2` pins.
    pub fn address_pins(mut self, a0: bool, a1: bool, a2: bool) -> Self {
        self.address = DEFAULT_ADDRESS | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8);
        self
    }

    /// Take the bus number from an i2c-dev path like `/dev/i2c-1`.
    pub fn device(mut self, path: &str) -> Result<Self, ArgumentError> {
        self.bus_index = parse_device_path(path)?;
        Ok(self)
    }

    /// Enable or disable diagnostics.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_paths() {
        assert_eq!(parse_device_path(DEFAULT_DEVICE), Ok(1));
        assert_eq!(parse_device_path("/dev/i2c-0"), Ok(0));
        assert_eq!(parse_device_path("/dev/i2c-12"), Ok(12));

        for bad in ["", "/dev/i2c-", "/dev/i2c-x", "/dev/i2c-1a", "/dev/spidev0.0", "i2c-1"] {
            assert_eq!(parse_device_path(bad), Err(ArgumentError::InvalidDevicePath));
        }
        assert_eq!(
            parse_device_path("/dev/i2c-99999999999"),
            Err(ArgumentError::InvalidDevicePath)
        );
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.address, 0x20);
        assert_eq!(config.bus_index, 1);
        assert!(!config.debug);
        assert_eq!(config, Config::new());
        assert!(Config::new().debug(true).debug);
        assert_eq!(Config::new().device("/dev/i2c-7").map(|c| c.bus_index), Ok(7));
    }

    #[test]
    fn addresses() {
        assert_eq!(Config::new().address_pins(false, true, false).address, 0x22);
        assert_eq!(Config::new().address_pins(true, true, true).address, 0x27);
        assert_eq!(Config::new().address(0x24).map(|c| c.address), Ok(0x24));
        assert_eq!(
            Config::new().address(0x80),
            Err(ArgumentError::InvalidAddress(0x80))
        );
    }
}
