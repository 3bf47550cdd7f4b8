#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![allow(async_fn_in_trait)]

mod bus;
mod common;
mod config;
pub mod dev;
mod error;
mod shadow;

pub use bus::{I2cBus, I2cRegisterBus, RegisterBus};
pub use common::{Bank, Level, Pin, PinMode};
pub use common::{HIGH, INPUT, INPUT_PULLUP, LOW, OUTPUT};
pub use config::{parse_device_path, Config, DEFAULT_ADDRESS, DEFAULT_DEVICE};
pub use error::{ArgumentError, Error};
pub use shadow::{BankShadow, Shadow};

pub use dev::mcp23017::Mcp23017;
pub use dev::mcp23017::Regs;
