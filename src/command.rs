//! ST7789 command definitions
//!
//! This module defines the command bytes used to control the ST7789 TFT-LCD
//! display controller. Commands are sent over SPI with the DC pin low for
//! commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter bytes (if any)
//!
//! 16-bit parameter values are always transmitted high byte first.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789_lcd::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Select 16-bit pixel format
//! let _ = interface.send_command(command::COLMOD);
//! let _ = interface.send_data(&[command::COLOR_MODE_16BIT]);
//! ```

// System commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset command (0x01)
///
/// Resets the controller registers to their defaults. The controller needs
/// 120 ms before the next command after a software reset.
pub const SWRESET: u8 = 0x01;

// Power commands

/// Sleep in command (0x10)
///
/// Enters minimum-power sleep mode. DC/DC converter and display oscillator
/// are stopped; frame memory is retained.
pub const SLPIN: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Exits sleep mode. Allow at least 5 ms before the next command.
pub const SLPOUT: u8 = 0x11;

/// Partial display mode on command (0x12)
pub const PTLON: u8 = 0x12;

/// Normal display mode on command (0x13)
///
/// Leaves partial mode; the whole frame memory is displayed.
pub const NORON: u8 = 0x13;

// Display commands

/// Display inversion off command (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on command (0x21)
///
/// Many ST7789 panel variants are wired so that inversion must be enabled
/// for colors to render correctly.
pub const INVON: u8 = 0x21;

/// Display off command (0x28)
///
/// Blanks the panel output. Frame memory is unaffected.
pub const DISPOFF: u8 = 0x28;

/// Display on command (0x29)
pub const DISPON: u8 = 0x29;

// Addressing commands

/// Column address set command (0x2A)
///
/// Sets the X range of the address window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set command (0x2B)
///
/// Sets the Y range of the address window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Arms the controller for a pixel data burst into the current address
/// window. The write pointer auto-increments in row-major order and wraps
/// only within the programmed window.
pub const RAMWR: u8 = 0x2C;

/// Memory read command (0x2E)
pub const RAMRD: u8 = 0x2E;

/// Partial area command (0x30)
///
/// Defines the partial mode display area.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const PTLAR: u8 = 0x30;

// Mode commands

/// Tearing effect line off command (0x34)
pub const TEOFF: u8 = 0x34;

/// Tearing effect line on command (0x35)
///
/// Requires 1 byte: 0x00 = pulse on V-blank only, 0x01 = pulse on V-blank
/// and H-blank.
pub const TEON: u8 = 0x35;

/// Memory data access control command (0x36)
///
/// Selects scan-direction flags and row/column exchange, implementing
/// logical display rotation. Requires 1 byte built from the `MADCTL_*`
/// flags below.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Requires 1 byte: [`COLOR_MODE_16BIT`] or [`COLOR_MODE_18BIT`].
pub const COLMOD: u8 = 0x3A;

// Panel configuration commands (opaque tuning values from the datasheet)

/// Porch setting command (0xB2)
///
/// Front/back porch timing of the internal refresh signal.
/// Requires 5 bytes.
pub const PORCTRL: u8 = 0xB2;

/// Gate control command (0xB7)
///
/// VGH/VGL levels. Requires 1 byte.
pub const GCTRL: u8 = 0xB7;

/// VCOM setting command (0xBB)
///
/// Requires 1 byte.
pub const VCOMS: u8 = 0xBB;

/// LCM control command (0xC0)
///
/// Requires 1 byte.
pub const LCMCTRL: u8 = 0xC0;

/// VDV and VRH command enable (0xC2)
///
/// Requires 1 byte.
pub const VDVVRHEN: u8 = 0xC2;

/// VRH set command (0xC3)
///
/// Requires 1 byte.
pub const VRHS: u8 = 0xC3;

/// VDV set command (0xC4)
///
/// Requires 1 byte.
pub const VDVS: u8 = 0xC4;

/// Frame rate control in normal mode (0xC6)
///
/// Requires 1 byte.
pub const FRCTRL2: u8 = 0xC6;

/// Power control 1 command (0xD0)
///
/// AVDD/AVCL/VDS levels. Requires 2 bytes.
pub const PWCTRL1: u8 = 0xD0;

/// Positive voltage gamma control command (0xE0)
///
/// Requires 14 bytes.
pub const PVGAMCTRL: u8 = 0xE0;

/// Negative voltage gamma control command (0xE1)
///
/// Requires 14 bytes.
pub const NVGAMCTRL: u8 = 0xE1;

// MADCTL register flags
//
// Bit layout:  D7  D6  D5  D4  D3  D2  D1  D0
//              MY  MX  MV  ML  RGB MH  -   -

/// Page address order ('0': top to bottom, '1': reversed)
pub const MADCTL_MY: u8 = 0x80;
/// Column address order ('0': left to right, '1': reversed)
pub const MADCTL_MX: u8 = 0x40;
/// Page/column exchange ('0': normal, '1': row/column swapped)
pub const MADCTL_MV: u8 = 0x20;
/// Line address order ('0': refresh top to bottom, '1': reversed)
pub const MADCTL_ML: u8 = 0x10;
/// RGB color order
pub const MADCTL_RGB: u8 = 0x00;
/// BGR color order
pub const MADCTL_BGR: u8 = 0x08;
/// Display data latch order ('0': refresh left to right, '1': reversed)
pub const MADCTL_MH: u8 = 0x04;

// COLMOD parameter values

/// 16 bits per pixel, RGB565
pub const COLOR_MODE_16BIT: u8 = 0x55;
/// 18 bits per pixel, RGB666
pub const COLOR_MODE_18BIT: u8 = 0x66;
