//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7789 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7789 in 4-wire SPI mode requires:
//! - SPI bus (MOSI + SCK)
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BL**: Backlight (output, active high)
//!
//! The DC level must be valid before the first clock edge of the following
//! transfer; every method here sets the pin before touching the bus.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789_lcd::{DisplayInterface, Interface};
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
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Send command
//! let _ = interface.send_command(0x11); // Sleep out
//!
//! // Send parameter data
//! let _ = interface.send_data(&[0x55]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Milliseconds the reset line is held low
pub const RESET_HOLD_MS: u32 = 120;

/// Milliseconds allowed for the controller to boot after reset is released
pub const RESET_SETTLE_MS: u32 = 120;

/// Trait for hardware interface to the ST7789 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., different pin polarities, a fixed-on backlight),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send parameter or pixel data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the data bytes over SPI in one burst
    ///
    /// The single burst is what makes bulk pixel streaming cheap; the DC
    /// toggle and transfer setup are paid once per call, not per byte.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least 120 ms
    /// 3. Set RST pin high
    /// 4. Wait at least 120 ms
    ///
    /// These are the controller's documented minimum power-sequencing
    /// times; shortening them is a correctness violation.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Switch the backlight on or off
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for the ST7789
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// Transfer timeouts are the concern of the supplied [`SpiDevice`]
/// implementation; a timeout surfaces here as its SPI error.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST, BL> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Backlight pin (active high)
    backlight: BL,
}

impl<SPI, DC, RST, BL> Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `backlight` - Backlight pin (output, active high)
    pub fn new(spi: SPI, dc: DC, rst: RST, backlight: BL) -> Self {
        Self {
            spi,
            dc,
            rst,
            backlight,
        }
    }

    /// Release the contained SPI device and pins
    pub fn release(self) -> (SPI, DC, RST, BL) {
        (self.spi, self.dc, self.rst, self.backlight)
    }
}

impl<SPI, DC, RST, BL, PinErr> DisplayInterface for Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_HOLD_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error> {
        if on {
            self.backlight.set_high().map_err(InterfaceError::Pin)
        } else {
            self.backlight.set_low().map_err(InterfaceError::Pin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Dc(bool),
        Rst(bool),
        Backlight(bool),
        Spi(u8),
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockSpi(Log);

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = Infallible;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    for byte in bytes.iter() {
                        self.0.borrow_mut().push(Event::Spi(*byte));
                    }
                }
            }
            Ok(())
        }
    }

    enum Line {
        Dc,
        Rst,
        Backlight,
    }

    struct MockPin(Log, Line);

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(match self.1 {
                Line::Dc => Event::Dc(false),
                Line::Rst => Event::Rst(false),
                Line::Backlight => Event::Backlight(false),
            });
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(match self.1 {
                Line::Dc => Event::Dc(true),
                Line::Rst => Event::Rst(true),
                Line::Backlight => Event::Backlight(true),
            });
            Ok(())
        }
    }

    struct MockDelay(Log);

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    fn test_interface() -> (
        Interface<MockSpi, MockPin, MockPin, MockPin>,
        Log,
    ) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let interface = Interface::new(
            MockSpi(log.clone()),
            MockPin(log.clone(), Line::Dc),
            MockPin(log.clone(), Line::Rst),
            MockPin(log.clone(), Line::Backlight),
        );
        (interface, log)
    }

    #[test]
    fn test_send_command_sets_dc_low_before_transfer() {
        let (mut interface, log) = test_interface();
        interface.send_command(0x2A).unwrap();
        assert_eq!(&*log.borrow(), &[Event::Dc(false), Event::Spi(0x2A)]);
    }

    #[test]
    fn test_send_data_sets_dc_high_once_per_burst() {
        let (mut interface, log) = test_interface();
        interface.send_data(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(
            &*log.borrow(),
            &[
                Event::Dc(true),
                Event::Spi(0x01),
                Event::Spi(0x02),
                Event::Spi(0x03)
            ]
        );
    }

    #[test]
    fn test_reset_pulse_and_timing() {
        let (mut interface, log) = test_interface();
        let mut delay = MockDelay(log.clone());
        interface.reset(&mut delay).unwrap();
        assert_eq!(
            &*log.borrow(),
            &[
                Event::Rst(false),
                Event::DelayMs(RESET_HOLD_MS),
                Event::Rst(true),
                Event::DelayMs(RESET_SETTLE_MS),
            ]
        );
    }

    #[test]
    fn test_set_backlight() {
        let (mut interface, log) = test_interface();
        interface.set_backlight(true).unwrap();
        interface.set_backlight(false).unwrap();
        assert_eq!(
            &*log.borrow(),
            &[Event::Backlight(true), Event::Backlight(false)]
        );
    }
}
