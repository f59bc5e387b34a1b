//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Invalid arguments are rejected before any hardware access, so a failed
//! drawing call never leaves a partially written address window behind. A
//! transport failure aborts the current operation; there is no retry,
//! because a retry mid-burst would desynchronize the controller's
//! auto-incrementing write pointer.
//!
//! ## Example
//!
//! ```
//! use st7789_lcd::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(500, 500); // Too large
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum source outputs (columns) of the ST7789 frame memory
///
/// NOTE: Panels may wire fewer columns; configure [`crate::Dimensions`] accordingly.
pub const MAX_COLUMNS: u16 = 240;

/// Maximum gate outputs (rows) of the ST7789 frame memory
///
/// NOTE: Panels may wire fewer rows; configure [`crate::Dimensions`] accordingly.
pub const MAX_ROWS: u16 = 320;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// A coordinate lies outside the logical display area
    OutOfBounds {
        /// X coordinate that was requested
        x: u16,
        /// Y coordinate that was requested
        y: u16,
    },
    /// An address window is empty or exceeds the logical display area
    ///
    /// Requires x0 <= x1, y0 <= y1 and both corners within bounds.
    InvalidWindow {
        /// Window start column
        x0: u16,
        /// Window start row
        y0: u16,
        /// Window end column (inclusive)
        x1: u16,
        /// Window end row (inclusive)
        y1: u16,
    },
    /// An image buffer does not match its declared width and height
    ///
    /// The buffer must hold exactly `w * h` RGB565 pixels, two bytes each.
    ImageSizeMismatch {
        /// Required buffer length in bytes
        expected: usize,
        /// Provided buffer length in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::OutOfBounds { x, y } => {
                write!(f, "Coordinate out of bounds: ({x}, {y})")
            }
            Self::InvalidWindow { x0, y0, x1, y1 } => {
                write!(f, "Invalid window: ({x0}, {y0})..=({x1}, {y1})")
            }
            Self::ImageSizeMismatch { expected, provided } => {
                write!(
                    f,
                    "Image size mismatch: expected {expected} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width (columns) requested
        width: u16,
        /// Height (rows) requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
