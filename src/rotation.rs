//! Rotation to register-value and window-offset mapping
//!
//! The ST7789 implements logical rotation through the memory data access
//! control register (MADCTL): the page/column order bits mirror the scan
//! directions and the exchange bit swaps the row/column roles. No pixel data
//! is moved; only the controller's addressing changes.
//!
//! Panels shorter than the controller's 240x320 frame memory see only a
//! window of it, and that window is not at the origin for every scan
//! direction. [`window_offset`] yields the fixed (x, y) shift that must be
//! added to every address-window coordinate for a given rotation.
//!
//! ## Example
//!
//! ```
//! use st7789_lcd::{rotation::{madctl_value, window_offset}, Dimensions, Rotation};
//!
//! // 180 degrees is the native scan direction on the reference module
//! assert_eq!(madctl_value(Rotation::Rotate180), 0x00);
//!
//! // A 240x240 panel sits 80 rows into the 320-row frame memory at Rotate0
//! let dims = Dimensions::new(240, 240).unwrap();
//! assert_eq!(window_offset(Rotation::Rotate0, dims), (0, 80));
//! ```

use crate::command::{MADCTL_MV, MADCTL_MX, MADCTL_MY, MADCTL_RGB};
use crate::config::{Dimensions, Rotation};
use crate::error::MAX_ROWS;

/// Get the MADCTL register value for a rotation
///
/// The RGB/BGR order bit is fixed at RGB in all modes.
pub fn madctl_value(rotation: Rotation) -> u8 {
    match rotation {
        Rotation::Rotate0 => MADCTL_MX | MADCTL_MY | MADCTL_RGB,
        Rotation::Rotate90 => MADCTL_MY | MADCTL_MV | MADCTL_RGB,
        Rotation::Rotate180 => MADCTL_RGB,
        Rotation::Rotate270 => MADCTL_MX | MADCTL_MV | MADCTL_RGB,
    }
}

/// Get the (x, y) address-window offset for a rotation
///
/// `dims` are the panel's native dimensions. Reversed page scanning
/// (Rotate0) pushes the visible window to the far end of the 320-row frame
/// memory, so the row addresses shift by the unused row count; with the
/// row/column exchange of Rotate90 that same shift lands on the column axis.
/// Rotate180 and Rotate270 scan from the memory origin and need no shift.
pub fn window_offset(rotation: Rotation, dims: Dimensions) -> (u16, u16) {
    let unused_rows = MAX_ROWS.saturating_sub(dims.height);
    match rotation {
        Rotation::Rotate0 => (0, unused_rows),
        Rotation::Rotate90 => (unused_rows, 0),
        Rotation::Rotate180 | Rotation::Rotate270 => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_panel() -> Dimensions {
        Dimensions::new(240, 240).unwrap()
    }

    #[test]
    fn test_madctl_values() {
        assert_eq!(madctl_value(Rotation::Rotate0), 0xC0);
        assert_eq!(madctl_value(Rotation::Rotate90), 0xA0);
        assert_eq!(madctl_value(Rotation::Rotate180), 0x00);
        assert_eq!(madctl_value(Rotation::Rotate270), 0x60);
    }

    #[test]
    fn test_square_panel_offsets() {
        assert_eq!(window_offset(Rotation::Rotate0, square_panel()), (0, 80));
        assert_eq!(window_offset(Rotation::Rotate90, square_panel()), (80, 0));
        assert_eq!(window_offset(Rotation::Rotate180, square_panel()), (0, 0));
        assert_eq!(window_offset(Rotation::Rotate270, square_panel()), (0, 0));
    }

    #[test]
    fn test_full_height_panel_has_no_offset() {
        let dims = Dimensions::new(240, 320).unwrap();
        assert_eq!(window_offset(Rotation::Rotate0, dims), (0, 0));
        assert_eq!(window_offset(Rotation::Rotate90, dims), (0, 0));
    }
}
