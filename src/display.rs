//! Core display operations

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::color::Color;
use crate::command::{
    CASET, COLMOD, COLOR_MODE_16BIT, DISPOFF, DISPON, FRCTRL2, GCTRL, INVOFF, INVON, LCMCTRL,
    MADCTL, NORON, NVGAMCTRL, PORCTRL, PVGAMCTRL, PWCTRL1, RAMWR, RASET, SLPIN, SLPOUT, TEOFF,
    TEON, VCOMS, VDVS, VDVVRHEN, VRHS,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rotation::madctl_value;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Milliseconds for the backlight supply to stabilize before reset
pub const BACKLIGHT_STABILIZE_MS: u32 = 20;

/// Milliseconds the controller needs after leaving sleep mode
pub const SLEEP_SETTLE_MS: u32 = 5;

/// Milliseconds between display-on and the first frame memory write
pub const DISPLAY_ON_SETTLE_MS: u32 = 50;

/// Pixels per chunk when streaming solid fills
///
/// A full frame (240x240x2 = 115200 bytes) is far too large for a stack
/// buffer; fills stream through this fixed scratch buffer instead.
const FILL_CHUNK_PIXELS: usize = 64;

/// Tearing effect line output mode
///
/// The TE pin pulses so the host can synchronize writes with the panel
/// refresh and avoid tearing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TearingEffect {
    /// TE line disabled
    #[default]
    Off,
    /// Pulse on every vertical blanking interval
    Vertical,
    /// Pulse on every vertical and horizontal blanking interval
    HorizontalAndVertical,
}

/// Core display driver for the ST7789
///
/// Drawing calls are synchronous: each one re-arms the controller's address
/// window, streams its pixel data to completion and only then returns. The
/// driver assumes exclusive ownership of the SPI link for the duration of a
/// call; sharing the bus is the caller's concern.
///
/// [`init`](Self::init) must complete before any drawing call; this is a
/// documented precondition, not checked at runtime.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Power up and configure the panel
    ///
    /// Runs the fixed power-on sequence: backlight on, hardware reset pulse,
    /// pixel format, porch timing, rotation, the power/voltage register
    /// block, both gamma curves, inversion, sleep-out, normal mode and
    /// display-on, then clears the undefined power-on frame memory with the
    /// configured clear color.
    ///
    /// The delays between steps are the controller's documented minimum
    /// power-sequencing times and must elapse in full.
    ///
    /// # Errors
    ///
    /// Any interface failure aborts the sequence and leaves the panel in an
    /// indeterminate state; retry from the beginning, which re-asserts
    /// reset.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        debug!("initializing {}x{} panel", dims.width, dims.height);

        self.interface
            .set_backlight(true)
            .map_err(Error::Interface)?;
        delay.delay_ms(BACKLIGHT_STABILIZE_MS);
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.send_command(COLMOD)?;
        self.send_data(&[COLOR_MODE_16BIT])?;

        self.send_command(PORCTRL)?;
        let porch = self.config.porch_control;
        self.send_data(&porch)?;

        self.send_command(MADCTL)?;
        self.send_data(&[madctl_value(self.config.rotation)])?;

        self.send_command(GCTRL)?;
        self.send_data(&[self.config.gate_control])?;
        self.send_command(VCOMS)?;
        self.send_data(&[self.config.vcom])?;
        self.send_command(LCMCTRL)?;
        self.send_data(&[self.config.lcm_control])?;
        self.send_command(VDVVRHEN)?;
        self.send_data(&[self.config.vdv_vrh_enable])?;
        self.send_command(VRHS)?;
        self.send_data(&[self.config.vrh])?;
        self.send_command(VDVS)?;
        self.send_data(&[self.config.vdv])?;
        self.send_command(FRCTRL2)?;
        self.send_data(&[self.config.frame_rate])?;
        self.send_command(PWCTRL1)?;
        let power = self.config.power_control;
        self.send_data(&power)?;

        self.send_command(PVGAMCTRL)?;
        let gamma_positive = self.config.gamma_positive;
        self.send_data(&gamma_positive)?;
        self.send_command(NVGAMCTRL)?;
        let gamma_negative = self.config.gamma_negative;
        self.send_data(&gamma_negative)?;

        self.send_command(if self.config.invert_colors {
            INVON
        } else {
            INVOFF
        })?;

        self.send_command(SLPOUT)?;
        delay.delay_ms(SLEEP_SETTLE_MS);

        self.send_command(NORON)?;
        self.send_command(DISPON)?;
        delay.delay_ms(DISPLAY_ON_SETTLE_MS);

        // Frame memory content is undefined at power-up
        self.fill_screen(self.config.clear_color)?;

        debug!("display on");
        Ok(())
    }

    /// Draw a single pixel
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if (x, y) lies outside the logical
    /// display area. Nothing is sent to the controller in that case.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> DisplayResult<I> {
        let dims = self.config.rotated_dimensions();
        if x >= dims.width || y >= dims.height {
            return Err(Error::OutOfBounds { x, y });
        }
        self.set_address_window(x, y, x, y)?;
        self.send_data(&color.to_be_bytes())
    }

    /// Fill a rectangle given by two inclusive corners
    ///
    /// Programs the address window once and streams the color pattern
    /// through a fixed-size scratch buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the corners are not ordered or
    /// exceed the logical display area.
    pub fn fill_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Color) -> DisplayResult<I> {
        self.set_address_window(x0, y0, x1, y1)?;
        let pixels = u32::from(x1 - x0 + 1) * u32::from(y1 - y0 + 1);
        self.stream_solid(pixels, color)
    }

    /// Fill the entire screen with one color
    pub fn fill_screen(&mut self, color: Color) -> DisplayResult<I> {
        let dims = self.config.rotated_dimensions();
        self.fill_rect(0, 0, dims.width - 1, dims.height - 1, color)
    }

    /// Draw a straight line between two points
    ///
    /// Horizontal and vertical lines degenerate to a one-pixel-wide
    /// rectangle fill; anything else walks the integer Bresenham algorithm.
    /// Both paths produce identical pixel coverage.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if either endpoint lies outside the
    /// logical display area.
    pub fn draw_line(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Color) -> DisplayResult<I> {
        let dims = self.config.rotated_dimensions();
        for &(x, y) in &[(x0, y0), (x1, y1)] {
            if x >= dims.width || y >= dims.height {
                return Err(Error::OutOfBounds { x, y });
            }
        }

        if x0 == x1 || y0 == y1 {
            return self.fill_rect(
                x0.min(x1),
                y0.min(y1),
                x0.max(x1),
                y0.max(y1),
                color,
            );
        }

        let (mut x, mut y) = (i32::from(x0), i32::from(y0));
        let (x_end, y_end) = (i32::from(x1), i32::from(y1));
        let dx = (x_end - x).abs();
        let sx = if x < x_end { 1 } else { -1 };
        let dy = -(y_end - y).abs();
        let sy = if y < y_end { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.draw_pixel(x as u16, y as u16, color)?;
            if x == x_end && y == y_end {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a rectangle outline given by two inclusive corners
    pub fn draw_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Color) -> DisplayResult<I> {
        self.draw_line(x0, y0, x1, y0, color)?;
        self.draw_line(x0, y1, x1, y1, color)?;
        self.draw_line(x0, y0, x0, y1, color)?;
        self.draw_line(x1, y0, x1, y1, color)
    }

    /// Draw a circle outline around a center point
    ///
    /// Integer midpoint algorithm, plotting the 8-way symmetric point set.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` (carrying the center) if the circle's
    /// bounding box does not fit the logical display area.
    pub fn draw_circle(&mut self, cx: u16, cy: u16, r: u16, color: Color) -> DisplayResult<I> {
        let dims = self.config.rotated_dimensions();
        let fits = cx >= r
            && cy >= r
            && u32::from(cx) + u32::from(r) < u32::from(dims.width)
            && u32::from(cy) + u32::from(r) < u32::from(dims.height);
        if !fits {
            return Err(Error::OutOfBounds { x: cx, y: cy });
        }

        let (cx, cy) = (i32::from(cx), i32::from(cy));
        let mut x: i32 = 0;
        let mut y = i32::from(r);
        let mut d = 3 - 2 * i32::from(r);

        while x <= y {
            for &(px, py) in &[
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                self.draw_pixel(px as u16, py as u16, color)?;
            }
            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
        Ok(())
    }

    /// Blit a pre-encoded RGB565 image
    ///
    /// `data` must hold exactly `w * h` pixels, two bytes each, big-endian,
    /// in row-major order. The whole buffer is streamed into a single
    /// address window.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the region is empty or escapes the
    /// logical display area, and `Error::ImageSizeMismatch` if the buffer
    /// length does not match the declared size.
    pub fn draw_image(&mut self, x: u16, y: u16, w: u16, h: u16, data: &[u8]) -> DisplayResult<I> {
        let dims = self.config.rotated_dimensions();
        if w == 0
            || h == 0
            || u32::from(x) + u32::from(w) > u32::from(dims.width)
            || u32::from(y) + u32::from(h) > u32::from(dims.height)
        {
            return Err(Error::InvalidWindow {
                x0: x,
                y0: y,
                x1: x.saturating_add(w).saturating_sub(1),
                y1: y.saturating_add(h).saturating_sub(1),
            });
        }
        let expected = usize::from(w) * usize::from(h) * 2;
        if data.len() != expected {
            return Err(Error::ImageSizeMismatch {
                expected,
                provided: data.len(),
            });
        }

        self.set_address_window(x, y, x + w - 1, y + h - 1)?;
        self.send_data(data)
    }

    /// Enable or disable display color inversion
    pub fn invert_colors(&mut self, enable: bool) -> DisplayResult<I> {
        self.send_command(if enable { INVON } else { INVOFF })
    }

    /// Configure the tearing effect line output
    pub fn tearing_effect(&mut self, mode: TearingEffect) -> DisplayResult<I> {
        match mode {
            TearingEffect::Off => self.send_command(TEOFF),
            TearingEffect::Vertical => {
                self.send_command(TEON)?;
                self.send_data(&[0x00])
            }
            TearingEffect::HorizontalAndVertical => {
                self.send_command(TEON)?;
                self.send_data(&[0x01])
            }
        }
    }

    /// Change the display rotation at runtime
    ///
    /// Reprograms the memory data access control register and updates the
    /// logical dimensions and address-window offsets used by all subsequent
    /// drawing calls. Frame memory content is not moved; redraw after
    /// rotating.
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        self.send_command(MADCTL)?;
        self.send_data(&[madctl_value(rotation)])?;
        self.config.rotation = rotation;
        debug!("rotation set to {:?}", rotation);
        Ok(())
    }

    /// Enter minimum-power sleep mode
    ///
    /// Frame memory is retained. Use [`sleep_out`](Self::sleep_out) to wake.
    pub fn sleep_in<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SLPIN)?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        Ok(())
    }

    /// Leave sleep mode
    pub fn sleep_out<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SLPOUT)?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        Ok(())
    }

    /// Blank the panel output without touching frame memory
    pub fn display_off(&mut self) -> DisplayResult<I> {
        self.send_command(DISPOFF)
    }

    /// Re-enable the panel output
    pub fn display_on(&mut self) -> DisplayResult<I> {
        self.send_command(DISPON)
    }

    /// Get the logical display width for the current rotation
    pub fn width(&self) -> u16 {
        self.config.rotated_dimensions().width
    }

    /// Get the logical display height for the current rotation
    pub fn height(&self) -> u16 {
        self.config.rotated_dimensions().height
    }

    /// Get the current display rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Get the native (unrotated) display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the contained interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Program the address window and arm the controller for a pixel burst
    ///
    /// Adds the rotation-dependent offset, issues CASET and RASET with the
    /// big-endian start/end pairs, then RAMWR. The controller expects
    /// exactly (x1-x0+1)*(y1-y0+1) pixels next, row-major from (x0, y0).
    /// There is no way to query or reuse a previous window, so every burst
    /// is preceded by one of these calls.
    fn set_address_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        let dims = self.config.rotated_dimensions();
        if x0 > x1 || y0 > y1 || x1 >= dims.width || y1 >= dims.height {
            return Err(Error::InvalidWindow { x0, y0, x1, y1 });
        }

        let (x_shift, y_shift) = self.config.window_offset();
        let (x_start, x_end) = ((x0 + x_shift).to_be_bytes(), (x1 + x_shift).to_be_bytes());
        let (y_start, y_end) = ((y0 + y_shift).to_be_bytes(), (y1 + y_shift).to_be_bytes());

        self.send_command(CASET)?;
        self.send_data(&[x_start[0], x_start[1], x_end[0], x_end[1]])?;
        self.send_command(RASET)?;
        self.send_data(&[y_start[0], y_start[1], y_end[0], y_end[1]])?;
        self.send_command(RAMWR)
    }

    /// Stream `pixels` repetitions of a color through the scratch buffer
    fn stream_solid(&mut self, pixels: u32, color: Color) -> DisplayResult<I> {
        let bytes = color.to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&bytes);
        }

        let mut remaining = pixels as usize;
        while remaining > 0 {
            let count = remaining.min(FILL_CHUNK_PIXELS);
            self.send_data(&chunk[..count * 2])?;
            remaining -= count;
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Command(u8),
        Data(alloc::vec::Vec<u8>),
        Reset,
        Backlight(bool),
    }

    #[derive(Debug)]
    struct MockInterface {
        events: Vec<Event>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self { events: Vec::new() }
        }

        /// Number of CASET commands seen (each address window programs one)
        fn window_count(&self) -> usize {
            self.events
                .iter()
                .filter(|event| matches!(event, Event::Command(cmd) if *cmd == CASET))
                .count()
        }

        /// Total data bytes streamed after each RAMWR, over all windows
        fn pixel_data_len(&self) -> usize {
            let mut total = 0;
            let mut armed = false;
            for event in &self.events {
                match event {
                    Event::Command(cmd) => armed = *cmd == RAMWR,
                    Event::Data(data) if armed => total += data.len(),
                    _ => {}
                }
            }
            total
        }

        /// Reconstruct single-pixel plots from the captured trace, in order
        ///
        /// Only meaningful for traces consisting of 1x1 windows.
        fn plotted_pixels(&self) -> Vec<(u16, u16)> {
            let mut pixels = Vec::new();
            let mut last_cmd = 0u8;
            let mut x0 = 0u16;
            let mut y0 = 0u16;
            for event in &self.events {
                match event {
                    Event::Command(cmd) => last_cmd = *cmd,
                    Event::Data(data) => match last_cmd {
                        CASET => x0 = u16::from_be_bytes([data[0], data[1]]),
                        RASET => y0 = u16::from_be_bytes([data[0], data[1]]),
                        RAMWR => {
                            for _ in 0..data.len() / 2 {
                                pixels.push((x0, y0));
                            }
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }
            pixels
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.events.push(Event::Command(command));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.events.push(Event::Data(data.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.events.push(Event::Reset);
            Ok(())
        }

        fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
            self.events.push(Event::Backlight(on));
            Ok(())
        }
    }

    struct MockDelay {
        delays_ms: Vec<u32>,
    }

    impl MockDelay {
        fn new() -> Self {
            Self {
                delays_ms: Vec::new(),
            }
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.delays_ms.push(ns / 1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.delays_ms.push(ms);
        }
    }

    fn test_display(rotation: Rotation) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(240, 240).unwrap())
            .rotation(rotation)
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    #[test]
    fn test_draw_pixel_trace() {
        let mut display = test_display(Rotation::Rotate180);
        display.draw_pixel(5, 10, Color::from_raw(0x1234)).unwrap();
        assert_eq!(
            display.interface.events,
            alloc::vec![
                Event::Command(CASET),
                Event::Data(alloc::vec![0x00, 0x05, 0x00, 0x05]),
                Event::Command(RASET),
                Event::Data(alloc::vec![0x00, 0x0A, 0x00, 0x0A]),
                Event::Command(RAMWR),
                Event::Data(alloc::vec![0x12, 0x34]),
            ]
        );
    }

    #[test]
    fn test_draw_pixel_applies_rotate0_row_offset() {
        let mut display = test_display(Rotation::Rotate0);
        display.draw_pixel(5, 10, Color::WHITE).unwrap();
        // 240x240 panel sits 80 rows into frame memory at Rotate0
        let raset_data = display
            .interface
            .events
            .iter()
            .position(|event| *event == Event::Command(RASET))
            .map(|idx| display.interface.events[idx + 1].clone());
        assert_eq!(
            raset_data,
            Some(Event::Data(alloc::vec![0x00, 90, 0x00, 90]))
        );
    }

    #[test]
    fn test_draw_pixel_out_of_bounds_rejected_before_transport() {
        let mut display = test_display(Rotation::Rotate180);
        let result = display.draw_pixel(240, 0, Color::WHITE);
        assert!(matches!(result, Err(Error::OutOfBounds { x: 240, y: 0 })));
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_fill_rect_pixel_count_and_single_window() {
        let mut display = test_display(Rotation::Rotate180);
        display
            .fill_rect(3, 4, 32, 6, Color::from_raw(0xA5C3))
            .unwrap();
        // 30 x 3 pixels regardless of burst chunking
        assert_eq!(display.interface.window_count(), 1);
        assert_eq!(display.interface.pixel_data_len(), 30 * 3 * 2);

        // Every streamed byte pair is the big-endian color
        let mut armed = false;
        for event in &display.interface.events {
            match event {
                Event::Command(cmd) => armed = *cmd == RAMWR,
                Event::Data(data) if armed => {
                    for pair in data.chunks_exact(2) {
                        assert_eq!(pair, &[0xA5, 0xC3]);
                    }
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_fill_rect_end_before_start_rejected_before_transport() {
        let mut display = test_display(Rotation::Rotate180);
        let result = display.fill_rect(10, 10, 5, 5, Color::WHITE);
        assert!(matches!(
            result,
            Err(Error::InvalidWindow {
                x0: 10,
                y0: 10,
                x1: 5,
                y1: 5
            })
        ));
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_fill_screen_covers_every_pixel() {
        let mut display = test_display(Rotation::Rotate180);
        display.fill_screen(Color::BLACK).unwrap();
        assert_eq!(display.interface.window_count(), 1);
        assert_eq!(display.interface.pixel_data_len(), 240 * 240 * 2);
    }

    #[test]
    fn test_draw_line_endpoints_and_connectivity() {
        let mut display = test_display(Rotation::Rotate180);
        display.draw_line(2, 3, 11, 7, Color::WHITE).unwrap();

        let pixels = display.interface.plotted_pixels();
        assert_eq!(pixels.first(), Some(&(2, 3)));
        assert_eq!(pixels.last(), Some(&(11, 7)));
        for pair in pixels.windows(2) {
            let dx = i32::from(pair[1].0) - i32::from(pair[0].0);
            let dy = i32::from(pair[1].1) - i32::from(pair[0].1);
            assert_eq!(dx.abs().max(dy.abs()), 1, "gap between {:?}", pair);
        }
    }

    #[test]
    fn test_draw_line_steep_and_reversed_connectivity() {
        let mut display = test_display(Rotation::Rotate180);
        display.draw_line(20, 30, 14, 9, Color::WHITE).unwrap();

        let pixels = display.interface.plotted_pixels();
        assert_eq!(pixels.first(), Some(&(20, 30)));
        assert_eq!(pixels.last(), Some(&(14, 9)));
        for pair in pixels.windows(2) {
            let dx = i32::from(pair[1].0) - i32::from(pair[0].0);
            let dy = i32::from(pair[1].1) - i32::from(pair[0].1);
            assert_eq!(dx.abs().max(dy.abs()), 1, "gap between {:?}", pair);
        }
    }

    #[test]
    fn test_horizontal_line_degenerates_to_one_window() {
        let mut display = test_display(Rotation::Rotate180);
        display.draw_line(9, 5, 2, 5, Color::WHITE).unwrap();
        // Single window, one pixel per column, coordinates normalized
        assert_eq!(display.interface.window_count(), 1);
        assert_eq!(display.interface.pixel_data_len(), 8 * 2);
    }

    #[test]
    fn test_draw_rect_outlines_four_edges() {
        let mut display = test_display(Rotation::Rotate180);
        display.draw_rect(10, 10, 20, 15, Color::WHITE).unwrap();
        // Four degenerate lines, each a single filled window
        assert_eq!(display.interface.window_count(), 4);
        let expected = 2 * (11 + 6);
        assert_eq!(display.interface.pixel_data_len(), expected * 2);
    }

    #[test]
    fn test_draw_circle_ring_tolerance_and_symmetry() {
        let mut display = test_display(Rotation::Rotate180);
        let (cx, cy, r) = (100i32, 90i32, 20i32);
        display.draw_circle(100, 90, 20, Color::WHITE).unwrap();

        let pixels = display.interface.plotted_pixels();
        assert!(!pixels.is_empty());
        for &(x, y) in &pixels {
            let dx = i32::from(x) - cx;
            let dy = i32::from(y) - cy;
            let d2 = dx * dx + dy * dy;
            assert!(d2 > (r - 1) * (r - 1), "({x}, {y}) inside the ring");
            assert!(d2 < (r + 1) * (r + 1), "({x}, {y}) outside the ring");
        }
        // Mirror symmetry across both axes through the center
        for &(x, y) in &pixels {
            let mirrored_x = ((2 * cx - i32::from(x)) as u16, y);
            let mirrored_y = (x, (2 * cy - i32::from(y)) as u16);
            assert!(pixels.contains(&mirrored_x));
            assert!(pixels.contains(&mirrored_y));
        }
    }

    #[test]
    fn test_draw_circle_touching_edge_rejected() {
        let mut display = test_display(Rotation::Rotate180);
        let result = display.draw_circle(5, 100, 10, Color::WHITE);
        assert!(matches!(result, Err(Error::OutOfBounds { x: 5, y: 100 })));
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_draw_image_trace() {
        let mut display = test_display(Rotation::Rotate180);
        let data = [0x11u8, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
        display.draw_image(10, 20, 2, 2, &data).unwrap();
        assert_eq!(
            display.interface.events,
            alloc::vec![
                Event::Command(CASET),
                Event::Data(alloc::vec![0x00, 10, 0x00, 11]),
                Event::Command(RASET),
                Event::Data(alloc::vec![0x00, 20, 0x00, 21]),
                Event::Command(RAMWR),
                Event::Data(data.to_vec()),
            ]
        );
    }

    #[test]
    fn test_draw_image_length_mismatch_rejected_before_transport() {
        let mut display = test_display(Rotation::Rotate180);
        let data = [0u8; 6];
        let result = display.draw_image(0, 0, 2, 2, &data);
        assert!(matches!(
            result,
            Err(Error::ImageSizeMismatch {
                expected: 8,
                provided: 6
            })
        ));
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_invert_colors() {
        let mut display = test_display(Rotation::Rotate180);
        display.invert_colors(true).unwrap();
        display.invert_colors(false).unwrap();
        assert_eq!(
            display.interface.events,
            alloc::vec![Event::Command(INVON), Event::Command(INVOFF)]
        );
    }

    #[test]
    fn test_tearing_effect_modes() {
        let mut display = test_display(Rotation::Rotate180);
        display.tearing_effect(TearingEffect::Vertical).unwrap();
        display
            .tearing_effect(TearingEffect::HorizontalAndVertical)
            .unwrap();
        display.tearing_effect(TearingEffect::Off).unwrap();
        assert_eq!(
            display.interface.events,
            alloc::vec![
                Event::Command(TEON),
                Event::Data(alloc::vec![0x00]),
                Event::Command(TEON),
                Event::Data(alloc::vec![0x01]),
                Event::Command(TEOFF),
            ]
        );
    }

    #[test]
    fn test_set_rotation_reprograms_madctl_and_offsets() {
        let mut display = test_display(Rotation::Rotate180);
        display.set_rotation(Rotation::Rotate90).unwrap();
        assert_eq!(
            display.interface.events,
            alloc::vec![
                Event::Command(MADCTL),
                Event::Data(alloc::vec![0xA0]),
            ]
        );

        display.interface.events.clear();
        display.draw_pixel(5, 10, Color::WHITE).unwrap();
        // Rotate90 shifts the column axis on a 240x240 panel
        assert_eq!(
            display.interface.events[1],
            Event::Data(alloc::vec![0x00, 85, 0x00, 85])
        );
    }

    #[test]
    fn test_init_trace_mode_2() {
        let mut display = test_display(Rotation::Rotate180);
        let mut delay = MockDelay::new();
        display.init(&mut delay).unwrap();

        let expected_prefix = [
            Event::Backlight(true),
            Event::Reset,
            Event::Command(COLMOD),
            Event::Data(alloc::vec![0x55]),
            Event::Command(PORCTRL),
            Event::Data(alloc::vec![0x0C, 0x0C, 0x00, 0x33, 0x33]),
            Event::Command(MADCTL),
            Event::Data(alloc::vec![0x00]),
            Event::Command(GCTRL),
            Event::Data(alloc::vec![0x35]),
            Event::Command(VCOMS),
            Event::Data(alloc::vec![0x19]),
            Event::Command(LCMCTRL),
            Event::Data(alloc::vec![0x2C]),
            Event::Command(VDVVRHEN),
            Event::Data(alloc::vec![0x01]),
            Event::Command(VRHS),
            Event::Data(alloc::vec![0x12]),
            Event::Command(VDVS),
            Event::Data(alloc::vec![0x20]),
            Event::Command(FRCTRL2),
            Event::Data(alloc::vec![0x0F]),
            Event::Command(PWCTRL1),
            Event::Data(alloc::vec![0xA4, 0xA1]),
            Event::Command(PVGAMCTRL),
            Event::Data(alloc::vec![
                0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
            ]),
            Event::Command(NVGAMCTRL),
            Event::Data(alloc::vec![
                0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
            ]),
            Event::Command(INVON),
            Event::Command(SLPOUT),
            Event::Command(NORON),
            Event::Command(DISPON),
            Event::Command(CASET),
            Event::Data(alloc::vec![0x00, 0x00, 0x00, 0xEF]),
            Event::Command(RASET),
            Event::Data(alloc::vec![0x00, 0x00, 0x00, 0xEF]),
            Event::Command(RAMWR),
        ];
        assert_eq!(
            &display.interface.events[..expected_prefix.len()],
            &expected_prefix
        );

        // The closing clear streams a full frame of white
        assert_eq!(display.interface.pixel_data_len(), 240 * 240 * 2);
        let mut armed = false;
        for event in &display.interface.events {
            match event {
                Event::Command(cmd) => armed = *cmd == RAMWR,
                Event::Data(data) if armed => {
                    assert!(data.iter().all(|byte| *byte == 0xFF));
                }
                _ => {}
            }
        }

        // Power-sequencing delays, in order
        assert_eq!(
            delay.delays_ms,
            alloc::vec![
                BACKLIGHT_STABILIZE_MS,
                SLEEP_SETTLE_MS,
                DISPLAY_ON_SETTLE_MS
            ]
        );
    }

    #[test]
    fn test_sleep_and_display_power_commands() {
        let mut display = test_display(Rotation::Rotate180);
        let mut delay = MockDelay::new();
        display.sleep_in(&mut delay).unwrap();
        display.sleep_out(&mut delay).unwrap();
        display.display_off().unwrap();
        display.display_on().unwrap();
        assert_eq!(
            display.interface.events,
            alloc::vec![
                Event::Command(SLPIN),
                Event::Command(SLPOUT),
                Event::Command(DISPOFF),
                Event::Command(DISPON),
            ]
        );
    }

    #[test]
    fn test_rotated_width_height() {
        let config = Builder::new()
            .dimensions(Dimensions::new(135, 240).unwrap())
            .rotation(Rotation::Rotate90)
            .build()
            .unwrap();
        let display = Display::new(MockInterface::new(), config);
        assert_eq!(display.width(), 240);
        assert_eq!(display.height(), 135);
    }
}
