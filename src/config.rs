//! Display configuration types and builder

use crate::color::Color;

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions in the panel's native (unrotated) orientation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS (240)
    /// - height == 0 or height > MAX_ROWS (320)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Display configuration
///
/// This struct holds all configurable parameters for the ST7789 controller.
/// The register defaults are the reference values for the common 240x240
/// panel module; override them through [`Builder`] for other panels.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions (native orientation)
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Porch setting (5 bytes for command 0xB2)
    pub porch_control: [u8; 5],
    /// Gate control (VGH/VGL) register value
    pub gate_control: u8,
    /// VCOM register value
    pub vcom: u8,
    /// LCM control register value
    pub lcm_control: u8,
    /// VDV/VRH command enable register value
    pub vdv_vrh_enable: u8,
    /// VRH register value
    pub vrh: u8,
    /// VDV register value
    pub vdv: u8,
    /// Frame rate control register value
    pub frame_rate: u8,
    /// Power control 1 values (2 bytes for command 0xD0)
    pub power_control: [u8; 2],
    /// Positive gamma correction curve (14 bytes for command 0xE0)
    pub gamma_positive: [u8; 14],
    /// Negative gamma correction curve (14 bytes for command 0xE1)
    pub gamma_negative: [u8; 14],
    /// Whether to enable display inversion during init (panel wiring dependent)
    pub invert_colors: bool,
    /// Color used to clear the undefined power-on frame memory at the end of init
    pub clear_color: Color,
}

impl Config {
    /// Get the logical dimensions after rotation
    ///
    /// Rotations 90 and 270 exchange the roles of rows and columns.
    pub fn rotated_dimensions(&self) -> Dimensions {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions,
            Rotation::Rotate90 | Rotation::Rotate270 => Dimensions {
                width: self.dimensions.height,
                height: self.dimensions.width,
            },
        }
    }

    /// Get the (x, y) offset applied to the address window for the current rotation
    pub fn window_offset(&self) -> (u16, u16) {
        crate::rotation::window_offset(self.rotation, self.dimensions)
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7789_lcd::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(240, 240) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate180).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Porch setting (5 bytes for command 0xB2)
    porch_control: [u8; 5],
    /// Gate control register value
    gate_control: u8,
    /// VCOM register value
    vcom: u8,
    /// LCM control register value
    lcm_control: u8,
    /// VDV/VRH command enable register value
    vdv_vrh_enable: u8,
    /// VRH register value
    vrh: u8,
    /// VDV register value
    vdv: u8,
    /// Frame rate control register value
    frame_rate: u8,
    /// Power control 1 values
    power_control: [u8; 2],
    /// Positive gamma correction curve
    gamma_positive: [u8; 14],
    /// Negative gamma correction curve
    gamma_negative: [u8; 14],
    /// Whether to enable display inversion during init
    invert_colors: bool,
    /// Color used to clear the frame memory at the end of init
    clear_color: Color,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            // Porch timing from the controller configuration guide
            porch_control: [0x0C, 0x0C, 0x00, 0x33, 0x33],
            gate_control: 0x35,
            vcom: 0x19,
            lcm_control: 0x2C,
            vdv_vrh_enable: 0x01,
            vrh: 0x12,
            vdv: 0x20,
            frame_rate: 0x0F,
            power_control: [0xA4, 0xA1],
            // Reference gamma curves for the 240x240 panel module
            gamma_positive: [
                0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
            ],
            gamma_negative: [
                0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
            ],
            // The common 240x240 module needs inversion for correct colors
            invert_colors: true,
            clear_color: Color::WHITE,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set porch timing parameters
    pub fn porch_control(mut self, values: [u8; 5]) -> Self {
        self.porch_control = values;
        self
    }

    /// Set gate control (VGH/VGL) value
    pub fn gate_control(mut self, value: u8) -> Self {
        self.gate_control = value;
        self
    }

    /// Set VCOM value
    pub fn vcom(mut self, value: u8) -> Self {
        self.vcom = value;
        self
    }

    /// Set LCM control value
    pub fn lcm_control(mut self, value: u8) -> Self {
        self.lcm_control = value;
        self
    }

    /// Set VDV/VRH command enable value
    pub fn vdv_vrh_enable(mut self, value: u8) -> Self {
        self.vdv_vrh_enable = value;
        self
    }

    /// Set VRH value
    pub fn vrh(mut self, value: u8) -> Self {
        self.vrh = value;
        self
    }

    /// Set VDV value
    pub fn vdv(mut self, value: u8) -> Self {
        self.vdv = value;
        self
    }

    /// Set normal-mode frame rate control value
    pub fn frame_rate(mut self, value: u8) -> Self {
        self.frame_rate = value;
        self
    }

    /// Set power control 1 values
    pub fn power_control(mut self, values: [u8; 2]) -> Self {
        self.power_control = values;
        self
    }

    /// Set the positive gamma correction curve
    pub fn gamma_positive(mut self, values: [u8; 14]) -> Self {
        self.gamma_positive = values;
        self
    }

    /// Set the negative gamma correction curve
    pub fn gamma_negative(mut self, values: [u8; 14]) -> Self {
        self.gamma_negative = values;
        self
    }

    /// Set whether display inversion is enabled during init
    ///
    /// Most 240x240 ST7789 modules require inversion on; some panels are
    /// wired the other way.
    pub fn invert_colors(mut self, value: bool) -> Self {
        self.invert_colors = value;
        self
    }

    /// Set the color used to clear the frame memory at the end of init
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            porch_control: self.porch_control,
            gate_control: self.gate_control,
            vcom: self.vcom,
            lcm_control: self.lcm_control,
            vdv_vrh_enable: self.vdv_vrh_enable,
            vrh: self.vrh,
            vdv: self.vdv,
            frame_rate: self.frame_rate,
            power_control: self.power_control,
            gamma_positive: self.gamma_positive,
            gamma_negative: self.gamma_negative,
            invert_colors: self.invert_colors,
            clear_color: self.clear_color,
        })
    }
}
