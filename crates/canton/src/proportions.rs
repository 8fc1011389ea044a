//! Flag proportions and colors.
//!
//! All ratios are relative to a hoist (flag height) of 1.0 and are scaled
//! to drawing units by `scale`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CantonError;
use crate::select::SelectorConfig;

/// Number of horizontal stripes.
pub const STRIPE_COUNT: usize = 13;

/// Named flag ratios, relative to a unit hoist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagProportions {
    /// Hoist (flag height)
    pub hoist: f64,
    /// Fly (flag width)
    pub fly: f64,
    /// Canton height
    pub canton_height: f64,
    /// Canton width
    pub canton_width: f64,
    /// Height of one stripe
    pub stripe_width: f64,
    /// Diameter of the circle a star is inscribed in
    pub star_diameter: f64,
    /// Drawing units per hoist
    pub scale: f64,
}

impl Default for FlagProportions {
    fn default() -> Self {
        Self {
            hoist: 1.0,
            fly: 1.9,
            canton_height: 7.0 / 13.0,
            canton_width: 0.76,
            stripe_width: 1.0 / 13.0,
            star_diameter: 0.0616,
            scale: 1000.0,
        }
    }
}

impl FlagProportions {
    pub fn width(&self) -> f64 {
        self.fly * self.scale
    }

    pub fn height(&self) -> f64 {
        self.hoist * self.scale
    }

    pub fn canton_width_px(&self) -> f64 {
        self.canton_width * self.scale
    }

    pub fn canton_height_px(&self) -> f64 {
        self.canton_height * self.scale
    }

    pub fn stripe_height_px(&self) -> f64 {
        self.stripe_width * self.scale
    }

    /// Outer radius of a star in drawing units.
    pub fn star_radius_px(&self) -> f64 {
        self.star_diameter / 2.0 * self.scale
    }

    pub fn validate(&self) -> Result<(), CantonError> {
        let fields = [
            ("hoist", self.hoist),
            ("fly", self.fly),
            ("canton_height", self.canton_height),
            ("canton_width", self.canton_width),
            ("stripe_width", self.stripe_width),
            ("star_diameter", self.star_diameter),
            ("scale", self.scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CantonError::InvalidProportion { name, value });
            }
        }
        Ok(())
    }
}

/// Fill colors, as SVG color strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Top stripe and every other stripe after it
    pub red: String,
    /// The remaining stripes
    pub white: String,
    /// Canton background
    pub blue: String,
    /// Star fill
    pub star: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            red: "#B22234".to_string(),
            white: "#FFFFFF".to_string(),
            blue: "#3C3B6E".to_string(),
            star: "#FFFFFF".to_string(),
        }
    }
}

impl Palette {
    /// Stripe color for stripe `index` (0 = top).
    pub fn stripe(&self, index: usize) -> &str {
        if index % 2 == 0 { &self.red } else { &self.white }
    }

    pub fn validate(&self) -> Result<(), CantonError> {
        let fields = [
            ("red", &self.red),
            ("white", &self.white),
            ("blue", &self.blue),
            ("star", &self.star),
        ];
        for (name, value) in fields {
            if svgtypes::Color::from_str(value).is_err() {
                return Err(CantonError::InvalidColor { name, value: value.clone() });
            }
        }
        Ok(())
    }
}

/// Everything needed to select and draw a flag besides the star count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagSpec {
    pub proportions: FlagProportions,
    pub palette: Palette,
    pub selector: SelectorConfig,
}

impl FlagSpec {
    /// Check all ratios are positive and all colors parse.
    pub fn validate(&self) -> Result<(), CantonError> {
        self.proportions.validate()?;
        self.palette.validate()?;
        self.selector.validate()
    }
}
