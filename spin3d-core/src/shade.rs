/// Depth shading of `#rrggbb` colors
use nom::{
    bytes::complete::{tag, take_while_m_n},
    combinator::{all_consuming, map_res},
    sequence::tuple,
    IResult,
};
use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, Result};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lighten (positive depth) or darken (negative depth) the color.
    ///
    /// All channels move by the same offset `floor(depth / 4)` and saturate at
    /// 0 and 255, so the shading never changes the hue of gray colors.
    pub fn shade(self, depth: f64) -> Rgb {
        let offset = (depth / 4.0).floor() as i64;
        let channel = |c: u8| i64::from(c).saturating_add(offset).clamp(0, 255) as u8;
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match all_consuming(hex_color)(s) {
            Ok((_, rgb)) => Ok(rgb),
            Err(_) => Err(GeometryError::InvalidColor(s.to_string())),
        }
    }
}

fn hex_color(input: &str) -> IResult<&str, Rgb> {
    let (input, _) = tag("#")(input)?;
    let (input, (r, g, b)) = tuple((hex_channel, hex_channel, hex_channel))(input)?;
    Ok((input, Rgb::new(r, g, b)))
}

fn hex_channel(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |digits| {
        u8::from_str_radix(digits, 16)
    })(input)
}

/// Shade a `#rrggbb` color by a depth value, see [`Rgb::shade`].
pub fn shade(color: &str, depth: f64) -> Result<String> {
    Ok(color.parse::<Rgb>()?.shade(depth).to_string())
}
