use std::fmt;

use crate::foundation::error::{DelicacyError, DelicacyResult};

/// Hue is taken modulo this value.
pub const HUE_MAX: u16 = 360;
/// Upper bound (inclusive) for saturation.
pub const SAT_MAX: u8 = 100;
/// Upper bound (inclusive) for value.
pub const VAL_MAX: u8 = 100;

/// Integer HSV colour: hue in degrees `[0, 360)`, saturation and value in `[0, 100]`.
///
/// Deserialization goes through [`HsvColor::new`], so out-of-range input is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "HsvRepr")]
pub struct HsvColor {
    hue: u16,
    sat: u8,
    val: u8,
}

impl HsvColor {
    /// Validate and truncate a colour.
    ///
    /// Saturation and value outside `[0, 100]` are rejected; hue wraps modulo 360 (negative
    /// hues wrap upward). Fractional inputs truncate toward zero after wrapping.
    pub fn new(hue: f64, sat: f64, val: f64) -> DelicacyResult<Self> {
        if !(0.0..=f64::from(SAT_MAX)).contains(&sat) {
            return Err(DelicacyError::invalid_input(format!(
                "saturation {sat} not in [0, {SAT_MAX}]"
            )));
        }
        if !(0.0..=f64::from(VAL_MAX)).contains(&val) {
            return Err(DelicacyError::invalid_input(format!(
                "value {val} not in [0, {VAL_MAX}]"
            )));
        }
        if !hue.is_finite() {
            return Err(DelicacyError::invalid_input("hue must be finite"));
        }

        let hue = hue.rem_euclid(f64::from(HUE_MAX)) as u16 % HUE_MAX;
        Ok(Self {
            hue,
            sat: sat as u8,
            val: val as u8,
        })
    }

    /// Hue in degrees.
    pub fn hue(self) -> u16 {
        self.hue
    }

    /// Saturation in percent.
    pub fn sat(self) -> u8 {
        self.sat
    }

    /// Value in percent.
    pub fn val(self) -> u8 {
        self.val
    }

    /// 8-bit sRGB channels; each channel is truncated, not rounded.
    pub fn to_rgb(self) -> [u8; 3] {
        let h = f64::from(self.hue) / f64::from(HUE_MAX);
        let s = f64::from(self.sat) / f64::from(SAT_MAX);
        let v = f64::from(self.val) / f64::from(VAL_MAX);

        let (r, g, b) = hsv_to_rgb(h, s, v);
        let to_u8 = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
        [to_u8(r), to_u8(g), to_u8(b)]
    }

    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(serde::Deserialize)]
struct HsvRepr {
    hue: f64,
    sat: f64,
    val: f64,
}

impl TryFrom<HsvRepr> for HsvColor {
    type Error = DelicacyError;

    fn try_from(repr: HsvRepr) -> DelicacyResult<Self> {
        Self::new(repr.hue, repr.sat, repr.val)
    }
}

impl fmt::Display for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.hue, self.sat, self.val)
    }
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsv.rs"]
mod tests;
