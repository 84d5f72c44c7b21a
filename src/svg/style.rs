use std::fmt;

use crate::foundation::error::{DelicacyError, DelicacyResult};

/// Stable number formatting for markup: integers print without a fraction, everything else
/// with at most four decimals and no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        let i = rounded as i64;
        return i.to_string();
    }
    let s = format!("{rounded:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

fn check_opacity(opacity: f64) -> DelicacyResult<f64> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(DelicacyError::invalid_input(format!(
            "opacity {opacity} not in [0, 1]"
        )));
    }
    Ok(opacity)
}

/// `stroke-linecap` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    /// `butt`
    Butt,
    /// `square`
    Square,
    /// `round`
    Round,
}

impl LineCap {
    fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Square => "square",
            Self::Round => "round",
        }
    }
}

/// `fill-rule` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRule {
    /// `nonzero`
    NonZero,
    /// `evenodd`
    EvenOdd,
}

impl FillRule {
    fn as_str(self) -> &'static str {
        match self {
            Self::NonZero => "nonzero",
            Self::EvenOdd => "evenodd",
        }
    }
}

/// Stroke presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    color: String,
    opacity: f64,
    width: f64,
    linecap: Option<LineCap>,
}

impl Stroke {
    /// Opaque stroke of width 1.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            opacity: 1.0,
            width: 1.0,
            linecap: None,
        }
    }

    /// Set opacity; must lie in `[0, 1]`.
    pub fn opacity(mut self, opacity: f64) -> DelicacyResult<Self> {
        self.opacity = check_opacity(opacity)?;
        Ok(self)
    }

    /// Set stroke width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set line cap.
    pub fn linecap(mut self, cap: LineCap) -> Self {
        self.linecap = Some(cap);
        self
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stroke: {}; stroke-opacity: {}; stroke-width: {};",
            self.color,
            fmt_num(self.opacity),
            fmt_num(self.width)
        )?;
        if let Some(cap) = self.linecap {
            write!(f, " stroke-linecap: {};", cap.as_str())?;
        }
        Ok(())
    }
}

/// Fill presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    color: String,
    opacity: f64,
    rule: Option<FillRule>,
}

impl Fill {
    /// Opaque fill.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            opacity: 1.0,
            rule: None,
        }
    }

    /// `fill: none`.
    pub fn none() -> Self {
        Self::new("none")
    }

    /// Set opacity; must lie in `[0, 1]`.
    pub fn opacity(mut self, opacity: f64) -> DelicacyResult<Self> {
        self.opacity = check_opacity(opacity)?;
        Ok(self)
    }

    /// Set fill rule.
    pub fn rule(mut self, rule: FillRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fill: {}; fill-opacity: {};",
            self.color,
            fmt_num(self.opacity)
        )?;
        if let Some(rule) = self.rule {
            write!(f, " fill-rule: {};", rule.as_str())?;
        }
        Ok(())
    }
}

/// Either presentation, for [`crate::svg::scene::Element::styled`].
#[derive(Clone, Debug, PartialEq)]
pub enum Style {
    /// Stroke properties.
    Stroke(Stroke),
    /// Fill properties.
    Fill(Fill),
}

impl From<Stroke> for Style {
    fn from(v: Stroke) -> Self {
        Self::Stroke(v)
    }
}

impl From<Fill> for Style {
    fn from(v: Fill) -> Self {
        Self::Fill(v)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stroke(s) => s.fmt(f),
            Self::Fill(s) => s.fmt(f),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TransformOp {
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate(f64),
    RotateAbout(f64, f64, f64),
    SkewX(f64),
    SkewY(f64),
    Matrix([f64; 6]),
}

/// Ordered list of SVG transform functions, applied left to right as written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    /// Empty transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// `translate(x,y)`.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.ops.push(TransformOp::Translate(x, y));
        self
    }

    /// `scale(x,y)`.
    pub fn scale(mut self, x: f64, y: f64) -> Self {
        self.ops.push(TransformOp::Scale(x, y));
        self
    }

    /// `scale(s,s)`.
    pub fn scale_uniform(self, s: f64) -> Self {
        self.scale(s, s)
    }

    /// `rotate(angle)` in degrees.
    pub fn rotate(mut self, angle: f64) -> Self {
        self.ops.push(TransformOp::Rotate(angle));
        self
    }

    /// `rotate(angle,cx,cy)`.
    pub fn rotate_about(mut self, angle: f64, cx: f64, cy: f64) -> Self {
        self.ops.push(TransformOp::RotateAbout(angle, cx, cy));
        self
    }

    /// `skewX(angle)`.
    pub fn skew_x(mut self, angle: f64) -> Self {
        self.ops.push(TransformOp::SkewX(angle));
        self
    }

    /// `skewY(angle)`.
    pub fn skew_y(mut self, angle: f64) -> Self {
        self.ops.push(TransformOp::SkewY(angle));
        self
    }

    /// `matrix(a,b,c,d,e,f)`.
    pub fn matrix(mut self, m: [f64; 6]) -> Self {
        self.ops.push(TransformOp::Matrix(m));
        self
    }

    /// True if no function has been added.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *op {
                TransformOp::Translate(x, y) => {
                    write!(f, "translate({},{})", fmt_num(x), fmt_num(y))?
                }
                TransformOp::Scale(x, y) => write!(f, "scale({},{})", fmt_num(x), fmt_num(y))?,
                TransformOp::Rotate(a) => write!(f, "rotate({})", fmt_num(a))?,
                TransformOp::RotateAbout(a, x, y) => {
                    write!(f, "rotate({},{},{})", fmt_num(a), fmt_num(x), fmt_num(y))?
                }
                TransformOp::SkewX(a) => write!(f, "skewX({})", fmt_num(a))?,
                TransformOp::SkewY(a) => write!(f, "skewY({})", fmt_num(a))?,
                TransformOp::Matrix(m) => {
                    let parts: Vec<String> = m.iter().map(|v| fmt_num(*v)).collect();
                    write!(f, "matrix({})", parts.join(","))?
                }
            }
        }
        Ok(())
    }
}

/// Path `d` data built command by command. Upper-case methods are absolute, `_by` methods
/// relative.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    cmds: Vec<String>,
}

impl PathData {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, cmd: char, args: &[f64]) -> Self {
        let args: Vec<String> = args.iter().map(|v| fmt_num(*v)).collect();
        let mut out = String::new();
        out.push(cmd);
        for (i, pair) in args.chunks(2).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&pair.join(","));
        }
        self.cmds.push(out);
        self
    }

    /// `M x,y`
    pub fn move_to(self, x: f64, y: f64) -> Self {
        self.push('M', &[x, y])
    }

    /// `m dx,dy`
    pub fn move_by(self, dx: f64, dy: f64) -> Self {
        self.push('m', &[dx, dy])
    }

    /// `L x,y`
    pub fn line_to(self, x: f64, y: f64) -> Self {
        self.push('L', &[x, y])
    }

    /// `l dx,dy`
    pub fn line_by(self, dx: f64, dy: f64) -> Self {
        self.push('l', &[dx, dy])
    }

    /// `Q x1,y1 x,y`
    pub fn quad_to(self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        self.push('Q', &[x1, y1, x, y])
    }

    /// `q dx1,dy1 dx,dy`
    pub fn quad_by(self, dx1: f64, dy1: f64, dx: f64, dy: f64) -> Self {
        self.push('q', &[dx1, dy1, dx, dy])
    }

    /// `C x1,y1 x2,y2 x,y`
    pub fn cubic_to(self, c1: (f64, f64), c2: (f64, f64), to: (f64, f64)) -> Self {
        self.push('C', &[c1.0, c1.1, c2.0, c2.1, to.0, to.1])
    }

    /// `c dx1,dy1 dx2,dy2 dx,dy`
    pub fn cubic_by(self, c1: (f64, f64), c2: (f64, f64), to: (f64, f64)) -> Self {
        self.push('c', &[c1.0, c1.1, c2.0, c2.1, to.0, to.1])
    }

    /// `A rx,ry rotation large,sweep x,y`
    pub fn arc_to(
        self,
        radii: (f64, f64),
        rotation: f64,
        large: bool,
        sweep: bool,
        to: (f64, f64),
    ) -> Self {
        self.arc('A', radii, rotation, large, sweep, to)
    }

    /// `a rx,ry rotation large,sweep dx,dy`
    pub fn arc_by(
        self,
        radii: (f64, f64),
        rotation: f64,
        large: bool,
        sweep: bool,
        to: (f64, f64),
    ) -> Self {
        self.arc('a', radii, rotation, large, sweep, to)
    }

    fn arc(
        mut self,
        cmd: char,
        radii: (f64, f64),
        rotation: f64,
        large: bool,
        sweep: bool,
        to: (f64, f64),
    ) -> Self {
        self.cmds.push(format!(
            "{cmd}{},{} {} {},{} {},{}",
            fmt_num(radii.0),
            fmt_num(radii.1),
            fmt_num(rotation),
            u8::from(large),
            u8::from(sweep),
            fmt_num(to.0),
            fmt_num(to.1)
        ));
        self
    }

    /// `z`
    pub fn close(mut self) -> Self {
        self.cmds.push("z".to_owned());
        self
    }

    /// True if no command has been added.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cmds.join(" "))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/svg/style.rs"]
mod tests;
