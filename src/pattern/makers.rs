use std::fmt;

use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::foundation::math::linspace;
use crate::pattern::helpers::{
    FadeParams, ShapeKind, fade, make_shape, rand_plane, sorted_randspace,
};
use crate::seed::stream::RandomStream;
use crate::svg::scene::{Element, Scene};
use crate::svg::style::{Fill, LineCap, Stroke, Transform};

/// Largest density accepted on either axis.
pub const MAX_DENSITY: usize = 1024;

/// Canvas size and optional density overrides for one maker call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MakerArgs {
    /// Canvas width in user units.
    pub width: f64,
    /// Canvas height in user units.
    pub height: f64,
    /// Horizontal density, at most [`MAX_DENSITY`]; each maker has its own default.
    pub x_density: Option<usize>,
    /// Vertical density, at most [`MAX_DENSITY`]; each maker has its own default.
    pub y_density: Option<usize>,
}

impl MakerArgs {
    /// Canvas of `width × height` with maker-default densities.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            x_density: None,
            y_density: None,
        }
    }

    /// Override both densities.
    pub fn with_density(mut self, x: usize, y: usize) -> Self {
        self.x_density = Some(x);
        self.y_density = Some(y);
        self
    }

    fn validate(&self, colors: &[String]) -> DelicacyResult<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(DelicacyError::invalid_input(format!(
                "canvas {}x{} must be positive",
                self.width, self.height
            )));
        }
        if colors.is_empty() {
            return Err(DelicacyError::invalid_input("maker needs at least one colour"));
        }
        Ok(())
    }

    fn densities(&self, x: usize, y: usize) -> DelicacyResult<(usize, usize)> {
        let d = (self.x_density.unwrap_or(x), self.y_density.unwrap_or(y));
        if d.0 == 0 || d.1 == 0 {
            return Err(DelicacyError::invalid_input("densities must be positive"));
        }
        if d.0 > MAX_DENSITY || d.1 > MAX_DENSITY {
            return Err(DelicacyError::invalid_input(format!(
                "densities {}x{} exceed {MAX_DENSITY}",
                d.0, d.1
            )));
        }
        Ok(d)
    }
}

/// Signature shared by every pattern maker.
pub type MakerFn = fn(&MakerArgs, &[String], &mut RandomStream) -> DelicacyResult<Scene>;

/// A named, registered pattern maker.
#[derive(Clone, Copy)]
pub struct Maker {
    name: &'static str,
    func: MakerFn,
}

impl Maker {
    /// Registered name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Draw a scene with `colors`, consuming draws from `rng`.
    pub fn build(
        &self,
        args: &MakerArgs,
        colors: &[String],
        rng: &mut RandomStream,
    ) -> DelicacyResult<Scene> {
        args.validate(colors)?;
        (self.func)(args, colors, rng)
    }
}

impl fmt::Debug for Maker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maker").field("name", &self.name).finish()
    }
}

fn pick_color(rng: &mut RandomStream, colors: &[String]) -> DelicacyResult<String> {
    rng.choose(colors)
        .cloned()
        .ok_or_else(|| DelicacyError::invalid_input("maker needs at least one colour"))
}

/// Horizontal round-capped strokes on evenly spaced rows.
///
/// Each of `y_density` (default 32) rows gets between 1 and `x_density` (default 8)
/// non-overlapping segments.
pub fn reah(args: &MakerArgs, colors: &[String], rng: &mut RandomStream) -> DelicacyResult<Scene> {
    let (xd, yd) = args.densities(8, 32)?;
    let mut scene = Scene::new(args.width, args.height);
    let linewidth = (args.height * 6.5 / 512.0).floor();

    for y in linspace(0.0, args.height, yd) {
        let n = rng.int_in(1, xd as i64) as usize;
        let xs = sorted_randspace(rng, 0.0, args.width, n * 2);
        for pair in xs.chunks_exact(2) {
            let stroke = Stroke::new(pick_color(rng, colors)?)
                .width(linewidth)
                .linecap(LineCap::Round);
            scene.append(
                Element::line(pair[0] as f64, y, pair[1] as f64, y).styled(&[stroke.into()]),
            );
        }
    }
    Ok(scene)
}

/// Scattered outlined shapes, each repeated once or three times with a fading trail.
///
/// Rows come from `y_density` (default 12) evenly spaced heights; columns from `x_density`
/// (default 6) slotted random positions per row.
pub fn dione(args: &MakerArgs, colors: &[String], rng: &mut RandomStream) -> DelicacyResult<Scene> {
    let (xd, yd) = args.densities(6, 12)?;
    let mut scene = Scene::new(args.width, args.height);
    let scale_lo = (args.width * 12.0 / 512.0).floor() as i64;
    let scale_hi = (args.width * 24.0 / 512.0).floor() as i64;

    for y in linspace(0.0, args.height, yd) {
        for x in sorted_randspace(rng, 0.0, args.width, xd) {
            let kind = rng
                .choose(&ShapeKind::ALL)
                .copied()
                .unwrap_or(ShapeKind::Square);
            let color = pick_color(rng, colors)?;
            let scale = rng.int_in(scale_lo, scale_hi) as f64 / 100.0;
            let copies = rng.choose(&[1usize, 3]).copied().unwrap_or(1);

            let params = FadeParams::new(color, scale, copies, (x as f64, y));
            scene.append(fade(rng, make_shape(kind, 120.0, 0.0, 0.0), &params)?);
        }
    }
    Ok(scene)
}

/// Random dots in one quadrant, mirrored into the other three.
///
/// The motif occupies the largest centred square; on a non-square canvas it is offset into
/// the middle.
pub fn tethys(args: &MakerArgs, colors: &[String], rng: &mut RandomStream) -> DelicacyResult<Scene> {
    let (xd, yd) = args.densities(10, 10)?;
    let side = args.width.min(args.height);
    let offset = (side * 20.0 / 512.0).floor();
    let radius = (side * 6.0 / 512.0).floor();
    let range = (offset, (side / 2.0).floor() - offset);

    let points = rand_plane(rng, range, range, xd, yd, 0.6)?;
    let cid = rng.fingerprint();
    let mut quadrant = Element::group().id(&cid);
    for (x, y) in points {
        let color = pick_color(rng, colors)?;
        quadrant.append(
            Element::circle(radius, x, y)
                .styled(&[Stroke::new(color.as_str()).into(), Fill::new(color).into()]),
        );
    }

    let mut motif = vec![quadrant];
    for ((tx, ty), (sx, sy)) in [
        ((0.0, side), (1.0, -1.0)),
        ((side, 0.0), (-1.0, 1.0)),
        ((side, side), (-1.0, -1.0)),
    ] {
        let mirror = Transform::new().translate(tx, ty).scale(sx, sy);
        motif.push(Element::use_ref(&cid, 0.0, 0.0).transform(&mirror)?);
    }

    let mut scene = Scene::new(args.width, args.height);
    if args.width == args.height {
        for element in motif {
            scene.append(element);
        }
    } else {
        let centre = Transform::new().translate(
            ((args.width - side) / 2.0).floor(),
            ((args.height - side) / 2.0).floor(),
        );
        let wrapped = motif
            .into_iter()
            .fold(Element::group(), Element::child)
            .transform(&centre)?;
        scene.append(wrapped);
    }
    Ok(scene)
}

/// Immutable name → maker table.
#[derive(Clone, Debug)]
pub struct MakerRegistry {
    entries: Vec<Maker>,
}

impl MakerRegistry {
    /// Registry with no makers.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// `reah`, `dione` and `tethys`.
    pub fn builtin() -> Self {
        let entries = [("reah", reah as MakerFn), ("dione", dione), ("tethys", tethys)]
            .into_iter()
            .map(|(name, func)| Maker { name, func })
            .collect();
        Self { entries }
    }

    /// Add a maker. Names must be unique.
    pub fn register(&mut self, name: &'static str, func: MakerFn) -> DelicacyResult<()> {
        if self.entries.iter().any(|m| m.name == name) {
            return Err(DelicacyError::invalid_input(format!(
                "maker '{name}' is already registered"
            )));
        }
        self.entries.push(Maker { name, func });
        Ok(())
    }

    /// Look up a registered maker.
    pub fn get(&self, name: &str) -> DelicacyResult<Maker> {
        self.entries
            .iter()
            .find(|m| m.name == name)
            .copied()
            .ok_or_else(|| DelicacyError::invalid_input(format!("unknown maker '{name}'")))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|m| m.name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/makers.rs"]
mod tests;
