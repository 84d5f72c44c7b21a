use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::foundation::math::linspace;
use crate::seed::stream::RandomStream;
use crate::svg::scene::Element;
use crate::svg::style::{Fill, PathData, Stroke, Transform};

/// `k` increasing random integers over `[start, end]`.
///
/// The interval is cut into `k` slots of width `(end - start) / k` (floored); the i-th value is
/// drawn uniformly from the closed i-th slot, so neighbours may coincide but never cross.
pub fn sorted_randspace(rng: &mut RandomStream, start: f64, end: f64, k: usize) -> Vec<i64> {
    if k == 0 {
        return Vec::new();
    }
    let mut lo = start as i64;
    let min_space = (end as i64 - lo).div_euclid(k as i64);
    (0..k)
        .map(|_| {
            let hi = lo + min_space;
            let v = rng.int_in(lo, hi);
            lo = hi;
            v
        })
        .collect()
}

/// Cartesian product of two evenly spaced axes, x-major.
pub fn linear_plane(
    xrange: (f64, f64),
    yrange: (f64, f64),
    xk: usize,
    yk: usize,
) -> Vec<(f64, f64)> {
    let ys = linspace(yrange.0, yrange.1, yk);
    linspace(xrange.0, xrange.1, xk)
        .into_iter()
        .flat_map(|x| ys.iter().map(move |&y| (x, y)))
        .collect()
}

/// [`linear_plane`] with each point kept independently with probability `rate`.
///
/// Draws exactly one float per grid point, in grid order.
pub fn rand_plane(
    rng: &mut RandomStream,
    xrange: (f64, f64),
    yrange: (f64, f64),
    xk: usize,
    yk: usize,
    rate: f64,
) -> DelicacyResult<Vec<(f64, f64)>> {
    if !(rate > 0.0 && rate <= 1.0) {
        return Err(DelicacyError::invalid_input(format!(
            "keep rate {rate} not in (0, 1]"
        )));
    }
    Ok(linear_plane(xrange, yrange, xk, yk)
        .into_iter()
        .filter(|_| rng.unit() < rate)
        .collect())
}

/// Basic shapes the makers scatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Axis-aligned square.
    Square,
    /// Equilateral triangle.
    Triangle,
    /// Circle.
    Circle,
    /// Diagonal cross.
    Cross,
}

impl ShapeKind {
    /// Every kind, in draw order.
    pub const ALL: [ShapeKind; 4] = [Self::Square, Self::Triangle, Self::Circle, Self::Cross];
}

/// Unstyled shape of size `side` anchored at `(x, y)`.
///
/// Circles are offset so `(x, y)` is their bounding-box corner, except on the axes where the
/// centre stays put.
pub fn make_shape(kind: ShapeKind, side: f64, x: f64, y: f64) -> Element {
    match kind {
        ShapeKind::Circle => {
            let radius = (side / 2.0).floor();
            let cx = if x != 0.0 { x + radius } else { x };
            let cy = if y != 0.0 { y + radius } else { y };
            Element::circle(radius, cx, cy)
        }
        ShapeKind::Square => Element::rect(x, y, side, side),
        ShapeKind::Triangle => {
            let half = (side / 2.0).floor();
            let rise = 60f64.to_radians().tan() * half;
            Element::path(
                &PathData::new()
                    .move_by(x, y)
                    .line_by(side, 0.0)
                    .line_by(-half, rise)
                    .close(),
            )
        }
        ShapeKind::Cross => Element::path(
            &PathData::new()
                .move_by(x, y)
                .line_by(side, side)
                .move_by(0.0, -side)
                .line_by(-side, side),
        ),
    }
}

/// Offsets for the copies of a fade: copy `i` moves `i * d` along one random diagonal
/// direction, with a fresh random magnitude per axis and copy.
pub fn spread_offsets(rng: &mut RandomStream, spread: (i64, i64), k: usize) -> Vec<(f64, f64)> {
    let dir = rng.choices(&[-1i64, 1], 2);
    let (sx, sy) = (dir.first().copied().unwrap_or(1), dir.get(1).copied().unwrap_or(1));
    (0..k)
        .map(|i| {
            let d = rng.ints_below(spread.0, spread.1, 2);
            let (dx, dy) = (d.first().copied().unwrap_or(0), d.get(1).copied().unwrap_or(0));
            let i = i as i64;
            ((i * sx * dx) as f64, (i * sy * dy) as f64)
        })
        .collect()
}

/// Parameters of [`fade`].
#[derive(Clone, Debug, PartialEq)]
pub struct FadeParams {
    /// Stroke colour of every copy.
    pub color: String,
    /// Uniform scale applied to the whole faded group.
    pub scale: f64,
    /// Number of copies.
    pub copies: usize,
    /// Translation of the whole faded group.
    pub location: (f64, f64),
    /// Rotation in degrees; `None` draws one from the stream.
    pub rotate: Option<f64>,
    /// Half-open range of per-copy offset magnitudes.
    pub spread: (i64, i64),
    /// Factor applied to stroke width and opacity after each copy.
    pub fading_scale: f64,
}

impl FadeParams {
    /// Defaults for everything but colour, scale, copies and location.
    pub fn new(color: impl Into<String>, scale: f64, copies: usize, location: (f64, f64)) -> Self {
        Self {
            color: color.into(),
            scale,
            copies,
            location,
            rotate: None,
            spread: (15, 25),
            fading_scale: 0.8,
        }
    }
}

/// Repeat `element` along a random direction with shrinking stroke width and opacity, then
/// translate, scale and rotate the whole group.
///
/// The element is defined once under `<defs>` and instanced with `<use>`; its id is taken from
/// the stream position so every fade in a scene gets a distinct one.
pub fn fade(rng: &mut RandomStream, element: Element, params: &FadeParams) -> DelicacyResult<Element> {
    let mut opacity = 1.0;
    let mut width = if params.copies <= 1 { 10.0 } else { 20.0 };
    let rotate = match params.rotate {
        Some(r) => r.rem_euclid(360.0),
        None => rng.int_in(0, 360) as f64,
    };

    let eid = rng.fingerprint();
    let mut faded =
        Element::group().child(Element::defs().child(Element::group().id(&eid).child(element)));

    for (dx, dy) in spread_offsets(rng, params.spread, params.copies) {
        let stroke = Stroke::new(params.color.as_str())
            .opacity(opacity)?
            .width(width);
        faded.append(Element::use_ref(&eid, dx, dy).styled(&[stroke.into(), Fill::none().into()]));

        width *= params.fading_scale;
        opacity *= params.fading_scale;
    }

    let transform = Transform::new()
        .translate(params.location.0, params.location.1)
        .scale_uniform(params.scale)
        .rotate(rotate);
    faded.transform(&transform)
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/helpers.rs"]
mod tests;
