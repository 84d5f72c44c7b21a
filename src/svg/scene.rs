use std::fmt::{self, Write as _};

use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::svg::style::{PathData, Style, Transform, fmt_num};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// One SVG element with ordered attributes and children.
///
/// Built by value: every setter consumes and returns `self` so shapes read as one chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Bare element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `<line>` from `(x1, y1)` to `(x2, y2)`.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new("line")
            .attr("x1", fmt_num(x1))
            .attr("y1", fmt_num(y1))
            .attr("x2", fmt_num(x2))
            .attr("y2", fmt_num(y2))
    }

    /// `<rect>` with top-left corner `(x, y)`.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new("rect")
            .attr("x", fmt_num(x))
            .attr("y", fmt_num(y))
            .attr("width", fmt_num(width))
            .attr("height", fmt_num(height))
    }

    /// `<circle>` of radius `r` centred on `(cx, cy)`.
    pub fn circle(r: f64, cx: f64, cy: f64) -> Self {
        Self::new("circle")
            .attr("cx", fmt_num(cx))
            .attr("cy", fmt_num(cy))
            .attr("r", fmt_num(r))
    }

    /// `<polygon>` through `points`.
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        let pts: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
            .collect();
        Self::new("polygon").attr("points", pts.join(" "))
    }

    /// `<path>` with data `d`.
    pub fn path(d: &PathData) -> Self {
        Self::new("path").attr("d", d)
    }

    /// Empty `<g>`.
    pub fn group() -> Self {
        Self::new("g")
    }

    /// Empty `<defs>`.
    pub fn defs() -> Self {
        Self::new("defs")
    }

    /// Empty `<symbol>`.
    pub fn symbol() -> Self {
        Self::new("symbol")
    }

    /// `<use>` referencing the element with `id`, placed at `(x, y)`.
    pub fn use_ref(id: &str, x: f64, y: f64) -> Self {
        Self::new("use")
            .attr("xlink:href", format!("#{id}"))
            .attr("x", fmt_num(x))
            .attr("y", fmt_num(y))
    }

    /// Set an attribute, replacing any previous value of the same name.
    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set `id`.
    pub fn id(self, id: impl fmt::Display) -> Self {
        self.attr("id", id)
    }

    /// Replace the `style` attribute with the given presentations, in order.
    pub fn styled(self, styles: &[Style]) -> Self {
        let parts: Vec<String> = styles.iter().map(ToString::to_string).collect();
        self.attr("style", parts.join(" "))
    }

    /// Set `transform`. An empty transform is rejected.
    pub fn transform(self, transform: &Transform) -> DelicacyResult<Self> {
        if transform.is_empty() {
            return Err(DelicacyError::invalid_input("empty transform"));
        }
        Ok(self.attr("transform", transform))
    }

    /// Append a child and return `self`.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child in place.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_attr(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Root `<svg>` canvas of fixed size. Makers append into it; nothing reads it back.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    width: f64,
    height: f64,
    children: Vec<Element>,
}

impl Scene {
    /// Empty canvas.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            children: Vec::new(),
        }
    }

    /// Canvas width in user units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in user units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Append a top-level element.
    pub fn append(&mut self, element: Element) {
        self.children.push(element);
    }

    /// Top-level elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Number of top-level elements.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serialize to SVG markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        let _ = write!(
            out,
            "<svg xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        );
        for child in &self.children {
            child.write_markup(&mut out);
        }
        out.push_str("</svg>");
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/svg/scene.rs"]
mod tests;
