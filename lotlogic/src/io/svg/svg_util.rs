use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::geometry::primitives::{Point, SPolygon};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgPlanTheme,
    ///Draw the setback envelope
    #[serde(default = "default_true")]
    pub setback_envelope: bool,
    ///Draw the per-side length labels
    #[serde(default = "default_true")]
    pub edge_labels: bool,
    ///Highlight the front edge of the house and the frontage midpoint
    #[serde(default = "default_true")]
    pub highlight_frontage: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgPlanTheme::default(),
            setback_envelope: true,
            edge_labels: true,
            highlight_frontage: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgPlanTheme {
    pub stroke_width_multiplier: f64,
    pub parcel_fill: Color,
    pub setback_stroke: Color,
    pub fsr_fill: Color,
    pub house_fill: Color,
    pub frontage_color: Color,
    /// Fill of a house that does not fit its envelope
    pub overflow_fill: Color,
}

impl Default for SvgPlanTheme {
    fn default() -> Self {
        SvgPlanTheme::EARTH_TONES
    }
}

impl SvgPlanTheme {
    pub const EARTH_TONES: SvgPlanTheme = SvgPlanTheme {
        stroke_width_multiplier: 2.0,
        parcel_fill: Color(0xCC, 0x82, 0x4A),
        setback_stroke: Color(0x2D, 0x2D, 0x2D),
        fsr_fill: Color(0xC7, 0xA9, 0x00),
        house_fill: Color(0xFF, 0xC8, 0x79),
        frontage_color: Color(0x00, 0x80, 0xFF),
        overflow_fill: Color(0xFF, 0x00, 0x00),
    };

    pub const GRAY: SvgPlanTheme = SvgPlanTheme {
        stroke_width_multiplier: 2.5,
        parcel_fill: Color(0xD3, 0xD3, 0xD3),
        setback_stroke: Color(0x63, 0x63, 0x63),
        fsr_fill: Color(0xA9, 0xA9, 0xA9),
        house_fill: Color(0x7A, 0x7A, 0x7A),
        frontage_color: Color(0x00, 0x00, 0x00),
        overflow_fill: Color(0xD0, 0x00, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Color {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            s.len() == 6 && s.is_ascii(),
            "color must be formatted as #RRGGBB, got {s}"
        );
        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// SVG's y-axis points down, the metric plane's y-axis points north
pub fn svg_point(Point(x, y): Point) -> (f64, f64) {
    (x, -y)
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to(svg_point(s_poly.vertex(0)));
    for i in 1..s_poly.n_vertices() {
        data = data.line_to(svg_point(s_poly.vertex(i)));
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
