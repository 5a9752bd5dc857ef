use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Text, Title};

use crate::geometry::geo_traits::Shape;
use crate::io::svg::svg_util::{self, SvgDrawOptions, svg_point};
use crate::planning::SitePlan;
use crate::projection::Projection;

/// Draws a [`SitePlan`] in its metric plane: parcel, envelopes, house, frontage and edge labels.
pub fn plan_to_svg(plan: &SitePlan, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;
    let bbox = plan.parcel.bbox();
    let vbox = bbox.scale(1.20);
    let size = f64::min(bbox.width(), bbox.height());

    let stroke_width = size * 0.002 * theme.stroke_width_multiplier;
    let font_size = size * 0.03;

    let header = {
        let content = format!(
            "lot: {:.1} m² | fsr envelope: {} | house: {} | {}",
            plan.lot_area,
            plan.fsr_envelope
                .as_ref()
                .map_or("-".to_string(), |e| format!("{:.1} m²", e.area)),
            plan.house
                .as_ref()
                .map_or("-".to_string(), |h| format!("{:.1} m²", h.area)),
            title
        );
        Text::new(content)
            .set("x", vbox.x_min)
            .set("y", -vbox.y_max + font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let parcel_group = Group::new()
        .set("id", "parcel")
        .add(svg_util::data_to_path(
            svg_util::simple_polygon_data(&plan.parcel),
            &[
                ("fill", &*theme.parcel_fill.to_string()),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!("parcel, area: {:.2} m²", plan.lot_area)));

    let mut envelope_group = Group::new().set("id", "envelopes");
    if let Some(fsr) = &plan.fsr_envelope {
        envelope_group = envelope_group.add(
            svg_util::data_to_path(
                svg_util::simple_polygon_data(&fsr.polygon),
                &[
                    ("fill", &*theme.fsr_fill.to_string()),
                    ("fill-opacity", "0.5"),
                    ("stroke", "none"),
                ],
            )
            .add(Title::new(format!("fsr envelope, area: {:.2} m²", fsr.area))),
        );
    }
    if let (true, Some(setback)) = (options.setback_envelope, &plan.setback_envelope) {
        envelope_group = envelope_group.add(
            svg_util::data_to_path(
                svg_util::simple_polygon_data(&setback.polygon),
                &[
                    ("fill", "none"),
                    ("stroke", &*theme.setback_stroke.to_string()),
                    ("stroke-width", &*format!("{stroke_width}")),
                    (
                        "stroke-dasharray",
                        &*format!("{} {}", 3.0 * stroke_width, 2.0 * stroke_width),
                    ),
                ],
            )
            .add(Title::new(format!(
                "setback envelope, area: {:.2} m²",
                setback.area
            ))),
        );
    }

    let mut house_group = Group::new().set("id", "house");
    if let Some(house) = &plan.house {
        let fill = match house.outcome.is_contained() {
            true => theme.house_fill,
            false => theme.overflow_fill,
        };
        house_group = house_group.add(
            svg_util::data_to_path(
                svg_util::simple_polygon_data(&house.polygon),
                &[
                    ("fill", &*fill.to_string()),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            )
            .add(Title::new(format!(
                "{} ({}), area: {:.2} m², bearing: {:.1}°, rotation: {}°, {:?}",
                house.title,
                house.design_id,
                house.area,
                house.bearing,
                house.rotation.degrees(),
                house.outcome
            ))),
        );
        if options.highlight_frontage {
            let front = Data::new()
                .move_to(svg_point(house.polygon.vertex(0)))
                .line_to(svg_point(house.polygon.vertex(1)));
            house_group = house_group.add(svg_util::data_to_path(
                front,
                &[
                    ("fill", "none"),
                    ("stroke", &*theme.frontage_color.to_string()),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ));
        }
    }

    let mut marker_group = Group::new().set("id", "markers");
    if options.highlight_frontage {
        let (cx, cy) = svg_point(plan.projection.project(plan.frontage_midpoint));
        marker_group = marker_group.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", 3.0 * stroke_width)
                .set("fill", theme.frontage_color.to_string())
                .add(Title::new("frontage midpoint")),
        );
    }
    if options.edge_labels {
        for label in &plan.edge_labels {
            let (x, y) = svg_point(plan.projection.project(label.position));
            marker_group = marker_group.add(
                Text::new(label.text.clone())
                    .set("x", x)
                    .set("y", y)
                    .set("font-size", 0.8 * font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle"),
            );
        }
    }

    Document::new()
        .set(
            "viewBox",
            (vbox.x_min, -vbox.y_max, vbox.width(), vbox.height()),
        )
        .add(parcel_group)
        .add(envelope_group)
        .add(house_group)
        .add(marker_group)
        .add(header)
}
