//! SVG route rendering.

use std::fmt::Write;

use crate::models::{CostModel, RouteResult};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 400.0;
const MARGIN: f64 = 80.0;
const POINT_RADIUS: f64 = 20.0;

/// Renders a route as an SVG diagram.
///
/// Points are laid out evenly on a circle; every leg of the route is drawn
/// as a line with its travel time labelled beside the midpoint, offset
/// perpendicular to the line so it does not sit on top of it. A title line
/// across the top spells out the full route.
///
/// The renderer only builds the document string; writing it to a file is
/// the caller's concern.
///
/// # Examples
///
/// ```
/// use delivery_routing::io::parse_model;
/// use delivery_routing::render::render_svg;
/// use delivery_routing::solver::nearest_neighbor;
///
/// let model = parse_model("A,B\n0,4\n4,0\n").expect("well-formed");
/// let route = nearest_neighbor(&model, 0).expect("valid start");
/// let svg = render_svg(&model, &route);
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("A → B → A"));
/// ```
pub fn render_svg(model: &CostModel, route: &RouteResult) -> String {
    let n = model.len();
    let positions = circle_positions(n);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg width=\"{WIDTH}\" height=\"{HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\">"
    );

    // Route legs with their travel times.
    let _ = writeln!(svg, "<g stroke=\"#5A6ACF\" stroke-width=\"2\">");
    for leg in route.sequence().windows(2) {
        let (from, to) = (leg[0], leg[1]);
        let (x1, y1) = positions[from];
        let (x2, y2) = positions[to];
        let _ = writeln!(
            svg,
            "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" />"
        );

        // Time label at the midpoint, nudged off the line.
        let angle = (y2 - y1).atan2(x2 - x1);
        let label_x = (x1 + x2) / 2.0 + 10.0 * angle.sin();
        let label_y = (y1 + y2) / 2.0 - 10.0 * angle.cos();
        let _ = writeln!(
            svg,
            "<text x=\"{label_x:.1}\" y=\"{label_y:.1}\" fill=\"black\" \
             text-anchor=\"middle\" font-size=\"12\">{}</text>",
            model.time(from, to)
        );
    }
    let _ = writeln!(svg, "</g>");

    // Points on top of the legs.
    let _ = writeln!(svg, "<g font-family=\"Arial\" font-size=\"14\">");
    for (i, &(x, y)) in positions.iter().enumerate() {
        let _ = writeln!(
            svg,
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{POINT_RADIUS}\" \
             fill=\"#E6F7FF\" stroke=\"#1890FF\" stroke-width=\"2\" />"
        );
        let _ = writeln!(
            svg,
            "<text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" \
             font-weight=\"bold\">{}</text>",
            y + 5.0,
            model.label(i)
        );
    }
    let _ = writeln!(svg, "</g>");

    let title = route
        .sequence()
        .iter()
        .map(|&i| model.label(i))
        .collect::<Vec<_>>()
        .join(" → ");
    let _ = writeln!(
        svg,
        "<text x=\"{:.0}\" y=\"20\" text-anchor=\"middle\" font-family=\"Arial\" \
         font-size=\"16\" font-weight=\"bold\">Route: {title}</text>",
        WIDTH / 2.0
    );

    svg.push_str("</svg>\n");
    svg
}

/// Evenly spaced positions on a circle inside the canvas.
fn circle_positions(n: usize) -> Vec<(f64, f64)> {
    let angle_step = 2.0 * std::f64::consts::PI / n as f64;
    (0..n)
        .map(|i| {
            let angle = i as f64 * angle_step;
            let x = WIDTH / 2.0 + (WIDTH / 2.0 - MARGIN) * angle.cos();
            let y = HEIGHT / 2.0 + (HEIGHT / 2.0 - MARGIN) * angle.sin();
            (x, y)
        })
        .collect()
}
