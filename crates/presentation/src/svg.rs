use charts::{circumference, stroke_color, ANCHOR_ROTATION_DEG};
use configuration::ChartConfig;
use core_types::ArcDescriptor;

/// Escapes text for use in XML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The tooltip text of a segment, e.g. `Equity • 65%` or `Invested • 51.6%`.
///
/// Percents are rounded to one decimal place.
pub fn segment_label(arc: &ArcDescriptor) -> String {
    let percent = (arc.percent * 10.0).round() / 10.0;
    format!("{} • {}%", arc.label, percent)
}

/// Draws laid-out arcs as a standalone SVG donut.
///
/// Every arc is a full circle stroked with a single dash of its arc length,
/// shifted along the ring by its rotation offset. One group rotation puts the
/// start of the first arc at 12 o'clock.
pub fn render_donut_svg(arcs: &[ArcDescriptor], chart: &ChartConfig, center_label: &str) -> String {
    tracing::debug!(arcs = arcs.len(), "Rendering donut SVG.");
    let c = chart.center;
    let size = c * 2.0;
    let ring = circumference(chart.radius);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#
    );
    svg.push('\n');
    svg.push_str(&format!(r#"  <g transform="rotate({ANCHOR_ROTATION_DEG} {c} {c})">"#));
    svg.push('\n');
    for arc in arcs {
        svg.push_str(&format!(
            r#"    <circle cx="{c}" cy="{c}" r="{r}" fill="none" stroke="{stroke}" stroke-width="{width}" stroke-dasharray="{dash:.3} {gap:.3}" stroke-dashoffset="{offset:.3}" class="donut-segment" data-label="{label}"/>"#,
            r = chart.radius,
            stroke = stroke_color(arc.color),
            width = chart.stroke_width,
            dash = arc.arc_length,
            gap = (ring - arc.arc_length).max(0.0),
            offset = arc.rotation_offset,
            label = escape_xml(&segment_label(arc)),
        ));
        svg.push('\n');
    }
    svg.push_str("  </g>\n");
    svg.push_str(&format!(
        r#"  <text x="{c}" y="{c}" text-anchor="middle" dominant-baseline="middle" font-size="14" font-weight="600">{}</text>"#,
        escape_xml(center_label)
    ));
    svg.push_str("\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts::layout_donut;
    use core_types::AllocationSlice;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn one_circle_per_arc_inside_a_single_rotated_group() {
        let chart = ChartConfig::default();
        let slices = [AllocationSlice::new("Invested", 60.0), AllocationSlice::new("Returns", 40.0)];
        let svg = render_donut_svg(&layout_donut(&slices, chart.radius), &chart, "₹11,61,695");

        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("rotate(-90 100 100)").count(), 1);
        assert!(svg.contains(r#"stroke-dasharray="301.593 201.062""#));
        assert!(svg.contains(r#"stroke-dashoffset="-301.593""#));
        assert!(svg.contains(r#"data-label="Invested • 60%""#));
        assert!(svg.contains(">₹11,61,695</text>"));
    }

    #[test]
    fn segment_labels_round_to_one_decimal() {
        let slices = [
            AllocationSlice::new("Invested", 51.648_530_176),
            AllocationSlice::new("Returns", 48.351_469_824),
        ];
        let arcs = layout_donut(&slices, 80.0);
        assert_eq!(segment_label(&arcs[0]), "Invested • 51.6%");
        assert_eq!(segment_label(&arcs[1]), "Returns • 48.4%");

        let svg = render_donut_svg(&arcs, &ChartConfig::default(), "₹11,61,695");
        assert!(svg.contains(r#"data-label="Invested • 51.6%""#));
        assert!(svg.ends_with("</text>\n</svg>\n"));
    }

    #[test]
    fn empty_donut_still_has_its_label() {
        let svg = render_donut_svg(&[], &ChartConfig::default(), "Your Mix");
        assert_eq!(svg.matches("<circle").count(), 0);
        assert!(svg.contains(">Your Mix</text>"));
    }
}
