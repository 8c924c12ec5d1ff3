// HTML pages for the web form: the input form, the result page and an
// inline SVG donut chart of the topic distribution.
//
// Everything is rendered to a String; no templates, no client-side script.
// Any text that came from a request or from the model is escaped.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::classifier::Classification;
use crate::topics::distribution::LabeledTopic;

/// Slice colors, reused in order when there are more topics than colors.
const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Inner radius of the donut as a fraction of the outer radius.
const HOLE: f64 = 0.3;
const CHART_SIZE: f64 = 320.0;

/// Slices below this share are too thin to draw.
const MIN_SLICE: f64 = 1e-6;

const FORM_STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 40px; }
        textarea { width: 100%; height: 150px; font-size: 1em; }
        input[type=submit] { padding: 10px 20px; font-size: 1em; }";

const RESULT_STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 40px; }
        .topic-box { background-color: #001f3f; color: white; padding: 15px;
                     border-radius: 10px; font-size: 1.2em; margin-bottom: 20px; }
        .center { text-align: center; }
        .legend { list-style: none; padding: 0; }
        .legend span { display: inline-block; width: 12px; height: 12px; margin-right: 6px; }
        .try-again { margin-top: 30px; display: inline-block; padding: 10px 20px;
                     background-color: #0074D9; color: white; border-radius: 5px;
                     font-size: 1em; text-decoration: none; }
        .try-again:hover { background-color: #005fa3; }";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The input form served at `/`.
pub fn form_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Marathi News Topic Identifier</title>
    <style>
{FORM_STYLE}
    </style>
</head>
<body>
    <h2>Marathi News Topic Identifier</h2>
    <form action="/predict" method="post">
        <textarea name="text" placeholder="Type or paste Marathi news here..."></textarea><br><br>
        <input type="submit" value="Identify Topic">
    </form>
</body>
</html>
"#
    )
}

/// The result page for one classification.
pub fn result_page(result: &Classification) -> String {
    let mut items = String::new();
    for topic in &result.distribution {
        let _ = writeln!(
            items,
            "        <li><b>{}</b>: {:.2}%</li>",
            escape_html(&topic.label),
            topic.probability * 100.0
        );
    }

    let labels = escape_html(&result.confident_labels.join(", "));
    let top = escape_html(&result.top_label);
    let chart = pie_chart_svg(&result.distribution);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Result</title>
    <style>
{RESULT_STYLE}
    </style>
</head>
<body>
    <div class="topic-box">
        <strong>Predicted Topics:</strong> {labels}
    </div>
    <h2>Predicted Topic: {top}</h2>

    <h3>Sorted Topic Probabilities:</h3>
    <ul>
{items}    </ul>

    <h3>Topic Distribution (Pie Chart):</h3>
{chart}
    <div class="center">
        <a href="/" class="try-again">Try Another</a>
    </div>
</body>
</html>
"#
    )
}

/// Render the distribution as an SVG donut chart with a legend.
///
/// Slices start at twelve o'clock and run clockwise in distribution order.
pub fn pie_chart_svg(distribution: &[LabeledTopic]) -> String {
    let total: f64 = distribution
        .iter()
        .map(|t| t.probability)
        .filter(|p| p.is_finite() && *p > 0.0)
        .sum();

    let radius = CHART_SIZE / 2.0 - 10.0;
    let inner = radius * HOLE;
    let center = CHART_SIZE / 2.0;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"    <svg class="chart" width="{CHART_SIZE}" height="{CHART_SIZE}" viewBox="0 0 {CHART_SIZE} {CHART_SIZE}" role="img">"#
    );

    let mut legend = String::from("    <ul class=\"legend\">\n");
    let mut start = 0.0;

    for (i, topic) in distribution.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let label = escape_html(&topic.label);
        let _ = writeln!(
            legend,
            r#"        <li><span style="background-color: {color}"></span>{label} ({:.2}%)</li>"#,
            topic.probability * 100.0
        );

        if total <= 0.0 || !topic.probability.is_finite() || topic.probability <= 0.0 {
            continue;
        }
        let share = topic.probability / total;
        if share < MIN_SLICE {
            continue;
        }

        let end = start + share;
        let _ = writeln!(
            svg,
            r#"        <path d="{}" fill="{color}"><title>{label}</title></path>"#,
            donut_slice_path(center, radius, inner, start, end)
        );
        start = end;
    }

    svg.push_str("    </svg>\n");
    legend.push_str("    </ul>\n");
    svg + &legend
}

/// SVG path for the ring segment between two fractions of a full turn.
fn donut_slice_path(center: f64, outer: f64, inner: f64, from: f64, to: f64) -> String {
    // A full ring cannot be drawn as a single arc; use two half-turn arcs.
    if to - from >= 1.0 - MIN_SLICE {
        return format!(
            "M {cx:.3} {oy1:.3} A {outer:.3} {outer:.3} 0 1 1 {cx:.3} {oy2:.3} \
             A {outer:.3} {outer:.3} 0 1 1 {cx:.3} {oy1:.3} Z \
             M {cx:.3} {iy1:.3} A {inner:.3} {inner:.3} 0 1 0 {cx:.3} {iy2:.3} \
             A {inner:.3} {inner:.3} 0 1 0 {cx:.3} {iy1:.3} Z",
            cx = center,
            oy1 = center - outer,
            oy2 = center + outer,
            iy1 = center - inner,
            iy2 = center + inner,
        );
    }

    let point = |r: f64, fraction: f64| -> (f64, f64) {
        let angle = -PI / 2.0 + 2.0 * PI * fraction;
        (center + r * angle.cos(), center + r * angle.sin())
    };

    let large_arc = if to - from > 0.5 { 1 } else { 0 };
    let (ox0, oy0) = point(outer, from);
    let (ox1, oy1) = point(outer, to);
    let (ix1, iy1) = point(inner, to);
    let (ix0, iy0) = point(inner, from);

    format!(
        "M {ox0:.3} {oy0:.3} A {outer:.3} {outer:.3} 0 {large_arc} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} A {inner:.3} {inner:.3} 0 {large_arc} 0 {ix0:.3} {iy0:.3} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"x" & 'y'</b>"#),
            "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("भारत"), "भारत");
    }

    #[test]
    fn test_form_posts_to_predict() {
        let page = form_page();
        assert!(page.contains(r#"action="/predict""#));
        assert!(page.contains(r#"name="text""#));
    }

    #[test]
    fn test_chart_has_one_slice_per_nonzero_topic() {
        let dist = vec![
            LabeledTopic::new("Sports", 0.6),
            LabeledTopic::new("Tech", 0.4),
            LabeledTopic::new("Auto", 0.0),
        ];
        let svg = pie_chart_svg(&dist);
        assert_eq!(svg.matches("<path").count(), 2);
        assert_eq!(svg.matches("<li>").count(), 3);
    }

    #[test]
    fn test_chart_full_ring_for_single_topic() {
        let svg = pie_chart_svg(&[LabeledTopic::new("Politics", 1.0)]);
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains(" Z M "));
    }

    #[test]
    fn test_chart_empty_distribution() {
        let svg = pie_chart_svg(&[]);
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<path").count(), 0);
    }
}
