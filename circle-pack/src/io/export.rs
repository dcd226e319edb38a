use std::io::Write;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::coverage::{coverage_ratio, counts_by_label};
use crate::entities::{Canvas, PlacedCircle, PlacementResult};
use crate::io::ext_repr::{
    ExtCanvas, ExtCapacityAdvisory, ExtCircleRow, ExtPlacedCircle, ExtPlacementReport,
    ExtSpecOutcome,
};

/// Column names of the tabular export, in order.
pub const CSV_HEADER: [&str; 9] = [
    "id",
    "type",
    "color",
    "x",
    "y",
    "radius",
    "canvas_width",
    "canvas_height",
    "gap",
];

/// Converts placed circles to rows of the tabular export, keeping their order.
/// Every row repeats the canvas dimensions and gap of the run.
pub fn export_rows(circles: &[PlacedCircle], canvas: &Canvas, gap: f64) -> Vec<ExtCircleRow> {
    circles
        .iter()
        .map(|c| ExtCircleRow {
            id: c.id,
            kind: capitalize(&c.label),
            color: c.color.clone(),
            x: c.x,
            y: c.y,
            radius: c.radius,
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            gap,
        })
        .collect_vec()
}

/// Writes rows as CSV, preceded by a header line.
pub fn write_csv(rows: &[ExtCircleRow], mut writer: impl Write) -> Result<()> {
    writeln!(writer, "{}", CSV_HEADER.join(",")).context("could not write csv header")?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            row.id,
            csv_field(&row.kind),
            csv_field(&row.color),
            row.x,
            row.y,
            row.radius,
            row.canvas_width,
            row.canvas_height,
            row.gap
        )
        .with_context(|| format!("could not write csv row for circle {}", row.id))?;
    }
    writer.flush()?;
    Ok(())
}

/// Composes a [`ExtPlacementReport`] from a placement result.
pub fn export_report(
    result: &PlacementResult,
    canvas: &Canvas,
    seed: Option<u32>,
) -> ExtPlacementReport {
    ExtPlacementReport {
        canvas: ExtCanvas {
            width: canvas.width,
            height: canvas.height,
        },
        gap: result.gap,
        seed,
        coverage_pct: coverage_ratio(result, canvas),
        n_samples: result.n_samples,
        counts_by_label: counts_by_label(result),
        outcomes: result
            .outcomes
            .iter()
            .map(|o| ExtSpecOutcome {
                label: o.label.clone(),
                color: o.color.clone(),
                radius: o.radius,
                requested_count: o.requested_count,
                placed_count: o.placed_count,
                shortfall: o.shortfall(),
            })
            .collect(),
        advisory: result.advisory.map(|a| ExtCapacityAdvisory {
            requested_area: a.requested_area,
            practical_capacity: a.practical_capacity,
            excess_pct: a.excess_pct,
        }),
        circles: result
            .placed
            .iter()
            .map(|c| ExtPlacedCircle {
                id: c.id,
                label: c.label.clone(),
                color: c.color.clone(),
                x: c.x,
                y: c.y,
                radius: c.radius,
            })
            .collect(),
    }
}

/// Uppercases the first character of a label, `"red"` becomes `"Red"`.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn csv_field(field: &str) -> String {
    match field.contains([',', '"', '\n', '\r']) {
        true => format!("\"{}\"", field.replace('"', "\"\"")),
        false => field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SpecOutcome;

    fn placed(id: usize, label: &str, color: &str) -> PlacedCircle {
        PlacedCircle {
            id,
            label: label.into(),
            color: color.into(),
            x: 20 + id as u32,
            y: 30,
            radius: 10,
        }
    }

    #[test]
    fn rows_have_stable_column_order_and_capitalized_type() {
        let canvas = Canvas::new(1000, 800).unwrap();
        let rows = export_rows(
            &[placed(1, "red", "red"), placed(2, "blue", "#0000FF")],
            &canvas,
            5.0,
        );
        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines = csv.lines().collect_vec();
        assert_eq!(
            lines,
            vec![
                "id,type,color,x,y,radius,canvas_width,canvas_height,gap",
                "1,Red,red,21,30,10,1000,800,5",
                "2,Blue,#0000FF,22,30,10,1000,800,5",
            ]
        );
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let canvas = Canvas::new(100, 100).unwrap();
        let rows = export_rows(&[placed(1, "big, round", "red")], &canvas, 0.5);
        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("1,\"Big, round\",red,21,30,10,100,100,0.5"));
    }

    #[test]
    fn capitalize_handles_empty_and_unicode_labels() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("zelená"), "Zelená");
        assert_eq!(capitalize("Red"), "Red");
    }

    #[test]
    fn report_lists_shortfalls_and_circles() {
        let canvas = Canvas::new(100, 100).unwrap();
        let result = PlacementResult {
            placed: vec![placed(1, "red", "red")],
            outcomes: vec![SpecOutcome {
                label: "red".into(),
                color: "red".into(),
                radius: 10,
                requested_count: 4,
                placed_count: 1,
                n_samples: 120,
            }],
            advisory: None,
            gap: 1.0,
            n_samples: 120,
        };
        let report = export_report(&result, &canvas, Some(3));
        assert_eq!(report.outcomes[0].shortfall, 3);
        assert_eq!(report.circles.len(), 1);
        assert_eq!(report.counts_by_label["red"], 1);
        assert_eq!(report.seed, Some(3));
    }
}
