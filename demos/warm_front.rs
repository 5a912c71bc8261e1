extern crate plotters;
use plotters::prelude::*;

extern crate frontline;
use frontline::{
    offset_polyline, stamp_spacing, FrontPath, FrontStyle, Point2, DEFAULT_SAMPLE_COUNT,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a sketched two-segment front: seven clicked vertices, every third one
    // on the curve
    let path = FrontPath::from_vertices(vec![
        Point2::new(0f64, 0f64),
        Point2::new(0.0, 10.0),
        Point2::new(10.0, 10.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, -10.0),
        Point2::new(20.0, -10.0),
        Point2::new(20.0, 0.0),
    ]);

    // spacing as the host would derive it from its visible vertical range
    let visible_span = 24.0;
    let spacing = stamp_spacing(visible_span);

    let geometry = path.resample(DEFAULT_SAMPLE_COUNT, spacing)?;
    let style = FrontStyle::warm();
    let stamps = style.stamps(&geometry.placements);

    let root = BitMapBackend::new("warm_front.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart
    let mut chart = ChartBuilder::on(&root)
        .caption("Warm Front", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-2f64..22f64, -12f64..12f64)?;

    chart.configure_mesh().draw()?;

    // the front line itself, one flattened polyline per segment
    for table in &geometry.tables {
        let polyline: Vec<(f64, f64)> = table
            .samples()
            .iter()
            .map(|s| (s.position.x, s.position.y))
            .collect();
        chart.draw_series(LineSeries::new(polyline, &BLACK))?;
    }

    // a parallel guide line beside each segment
    for segment in path.segments() {
        let guide: Vec<(f64, f64)> = offset_polyline(&segment, DEFAULT_SAMPLE_COUNT, 0.4)?
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        chart.draw_series(LineSeries::new(guide, &BLUE.mix(0.4)))?;
    }

    // each stamp as a half disc on the left of the travel direction,
    // rotated to the tangent angle its placement carries
    let radius = 0.6;
    for stamp in &stamps {
        let fan: Vec<(f64, f64)> = (0..=16)
            .map(|step| {
                let theta = stamp.placement.angle + std::f64::consts::PI * step as f64 / 16.0;
                (
                    stamp.placement.position.x + radius * theta.cos(),
                    stamp.placement.position.y + radius * theta.sin(),
                )
            })
            .collect();
        chart.draw_series(std::iter::once(Polygon::new(fan, RED.filled())))?;
    }

    root.present()?;
    println!(
        "{} stamps every {:.2} units over {:.2} units of front -> warm_front.png",
        stamps.len(),
        spacing,
        geometry.total_length()
    );

    Ok(())
}
