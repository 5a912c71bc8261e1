use frontline::{CubicSegment, Point2, DEFAULT_SAMPLE_COUNT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let segment = CubicSegment::new(
        Point2::new(0.0f64, 0.0),
        Point2::new(0.0, 10.0),
        Point2::new(10.0, 10.0),
        Point2::new(10.0, 0.0),
    );

    let spacing = 2.5;
    let table = segment.sample(DEFAULT_SAMPLE_COUNT)?;
    println!("total length (approx): {:.5}", table.total_length());

    let placements = table.stamp_placements(spacing)?;
    let mut prev: Option<Point2<f64>> = None;
    for (i, stamp) in placements.iter().enumerate() {
        let gap = prev.map(|q| q.distance(stamp.position));
        match gap {
            Some(d) => println!(
                "i={}  p=({:.4}, {:.4})  angle={:+7.2}deg  gap={:.4}",
                i,
                stamp.position.x,
                stamp.position.y,
                stamp.angle.to_degrees(),
                d
            ),
            None => println!(
                "i={}  p=({:.4}, {:.4})  angle={:+7.2}deg",
                i,
                stamp.position.x,
                stamp.position.y,
                stamp.angle.to_degrees()
            ),
        }
        prev = Some(stamp.position);
    }
    Ok(())
}
