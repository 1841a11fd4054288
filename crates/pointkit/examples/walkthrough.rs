//! Walk through the point types end to end.
//!
//! Usage:
//!   cargo run -p pointkit --example walkthrough [seed]

use pointkit::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);

    let mut p = Point::new(1.0, 2.0);
    println!("p.x={} & p.y={}", p.x, p.y);
    p.x = 20.0;
    println!("p.x={} & p.y={}", p.x, p.y);
    println!("{p}");

    let mut points = draw_points(SampleCfg::default(), seed);
    println!("I got these {} random points:", points.len());
    for q in &points {
        println!("{q}");
    }
    println!("{points:?}");

    let p = Point::new(3.0, 4.0);
    let p2 = Point::new(1.0, 1.0);
    println!("{}", p.distance_to_orig());
    println!("farther: {}", p.farther_from_origin(&p2));
    println!("same distance: {}", p.same_origin_distance(&p2));
    sort_by_origin_distance(&mut points);
    println!("sorted: {points:?}");

    let mut registry = ColorRegistry::default();
    registry.add_color("rojo");
    let a = match AdvancedPoint::new(1.0, 2.0, "rojo", &registry) {
        Ok(a) => a,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    println!("{} {a} {}", a.x(), a.distance_to_orig());
    let b = match AdvancedPoint::from_tuple((3.0, 2.0), &registry) {
        Ok(b) => b,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    println!("{b}");
    println!("{}", AdvancedPoint::distance_2_points(&a, &b));
    println!("{}", a.distance_to_other(&b));
}
