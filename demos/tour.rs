//! Trigon tour — prints every kernel query for a sample triangle and two
//! sample vectors.
//!
//! Usage:
//! ```text
//! cargo run --example tour
//! RUST_LOG=trigon=debug cargo run --example tour   # show rejected inputs
//! ```

use nalgebra::{Point3, Vector3};
use trigon::math::{angle, cross_product, dot_product, magnitude, unit_vector};
use trigon::{AngleUnit, Triangle, TrigonError};

fn main() -> Result<(), TrigonError> {
    // Default: WARN for everything, INFO for trigon.
    // Override with RUST_LOG env var (e.g. RUST_LOG=trigon=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tour=info".parse().unwrap_or_default())
        .add_directive("trigon=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let p1 = Point3::new(0.0, 0.0, 0.0);
    let p2 = Point3::new(4.0, 0.0, 0.0);
    let p3 = Point3::new(0.0, 3.0, 0.0);
    let tri = Triangle::new(p1, p2, p3);

    println!("--- Triangle Operations ---");
    for (name, p) in [("P1", p1), ("P2", p2), ("P3", p3)] {
        println!("  {name}: {}", fmt_point(&p));
    }
    println!("Area: {:.4}", tri.area());
    println!("Min edge length: {:.4}", tri.min_length());
    println!("Max edge length: {:.4}", tri.max_length());

    let [a1, a2, a3] = tri.angles(AngleUnit::Degrees);
    println!("Angles (degrees): P1 {a1:.4}, P2 {a2:.4}, P3 {a3:.4}");
    println!(
        "Acute: {}, Obtuse: {}, Degenerate: {}",
        yes_no(tri.is_acute()),
        yes_no(tri.is_obtuse()),
        yes_no(tri.is_degenerate())
    );

    println!();
    println!("--- Geometric Properties ---");
    println!("Centroid: {}", fmt_point(&tri.centroid()));
    println!("Circumcenter: {}", fmt_point(&tri.circumcenter()?));
    println!("Circumradius: {:.4}", tri.circumradius()?);
    println!("Incenter: {}", fmt_point(&tri.incenter()?));
    println!("Inradius: {:.4}", tri.inradius()?);
    println!("Normal vector: {}", fmt_vector(&tri.normal()?));

    println!();
    println!("--- Vector Operations ---");
    let v1 = Vector3::new(3.0, 4.0, 0.0);
    let v2 = Vector3::new(1.0, 0.0, 0.0);
    println!("Magnitude of v1: {:.4}", magnitude(&v1));
    println!("Dot product (v1 . v2): {:.4}", dot_product(&v1, &v2));
    println!("Cross product (v1 x v2): {}", fmt_vector(&cross_product(&v1, &v2)));
    println!("Unit vector of v1: {}", fmt_vector(&unit_vector(&v1)?));
    println!("Angle between v1 and v2 (radians): {:.4}", angle(&v1, &v2));

    println!();
    println!("--- Barycentric Coordinates ---");
    let query = Point3::new(1.0, 1.0, 0.0);
    let [l1, l2, l3] = tri.barycentric(&query)?;
    println!("Barycentric coordinates of {}:", fmt_point(&query));
    println!("  Lambda 1: {l1:.4}");
    println!("  Lambda 2: {l2:.4}");
    println!("  Lambda 3: {l3:.4}");
    println!("  Sum: {:.4}", l1 + l2 + l3);

    // Degenerate input is reported, not fatal.
    let collinear = Triangle::new(p1, Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
    if let Err(err) = collinear.circumcenter() {
        tracing::info!(%err, "collinear triangle rejected");
    }

    Ok(())
}

fn fmt_point(p: &Point3<f64>) -> String {
    format!("({:.4}, {:.4}, {:.4})", p.x, p.y, p.z)
}

fn fmt_vector(v: &Vector3<f64>) -> String {
    format!("({:.4}, {:.4}, {:.4})", v.x, v.y, v.z)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
