// tests/snowflake.rs
//
// End-to-end checks of the generated snowflake perimeter: the vertex loop
// must trace one continuous, closed, non-self-crossing polygon.

use koch_snowflake::geometry::{Point2, Segment};
use koch_snowflake::snowflake::{vertex_loop, SnowflakeGenerator};

fn perimeter_segments(circumradius: f32, min_length: f32) -> Vec<Segment> {
    let mut terminals = Vec::new();
    for edge in SnowflakeGenerator::seed_triangle(circumradius) {
        edge.subdivide_into(min_length, &mut terminals);
    }
    terminals
}

#[test]
fn perimeter_is_one_closed_chain() {
    let terminals = perimeter_segments(80.0, 4.0);

    for pair in terminals.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    // The loop closes: the last terminal ends where the first began.
    assert_eq!(
        terminals.last().unwrap().end,
        terminals.first().unwrap().start
    );
}

#[test]
fn generate_returns_the_loop_of_the_terminal_sequence() {
    let terminals = perimeter_segments(80.0, 4.0);
    let vertices = SnowflakeGenerator::generate(80.0, 4.0).unwrap();
    assert_eq!(vertices, vertex_loop(&terminals));
}

#[test]
fn vertex_count_is_a_power_of_four_multiple_of_three() {
    // Edge 138.56: two levels pass a threshold of 40 (138.56, then 46.19),
    // so each edge contributes 4^2 terminals.
    assert_eq!(SnowflakeGenerator::generate(80.0, 40.0).unwrap().len(), 48);
    // Four levels pass the default threshold of 4.
    assert_eq!(SnowflakeGenerator::generate(80.0, 4.0).unwrap().len(), 768);
}

#[test]
fn perimeter_grows_by_four_thirds_per_level() {
    let edge = 80.0 * 3.0f32.sqrt();
    let total: f32 = perimeter_segments(80.0, 40.0)
        .iter()
        .map(|s| s.length())
        .sum();
    let expected = 3.0 * edge * (4.0f32 / 3.0).powi(2);
    assert!((total - expected).abs() < 0.1);
}

#[test]
fn generate_is_deterministic() {
    let a = SnowflakeGenerator::generate(80.0, 4.0).unwrap();
    let b = SnowflakeGenerator::generate(80.0, 4.0).unwrap();
    assert_eq!(a, b);
}

fn cross(o: Point2, a: Point2, b: Point2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

// Proper crossing only: segments sharing an endpoint do not count.
fn properly_cross(p: &Segment, q: &Segment) -> bool {
    let d1 = cross(p.start, p.end, q.start);
    let d2 = cross(p.start, p.end, q.end);
    let d3 = cross(q.start, q.end, p.start);
    let d4 = cross(q.start, q.end, p.end);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

#[test]
fn closed_loop_is_a_simple_polygon() {
    let terminals = perimeter_segments(80.0, 40.0);
    let n = terminals.len();

    for i in 0..n {
        for j in (i + 1)..n {
            // Consecutive edges share a vertex, including the wrap-around
            // pair; only non-adjacent edges can properly cross.
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            assert!(
                !properly_cross(&terminals[i], &terminals[j]),
                "edges {} and {} cross",
                i,
                j
            );
        }
    }
}
