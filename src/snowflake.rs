// src/snowflake.rs

use crate::geometry::{Point2, Segment};
use thiserror::Error;

/// Stopping threshold used when the caller has no opinion, in the same
/// length units as the seed geometry.
pub const DEFAULT_MIN_LENGTH: f32 = 4.0;

#[derive(Debug, Error, PartialEq)]
pub enum SnowflakeError {
    /// A non-positive threshold would make the subdivision recursion
    /// non-terminating, so it is rejected up front.
    #[error("min_length must be positive, got {0}")]
    InvalidMinLength(f32),
}

pub struct SnowflakeGenerator;

impl SnowflakeGenerator {
    /// The three edges of an equilateral triangle with vertices on a
    /// circle of the given radius, at angles 0, 240 and 120 degrees.
    /// Edge order and direction determine the traversal order of the
    /// finished perimeter.
    pub fn seed_triangle(circumradius: f32) -> [Segment; 3] {
        let fst = Point2::new(circumradius, 0.0);
        let snd = Point2::new(
            circumradius * (std::f32::consts::PI * 4.0 / 3.0).cos(),
            circumradius * (std::f32::consts::PI * 4.0 / 3.0).sin(),
        );
        let trd = Point2::new(
            circumradius * (std::f32::consts::PI * 2.0 / 3.0).cos(),
            circumradius * (std::f32::consts::PI * 2.0 / 3.0).sin(),
        );

        [
            Segment::new(fst, snd),
            Segment::new(snd, trd),
            Segment::new(trd, fst),
        ]
    }

    /// Expands the seed triangle into the full snowflake perimeter and
    /// returns its vertex loop, ready for a closed-path stroke. The three
    /// edges subdivide independently and their terminal segments are
    /// concatenated in edge order, tracing the perimeter exactly once.
    pub fn generate(
        circumradius: f32,
        min_length: f32,
    ) -> Result<Vec<Point2>, SnowflakeError> {
        if !(min_length > 0.0) {
            return Err(SnowflakeError::InvalidMinLength(min_length));
        }

        let mut terminals = Vec::new();
        for edge in Self::seed_triangle(circumradius) {
            edge.subdivide_into(min_length, &mut terminals);
        }
        log::debug!(
            "snowflake perimeter: {} terminal segments (circumradius {}, min_length {})",
            terminals.len(),
            circumradius,
            min_length
        );

        Ok(vertex_loop(&terminals))
    }
}

/// Vertex loop of an ordered terminal-segment sequence: the start point of
/// each segment, in order. The final end point is omitted; the renderer
/// closes the path back to the first vertex. An empty sequence yields an
/// empty loop, which the draw site treats as nothing to draw.
pub fn vertex_loop(segments: &[Segment]) -> Vec<Point2> {
    segments.iter().map(|seg| seg.start).collect()
}
