//! Sprinkler stream pattern.
//!
//! Geometry for the decorative sprinkler animation: `streams` jets spread
//! evenly around the head, each a parabolic arc reaching [`REACH`] metres
//! out.  Nothing here renders; a front end asks for the points visible at
//! a given frame and draws them however it likes.
//!
//! Per stream at angle θ, sampled at t ∈ [0, 1]:
//!
//! ```text
//!  x = REACH·t·cos θ      y = REACH·t·sin θ      z = ARC_HEIGHT·t·(1 − t)
//! ```

use core::f64::consts::TAU;

use serde::Serialize;

use crate::config::WateringConfig;

/// Horizontal reach of each stream (metres).
pub const REACH: f64 = 5.0;
/// Arc coefficient; the apex is `ARC_HEIGHT / 4`.
pub const ARC_HEIGHT: f64 = 5.0;
/// Frame interval numerator: interval_ms = FRAME_SPAN_MS / fps.
const FRAME_SPAN_MS: u32 = 4000;

/// A point on a stream trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One water jet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    /// Direction of the jet, radians in [0, 2π).
    pub angle: f64,
    pub points: Vec<Point3>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprinklerPattern {
    pub streams: Vec<Stream>,
    /// Number of animation frames for the whole watering run.
    pub total_frames: u64,
    /// Delay between frames in milliseconds.
    pub frame_interval_ms: u32,
}

impl SprinklerPattern {
    pub fn new(duration_minutes: f64, config: &WateringConfig) -> Self {
        let n = usize::from(config.sprinkler_streams.max(1));
        let samples = usize::from(config.stream_samples.max(2));
        let fps = config.animation_fps.max(1);

        let streams = (0..n)
            .map(|i| {
                let angle = TAU * i as f64 / n as f64;
                let (sin, cos) = angle.sin_cos();
                let points = (0..samples)
                    .map(|k| {
                        let t = k as f64 / (samples - 1) as f64;
                        Point3 {
                            x: REACH * t * cos,
                            y: REACH * t * sin,
                            z: ARC_HEIGHT * t * (1.0 - t),
                        }
                    })
                    .collect();
                Stream { angle, points }
            })
            .collect();

        let frames = (duration_minutes * 60.0 * f64::from(fps)).floor();
        Self {
            streams,
            total_frames: if frames > 0.0 { frames as u64 } else { 0 },
            frame_interval_ms: FRAME_SPAN_MS / u32::from(fps),
        }
    }

    /// Points drawn for each stream at `frame`: the leading `frame % samples`
    /// points, so the jets repeatedly grow from the head.  `None` once the
    /// animation is over.
    pub fn visible(&self, frame: u64) -> Option<Vec<&[Point3]>> {
        if frame >= self.total_frames {
            return None;
        }
        Some(
            self.streams
                .iter()
                .map(|s| {
                    let len = (frame % s.points.len() as u64) as usize;
                    &s.points[..len]
                })
                .collect(),
        )
    }
}
