use serde::{Deserialize, Serialize};

/// How absent slots inside a series are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GapPolicy {
    /// Segments touching an absent slot are skipped, leaving a hole.
    #[default]
    Gap,
    /// Absent runs between two samples are bridged with one straight segment.
    Interpolate,
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects one rolling series into line segments, left to right.
///
/// Slot `j` sits at `x = j * interval_px`; `to_pixel_y` maps a finite sample
/// to its Y coordinate. The function is deterministic and side-effect free so
/// rendering and tests consume the exact same geometry.
pub fn project_series_segments<'a>(
    samples: impl IntoIterator<Item = &'a f64>,
    interval_px: f64,
    policy: GapPolicy,
    to_pixel_y: impl Fn(f64) -> f64,
) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    let mut previous: Option<(usize, f64)> = None;

    for (slot, &value) in samples.into_iter().enumerate() {
        if !value.is_finite() {
            if policy == GapPolicy::Gap {
                previous = None;
            }
            continue;
        }

        let point = (slot as f64 * interval_px, to_pixel_y(value));
        if let Some((previous_slot, previous_y)) = previous {
            segments.push(LineSegment {
                x1: previous_slot as f64 * interval_px,
                y1: previous_y,
                x2: point.0,
                y2: point.1,
            });
        }
        previous = Some((slot, point.1));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::{GapPolicy, project_series_segments};

    #[test]
    fn gap_policy_skips_segments_touching_absent_slots() {
        let samples = [f64::NAN, 1.0, 2.0, f64::NAN, 4.0, 5.0];
        let segments = project_series_segments(&samples, 10.0, GapPolicy::Gap, |v| v);

        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].x1, segments[0].x2), (10.0, 20.0));
        assert_eq!((segments[1].x1, segments[1].x2), (40.0, 50.0));
    }

    #[test]
    fn interpolate_policy_bridges_interior_holes() {
        let samples = [f64::NAN, 1.0, f64::NAN, f64::NAN, 4.0];
        let segments = project_series_segments(&samples, 10.0, GapPolicy::Interpolate, |v| v);

        assert_eq!(segments.len(), 1);
        assert_eq!((segments[0].x1, segments[0].y1), (10.0, 1.0));
        assert_eq!((segments[0].x2, segments[0].y2), (40.0, 4.0));
    }

    #[test]
    fn fewer_than_two_samples_produce_no_segments() {
        let samples = [f64::NAN, 3.0];
        assert!(project_series_segments(&samples, 5.0, GapPolicy::Gap, |v| v).is_empty());
    }
}
