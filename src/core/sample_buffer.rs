use std::collections::VecDeque;

use ordered_float::OrderedFloat;

use crate::error::{ChartError, ChartResult};

/// Placeholder stored in value slots that have not received a sample yet.
pub const ABSENT_SAMPLE: f64 = f64::NAN;

/// Fixed-width rolling window of samples, one ring per series plus a shared
/// timestamp ring.
///
/// Every ring always holds exactly `capacity` slots, oldest first. Pushing a
/// value drops the oldest slot and appends at the end, so the buffer shifts
/// but never grows or shrinks.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    capacity: usize,
    series: Vec<VecDeque<f64>>,
    timestamps: VecDeque<String>,
}

impl SampleBuffer {
    pub fn new(series_count: usize, capacity: usize) -> ChartResult<Self> {
        if series_count == 0 {
            return Err(ChartError::InvalidData(
                "sample buffer needs at least one series".to_owned(),
            ));
        }
        if capacity == 0 {
            return Err(ChartError::InvalidData(
                "sample buffer capacity must be > 0".to_owned(),
            ));
        }

        let ring = VecDeque::from(vec![ABSENT_SAMPLE; capacity]);
        Ok(Self {
            capacity,
            series: vec![ring; series_count],
            timestamps: VecDeque::from(vec![String::new(); capacity]),
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Shifts one value into the ring of `series_index`.
    ///
    /// This advances a single ring only; `push_column` keeps every ring
    /// index-aligned and is what chart updates use.
    pub fn push(&mut self, series_index: usize, value: f64) -> ChartResult<()> {
        let ring = self.series.get_mut(series_index).ok_or_else(|| {
            ChartError::InvalidData(format!("series index {series_index} is out of range"))
        })?;
        shift_in(ring, value);
        Ok(())
    }

    pub fn push_timestamp(&mut self, label: impl Into<String>) {
        shift_in(&mut self.timestamps, label.into());
    }

    /// Shifts one sampling instant into every ring at once.
    pub fn push_column(&mut self, values: &[f64], label: impl Into<String>) -> ChartResult<()> {
        if values.len() != self.series.len() {
            return Err(ChartError::SeriesCountMismatch {
                expected: self.series.len(),
                actual: values.len(),
            });
        }

        for (ring, &value) in self.series.iter_mut().zip(values) {
            shift_in(ring, value);
        }
        self.push_timestamp(label);
        Ok(())
    }

    #[must_use]
    pub fn series(&self, series_index: usize) -> Option<&VecDeque<f64>> {
        self.series.get(series_index)
    }

    pub fn iter_series(&self) -> impl Iterator<Item = &VecDeque<f64>> {
        self.series.iter()
    }

    #[must_use]
    pub fn timestamps(&self) -> &VecDeque<String> {
        &self.timestamps
    }

    /// Newest slot of one series, `None` when it is still absent.
    #[must_use]
    pub fn latest(&self, series_index: usize) -> Option<f64> {
        self.series
            .get(series_index)
            .and_then(VecDeque::back)
            .copied()
            .filter(|value| value.is_finite())
    }

    /// Minimum and maximum over every buffered finite sample of every series.
    #[must_use]
    pub fn finite_extrema(&self) -> Option<(f64, f64)> {
        let finite = || {
            self.series
                .iter()
                .flatten()
                .copied()
                .filter(|value| value.is_finite())
                .map(OrderedFloat)
        };
        let min = finite().min()?;
        let max = finite().max()?;
        Some((min.into_inner(), max.into_inner()))
    }
}

fn shift_in<T>(ring: &mut VecDeque<T>, value: T) {
    ring.pop_front();
    ring.push_back(value);
}

#[cfg(test)]
mod tests {
    use super::SampleBuffer;

    #[test]
    fn new_buffer_is_filled_with_absent_slots() {
        let buffer = SampleBuffer::new(2, 4).expect("buffer");
        for ring in buffer.iter_series() {
            assert_eq!(ring.len(), 4);
            assert!(ring.iter().all(|value| value.is_nan()));
        }
        assert!(buffer.timestamps().iter().all(String::is_empty));
        assert_eq!(buffer.finite_extrema(), None);
    }

    #[test]
    fn single_series_push_shifts_only_that_ring() {
        let mut buffer = SampleBuffer::new(2, 3).expect("buffer");
        buffer.push(1, 7.0).expect("push");

        assert!(buffer.series(0).expect("series").iter().all(|v| v.is_nan()));
        assert_eq!(buffer.latest(1), Some(7.0));
        assert!(buffer.push(2, 1.0).is_err());
    }

    #[test]
    fn extrema_ignore_absent_and_non_finite_slots() {
        let mut buffer = SampleBuffer::new(2, 4).expect("buffer");
        buffer.push_column(&[3.0, f64::INFINITY], "a").expect("push");
        buffer.push_column(&[-2.0, 8.5], "b").expect("push");

        assert_eq!(buffer.finite_extrema(), Some((-2.0, 8.5)));
        assert_eq!(buffer.latest(1), Some(8.5));
    }

    #[test]
    fn zero_capacity_or_series_is_rejected() {
        assert!(SampleBuffer::new(0, 4).is_err());
        assert!(SampleBuffer::new(1, 0).is_err());
    }
}
