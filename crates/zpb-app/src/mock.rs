//! Random-walk demo data

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use zpb_core::{DataPoint, Dataset, Series};

/// Number of series per generated dataset
const SERIES: usize = 3;

/// Hourly points per series
const POINTS: usize = 240;

struct MockSeries {
    value: f64,
    volume: f64,
    volatility: f64,
    trend: f64,
}

impl MockSeries {
    fn new(initial_value: f64) -> Self {
        Self {
            value: initial_value,
            volume: 1_000.0,
            volatility: 0.02,
            trend: 0.0,
        }
    }

    fn tick(&mut self, rng: &mut impl Rng) -> (f64, f64) {
        let drift = self.trend * 0.002;
        let random = (rng.r#gen::<f64>() - 0.5) * 2.0 * self.volatility;

        if rng.r#gen::<f64>() < 0.05 {
            self.trend = (rng.r#gen::<f64>() - 0.5) * 2.0;
        }

        self.value = (self.value * (1.0 + drift + random)).max(1.0);
        self.volume = (self.volume * (0.8 + rng.r#gen::<f64>() * 0.4)).clamp(100.0, 10_000.0);
        (self.value, self.volume)
    }

    fn series(mut self, start: DateTime<Utc>, rng: &mut impl Rng) -> Series {
        (0..POINTS)
            .map(|i| {
                let (value, volume) = self.tick(rng);
                DataPoint::new()
                    .with("date", start + Duration::hours(i as i64))
                    .with("value", value)
                    .with("volume", volume)
            })
            .collect()
    }
}

/// A fresh dataset of random walks ending now
pub fn random_dataset() -> Dataset {
    let mut rng = rand::thread_rng();
    let start = Utc::now() - Duration::hours(POINTS as i64);

    let series = (0..SERIES)
        .map(|_| {
            let initial = rng.gen_range(50.0..150.0);
            MockSeries::new(initial).series(start, &mut rng)
        })
        .collect::<Vec<_>>();
    Dataset::from(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_dataset_shape() {
        let data = random_dataset();
        assert_eq!(data.len(), SERIES);
        assert!(data.series().iter().all(|s| s.len() == POINTS));
        assert!(data.points().all(|p| p.read("volume").is_some()));
    }
}
