//! Extent computation over a named field

use crate::Dataset;

/// Domain used when there is no data: every comparison against it fails,
/// and scales map any value to the middle of their range.
pub const UNDEFINED_DOMAIN: (f64, f64) = (f64::NAN, f64::NAN);

/// Closed `[min, max]` range of a field. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Build an extent from two bounds in any order
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Whether `[min, max]` lies inside this extent (inclusive)
    pub fn covers(&self, min: f64, max: f64) -> bool {
        min >= self.min && max <= self.max
    }

    pub fn as_domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn include(self, v: f64) -> Self {
        Self {
            min: self.min.min(v),
            max: self.max.max(v),
        }
    }
}

/// Domain for an optional extent, falling back to [`UNDEFINED_DOMAIN`]
pub fn domain_of(extent: Option<Extent>) -> (f64, f64) {
    extent.map(|e| e.as_domain()).unwrap_or(UNDEFINED_DOMAIN)
}

/// `[min, max]` of `accessor` across every point of every series.
///
/// Single pass, unreadable values skipped. `None` when nothing was readable.
pub fn dataset_extent(data: &Dataset, accessor: &str) -> Option<Extent> {
    data.points()
        .filter_map(|p| p.read(accessor))
        .fold(None, |acc: Option<Extent>, v| {
            Some(match acc {
                Some(e) => e.include(v),
                None => Extent { min: v, max: v },
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataPoint;

    fn point(date: f64, value: f64) -> DataPoint {
        DataPoint::new().with("date", date).with("value", value)
    }

    #[test]
    fn test_extent_across_series() {
        let data = Dataset::new(vec![
            vec![point(0.0, 0.0), point(10.0, 5.0)],
            vec![point(-3.0, 9.0), point(4.0, -2.0)],
        ]);

        assert_eq!(dataset_extent(&data, "date"), Some(Extent::new(-3.0, 10.0)));
        assert_eq!(dataset_extent(&data, "value"), Some(Extent::new(-2.0, 9.0)));
    }

    #[test]
    fn test_empty_dataset_has_no_extent() {
        assert_eq!(dataset_extent(&Dataset::empty(), "date"), None);
        assert_eq!(dataset_extent(&Dataset::new(vec![vec![]]), "date"), None);
        assert!(domain_of(None).0.is_nan());
    }

    #[test]
    fn test_degenerate_extent() {
        let data = Dataset::new(vec![vec![point(2.0, 1.0), point(2.0, 1.0)]]);
        let ext = dataset_extent(&data, "date").unwrap();
        assert_eq!(ext.min, ext.max);
        assert_eq!(ext.as_domain(), (2.0, 2.0));
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let data = Dataset::new(vec![vec![
            point(1.0, 1.0),
            DataPoint::new().with("date", 50.0),
            DataPoint::new().with("value", 100.0),
        ]]);

        assert_eq!(dataset_extent(&data, "date"), Some(Extent::new(1.0, 50.0)));
        assert_eq!(dataset_extent(&data, "value"), Some(Extent::new(1.0, 100.0)));
    }

    #[test]
    fn test_covers_rejects_undefined_bounds() {
        let ext = Extent::new(0.0, 10.0);
        assert!(ext.covers(0.0, 10.0));
        assert!(ext.covers(2.0, 3.0));
        assert!(!ext.covers(-1.0, 3.0));
        assert!(!ext.covers(f64::NAN, 3.0));
    }
}
