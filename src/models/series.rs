use serde::{Deserialize, Serialize, Serializer};

/// Direction of a growth trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increasing,
    Decreasing,
    Constant,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Increasing => write!(f, "Increasing"),
            Trend::Decreasing => write!(f, "Decreasing"),
            Trend::Constant => write!(f, "Constant"),
        }
    }
}

/// A single (t, N(t)) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    /// Time step
    pub t: u32,
    /// Population at time `t`; may be infinite or NaN after overflow
    #[serde(rename = "N", serialize_with = "serialize_population")]
    pub n: f64,
}

/// Finite values as JSON numbers; `inf`, `-inf`, and `NaN` as strings so
/// each overflow kind stays distinguishable.
pub(crate) fn serialize_population<S>(n: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if n.is_finite() {
        serializer.serialize_f64(*n)
    } else if n.is_nan() {
        serializer.serialize_str("NaN")
    } else if n.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

/// The ordered trajectory N(0), N(1), ..., N(t_max).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GrowthSeries {
    points: Vec<GrowthPoint>,
}

impl GrowthSeries {
    pub(crate) fn from_points(points: Vec<GrowthPoint>) -> Self {
        debug_assert!(points.iter().enumerate().all(|(i, p)| p.t as usize == i));
        Self { points }
    }

    pub fn points(&self) -> &[GrowthPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last time step, or `None` for an empty series.
    pub fn t_max(&self) -> Option<u32> {
        self.points.last().map(|p| p.t)
    }

    /// N at t = 0.
    pub fn initial(&self) -> Option<f64> {
        self.points.first().map(|p| p.n)
    }

    pub fn last(&self) -> Option<&GrowthPoint> {
        self.points.last()
    }

    /// Population values in time order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.n).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GrowthPoint> {
        self.points.iter()
    }

    /// True when floating-point overflow produced an infinite or NaN value.
    pub fn has_non_finite(&self) -> bool {
        self.points.iter().any(|p| !p.n.is_finite())
    }
}

impl<'a> IntoIterator for &'a GrowthSeries {
    type Item = &'a GrowthPoint;
    type IntoIter = std::slice::Iter<'a, GrowthPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GrowthSeries {
        GrowthSeries::from_points(vec![
            GrowthPoint { t: 0, n: 10.0 },
            GrowthPoint { t: 1, n: 20.0 },
            GrowthPoint { t: 2, n: 40.0 },
        ])
    }

    #[test]
    fn test_accessors() {
        let s = sample();
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.t_max(), Some(2));
        assert_eq!(s.initial(), Some(10.0));
        assert_eq!(s.last().unwrap().n, 40.0);
        assert_eq!(s.values(), vec![10.0, 20.0, 40.0]);
    }

    #[test]
    fn test_into_iterator() {
        let s = sample();
        let ts: Vec<u32> = (&s).into_iter().map(|p| p.t).collect();
        assert_eq!(ts, vec![0, 1, 2]);
        assert_eq!(s.iter().count(), 3);
    }

    #[test]
    fn test_has_non_finite() {
        assert!(!sample().has_non_finite());
        let s = GrowthSeries::from_points(vec![
            GrowthPoint { t: 0, n: 1.0 },
            GrowthPoint {
                t: 1,
                n: f64::INFINITY,
            },
        ]);
        assert!(s.has_non_finite());
    }

    #[test]
    fn test_empty_series() {
        let s = GrowthSeries::from_points(vec![]);
        assert!(s.is_empty());
        assert_eq!(s.t_max(), None);
        assert_eq!(s.initial(), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[1]["t"], 1);
        assert_eq!(arr[1]["N"], 20.0);
    }

    #[test]
    fn test_non_finite_values_serialize_by_kind() {
        let s = GrowthSeries::from_points(vec![
            GrowthPoint {
                t: 0,
                n: f64::INFINITY,
            },
            GrowthPoint {
                t: 1,
                n: f64::NEG_INFINITY,
            },
            GrowthPoint { t: 2, n: f64::NAN },
        ]);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json[0]["N"], "inf");
        assert_eq!(json[1]["N"], "-inf");
        assert_eq!(json[2]["N"], "NaN");
    }

    #[test]
    fn test_trend_display() {
        assert_eq!(Trend::Increasing.to_string(), "Increasing");
        assert_eq!(Trend::Decreasing.to_string(), "Decreasing");
        assert_eq!(Trend::Constant.to_string(), "Constant");
    }
}
