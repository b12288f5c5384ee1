// Historical trend models and response normalization
use super::covid::Scope;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Date-keyed counts in the order the upstream object listed them.
///
/// A plain map would re-sort the keys lexically ("1/10/24" before "1/9/24"),
/// so the pairs are kept exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailyCounts(Vec<(String, u64)>);

impl DailyCounts {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self(pairs.into_iter().map(|(d, v)| (d.into(), v)).collect())
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(date, _)| date.as_str())
    }

    pub fn values(&self) -> Vec<u64> {
        self.0.iter().map(|(_, value)| *value).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for DailyCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DailyCountsVisitor;

        impl<'de> Visitor<'de> for DailyCountsVisitor {
            type Value = DailyCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping dates to counts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((date, count)) = access.next_entry::<String, u64>()? {
                    pairs.push((date, count));
                }
                Ok(DailyCounts(pairs))
            }
        }

        deserializer.deserialize_map(DailyCountsVisitor)
    }
}

/// The flat three-series structure the chart is built from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoricalSeries {
    pub cases: DailyCounts,
    pub deaths: DailyCounts,
    pub recovered: DailyCounts,
}

impl HistoricalSeries {
    /// All three series must list the same dates in the same order.
    pub fn check_aligned(&self) -> Result<(), String> {
        for (name, other) in [("deaths", &self.deaths), ("recovered", &self.recovered)] {
            if !self.cases.dates().eq(other.dates()) {
                return Err(format!(
                    "{} dates do not match cases dates ({} vs {} entries)",
                    name,
                    other.len(),
                    self.cases.len()
                ));
            }
        }
        Ok(())
    }
}

/// Per-country historical body: the series sit one level down under `timeline`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryTimeline {
    pub timeline: HistoricalSeries,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoricalResponse {
    Global(HistoricalSeries),
    Country(CountryTimeline),
}

impl HistoricalResponse {
    /// Decode a `/historical/{code}` body using the shape implied by the requested scope.
    pub fn decode(scope: &Scope, body: &[u8]) -> Result<Self, String> {
        let response = match scope {
            Scope::Global => serde_json::from_slice(body).map(HistoricalResponse::Global),
            Scope::Country(_) => serde_json::from_slice(body).map(HistoricalResponse::Country),
        }
        .map_err(|e| e.to_string())?;

        response.series().check_aligned()?;
        Ok(response)
    }

    fn series(&self) -> &HistoricalSeries {
        match self {
            HistoricalResponse::Global(series) => series,
            HistoricalResponse::Country(timeline) => &timeline.timeline,
        }
    }

    pub fn into_series(self) -> HistoricalSeries {
        match self {
            HistoricalResponse::Global(series) => series,
            HistoricalResponse::Country(timeline) => timeline.timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_day(cases: u64, deaths: u64, recovered: u64) -> HistoricalSeries {
        HistoricalSeries {
            cases: DailyCounts::from_pairs([("d1", cases)]),
            deaths: DailyCounts::from_pairs([("d1", deaths)]),
            recovered: DailyCounts::from_pairs([("d1", recovered)]),
        }
    }

    #[test]
    fn test_global_body_is_the_series() {
        let body = br#"{"cases":{"d1":1},"deaths":{"d1":0},"recovered":{"d1":0}}"#;
        let response = HistoricalResponse::decode(&Scope::Global, body).unwrap();
        assert_eq!(response.into_series(), single_day(1, 0, 0));
    }

    #[test]
    fn test_country_body_uses_timeline() {
        let body = br#"{"country":"Chile","province":["mainland"],"timeline":{"cases":{"d1":5},"deaths":{"d1":1},"recovered":{"d1":2}}}"#;
        let scope = Scope::Country("CHL".to_string());
        let response = HistoricalResponse::decode(&scope, body).unwrap();
        assert!(matches!(response, HistoricalResponse::Country(_)));
        assert_eq!(response.into_series(), single_day(5, 1, 2));
    }

    #[test]
    fn test_shape_follows_scope_not_body() {
        let country_body = br#"{"timeline":{"cases":{"d1":5},"deaths":{"d1":1},"recovered":{"d1":2}}}"#;
        assert!(HistoricalResponse::decode(&Scope::Global, country_body).is_err());

        let global_body = br#"{"cases":{"d1":1},"deaths":{"d1":0},"recovered":{"d1":0}}"#;
        let scope = Scope::Country("CHL".to_string());
        assert!(HistoricalResponse::decode(&scope, global_body).is_err());
    }

    #[test]
    fn test_dates_keep_arrival_order() {
        let body = br#"{"cases":{"1/9/24":1,"1/10/24":2,"1/11/24":3},"deaths":{"1/9/24":0,"1/10/24":0,"1/11/24":0},"recovered":{"1/9/24":0,"1/10/24":0,"1/11/24":0}}"#;
        let series = HistoricalResponse::decode(&Scope::Global, body)
            .unwrap()
            .into_series();
        let dates: Vec<&str> = series.cases.dates().collect();
        assert_eq!(dates, vec!["1/9/24", "1/10/24", "1/11/24"]);
        assert_eq!(series.cases.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_misaligned_series_rejected() {
        let body = br#"{"cases":{"d1":1,"d2":2},"deaths":{"d1":0},"recovered":{"d1":0,"d2":0}}"#;
        let err = HistoricalResponse::decode(&Scope::Global, body).unwrap_err();
        assert!(err.contains("deaths"));
    }

    #[test]
    fn test_not_found_message_is_rejected() {
        let body = br#"{"message":"Country not found or doesn't have any historical data"}"#;
        let scope = Scope::Country("XXX".to_string());
        assert!(HistoricalResponse::decode(&scope, body).is_err());
    }
}
