//! Aggregate module - fan-out fetching of bordering countries

use atlas_domain::{BorderCode, BorderResult, CountrySource};
use futures::future::join_all;

/// Fetch every bordering country's record, tolerating individual failures
///
/// With no codes this returns an empty result immediately, issuing no
/// requests. Otherwise all fetches run concurrently and are joined in
/// input order, so slot `i` of the result always corresponds to
/// `codes[i]`. A failed or empty fetch yields an absent slot and a
/// warning diagnostic; it never affects sibling fetches and never makes
/// `aggregate` itself fail.
pub async fn aggregate<S: CountrySource>(source: &S, codes: &[BorderCode]) -> BorderResult {
    if codes.is_empty() {
        return BorderResult::empty();
    }

    let fetches = codes.iter().map(|code| async move {
        match source.lookup_by_code(code).await {
            Ok(records) => {
                let record = records.into_iter().next();
                if record.is_none() {
                    tracing::warn!("No record for border code {}", code);
                }
                record
            }
            Err(e) => {
                tracing::warn!("Border lookup for {} failed: {}", code, e);
                None
            }
        }
    });

    let slots = join_all(fetches).await;

    let result = BorderResult::from_slots(slots);
    tracing::debug!(
        "Aggregated {}/{} border records",
        result.present_count(),
        result.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_client::MockSource;
    use atlas_domain::CountryRecord;

    fn record(name: &str) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            capital: vec![],
            population: 0,
            region: "Test".to_string(),
            flag_url: String::new(),
            borders: vec![],
        }
    }

    fn codes(raw: &[&str]) -> Vec<BorderCode> {
        raw.iter().copied().map(BorderCode::new).collect()
    }

    #[tokio::test]
    async fn test_no_codes_means_no_requests() {
        let source = MockSource::new();
        let result = aggregate(&source, &[]).await;

        assert!(result.is_empty());
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_is_isolated_and_order_preserved() {
        let mut source = MockSource::new();
        source.add_record("AAA", record("Alpha"));
        source.add_error("BBB");
        source.add_record("CCC", record("Gamma"));

        let result = aggregate(&source, &codes(&["AAA", "BBB", "CCC"])).await;

        assert_eq!(result.len(), 3);
        assert_eq!(result.slots()[0].as_ref().unwrap().name, "Alpha");
        assert!(result.slots()[1].is_none());
        assert_eq!(result.slots()[2].as_ref().unwrap().name, "Gamma");
        assert_eq!(source.call_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_match_is_absent_not_error() {
        let mut source = MockSource::new();
        source.add_record("AAA", record("Alpha"));
        // "XXX" is registered nowhere: the service has no such country

        let result = aggregate(&source, &codes(&["AAA", "XXX"])).await;

        assert_eq!(result.len(), 2);
        assert!(result.slots()[0].is_some());
        assert!(result.slots()[1].is_none());
    }

    #[tokio::test]
    async fn test_france_scenario_partial_failures() {
        let all = ["BEL", "DEU", "ESP", "ITA", "LUX", "CHE", "AND", "MCO"];
        let mut source = MockSource::new();
        for code in all {
            source.add_record(code, record(code));
        }
        source.add_error("ESP");
        source.add_error("AND");

        let result = aggregate(&source, &codes(&all)).await;

        assert_eq!(result.len(), 8);
        assert_eq!(result.present_count(), 6);
        assert_eq!(result.absent_count(), 2);
        assert_eq!(source.call_count(), 8);

        // Survivors keep their input order
        let names: Vec<&str> = result.present().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["BEL", "DEU", "ITA", "LUX", "CHE", "MCO"]);
    }
}
