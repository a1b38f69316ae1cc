//! Search/Filter
//!
//! Client-side substring filter over the cached list, plus the ticketing
//! behind the debounced search input.

use std::cell::Cell;

use crate::model::Carro;

/// Records whose model name or identifier contains `query`, case-insensitively.
/// A blank query keeps everything.
pub fn filter(records: &[Carro], query: &str) -> Vec<Carro> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|carro| {
            let id = carro.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
            carro.modelo.to_lowercase().contains(&query) || id.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Only the newest ticket survives the quiet period; older ones are dropped.
#[derive(Debug, Default)]
pub struct Debouncer {
    latest: Cell<u64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new input event, superseding all earlier ones.
    pub fn arm(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CarroId;

    fn carro(id: Option<CarroId>, modelo: &str) -> Carro {
        Carro { id, modelo: modelo.to_string(), preco: 1.0, image: None }
    }

    fn sample() -> Vec<Carro> {
        vec![
            carro(Some(CarroId::Number(1)), "Civic"),
            carro(Some(CarroId::Number(2)), "Corolla"),
            carro(Some(CarroId::Number(12)), "Onix Plus"),
            carro(Some(CarroId::Text("AB-9".into())), "Gol"),
            carro(None, "Uno"),
        ]
    }

    fn modelos(records: &[Carro]) -> Vec<&str> {
        records.iter().map(|c| c.modelo.as_str()).collect()
    }

    #[test]
    fn test_filter_by_model_substring() {
        let records = vec![carro(Some(CarroId::Number(1)), "Civic"), carro(Some(CarroId::Number(2)), "Corolla")];
        assert_eq!(modelos(&filter(&records, "civ")), vec!["Civic"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_not_prefix_only() {
        let records = sample();
        assert_eq!(modelos(&filter(&records, "  PLUS ")), vec!["Onix Plus"]);
        assert_eq!(modelos(&filter(&records, "oroll")), vec!["Corolla"]);
    }

    #[test]
    fn test_filter_matches_identifier() {
        let records = sample();
        assert_eq!(modelos(&filter(&records, "1")), vec!["Civic", "Onix Plus"]);
        assert_eq!(modelos(&filter(&records, "ab-")), vec!["Gol"]);
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let records = sample();
        assert_eq!(filter(&records, ""), records);
        assert_eq!(filter(&records, "   "), records);
    }

    #[test]
    fn test_filter_results_always_contain_query() {
        let records = sample();
        for query in ["o", "c", "2", "x", "zzz", "la"] {
            for hit in filter(&records, query) {
                let id = hit.id.as_ref().map(|id| id.to_string().to_lowercase()).unwrap_or_default();
                assert!(hit.modelo.to_lowercase().contains(query) || id.contains(query));
            }
        }
    }

    #[test]
    fn test_debouncer_keeps_only_latest_ticket() {
        let debouncer = Debouncer::new();
        let first = debouncer.arm();
        let second = debouncer.arm();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }
}
