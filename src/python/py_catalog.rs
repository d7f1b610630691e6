//! Catalog and synergy bindings for Python.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::cards::Catalog;
use crate::error::SynergyError;
use crate::synergy::{PairwiseSynergyScorer, Ranker, SynergyPair};
use crate::tagging::PatternRuleSet;

impl From<SynergyError> for PyErr {
    fn from(err: SynergyError) -> Self {
        match err {
            SynergyError::NotFound { .. } => PyKeyError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python wrapper for SynergyPair.
#[pyclass(name = "SynergyPair")]
#[derive(Clone)]
pub struct PySynergyPair(pub SynergyPair);

#[pymethods]
impl PySynergyPair {
    /// Card earlier in catalog order.
    #[getter]
    fn first(&self) -> String {
        self.0.first.clone()
    }

    /// The other card.
    #[getter]
    fn second(&self) -> String {
        self.0.second.clone()
    }

    /// Number of shared tags.
    #[getter]
    fn shared(&self) -> usize {
        self.0.shared
    }

    /// `(first, second, shared)` tuple.
    fn to_tuple(&self) -> (String, String, usize) {
        self.0.to_tuple()
    }

    fn __repr__(&self) -> String {
        format!(
            "SynergyPair({:?}, {:?}, {})",
            self.0.first, self.0.second, self.0.shared
        )
    }
}

/// Python wrapper for Catalog.
///
/// Built from a JSON array of card rows, optionally with a JSON taxonomy.
#[pyclass(name = "Catalog")]
pub struct PyCatalog {
    catalog: Catalog,
    scorer: PairwiseSynergyScorer,
}

impl PyCatalog {
    fn pairs(&self) -> Vec<SynergyPair> {
        self.scorer.score(&self.catalog)
    }
}

#[pymethods]
impl PyCatalog {
    /// Create a catalog.
    ///
    /// # Arguments
    /// - cards_json: JSON array of card rows
    /// - rules_json: JSON rule taxonomy; the built-in taxonomy when omitted
    #[new]
    #[pyo3(signature = (cards_json, rules_json = None))]
    fn new(cards_json: &str, rules_json: Option<&str>) -> PyResult<Self> {
        let catalog = match rules_json {
            Some(json) => Catalog::from_json(cards_json, &PatternRuleSet::from_json(json)?)?,
            None => Catalog::from_json(cards_json, PatternRuleSet::builtin())?,
        };
        Ok(Self {
            catalog,
            scorer: PairwiseSynergyScorer::new(),
        })
    }

    fn __len__(&self) -> usize {
        self.catalog.len()
    }

    /// Card names in input order.
    fn names(&self) -> Vec<String> {
        self.catalog.iter().map(|c| c.name.clone()).collect()
    }

    /// Tags of a card. Raises KeyError for unknown names.
    fn tags(&self, name: &str) -> PyResult<Vec<String>> {
        let card = self.catalog.get(name)?;
        Ok(card.tags.iter().map(str::to_string).collect())
    }

    /// `(tag, card_count)` rows, most common first.
    fn tag_census(&self) -> Vec<(String, usize)> {
        self.catalog
            .tag_census()
            .iter()
            .map(|row| (row.tag.clone(), row.cards))
            .collect()
    }

    /// Names of cards that matched no rule.
    fn synergy_less(&self) -> Vec<String> {
        self.catalog.synergy_less().map(|c| c.name.clone()).collect()
    }

    /// All pairs in enumeration order.
    fn score(&self) -> Vec<PySynergyPair> {
        self.pairs().into_iter().map(PySynergyPair).collect()
    }

    /// All pairs, ranked.
    fn rank_all(&self) -> Vec<PySynergyPair> {
        Ranker::rank_all(self.pairs())
            .into_iter()
            .map(PySynergyPair)
            .collect()
    }

    /// The `k` best pairs. `k <= 0` returns an empty list.
    fn top_k(&self, k: i64) -> Vec<PySynergyPair> {
        let k = usize::try_from(k).unwrap_or(0);
        Ranker::top_k(self.pairs(), k)
            .into_iter()
            .map(PySynergyPair)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("Catalog(cards={})", self.catalog.len())
    }
}
