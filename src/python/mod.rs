//! Python bindings for joker-synergy.
//!
//! # Quick Start
//!
//! ```python
//! import joker_synergy as js
//!
//! catalog = js.Catalog(open("jokers.json").read())
//!
//! catalog.tag_census()      # [("mult", 61), ("chips", 23), ...]
//! catalog.synergy_less()    # ["Blueprint", ...]
//!
//! for pair in catalog.top_k(5):
//!     print(pair.first, pair.second, pair.shared)
//! ```

use pyo3::prelude::*;

mod py_catalog;

pub use py_catalog::*;

/// joker-synergy: joker tagging and synergy ranking.
#[pymodule]
fn joker_synergy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCatalog>()?;
    m.add_class::<PySynergyPair>()?;
    Ok(())
}
