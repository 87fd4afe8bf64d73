use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::preferences::value_objects::{DietaryFilter, Tier};

/// Cache key of a recipe pool: sorted dietary labels plus a tier suffix,
/// e.g. `"No Pork,Vegan|pro"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds the pool fingerprint. Filters are a set: order and repeats do not
/// change the key.
pub fn build_fingerprint(dietary: &[DietaryFilter], tier: Tier) -> Fingerprint {
    let labels: BTreeSet<&str> = dietary.iter().map(|filter| filter.as_str()).collect();
    let suffix = match tier {
        Tier::Free => "|free",
        Tier::Pro => "|pro",
    };
    Fingerprint(format!(
        "{}{}",
        labels.into_iter().collect::<Vec<_>>().join(","),
        suffix
    ))
}
