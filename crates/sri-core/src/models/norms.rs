use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reference means and standard deviations, keyed by instrument or
/// sub-instrument (`ses_total`, `mosher_guilt_full`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NormativeData {
    pub sample_size: u32,
    pub means: BTreeMap<String, f64>,
    pub standard_deviations: BTreeMap<String, f64>,
    pub updated_at: jiff::Timestamp,
}

/// A single mean/sd pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub mean: f64,
    pub sd: f64,
}

impl Reference {
    pub const fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }
}

impl NormativeData {
    /// Both the mean and the sd must be present for a key to count.
    pub fn reference(&self, key: &str) -> Option<Reference> {
        let mean = self.means.get(key)?;
        let sd = self.standard_deviations.get(key)?;
        Some(Reference::new(*mean, *sd))
    }

    pub fn insert(&mut self, key: impl Into<String>, reference: Reference) {
        let key = key.into();
        self.means.insert(key.clone(), reference.mean);
        self.standard_deviations.insert(key, reference.sd);
    }
}
