//! Frequency curve: one centroid per explored period, sorted by period.

use serde::{Deserialize, Serialize};

use super::ring::Centroid;

/// A single `(period, centroid)` entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveEntry {
    pub period: f64,
    pub centroid: Centroid,
}

/// Map from period to centroid. Keys are unique and kept in ascending order,
/// so readers never have to sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyCurve {
    entries: Vec<CurveEntry>,
}

impl FrequencyCurve {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, period: f64) -> std::result::Result<usize, usize> {
        self.entries
            .binary_search_by(|e| e.period.total_cmp(&period))
    }

    /// Insert or overwrite the entry for `period`.
    pub fn insert(&mut self, period: f64, centroid: Centroid) {
        match self.position(period) {
            Ok(i) => self.entries[i].centroid = centroid,
            Err(i) => self.entries.insert(i, CurveEntry { period, centroid }),
        }
    }

    pub fn get(&self, period: f64) -> Option<Centroid> {
        self.position(period).ok().map(|i| self.entries[i].centroid)
    }

    pub fn contains(&self, period: f64) -> bool {
        self.position(period).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[CurveEntry] {
        &self.entries
    }

    pub fn periods(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.period)
    }

    /// `(period, re)` polyline.
    pub fn real_curve(&self) -> Vec<[f64; 2]> {
        self.entries
            .iter()
            .map(|e| [e.period, e.centroid.re])
            .collect()
    }

    /// `(period, im)` polyline.
    pub fn imag_curve(&self) -> Vec<[f64; 2]> {
        self.entries
            .iter()
            .map(|e| [e.period, e.centroid.im])
            .collect()
    }

    pub fn max_period(&self) -> Option<f64> {
        self.entries.last().map(|e| e.period)
    }
}
