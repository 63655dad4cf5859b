//! IP address anonymization
//!
//! The last dot-separated octet of an address is replaced by a uniformly random
//! value in `[1, 254]`; the network prefix is kept. Results are remembered in an
//! [`IpMappingTable`] so every occurrence of an address within one run maps to
//! the same anonymized address.
//!
//! The generator is a general-purpose PRNG. With only 254 candidates per prefix
//! this obscures host identity but does not withstand an adversary who can
//! correlate traffic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Smallest replacement octet
pub const OCTET_MIN: u8 = 1;

/// Largest replacement octet
pub const OCTET_MAX: u8 = 254;

/// Original address to anonymized address, scoped to one run
#[derive(Debug, Default, Clone)]
pub struct IpMappingTable {
    entries: HashMap<String, String>,
}

impl IpMappingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Previously assigned replacement for `original`
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    /// Record a replacement; the first mapping for an address wins
    pub fn insert(&mut self, original: impl Into<String>, anonymized: impl Into<String>) -> &str {
        self.entries
            .entry(original.into())
            .or_insert_with(|| anonymized.into())
    }

    /// Number of distinct addresses mapped
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no address has been mapped yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replace the fourth octet of `ip` with a random value in `[OCTET_MIN, OCTET_MAX]`
///
/// Returns `None` when `ip` has fewer than four dot-separated components.
/// Components past the fourth are kept as they are.
pub fn randomize_last_octet<R: Rng + ?Sized>(ip: &str, rng: &mut R) -> Option<String> {
    let octets: Vec<&str> = ip.split('.').collect();
    if octets.len() < 4 {
        return None;
    }

    let replacement = rng.gen_range(OCTET_MIN..=OCTET_MAX).to_string();
    let anonymized: Vec<&str> = octets
        .iter()
        .enumerate()
        .map(|(i, octet)| if i == 3 { replacement.as_str() } else { *octet })
        .collect();
    Some(anonymized.join("."))
}

/// Consistent last-octet anonymizer
pub struct IpAnonymizer {
    table: IpMappingTable,
    rng: StdRng,
}

impl IpAnonymizer {
    /// Anonymizer seeded from OS entropy
    pub fn new() -> Self {
        Self {
            table: IpMappingTable::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Anonymizer with a reproducible sequence of replacement octets
    pub fn with_seed(seed: u64) -> Self {
        Self {
            table: IpMappingTable::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Anonymized form of `ip`, reusing an earlier mapping when one exists
    ///
    /// Returns `None` for a malformed address; nothing is recorded for it.
    pub fn anonymize(&mut self, ip: &str) -> Option<String> {
        if let Some(existing) = self.table.get(ip) {
            return Some(existing.to_string());
        }

        let anonymized = randomize_last_octet(ip, &mut self.rng)?;
        Some(self.table.insert(ip, anonymized).to_string())
    }

    /// Mappings built so far
    pub fn table(&self) -> &IpMappingTable {
        &self.table
    }
}

impl Default for IpAnonymizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_octet(ip: &str) -> u8 {
        ip.rsplit('.').next().unwrap().parse().unwrap()
    }

    #[test]
    fn test_prefix_preserved() {
        let mut rng = StdRng::seed_from_u64(7);
        let anonymized = randomize_last_octet("192.168.10.42", &mut rng).unwrap();
        assert!(anonymized.starts_with("192.168.10."));
        let octet = last_octet(&anonymized);
        assert!((OCTET_MIN..=OCTET_MAX).contains(&octet));
    }

    #[test]
    fn test_octet_range_over_many_draws() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5_000 {
            let anonymized = randomize_last_octet("10.0.0.0", &mut rng).unwrap();
            let octet = last_octet(&anonymized);
            assert!((1..=254).contains(&octet), "octet {octet} out of range");
        }
    }

    #[test]
    fn test_too_few_components() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(randomize_last_octet("not-an-ip", &mut rng).is_none());
        assert!(randomize_last_octet("10.0.0", &mut rng).is_none());
        assert!(randomize_last_octet("", &mut rng).is_none());
    }

    #[test]
    fn test_extra_components_kept() {
        let mut rng = StdRng::seed_from_u64(0);
        let anonymized = randomize_last_octet("10.0.0.5.99", &mut rng).unwrap();
        assert!(anonymized.starts_with("10.0.0."));
        assert!(anonymized.ends_with(".99"));
        assert_eq!(anonymized.split('.').count(), 5);
    }

    #[test]
    fn test_consistent_mapping() {
        let mut anonymizer = IpAnonymizer::with_seed(42);
        let first = anonymizer.anonymize("10.0.0.5").unwrap();
        for _ in 0..100 {
            assert_eq!(anonymizer.anonymize("10.0.0.5").unwrap(), first);
        }
        assert_eq!(anonymizer.table().len(), 1);
    }

    #[test]
    fn test_malformed_not_recorded() {
        let mut anonymizer = IpAnonymizer::with_seed(42);
        assert!(anonymizer.anonymize("localhost").is_none());
        assert!(anonymizer.table().is_empty());
    }

    #[test]
    fn test_seeded_runs_match() {
        let mut a = IpAnonymizer::with_seed(99);
        let mut b = IpAnonymizer::with_seed(99);
        for ip in ["10.0.0.1", "10.0.0.2", "172.16.4.9"] {
            assert_eq!(a.anonymize(ip), b.anonymize(ip));
        }
    }

    #[test]
    fn test_table_first_mapping_wins() {
        let mut table = IpMappingTable::new();
        table.insert("1.2.3.4", "1.2.3.9");
        assert_eq!(table.insert("1.2.3.4", "1.2.3.10"), "1.2.3.9");
        assert_eq!(table.get("1.2.3.4"), Some("1.2.3.9"));
        assert_eq!(table.len(), 1);
    }
}
