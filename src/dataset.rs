//! Synthetic person records.
//!
//! [`generate`] is deterministic: the first 22 records are a fixed sample and
//! larger requests append variants derived from it. [`random_records`]
//! draws in-range records from a seeded RNG for property tests and
//! benchmarks.

use crate::score::PersonRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// (name, avg_continuous_minutes, num_meetings, self_report, last_pause_minutes)
const BASE: [(&str, f64, u32, f64, f64); 22] = [
    ("Alice", 120.0, 6, 4.0, 180.0),
    ("Bruno", 90.0, 4, 6.0, 60.0),
    ("Carolina", 210.0, 8, 3.0, 240.0),
    ("Daniel", 45.0, 2, 8.0, 30.0),
    ("Eduarda", 150.0, 5, 5.0, 120.0),
    ("Felipe", 180.0, 7, 4.0, 200.0),
    ("Gabriela", 60.0, 3, 7.0, 45.0),
    ("Helena", 240.0, 9, 2.0, 300.0),
    ("Igor", 30.0, 1, 9.0, 15.0),
    ("Júlia", 200.0, 8, 3.0, 210.0),
    ("Kleber", 100.0, 4, 6.0, 80.0),
    ("Larissa", 130.0, 5, 5.0, 100.0),
    ("Marcos", 75.0, 3, 7.0, 50.0),
    ("Natália", 95.0, 4, 6.0, 70.0),
    ("Otávio", 160.0, 6, 5.0, 150.0),
    ("Patrícia", 220.0, 9, 3.0, 220.0),
    ("Quico", 55.0, 2, 8.0, 40.0),
    ("Rafaela", 140.0, 5, 5.0, 110.0),
    ("Sérgio", 170.0, 6, 4.0, 160.0),
    ("Tatiana", 85.0, 3, 7.0, 60.0),
    ("Ulisses", 125.0, 4, 6.0, 90.0),
    ("Valéria", 190.0, 7, 4.0, 185.0),
];

/// Number of fixed sample records.
pub const BASE_LEN: usize = BASE.len();

/// Floor applied to the focus minutes of derived variants.
const VARIANT_MIN_FOCUS: f64 = 20.0;

/// The fixed sample, ids 1..=22.
pub fn base_records() -> Vec<PersonRecord> {
    BASE.iter()
        .enumerate()
        .map(|(i, &(name, focus, meetings, self_report, pause))| {
            PersonRecord::new(i as u32 + 1, name, focus, meetings, self_report, pause)
        })
        .collect()
}

/// Returns `n` records.
///
/// For `n <= 22` this is a prefix of [`base_records`]. Beyond that, variant
/// `k` (1-based) copies base record `(21 + k) % 22`, takes id `22 + k`,
/// appends `#k` to the name and shifts the focus minutes by `(7k) % 60`
/// with a floor of 20.
pub fn generate(n: usize) -> Vec<PersonRecord> {
    let mut records = base_records();
    if n <= BASE_LEN {
        records.truncate(n);
        return records;
    }

    let variants: Vec<PersonRecord> = (1..=n - BASE_LEN)
        .map(|k| {
            let template = &records[(BASE_LEN + k - 1) % BASE_LEN];
            let shift = ((k * 7) % 60) as f64;
            PersonRecord {
                id: (BASE_LEN + k) as u32,
                name: format!("{}#{k}", template.name),
                avg_continuous_minutes: (template.avg_continuous_minutes + shift)
                    .max(VARIANT_MIN_FOCUS),
                ..template.clone()
            }
        })
        .collect();
    records.extend(variants);
    records
}

/// Draws `n` records with every signal inside its nominal range.
///
/// Focus and pause minutes are whole numbers in 0..=240 and 0..=300,
/// meetings in 0..=10 and self-report in 1..=10.
pub fn random_records(n: usize, seed: u64) -> Vec<PersonRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            PersonRecord::new(
                i as u32 + 1,
                format!("person-{}", i + 1),
                f64::from(rng.random_range(0u32..=240)),
                rng.random_range(0u32..=10),
                f64::from(rng.random_range(1u32..=10)),
                f64::from(rng.random_range(0u32..=300)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::validate_record;

    #[test]
    fn test_prefix() {
        let records = generate(5);
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[4].id, 5);
    }

    #[test]
    fn test_zero() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn test_full_base() {
        let records = generate(22);
        assert_eq!(records, base_records());
        assert_eq!(records[21].name, "Valéria");
    }

    #[test]
    fn test_variants() {
        let records = generate(25);
        assert_eq!(records.len(), 25);

        // k = 1 copies base index 0 (Alice, 120 min) shifted by 7.
        let v1 = &records[22];
        assert_eq!(v1.id, 23);
        assert_eq!(v1.name, "Alice#1");
        assert!((v1.avg_continuous_minutes - 127.0).abs() < 1e-12);
        assert_eq!(v1.num_meetings, 6);

        // k = 3 copies base index 2 (Carolina, 210 min) shifted by 21.
        let v3 = &records[24];
        assert_eq!(v3.name, "Carolina#3");
        assert!((v3.avg_continuous_minutes - 231.0).abs() < 1e-12);
    }

    #[test]
    fn test_generated_records_are_valid() {
        for r in generate(60) {
            validate_record(&r).unwrap();
        }
    }

    #[test]
    fn test_random_is_seeded_and_valid() {
        let a = random_records(30, 7);
        let b = random_records(30, 7);
        assert_eq!(a, b);
        for r in &a {
            validate_record(r).unwrap();
        }
    }
}
