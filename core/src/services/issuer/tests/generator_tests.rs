//! Unit tests for code generation

use std::collections::HashSet;

use crate::domain::entities::verification_code::{VerificationCode, CODE_LENGTH, CODE_SPACE};
use crate::services::issuer::{format_code, CodeGenerator, RandomCodeGenerator};

#[test]
fn test_generated_code_format() {
    let generator = RandomCodeGenerator::from_entropy();

    for _ in 0..1_000 {
        let code = generator.next_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(VerificationCode::is_well_formed(&code));

        let num: u32 = code.parse().unwrap();
        assert!(num < CODE_SPACE);
    }
}

#[test]
fn test_format_code_zero_pads() {
    assert_eq!(format_code(0), "000000");
    assert_eq!(format_code(42_317), "042317");
    assert_eq!(format_code(999_999), "999999");
}

#[test]
fn test_seeded_generators_are_reproducible() {
    let a = RandomCodeGenerator::seeded(7);
    let b = RandomCodeGenerator::seeded(7);

    let first: Vec<String> = (0..20).map(|_| a.next_code()).collect();
    let second: Vec<String> = (0..20).map(|_| b.next_code()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_draws_are_independent() {
    let generator = RandomCodeGenerator::seeded(11);
    let codes: HashSet<String> = (0..100).map(|_| generator.next_code()).collect();

    // Repeats are possible but 100 draws from a million should be nearly all distinct
    assert!(codes.len() > 90);
}

#[test]
fn test_distribution_is_uniform() {
    const DRAWS: usize = 100_000;
    let generator = RandomCodeGenerator::seeded(2024);

    let mut buckets = [0usize; 10];
    let mut min = u32::MAX;
    let mut max = 0u32;

    for _ in 0..DRAWS {
        let value: u32 = generator.next_code().parse().unwrap();
        buckets[(value / 100_000) as usize] += 1;
        min = min.min(value);
        max = max.max(value);
    }

    // Each leading digit should get about a tenth of the draws
    for count in buckets {
        assert!((9_000..=11_000).contains(&count), "bucket count {} out of range", count);
    }

    // Both ends of the range are reached, including codes with leading zeros
    assert!(min < 10_000);
    assert!(max > 990_000);
}

#[test]
fn test_shared_generator_across_threads() {
    let generator = std::sync::Arc::new(RandomCodeGenerator::from_entropy());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = generator.clone();
            std::thread::spawn(move || (0..250).map(|_| generator.next_code()).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        for code in handle.join().unwrap() {
            assert!(VerificationCode::is_well_formed(&code));
        }
    }
}
