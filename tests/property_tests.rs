//! Property-based tests for the pipeline stages.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use evensum::core::integral::sum;
use evensum::core::pipeline::run;
use evensum::core::seq::{
    filter_even, filter_even_view, square, square_view, stringify, stringify_view,
};
use evensum::ui::output::format_set;

/// Returns true if `needle` appears in `haystack` in order (not necessarily contiguous).
fn is_subsequence(needle: &[i32], haystack: &[i32]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

proptest! {
    /// Every kept element is even and every dropped element is odd.
    #[test]
    fn filter_even_partitions(numbers in prop::collection::vec(any::<i32>(), 0..64)) {
        let evens = filter_even(&numbers);

        prop_assert!(evens.iter().all(|n| n % 2 == 0));
        let even_count = numbers.iter().filter(|n| *n % 2 == 0).count();
        prop_assert_eq!(evens.len(), even_count);
        prop_assert!(is_subsequence(&evens, &numbers));
    }

    /// Squaring preserves length and each element squares in place.
    #[test]
    fn square_elementwise(numbers in prop::collection::vec(any::<i32>(), 0..64)) {
        let squared = square(&numbers);

        prop_assert_eq!(squared.len(), numbers.len());
        for (x, sq) in numbers.iter().zip(&squared) {
            prop_assert_eq!(*sq, x.wrapping_mul(*x));
        }
    }

    /// Without overflow, the sum agrees with a wide-integer reference.
    #[test]
    fn sum_matches_wide_reference(numbers in prop::collection::vec(-1_000_000i64..1_000_000, 0..64)) {
        let expected: i128 = numbers.iter().map(|&n| n as i128).sum();
        prop_assert_eq!(sum(&numbers) as i128, expected);
    }

    /// Stringified elements parse back to the same values.
    #[test]
    fn stringify_is_canonical(numbers in prop::collection::vec(any::<i64>(), 0..32)) {
        let text = stringify(&numbers);

        prop_assert_eq!(text.len(), numbers.len());
        for (n, s) in numbers.iter().zip(&text) {
            prop_assert_eq!(s.parse::<i64>().unwrap(), *n);
            prop_assert!(!s.starts_with('+'));
            prop_assert!(s == "0" || !s.trim_start_matches('-').starts_with('0'));
        }
    }

    /// Composed views produce the same sequences as the eager stages.
    #[test]
    fn views_match_eager(numbers in prop::collection::vec(any::<i16>(), 0..64)) {
        let lazy: Vec<String> =
            stringify_view(square_view(filter_even_view(numbers.iter().copied()))).collect();
        let eager = stringify(&square(&filter_even(&numbers)));

        prop_assert_eq!(lazy, eager);
    }

    /// The rendered set is brace-delimited with one quoted entry per element.
    #[test]
    fn format_set_shape(items in prop::collection::vec("[a-z0-9-]{1,8}", 0..16)) {
        let rendered = format_set(&items);

        prop_assert_eq!(rendered.chars().next(), Some('{'));
        prop_assert_eq!(rendered.chars().last(), Some('}'));
        prop_assert_eq!(rendered.matches('"').count(), items.len() * 2);
        let inner = &rendered[1..rendered.len() - 1];
        if items.is_empty() {
            prop_assert_eq!(inner, "");
        } else {
            let parts: Vec<&str> = inner.split(", ").collect();
            prop_assert_eq!(parts.len(), items.len());
        }
    }

    /// The report total is the sum of the squared evens.
    #[test]
    fn report_is_consistent(numbers in prop::collection::vec(-10_000i32..10_000, 0..32)) {
        let report = run(&numbers);

        prop_assert_eq!(&report.original, &numbers);
        prop_assert_eq!(&report.evens, &filter_even(&numbers));
        prop_assert_eq!(&report.squared, &square(&report.evens));
        prop_assert_eq!(report.total, sum(&report.squared));
        prop_assert_eq!(report.to_string().lines().count(), 4);
    }
}
