//! core::seq
//!
//! Sequence transforms: even filter, square map, and decimal stringify.
//!
//! Each transform comes in two forms. The `*_view` form is a lazy iterator
//! adapter over a borrowed slice and does no work until consumed; views
//! compose by chaining. The plain form collects its view into a new `Vec`.
//! Inputs are never mutated.
//!
//! # Example
//!
//! ```
//! use evensum::core::seq::{filter_even, filter_even_view, square, square_view};
//!
//! let numbers = [1, 2, 3, 4, 5, 6];
//!
//! // Eager, one stage at a time
//! let evens = filter_even(&numbers);
//! assert_eq!(square(&evens), vec![4, 16, 36]);
//!
//! // Lazy, composed
//! let squared: Vec<i32> = square_view(filter_even_view(numbers)).collect();
//! assert_eq!(squared, vec![4, 16, 36]);
//! ```

use super::integral::Integral;

/// Lazily keep the even elements, in order.
pub fn filter_even_view<T, I>(numbers: I) -> impl Iterator<Item = T>
where
    T: Integral,
    I: IntoIterator<Item = T>,
{
    numbers.into_iter().filter(|&n| n.is_even())
}

/// Lazily square each element, in order.
///
/// Overflow wraps at the type's bounds.
pub fn square_view<T, I>(numbers: I) -> impl Iterator<Item = T>
where
    T: Integral,
    I: IntoIterator<Item = T>,
{
    numbers.into_iter().map(|n| n.wrapping_mul(n))
}

/// Lazily render each element as base-10 text.
pub fn stringify_view<T, I>(numbers: I) -> impl Iterator<Item = String>
where
    T: Integral,
    I: IntoIterator<Item = T>,
{
    numbers.into_iter().map(|n| n.to_string())
}

/// Keep the elements divisible by two, preserving order.
pub fn filter_even<T: Integral>(numbers: &[T]) -> Vec<T> {
    filter_even_view(numbers.iter().copied()).collect()
}

/// Square each element, preserving order and length.
pub fn square<T: Integral>(numbers: &[T]) -> Vec<T> {
    square_view(numbers.iter().copied()).collect()
}

/// Render each element as canonical decimal text, preserving order and length.
pub fn stringify<T: Integral>(numbers: &[T]) -> Vec<String> {
    stringify_view(numbers.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_even_empty() {
        assert!(filter_even::<i32>(&[]).is_empty());
    }

    #[test]
    fn filter_even_all_odd() {
        assert!(filter_even(&[1, 3, 5]).is_empty());
    }

    #[test]
    fn filter_even_all_even() {
        assert_eq!(filter_even(&[2, 4]), vec![2, 4]);
    }

    #[test]
    fn filter_even_preserves_order() {
        assert_eq!(filter_even(&[6, 1, 2, 3, 4, 5]), vec![6, 2, 4]);
    }

    #[test]
    fn filter_even_negatives() {
        assert_eq!(filter_even(&[-4, -3, -2, -1, 0]), vec![-4, -2, 0]);
    }

    #[test]
    fn filter_even_does_not_mutate_input() {
        let numbers = vec![1, 2, 3];
        let _ = filter_even(&numbers);
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn square_empty() {
        assert!(square::<i64>(&[]).is_empty());
    }

    #[test]
    fn square_preserves_length_and_order() {
        assert_eq!(square(&[3, -2, 0, 5]), vec![9, 4, 0, 25]);
    }

    #[test]
    fn square_wraps_on_overflow() {
        assert_eq!(square(&[i32::MAX]), vec![1]);
        assert_eq!(square(&[16_u8]), vec![0]);
    }

    #[test]
    fn stringify_canonical_decimal() {
        assert_eq!(stringify(&[-5, 0, 12]), vec!["-5", "0", "12"]);
    }

    #[test]
    fn stringify_extremes() {
        assert_eq!(
            stringify(&[i64::MIN, i64::MAX]),
            vec!["-9223372036854775808", "9223372036854775807"]
        );
    }

    #[test]
    fn views_are_lazy() {
        let numbers = [1, 2, 3, 4];
        let mut view = square_view(filter_even_view(numbers));
        assert_eq!(view.next(), Some(4));
        assert_eq!(view.next(), Some(16));
        assert_eq!(view.next(), None);
    }

    #[test]
    fn views_compose_with_stringify() {
        let numbers = [1, 2, 3, 4, 5, 6];
        let text: Vec<String> = stringify_view(square_view(filter_even_view(numbers))).collect();
        assert_eq!(text, vec!["4", "16", "36"]);
    }
}
