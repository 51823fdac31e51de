/// Median of a list of prices; `None` for an empty list.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Round to whole cents, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_odd_count() {
        assert_eq!(median(&[6.00, 4.50, 5.25, 5.00, 5.50]), Some(5.25));
        assert_eq!(median(&[7.10]), Some(7.10));
    }

    #[test]
    fn test_even_count() {
        assert_eq!(median(&[5.00, 6.00]), Some(5.50));
        assert_eq!(median(&[4.00, 6.00, 5.00, 9.00]), Some(5.50));
    }

    #[test]
    fn test_order_independent() {
        let prices = [6.10, 5.85, 7.20, 5.99, 6.45];
        let mut reversed = prices;
        reversed.reverse();
        let mut rotated = prices;
        rotated.rotate_left(2);

        assert_eq!(median(&prices), median(&reversed));
        assert_eq!(median(&prices), median(&rotated));
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(5.125), 5.13);
        assert_eq!(round_to_cents(5.5549), 5.55);
        assert_eq!(round_to_cents(6.0), 6.0);
        assert_eq!(round_to_cents(5.675), 5.68);
    }
}
