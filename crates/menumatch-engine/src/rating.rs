//! Star-rating conversion to the 0–10 scale used downstream.

/// Value used when a rating falls outside the 1–5 star table.
const DEFAULT_RATING_10: f64 = 7.0;

/// Map a 1–5 star rating onto the consuming system's 0–10 scale.
///
/// Exact lookup; anything outside the table (0, out-of-range) gets the
/// neutral-positive default. Pure and total.
pub fn rating_to_ten_point(stars: u8) -> f64 {
    match stars {
        5 => 9.0,
        4 => 7.5,
        3 => 5.5,
        2 => 3.5,
        1 => 2.0,
        _ => DEFAULT_RATING_10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        assert_eq!(rating_to_ten_point(5), 9.0);
        assert_eq!(rating_to_ten_point(4), 7.5);
        assert_eq!(rating_to_ten_point(3), 5.5);
        assert_eq!(rating_to_ten_point(2), 3.5);
        assert_eq!(rating_to_ten_point(1), 2.0);
    }

    #[test]
    fn test_out_of_table_falls_back() {
        assert_eq!(rating_to_ten_point(0), 7.0);
        assert_eq!(rating_to_ten_point(6), 7.0);
        assert_eq!(rating_to_ten_point(255), 7.0);
    }
}
