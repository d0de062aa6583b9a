//! Locating a time inside an ordered key sequence
//!
//! Curves and gradients share the same lookup rules: clamp the time to
//! `[0, 1]`, return the boundary key outside the keyed range, and otherwise
//! find the first pair `k[i].time <= t <= k[i + 1].time`. Unsorted input
//! never panics; when no pair brackets the time the last key wins.

/// Brackets narrower than this collapse to their left key
pub const DEGENERATE_SPAN: f32 = 1e-4;

/// A key positioned on the normalized time axis
pub trait TimedKey {
    /// Position of the key in `[0, 1]`
    fn time(&self) -> f32;
}

/// Where a time falls relative to a key sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket<'a, K> {
    /// The sequence has no keys
    Empty,
    /// The time resolves to a single key without interpolation
    Key(&'a K),
    /// The time lies inside the span between two keys
    Between {
        /// Key at or before the time
        from: &'a K,
        /// Key at or after the time
        to: &'a K,
        /// Time distance between the two keys
        span: f32,
        /// Local position inside the span, `0.0..=1.0`
        u: f32,
    },
}

/// Find the keys surrounding `t`
///
/// `t` is clamped to `[0, 1]` before the search.
pub fn find_bracket<K: TimedKey>(keys: &[K], t: f32) -> Bracket<'_, K> {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return Bracket::Empty;
    };

    if keys.len() == 1 {
        return Bracket::Key(first);
    }

    let t = t.clamp(0.0, 1.0);

    if t <= first.time() {
        return Bracket::Key(first);
    }
    if t >= last.time() {
        return Bracket::Key(last);
    }

    let pair = keys
        .windows(2)
        .find(|pair| pair[0].time() <= t && t <= pair[1].time());

    match pair {
        Some([from, to]) => {
            let span = to.time() - from.time();
            if span < DEGENERATE_SPAN {
                Bracket::Key(from)
            } else {
                Bracket::Between {
                    from,
                    to,
                    span,
                    u: (t - from.time()) / span,
                }
            }
        }
        _ => Bracket::Key(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl TimedKey for f32 {
        fn time(&self) -> f32 {
            *self
        }
    }

    #[test]
    fn test_empty_sequence() {
        let keys: Vec<f32> = vec![];
        assert_eq!(find_bracket(&keys, 0.5), Bracket::Empty);
    }

    #[test]
    fn test_single_key_always_wins() {
        let keys = vec![0.4];
        assert_eq!(find_bracket(&keys, 0.0), Bracket::Key(&0.4));
        assert_eq!(find_bracket(&keys, 0.9), Bracket::Key(&0.4));
    }

    #[test]
    fn test_boundaries_and_interior() {
        let keys = vec![0.2, 0.6, 1.0];

        assert_eq!(find_bracket(&keys, -3.0), Bracket::Key(&0.2));
        assert_eq!(find_bracket(&keys, 0.2), Bracket::Key(&0.2));
        assert_eq!(find_bracket(&keys, 1.0), Bracket::Key(&1.0));

        match find_bracket(&keys, 0.4) {
            Bracket::Between { from, to, span, u } => {
                assert_eq!(*from, 0.2);
                assert_eq!(*to, 0.6);
                assert!((span - 0.4).abs() < 1e-6);
                assert!((u - 0.5).abs() < 1e-6);
            }
            other => panic!("expected a bracket, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_span_collapses_to_left_key() {
        let keys = vec![0.0, 0.5, 0.50005, 1.0];
        // 0.50002 sits in the zero-width bracket [0.5, 0.50005]
        assert_eq!(find_bracket(&keys, 0.50002), Bracket::Key(&0.5));
    }

    #[test]
    fn test_unsorted_keys_use_first_crossing_pair() {
        let keys = vec![0.1, 0.9, 0.3, 0.95];
        match find_bracket(&keys, 0.5) {
            Bracket::Between { from, to, .. } => {
                assert_eq!(*from, 0.1);
                assert_eq!(*to, 0.9);
            }
            other => panic!("expected a bracket, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_time_does_not_panic() {
        let keys = vec![0.0, 1.0];
        assert_eq!(find_bracket(&keys, f32::NAN), Bracket::Key(&1.0));
    }
}
