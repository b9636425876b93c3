//! Property tests for the backdrop and the section tracker.

use proptest::prelude::*;

use termfolio::rain::{RainConfig, RainFx, Tier};
use termfolio::sections::{SectionId, SectionSpan, SectionTracker};

proptest! {
    /// Column count is a pure function of width, regardless of history.
    #[test]
    fn column_count_tracks_width(
        widths in prop::collection::vec(0.0f32..3000.0, 1..8),
        seed in any::<u32>(),
    ) {
        let mut fx = RainFx::new(RainConfig::default(), seed);
        for width in widths {
            fx.resize(width, 600.0);
            prop_assert_eq!(fx.columns(), (width / 18.0) as usize);
        }
    }

    /// Offsets stay within one cell of the surface no matter how long
    /// the animation runs.
    #[test]
    fn offsets_stay_bounded(
        seed in any::<u32>(),
        ticks in 0usize..400,
        width in 18.0f32..1200.0,
        height in 18.0f32..900.0,
    ) {
        let mut fx = RainFx::new(RainConfig::default(), seed);
        fx.resize(width, height);
        for _ in 0..ticks {
            fx.tick();
        }
        let limit = fx.rows() as f32 + 1.0 + 0.8;
        for &offset in fx.offsets() {
            prop_assert!(offset >= 0.0);
            prop_assert!(offset <= limit, "offset {offset} above {limit}");
        }
    }

    /// Between resets a column only ever moves down.
    #[test]
    fn columns_fall_monotonically(seed in any::<u32>(), ticks in 1usize..200) {
        let mut fx = RainFx::new(RainConfig::default(), seed);
        fx.resize(360.0, 360.0);
        let mut previous = fx.offsets().to_vec();
        for _ in 0..ticks {
            fx.tick();
            for (before, after) in previous.iter().zip(fx.offsets()) {
                prop_assert!(
                    after >= before || *after == 0.0,
                    "column went from {before} to {after} without resetting"
                );
            }
            previous = fx.offsets().to_vec();
        }
    }

    /// Tier classification is total and respects the exact boundaries.
    #[test]
    fn tiers_partition_distances(distance in 0.0f32..10_000.0) {
        let config = RainConfig::default();
        let tier = Tier::for_distance(distance, &config);
        let expected = if distance < 120.0 {
            Tier::Near
        } else if distance < 250.0 {
            Tier::Medium
        } else {
            Tier::Far
        };
        prop_assert_eq!(tier, expected);
    }

    /// With contiguous spans the tracker always answers with the span
    /// containing the probe, clamped to the last section past the end.
    #[test]
    fn tracker_matches_containing_span(
        heights in prop::collection::vec(1u32..500, 6),
        scrolls in prop::collection::vec(0u32..4000, 1..30),
    ) {
        let mut spans = Vec::new();
        let mut top = 0;
        for (id, height) in SectionId::ALL.into_iter().zip(&heights) {
            spans.push(SectionSpan::new(id, top, *height));
            top += height;
        }
        let total = top;

        let mut tracker = SectionTracker::new(spans.clone()).with_lookahead(0);
        let mut expected = SectionId::Home;
        for scroll in scrolls {
            if let Some(span) = spans.iter().find(|s| s.contains(scroll)) {
                expected = span.id;
            }
            prop_assert_eq!(tracker.on_scroll(scroll), expected);
            if scroll >= total {
                // Past the end nothing matches, so the answer is sticky.
                prop_assert_eq!(tracker.active(), expected);
            }
        }
    }
}
