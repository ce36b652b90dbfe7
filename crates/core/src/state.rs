use std::fmt;

/// Window geometry sampled at the moment a scroll event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset in CSS pixels.
    pub scroll_top: f64,
    /// Full height of the document content.
    pub document_height: f64,
    /// Height of the visible viewport.
    pub window_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, document_height: f64, window_height: f64) -> Self {
        Self {
            scroll_top,
            document_height,
            window_height,
        }
    }

    /// Largest offset the window can scroll to.  Zero or negative when the
    /// content fits inside the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.document_height - self.window_height
    }

    /// `round(100 * scrollTop / (documentHeight - windowHeight))` with no
    /// guards: may be `NaN`, infinite or outside `[0, 100]`.
    ///
    /// Halves round toward positive infinity.
    #[must_use]
    pub fn raw_percent(&self) -> f64 {
        let fraction = self.scroll_top / self.max_scroll();
        (fraction * 100.0 + 0.5).floor()
    }

    /// Scroll position as a percentage clamped to `[0, 100]`.
    ///
    /// A page without a positive scroll range reports 0.
    #[must_use]
    pub fn percent(&self) -> ScrollState {
        if self.max_scroll() <= 0.0 {
            return ScrollState::default();
        }
        let raw = self.raw_percent();
        if !raw.is_finite() {
            return ScrollState::default();
        }
        ScrollState {
            percent: raw.clamp(0.0, 100.0) as u8,
        }
    }
}

/// Derived scroll percentage for a single event.  Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct ScrollState {
    /// Always within `[0, 100]`.
    pub percent: u8,
}

impl ScrollState {
    /// Value for the fill element's CSS `width`, e.g. `"42%"`.
    pub fn css_width(self) -> String {
        format!("{}%", self.percent)
    }
}

impl fmt::Display for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent)
    }
}

/// Lifecycle of a single indicator.
///
/// `Idle` until the initial state is painted, then `Tracking` for as long
/// as the indicator stays attached.  There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingPhase {
    #[default]
    Idle,
    Tracking,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn top_of_page_is_zero() {
        let metrics = ScrollMetrics::new(0.0, 3000.0, 1000.0);
        assert_eq!(metrics.percent().percent, 0);
    }

    #[test]
    fn bottom_of_page_is_hundred() {
        let metrics = ScrollMetrics::new(2000.0, 3000.0, 1000.0);
        assert_eq!(metrics.percent().percent, 100);
    }

    #[test]
    fn midway_rounds_to_nearest() {
        // 1 / 3 → 33.33…
        assert_eq!(ScrollMetrics::new(1.0, 4.0, 1.0).percent().percent, 33);
        // 2 / 3 → 66.66…
        assert_eq!(ScrollMetrics::new(2.0, 4.0, 1.0).percent().percent, 67);
        // 1 / 8 → 12.5, halves round up
        assert_eq!(ScrollMetrics::new(1.0, 9.0, 1.0).percent().percent, 13);
    }

    #[test]
    fn recomputing_without_scrolling_is_stable() {
        let metrics = ScrollMetrics::new(740.0, 5200.0, 900.0);
        assert_eq!(metrics.percent(), metrics.percent());
    }

    #[test]
    fn content_fitting_viewport_reports_zero() {
        let equal = ScrollMetrics::new(0.0, 800.0, 800.0);
        assert!(equal.raw_percent().is_nan());
        assert_eq!(equal.percent().percent, 0);

        let shorter = ScrollMetrics::new(10.0, 600.0, 800.0);
        assert!(shorter.raw_percent() < 0.0);
        assert_eq!(shorter.percent().percent, 0);
    }

    #[test]
    fn overscroll_is_clamped() {
        let past_end = ScrollMetrics::new(2500.0, 3000.0, 1000.0);
        assert_eq!(past_end.raw_percent(), 125.0);
        assert_eq!(past_end.percent().percent, 100);

        let bounce = ScrollMetrics::new(-40.0, 3000.0, 1000.0);
        assert_eq!(bounce.percent().percent, 0);
    }

    #[test]
    fn css_width_has_percent_suffix() {
        let state = ScrollState { percent: 42 };
        assert_eq!(state.css_width(), "42%");
        assert_eq!(state.to_string(), "42%");
    }
}
