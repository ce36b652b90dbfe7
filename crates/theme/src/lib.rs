pub mod colors;
pub mod style;

pub use style::{Declarations, FillStyle, TrackStyle};

use indicator_config::IndicatorConfig;

/// `id` of the outer track element.
pub const TRACK_ID: &str = "scroll-indicator";
/// `id` of the inner fill element.
pub const BAR_ID: &str = "scroll-indicator-bar";
/// `id` of the shared `<style>` block in `<head>`.
pub const STYLESHEET_ID: &str = "scroll-indicator-style";

/// Page-wide defaults for the indicator markup: full-width track, empty
/// fill, and a half-second transition on fill width changes.
pub const GLOBAL_STYLESHEET: &str = concat!(
    "#scroll-indicator{width:100%;background-color:transparent;} ",
    "#scroll-indicator-bar{width:0%;height:100%;",
    "-webkit-transition:all 0.5s;-moz-transition:all 0.5s;transition:all 0.5s;}",
);

/// Compiled look of one indicator, derived from [`IndicatorConfig`].
///
/// Computed once at attach time; nothing here changes while scrolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorTheme {
    pub track: TrackStyle,
    pub fill:  FillStyle,
}

impl IndicatorTheme {
    pub fn from_config(cfg: &IndicatorConfig) -> Self {
        Self {
            track: TrackStyle {
                background_color: cfg.background_color.clone(),
                thickness:        cfg.width.clone(),
                pinned:           cfg.is_fixed().then_some(cfg.position),
            },
            fill: FillStyle::resolve(cfg.color.as_deref(), cfg.gradient_finish.as_deref()),
        }
    }
}

impl Default for IndicatorTheme {
    fn default() -> Self {
        Self::from_config(&IndicatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicator_config::{ConfigOverrides, Position};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_theme_is_top_overlay_with_gradient() {
        let theme = IndicatorTheme::default();
        assert_eq!(theme.track.pinned, Some(Position::Top));
        assert_eq!(theme.track.thickness, "5px");
        assert!(theme.fill.is_gradient());
    }

    #[test]
    fn targeted_theme_is_not_pinned() {
        let cfg = IndicatorConfig::resolve(
            ConfigOverrides::default().target("header").position(Position::Bottom),
        );
        assert_eq!(IndicatorTheme::from_config(&cfg).track.pinned, None);
    }

    #[test]
    fn stylesheet_targets_markup_ids() {
        assert!(GLOBAL_STYLESHEET.contains(&format!("#{TRACK_ID}{{")));
        assert!(GLOBAL_STYLESHEET.contains(&format!("#{BAR_ID}{{")));
        assert!(GLOBAL_STYLESHEET.contains("transition:all 0.5s"));
    }
}
