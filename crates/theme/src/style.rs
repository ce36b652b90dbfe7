use crate::colors::{
    DEFAULT_GRADIENT_FINISH, DEFAULT_GRADIENT_START, GRADIENT_ANGLE_DEG, GRADIENT_START_FALLBACK,
};
use indicator_config::Position;

/// Ordered list of inline CSS `property: value` pairs.
pub type Declarations = Vec<(&'static str, String)>;

/// Stacking order of a fixed overlay; high enough to sit above page content.
pub const OVERLAY_Z_INDEX: u32 = 10_000_000;

/// How the fill element is painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillStyle {
    /// Flat `background-color`.
    Solid(String),
    /// Two-stop `linear-gradient` at [`GRADIENT_ANGLE_DEG`].
    Gradient { start: String, finish: String },
}

impl FillStyle {
    /// Resolve the fill from the two optional color options.
    ///
    /// | `color` | `gradientFinish` | fill |
    /// |---|---|---|
    /// | unset | unset | default blue gradient |
    /// | set   | unset | solid `color` |
    /// | any   | set   | gradient `color` (or black) → `gradientFinish` |
    pub fn resolve(color: Option<&str>, gradient_finish: Option<&str>) -> Self {
        match (color, gradient_finish) {
            (None, None) => Self::Gradient {
                start:  DEFAULT_GRADIENT_START.to_string(),
                finish: DEFAULT_GRADIENT_FINISH.to_string(),
            },
            (Some(color), None) => Self::Solid(color.to_string()),
            (start, Some(finish)) => Self::Gradient {
                start:  start.unwrap_or(GRADIENT_START_FALLBACK).to_string(),
                finish: finish.to_string(),
            },
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient { .. })
    }

    /// CSS value for `background-image`, or `None` in solid mode.
    pub fn background_image(&self) -> Option<String> {
        match self {
            Self::Solid(_) => None,
            Self::Gradient { start, finish } => Some(format!(
                "linear-gradient({GRADIENT_ANGLE_DEG}deg, {start} 0px, {finish} 100%)"
            )),
        }
    }

    pub fn declarations(&self) -> Declarations {
        match self {
            Self::Solid(color) => vec![("background-color", color.clone())],
            Self::Gradient { .. } => self
                .background_image()
                .map(|image| vec![("background-image", image)])
                .unwrap_or_default(),
        }
    }
}

/// Visual settings for the track (the bar's background container).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackStyle {
    pub background_color: String,
    /// Bar thickness, applied as the track's `height`.
    pub thickness: String,
    /// `Some(edge)` pins the track to a viewport edge as a fixed overlay.
    pub pinned: Option<Position>,
}

impl TrackStyle {
    pub fn declarations(&self) -> Declarations {
        let mut out = Vec::with_capacity(6);
        if let Some(edge) = self.pinned {
            out.push(("position", "fixed".to_string()));
            out.push(("z-index", OVERLAY_Z_INDEX.to_string()));
            match edge {
                Position::Top => out.push(("top", "0px".to_string())),
                Position::Bottom => out.push(("bottom", "0px".to_string())),
            }
        }
        out.push(("background-color", self.background_color.clone()));
        out.push(("height", self.thickness.clone()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_colors_gives_default_blue_gradient() {
        let fill = FillStyle::resolve(None, None);
        assert_eq!(
            fill,
            FillStyle::Gradient {
                start:  "rgb(1, 127, 150)".into(),
                finish: "rgb(87, 216, 235)".into(),
            }
        );
        assert_eq!(
            fill.background_image().as_deref(),
            Some("linear-gradient(130deg, rgb(1, 127, 150) 0px, rgb(87, 216, 235) 100%)")
        );
    }

    #[test]
    fn color_alone_is_solid() {
        let fill = FillStyle::resolve(Some("red"), None);
        assert_eq!(fill, FillStyle::Solid("red".into()));
        assert_eq!(fill.background_image(), None);
        assert_eq!(fill.declarations(), vec![("background-color", "red".to_string())]);
    }

    #[test]
    fn finish_alone_starts_from_black() {
        let fill = FillStyle::resolve(None, Some("blue"));
        assert!(fill.is_gradient());
        assert_eq!(
            fill.declarations(),
            vec![(
                "background-image",
                "linear-gradient(130deg, black 0px, blue 100%)".to_string()
            )]
        );
    }

    #[test]
    fn both_colors_form_gradient() {
        let fill = FillStyle::resolve(Some("red"), Some("gold"));
        assert_eq!(
            fill,
            FillStyle::Gradient { start: "red".into(), finish: "gold".into() }
        );
    }

    #[test]
    fn pinned_track_is_fixed_overlay() {
        let track = TrackStyle {
            background_color: "transparent".into(),
            thickness:        "5px".into(),
            pinned:           Some(Position::Bottom),
        };
        assert_eq!(
            track.declarations(),
            vec![
                ("position", "fixed".to_string()),
                ("z-index", "10000000".to_string()),
                ("bottom", "0px".to_string()),
                ("background-color", "transparent".to_string()),
                ("height", "5px".to_string()),
            ]
        );
    }

    #[test]
    fn inline_track_has_no_positioning() {
        let track = TrackStyle {
            background_color: "#ddd".into(),
            thickness:        "2px".into(),
            pinned:           None,
        };
        let props: Vec<_> = track.declarations().into_iter().map(|(p, _)| p).collect();
        assert_eq!(props, vec!["background-color", "height"]);
    }
}
