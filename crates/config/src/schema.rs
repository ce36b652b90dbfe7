use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fully-resolved indicator options.  Built once at attach time and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorConfig {
    /// Track (background container) color.
    pub background_color: String,
    /// Solid fill color, or the gradient start when `gradient_finish` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Gradient end color.  Its presence switches the fill to gradient mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_finish: Option<String>,
    /// Selector of the container to place the bar in.  `None` = fixed overlay.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Viewport edge (fixed overlay) or insertion end (inside `target`).
    pub position: Position,
    /// Bar thickness as a CSS length.
    pub width: String,
    /// Unrecognised options, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            background_color: "transparent".to_string(),
            color:            None,
            gradient_finish:  None,
            target:           None,
            position:         Position::Top,
            width:            "5px".to_string(),
            extra:            Map::new(),
        }
    }
}

impl IndicatorConfig {
    /// Overlay `overrides` onto the defaults.  Never fails: missing fields
    /// take their default and extra fields are preserved.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        let defaults = Self::default();

        for key in overrides.extra.keys() {
            tracing::debug!("Unrecognised indicator option '{key}' passed through");
        }

        Self {
            background_color: overrides.background_color.unwrap_or(defaults.background_color),
            color:            overrides.color.or(defaults.color),
            gradient_finish:  overrides.gradient_finish.or(defaults.gradient_finish),
            target:           overrides.target.or(defaults.target),
            position:         overrides.position.unwrap_or(defaults.position),
            width:            overrides.width.unwrap_or(defaults.width),
            extra:            overrides.extra,
        }
    }

    /// `true` when the bar is pinned to the viewport instead of a container.
    pub fn is_fixed(&self) -> bool {
        self.target.is_none()
    }
}

/// Caller-supplied subset of [`IndicatorConfig`].  Every field is optional;
/// an explicit `null` is the same as leaving the field out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_finish: Option<String>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigOverrides {
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn gradient_finish(mut self, color: impl Into<String>) -> Self {
        self.gradient_finish = Some(color.into());
        self
    }

    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merge(mut self, other: ConfigOverrides) -> Self {
        self.background_color = other.background_color.or(self.background_color);
        self.color            = other.color.or(self.color);
        self.gradient_finish  = other.gradient_finish.or(self.gradient_finish);
        self.target           = other.target.or(self.target);
        self.position         = other.position.or(self.position);
        self.width            = other.width.or(self.width);
        self.extra.extend(other.extra);
        self
    }
}

/// Which edge the bar sits on.
///
/// Parsing is case-insensitive; anything other than `"bottom"` means `Top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "bottom" => Self::Bottom,
            "top" => Self::Top,
            other => {
                tracing::warn!("Unknown position '{other}'; falling back to top");
                Self::Top
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_overrides_resolve_to_defaults() {
        let config = IndicatorConfig::resolve(ConfigOverrides::default());
        assert_eq!(config, IndicatorConfig::default());
        assert_eq!(config.background_color, "transparent");
        assert_eq!(config.width, "5px");
        assert_eq!(config.position, Position::Top);
        assert!(config.is_fixed());
    }

    #[test]
    fn supplied_fields_replace_defaults() {
        let config = IndicatorConfig::resolve(
            ConfigOverrides::default()
                .color("red")
                .target("header")
                .position(Position::Bottom)
                .width("3px"),
        );
        assert_eq!(config.color.as_deref(), Some("red"));
        assert_eq!(config.target.as_deref(), Some("header"));
        assert_eq!(config.position, Position::Bottom);
        assert_eq!(config.width, "3px");
        assert_eq!(config.background_color, "transparent");
        assert!(!config.is_fixed());
    }

    #[test]
    fn unknown_options_pass_through() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{ "color": "red", "speed": 3, "easing": "linear" }"#)
                .unwrap();
        let config = IndicatorConfig::resolve(overrides);
        assert_eq!(config.extra.get("speed"), Some(&Value::from(3)));
        assert_eq!(config.extra.get("easing"), Some(&Value::from("linear")));
        assert_eq!(config.extra.len(), 2);
    }

    #[test]
    fn explicit_null_means_absent() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{ "color": null, "gradientFinish": null, "where": null }"#)
                .unwrap();
        let config = IndicatorConfig::resolve(overrides);
        assert_eq!(config.color, None);
        assert_eq!(config.gradient_finish, None);
        assert!(config.is_fixed());
    }

    #[test]
    fn position_parsing_is_lenient() {
        let parse = |raw: &str| -> Position {
            serde_json::from_value(Value::from(raw)).unwrap()
        };
        assert_eq!(parse("bottom"), Position::Bottom);
        assert_eq!(parse("BOTTOM"), Position::Bottom);
        assert_eq!(parse("top"), Position::Top);
        assert_eq!(parse("middle"), Position::Top);
    }

    #[test]
    fn later_overrides_win_on_merge() {
        let file = ConfigOverrides::default().color("red").width("8px");
        let inline = ConfigOverrides::default().color("blue");
        let merged = file.merge(inline);
        assert_eq!(merged.color.as_deref(), Some("blue"));
        assert_eq!(merged.width.as_deref(), Some("8px"));
    }

    #[test]
    fn serialises_with_option_names() {
        let config = IndicatorConfig::resolve(
            ConfigOverrides::default().background_color("#eee").target("#top"),
        );
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["backgroundColor"], "#eee");
        assert_eq!(json["where"], "#top");
        assert_eq!(json["position"], "top");
        assert!(json.get("color").is_none());
    }
}
