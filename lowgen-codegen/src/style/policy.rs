//! Per-platform style tables and the shared key/value transform.

use std::sync::LazyLock;

use lowgen_core::{PlatformFamily, TargetPlatform};
use regex::Regex;
use serde_json::{Number, Value};

/// `<number><unit>` with nothing around it, e.g. `12px`, `-0.5rpx`, `50%`.
static LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d*\.?\d+)([a-zA-Z%]*)$").expect("length pattern is valid")
});

/// `rgba(r, g, b, a)` with integer channels.
static RGBA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\((\d+),\s*(\d+),\s*(\d+),\s*([\d.]+)\)$").expect("rgba pattern is valid")
});

const MINI_PROGRAM_UNSUPPORTED: &[&str] = &["boxShadow", "transform3d", "filter"];
const NATIVE_UNSUPPORTED: &[&str] = &["boxShadow", "float", "clear"];

const MINI_PROGRAM_RENAMES: &[(&str, &str)] = &[
    ("backgroundColor", "background-color"),
    ("fontSize", "font-size"),
    ("fontWeight", "font-weight"),
    ("textAlign", "text-align"),
    ("borderRadius", "border-radius"),
    ("marginTop", "margin-top"),
    ("marginRight", "margin-right"),
    ("marginBottom", "margin-bottom"),
    ("marginLeft", "margin-left"),
    ("paddingTop", "padding-top"),
    ("paddingRight", "padding-right"),
    ("paddingBottom", "padding-bottom"),
    ("paddingLeft", "padding-left"),
];

const COLOR_PROPERTIES: &[&str] = &[
    "color",
    "backgroundColor",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "shadowColor",
    "textShadowColor",
];

/// Style rules of one target platform.
///
/// Every style value that reaches generated output goes through
/// [`transform`](Self::transform), whether it ends up inline on a node or in
/// a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePolicy {
    platform: TargetPlatform,
    unit: &'static str,
    unsupported: &'static [&'static str],
    renames: &'static [(&'static str, &'static str)],
}

impl StylePolicy {
    /// Get the policy for a platform.
    pub fn for_platform(platform: TargetPlatform) -> Self {
        match platform.family() {
            PlatformFamily::MiniProgram => Self {
                platform,
                unit: "rpx",
                unsupported: MINI_PROGRAM_UNSUPPORTED,
                renames: MINI_PROGRAM_RENAMES,
            },
            PlatformFamily::Browser => Self {
                platform,
                unit: "px",
                unsupported: &[],
                renames: &[],
            },
            PlatformFamily::Native => Self {
                platform,
                unit: "",
                unsupported: NATIVE_UNSUPPORTED,
                renames: &[],
            },
        }
    }

    pub fn platform(&self) -> TargetPlatform {
        self.platform
    }

    /// Unit appended to bare numbers; empty when numbers stay unitless.
    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// Check if a logical property is supported.
    pub fn is_supported(&self, key: &str) -> bool {
        !self.unsupported.contains(&key)
    }

    /// Target name of a logical property.
    pub fn rename(&self, key: &str) -> String {
        self.renames
            .iter()
            .find(|(from, _)| *from == key)
            .map_or(key, |(_, to)| *to)
            .to_string()
    }

    /// Transform one style entry. `None` means the property is dropped.
    pub fn transform(&self, key: &str, value: &Value) -> Option<(String, Value)> {
        if !self.is_supported(key) {
            return None;
        }
        Some((self.rename(key), self.transform_value(key, value)))
    }

    /// Transform a value of a logical property.
    ///
    /// Malformed or unrecognized values are returned unchanged.
    pub fn transform_value(&self, key: &str, value: &Value) -> Value {
        match value {
            Value::Number(n) if self.unit.is_empty() => Value::Number(n.clone()),
            Value::Number(n) => Value::String(format!("{}{}", n, self.unit)),
            Value::String(s) if is_color_property(key) => {
                Value::String(self.normalize_color(s))
            }
            Value::String(s) => self.rescale(s).unwrap_or_else(|| value.clone()),
            other => other.clone(),
        }
    }

    fn normalize_color(&self, value: &str) -> String {
        if !self.platform.is_mini_program() {
            return value.to_string();
        }
        match RGBA.captures(value.trim()) {
            Some(caps) if caps[4].parse::<f64>().is_ok_and(|alpha| alpha == 1.0) => {
                format!("rgb({}, {}, {})", &caps[1], &caps[2], &caps[3])
            }
            _ => value.to_string(),
        }
    }

    fn rescale(&self, value: &str) -> Option<Value> {
        let caps = LENGTH.captures(value)?;
        let (number, unit) = (&caps[1], &caps[2]);

        match self.platform.family() {
            PlatformFamily::MiniProgram if unit == "px" => {
                Some(Value::String(format!("{number}rpx")))
            }
            PlatformFamily::Browser if unit == "rpx" => Some(Value::String(format!("{number}px"))),
            // rn reads a bare number as density-independent pixels; percentages stay strings.
            PlatformFamily::Native if unit != "%" => parse_number(number),
            _ => None,
        }
    }
}

fn is_color_property(key: &str) -> bool {
    let key = key.to_lowercase();
    COLOR_PROPERTIES
        .iter()
        .any(|color| key.contains(&color.to_lowercase()))
}

fn parse_number(text: &str) -> Option<Value> {
    if let Ok(int) = text.parse::<i64>() {
        return Some(Value::Number(int.into()));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn policy(platform: TargetPlatform) -> StylePolicy {
        StylePolicy::for_platform(platform)
    }

    #[test]
    fn test_units() {
        assert_eq!(policy(TargetPlatform::Weapp).unit(), "rpx");
        assert_eq!(policy(TargetPlatform::Qq).unit(), "rpx");
        assert_eq!(policy(TargetPlatform::H5).unit(), "px");
        assert_eq!(policy(TargetPlatform::Rn).unit(), "");
    }

    #[test]
    fn test_bare_numbers() {
        let width = |platform, value| policy(platform).transform_value("width", &value);
        assert_eq!(width(TargetPlatform::Weapp, json!(10)), json!("10rpx"));
        assert_eq!(width(TargetPlatform::H5, json!(1.5)), json!("1.5px"));
        assert_eq!(width(TargetPlatform::Rn, json!(10)), json!(10));
    }

    #[test]
    fn test_rescale() {
        let weapp = policy(TargetPlatform::Weapp);
        assert_eq!(weapp.transform_value("width", &json!("20px")), json!("20rpx"));
        assert_eq!(weapp.transform_value("width", &json!("50%")), json!("50%"));

        let h5 = policy(TargetPlatform::H5);
        assert_eq!(h5.transform_value("width", &json!("20rpx")), json!("20px"));
        assert_eq!(h5.transform_value("width", &json!("2em")), json!("2em"));

        let rn = policy(TargetPlatform::Rn);
        assert_eq!(rn.transform_value("width", &json!("20px")), json!(20));
        assert_eq!(rn.transform_value("width", &json!("-0.5rpx")), json!(-0.5));
        assert_eq!(rn.transform_value("width", &json!("50%")), json!("50%"));
    }

    #[test]
    fn test_malformed_values_pass_through() {
        let rn = policy(TargetPlatform::Rn);
        assert_eq!(
            rn.transform_value("border", &json!("1px solid")),
            json!("1px solid")
        );
        assert_eq!(rn.transform_value("display", &json!("flex")), json!("flex"));
        assert_eq!(rn.transform_value("flex", &json!(null)), json!(null));
        assert_eq!(rn.transform_value("margin", &json!("1.2.3px")), json!("1.2.3px"));
    }

    #[test]
    fn test_colors() {
        let weapp = policy(TargetPlatform::Weapp);
        assert_eq!(
            weapp.transform_value("borderTopColor", &json!("rgba(0, 0, 0, 1)")),
            json!("rgb(0, 0, 0)")
        );
        assert_eq!(
            weapp.transform_value("color", &json!("rgba(0, 0, 0, 0.5)")),
            json!("rgba(0, 0, 0, 0.5)")
        );
        assert_eq!(
            policy(TargetPlatform::H5).transform_value("color", &json!("rgba(1, 2, 3, 1)")),
            json!("rgba(1, 2, 3, 1)")
        );
        // color properties are never rescaled
        assert_eq!(weapp.transform_value("color", &json!("12px")), json!("12px"));
    }

    #[test]
    fn test_renames() {
        let tt = policy(TargetPlatform::Tt);
        assert_eq!(tt.rename("backgroundColor"), "background-color");
        assert_eq!(tt.rename("paddingLeft"), "padding-left");
        assert_eq!(tt.rename("width"), "width");
        assert_eq!(
            policy(TargetPlatform::H5).rename("backgroundColor"),
            "backgroundColor"
        );
        assert_eq!(
            policy(TargetPlatform::Rn).rename("borderRadius"),
            "borderRadius"
        );
    }

    #[test]
    fn test_unsupported_dropped() {
        let weapp = policy(TargetPlatform::Weapp);
        assert!(weapp.transform("boxShadow", &json!("none")).is_none());
        assert!(weapp.transform("filter", &json!("blur(1px)")).is_none());

        let rn = policy(TargetPlatform::Rn);
        assert!(rn.transform("float", &json!("left")).is_none());

        let h5 = policy(TargetPlatform::H5);
        assert!(h5.transform("filter", &json!("blur(1px)")).is_some());
    }

    #[test]
    fn test_unit_round_trip_keeps_numeric_prefix() {
        for from in TargetPlatform::ALL {
            let first = policy(from).transform_value("width", &json!(12));
            let as_text = match &first {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            for to in TargetPlatform::ALL {
                let second = policy(to).transform_value("width", &json!(as_text));
                let rendered = match &second {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                assert!(
                    rendered.starts_with("12"),
                    "{from} -> {to} produced {rendered}"
                );
            }
        }
    }
}
