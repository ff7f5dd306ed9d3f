//! Target platforms supported by the generator.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A runtime the generated project is built for.
///
/// The set is closed: every component mapping is expected to define a rule
/// for each of these six targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    /// WeChat mini program
    Weapp,
    /// Alipay mini program
    Alipay,
    /// Browser (H5)
    H5,
    /// React Native
    Rn,
    /// ByteDance (Toutiao) mini program
    Tt,
    /// QQ mini program
    Qq,
}

/// Broad runtime family a platform belongs to.
///
/// Unit handling, color normalization and the project manifest all depend on
/// the family rather than on the individual platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// Mini-program-like runtimes using the scaled `rpx` unit.
    MiniProgram,
    /// Browser runtime using plain pixels.
    Browser,
    /// Native-mobile runtime with unitless numbers.
    Native,
}

impl TargetPlatform {
    /// Every supported platform, in canonical order.
    pub const ALL: [TargetPlatform; 6] = [
        TargetPlatform::Weapp,
        TargetPlatform::Alipay,
        TargetPlatform::H5,
        TargetPlatform::Rn,
        TargetPlatform::Tt,
        TargetPlatform::Qq,
    ];

    /// Returns the platform identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::Weapp => "weapp",
            TargetPlatform::Alipay => "alipay",
            TargetPlatform::H5 => "h5",
            TargetPlatform::Rn => "rn",
            TargetPlatform::Tt => "tt",
            TargetPlatform::Qq => "qq",
        }
    }

    /// Human readable name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetPlatform::Weapp => "WeChat mini program",
            TargetPlatform::Alipay => "Alipay mini program",
            TargetPlatform::H5 => "H5 (browser)",
            TargetPlatform::Rn => "React Native",
            TargetPlatform::Tt => "ByteDance mini program",
            TargetPlatform::Qq => "QQ mini program",
        }
    }

    pub fn family(&self) -> PlatformFamily {
        match self {
            TargetPlatform::Weapp
            | TargetPlatform::Alipay
            | TargetPlatform::Tt
            | TargetPlatform::Qq => PlatformFamily::MiniProgram,
            TargetPlatform::H5 => PlatformFamily::Browser,
            TargetPlatform::Rn => PlatformFamily::Native,
        }
    }

    /// Returns true for the mini-program-like runtimes.
    pub fn is_mini_program(&self) -> bool {
        self.family() == PlatformFamily::MiniProgram
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weapp" | "wechat" => Ok(TargetPlatform::Weapp),
            "alipay" => Ok(TargetPlatform::Alipay),
            "h5" | "web" => Ok(TargetPlatform::H5),
            "rn" | "react-native" => Ok(TargetPlatform::Rn),
            "tt" | "bytedance" => Ok(TargetPlatform::Tt),
            "qq" => Ok(TargetPlatform::Qq),
            _ => Err(format!(
                "unknown platform '{}', expected one of: weapp, alipay, h5, rn, tt, qq",
                s
            )),
        }
    }
}
