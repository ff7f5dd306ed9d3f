//! Platform style adaptation.
//!
//! [`StylePolicy`] holds the per-platform tables (dropped properties,
//! renames, length units). [`adapt_styles`] applies them to a whole style
//! map and [`StyleSheet`] collects adapted rules into page CSS.

mod adapter;
mod policy;
mod stylesheet;

pub use adapter::{StyleFormat, adapt_styles, css_value, generate_style_string};
pub use policy::StylePolicy;
pub use stylesheet::{StyleSheet, class_selector};
