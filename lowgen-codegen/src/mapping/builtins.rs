//! Built-in component mappings.

use lowgen_core::TargetPlatform::{self, Alipay, H5, Qq, Rn, Tt, Weapp};

use super::{ComponentPlatformMapping, PlatformRule, PropMapping, PropTransform};

/// Module the Taro component set is imported from on every platform.
pub const TARO_COMPONENTS: &str = "@tarojs/components";

const MINI_PROGRAMS: [TargetPlatform; 4] = [Weapp, Alipay, Tt, Qq];

fn taro(component: &str) -> PlatformRule {
    PlatformRule::new(component, TARO_COMPONENTS)
}

fn variant_to_type() -> PropMapping {
    PropMapping::new("variant", "type")
        .with_transform(PropTransform::choose("contained", "primary", "default"))
}

/// The mappings every registry starts with, in declaration order.
pub fn builtin_mappings() -> Vec<ComponentPlatformMapping> {
    vec![
        container(),
        text(),
        button(),
        input(),
        image(),
        divider(),
        scroll_view(),
        swiper(),
    ]
}

fn container() -> ComponentPlatformMapping {
    ComponentPlatformMapping::new("Container").with_all(taro("View"))
}

// `content` wins over `value` when a node sets both.
fn text() -> ComponentPlatformMapping {
    ComponentPlatformMapping::new("Text").with_all(taro("Text").with_props(vec![
        PropMapping::new("value", "children"),
        PropMapping::new("content", "children"),
    ]))
}

fn button() -> ComponentPlatformMapping {
    let with_click = |target: &str| {
        taro("Button").with_props(vec![
            variant_to_type(),
            PropMapping::keep("disabled"),
            PropMapping::new("onClick", target),
        ])
    };

    ComponentPlatformMapping::new("Button")
        .with_rule(Weapp, with_click("onClick"))
        .with_rule(Alipay, with_click("onTap"))
        .with_rule(
            H5,
            taro("Button").with_props(vec![
                PropMapping::new("variant", "className")
                    .with_transform(PropTransform::Template("btn-{}".into())),
                PropMapping::keep("disabled"),
                PropMapping::keep("onClick"),
            ]),
        )
        .with_rule(Rn, with_click("onPress"))
        .with_rule(Tt, taro("Button"))
        .with_rule(Qq, taro("Button"))
}

fn input() -> ComponentPlatformMapping {
    let standard = taro("Input").with_props(vec![
        PropMapping::keep("value"),
        PropMapping::keep("placeholder"),
        PropMapping::new("onChange", "onInput"),
        PropMapping::keep("disabled"),
    ]);

    ComponentPlatformMapping::new("Input")
        .with_each([Weapp, Alipay, H5], standard)
        .with_rule(
            Rn,
            taro("Input").with_props(vec![
                PropMapping::keep("value"),
                PropMapping::keep("placeholder"),
                PropMapping::new("onChange", "onChangeText"),
                PropMapping::new("disabled", "editable").with_transform(PropTransform::Not),
            ]),
        )
        .with_each([Tt, Qq], taro("Input"))
}

fn image() -> ComponentPlatformMapping {
    let mini = taro("Image").with_props(vec![
        PropMapping::keep("src"),
        PropMapping::keep("alt"),
        PropMapping::keep("mode"),
    ]);

    ComponentPlatformMapping::new("Image")
        .with_each([Weapp, Alipay], mini)
        .with_rule(
            H5,
            taro("Image").with_props(vec![PropMapping::keep("src"), PropMapping::keep("alt")]),
        )
        .with_rule(
            Rn,
            taro("Image").with_props(vec![
                PropMapping::new("src", "source")
                    .with_transform(PropTransform::Wrap("uri".into())),
                PropMapping::new("mode", "resizeMode"),
            ]),
        )
        .with_each([Tt, Qq], taro("Image"))
}

fn divider() -> ComponentPlatformMapping {
    ComponentPlatformMapping::new("Divider")
        .with_each(MINI_PROGRAMS, taro("View"))
        .with_rule(H5, PlatformRule::intrinsic("hr"))
        .with_rule(Rn, taro("View"))
}

fn scroll_view() -> ComponentPlatformMapping {
    let scroll = taro("ScrollView").with_props(vec![
        PropMapping::new("horizontal", "scrollX"),
        PropMapping::new("onReachEnd", "onScrollToLower"),
    ]);

    ComponentPlatformMapping::new("ScrollView")
        .with_each(MINI_PROGRAMS, scroll.clone())
        .with_rule(H5, scroll)
        .with_rule(
            Rn,
            taro("ScrollView").with_props(vec![
                PropMapping::keep("horizontal"),
                PropMapping::new("onReachEnd", "onEndReached"),
            ]),
        )
}

// Swiper has no native-mobile counterpart.
fn swiper() -> ComponentPlatformMapping {
    ComponentPlatformMapping::new("Swiper").with_each(
        [Weapp, Alipay, H5, Tt, Qq],
        taro("Swiper").with_props(vec![
            PropMapping::keep("autoplay"),
            PropMapping::keep("interval"),
            PropMapping::keep("circular"),
            PropMapping::new("showDots", "indicatorDots"),
        ]),
    )
}
