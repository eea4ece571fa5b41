//! The logo component: one brand, one configuration, one markup tree

use crate::brand::{Brand, ColorRole, Palette};
use crate::renderer::{icon_node, Element, IconSizing, MarkupConfig, Node};

use super::{LogoConfig, SizeScale, Variant};

const FULL_LAYOUT_CLASS: &str = "flex items-center space-x-2";
const WORDMARK_CLASS: &str = "font-bold tracking-tight";
const SUFFIX_CLASS: &str = "font-medium ml-0.5";

/// A brand logo ready to render
#[derive(Debug, Clone)]
pub struct Logo<'a> {
    brand: &'a Brand,
    config: LogoConfig,
}

impl<'a> Logo<'a> {
    pub fn new(brand: &'a Brand, config: LogoConfig) -> Self {
        Self { brand, config }
    }

    /// Icon-only logo, whatever variant the config names
    pub fn icon(brand: &'a Brand, config: LogoConfig) -> Self {
        Self::new(brand, config.with_variant(Variant::Icon))
    }

    /// Wordmark-only logo, whatever variant the config names
    pub fn text(brand: &'a Brand, config: LogoConfig) -> Self {
        Self::new(brand, config.with_variant(Variant::Text))
    }

    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    /// Build the markup tree
    pub fn render(&self) -> Node {
        let palette = self.brand.palette(self.config.theme);
        let scale = self.config.size.scale();
        let container = &self.config.container_class;

        match self.config.variant {
            Variant::Icon => Element::new("div")
                .with_class(container)
                .with_child(self.icon_node(palette, scale))
                .into(),
            Variant::Text => Element::new("div")
                .with_class(container)
                .with_child(self.wordmark_node(palette, scale))
                .into(),
            Variant::Full => Element::new("div")
                .with_class(&full_layout_class(container))
                .with_child(self.icon_node(palette, scale))
                .with_child(self.wordmark_node(palette, scale))
                .into(),
        }
    }

    /// Render straight to compact HTML
    pub fn to_html(&self) -> String {
        self.render().to_markup(&MarkupConfig::default())
    }

    fn icon_node(&self, palette: &Palette, scale: &SizeScale) -> Node {
        let sizing = IconSizing::Class(format!("{} w-auto", scale.height_class));
        icon_node(&self.brand.icon, palette, &sizing)
    }

    fn wordmark_node(&self, palette: &Palette, scale: &SizeScale) -> Node {
        let parts = self.brand.wordmark.iter().map(|part| {
            let mut span = Element::new("span");
            if part.suffix {
                span = span.with_class(&format!("{} {}", SUFFIX_CLASS, scale.suffix_class));
            }
            if part.color != ColorRole::Text {
                span = span.with_attr("style", format!("color: {};", palette.color(part.color)));
            }
            Node::from(span.with_child(Node::text(part.text.as_str())))
        });

        let outer = Element::new("div")
            .with_class(&format!("{} {}", WORDMARK_CLASS, scale.text_class))
            .with_attr("style", format!("color: {};", palette.text));

        // Suffixes sit on the baseline of the larger name
        if self.brand.wordmark.iter().any(|p| p.suffix) {
            outer
                .with_child(
                    Element::new("div")
                        .with_class("flex items-baseline")
                        .with_children(parts),
                )
                .into()
        } else {
            outer.with_children(parts).into()
        }
    }
}

fn full_layout_class(container: &str) -> String {
    if container.is_empty() {
        FULL_LAYOUT_CLASS.to_string()
    } else {
        format!("{} {}", FULL_LAYOUT_CLASS, container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::{Size, Theme};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_variant_markup() {
        let brand = Brand::studypal();
        let logo = Logo::text(&brand, LogoConfig::new().with_size(Size::Sm));
        assert_eq!(
            logo.to_html(),
            r##"<div><div class="font-bold tracking-tight text-lg" style="color: #1F2937;"><span>Study</span><span style="color: #4F46E5;">pal</span></div></div>"##
        );
    }

    #[test]
    fn test_suffix_wordmark_markup() {
        let brand = Brand::boomerang();
        let logo = Logo::text(&brand, LogoConfig::new().with_theme(Theme::Dark));
        assert_eq!(
            logo.to_html(),
            r##"<div><div class="font-bold tracking-tight text-xl" style="color: #F9FAFB;"><div class="flex items-baseline"><span>Boomerang</span><span class="font-medium ml-0.5 text-base" style="color: #7DD3FC;">.study</span></div></div></div>"##
        );
    }

    #[test]
    fn test_container_class_passthrough() {
        let brand = Brand::studypal();
        let node = Logo::new(&brand, LogoConfig::new().with_container_class("mx-auto my-4"))
            .render();
        assert_eq!(
            node.as_element().unwrap().attr("class"),
            Some("flex items-center space-x-2 mx-auto my-4")
        );

        let icon = Logo::icon(&brand, LogoConfig::new().with_container_class("p-2")).render();
        assert_eq!(icon.as_element().unwrap().attr("class"), Some("p-2"));
    }

    #[test]
    fn test_empty_container_class_omitted() {
        let brand = Brand::studypal();
        let full = Logo::new(&brand, LogoConfig::default()).render();
        assert_eq!(
            full.as_element().unwrap().attr("class"),
            Some("flex items-center space-x-2")
        );
        let icon = Logo::icon(&brand, LogoConfig::default()).render();
        assert_eq!(icon.as_element().unwrap().attr("class"), None);
    }

    #[test]
    fn test_container_class_is_not_modified() {
        let brand = Brand::studypal();
        let icon = Logo::icon(&brand, LogoConfig::new().with_container_class(" p-2 "));
        assert!(icon.to_html().starts_with(r#"<div class=" p-2 "><svg"#));

        let full = Logo::new(&brand, LogoConfig::new().with_container_class(" p-2 ")).render();
        assert_eq!(
            full.as_element().unwrap().attr("class"),
            Some("flex items-center space-x-2  p-2 ")
        );
    }

    #[test]
    fn test_full_variant_order() {
        let brand = Brand::boomerang();
        let node = Logo::new(&brand, LogoConfig::default()).render();
        let children = &node.as_element().unwrap().children;
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].as_element().unwrap().tag, "img");
        assert_eq!(children[1].text_content(), "Boomerang.study");
    }

    #[test]
    fn test_forced_variant_overrides_config() {
        let brand = Brand::studypal();
        let logo = Logo::icon(&brand, LogoConfig::new().with_variant(Variant::Text));
        assert_eq!(logo.config().variant, Variant::Icon);
    }
}
