//! Showcase page generation
//!
//! A showcase is a single self-contained HTML page presenting every variant of
//! one brand, with copyable markup and download links for the icon.

pub mod assets;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::brand::{Brand, Icon};
use crate::logo::{Logo, LogoConfig, Size, Theme, Variant};
use crate::renderer::{escape_xml, serialize_logo_markup, svg_document};

pub use assets::{
    export_assets, plan_assets, AssetFetcher, AssetSource, ExportReport, FetchError, HttpFetcher,
    PlannedAsset,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Curated rows shown in each theme panel
const PANEL_ROWS: [(Variant, Size, &str); 5] = [
    (Variant::Full, Size::Xl, "Full Logo - XL"),
    (Variant::Full, Size::Lg, "Full Logo - Large"),
    (Variant::Full, Size::Md, "Full Logo - Medium"),
    (Variant::Icon, Size::Lg, "Icon Only"),
    (Variant::Text, Size::Lg, "Text Only"),
];

// Wires every `data-copy-target` button to copy the referenced element's text.
const COPY_SCRIPT: &str = r#"document.querySelectorAll('[data-copy-target]').forEach(function (button) {
  button.addEventListener('click', function () {
    var target = document.getElementById(button.dataset.copyTarget);
    navigator.clipboard.writeText(target.textContent).catch(function (err) {
      console.error('Copy failed:', err);
    });
  });
});"#;

// Saves `data-download-url` images through a blob URL, since browsers ignore
// `download` on links to another origin.
const DOWNLOAD_SCRIPT: &str = r#"document.querySelectorAll('[data-download-url]').forEach(function (button) {
  button.addEventListener('click', function () {
    fetch(button.dataset.downloadUrl)
      .then(function (response) { return response.blob(); })
      .then(function (blob) {
        var url = URL.createObjectURL(blob);
        var link = document.createElement('a');
        link.href = url;
        link.download = button.dataset.downloadName;
        document.body.appendChild(link);
        link.click();
        document.body.removeChild(link);
        URL.revokeObjectURL(url);
      })
      .catch(function (err) {
        console.error('Download failed:', err);
      });
  });
});"#;

/// Configuration options for showcase pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// Pixel size of downloadable icon files
    pub download_size: u32,
    /// Pixel size of the copyable inline markup
    pub snippet_size: u32,
    /// Whether to load Tailwind from its CDN so the utility classes apply
    pub include_tailwind: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            download_size: 200,
            snippet_size: 40,
            include_tailwind: true,
        }
    }
}

impl ShowcaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_download_size(mut self, size: u32) -> Self {
        self.download_size = size;
        self
    }

    pub fn with_snippet_size(mut self, size: u32) -> Self {
        self.snippet_size = size;
        self
    }

    pub fn with_tailwind(mut self, include: bool) -> Self {
        self.include_tailwind = include;
        self
    }
}

/// One rendered cell of the showcase
#[derive(Debug, Clone)]
pub struct ShowcaseEntry {
    pub config: LogoConfig,
    pub label: String,
    pub html: String,
}

/// Showcase page for a single brand
pub struct Showcase<'a> {
    brand: &'a Brand,
    config: ShowcaseConfig,
}

impl<'a> Showcase<'a> {
    pub fn new(brand: &'a Brand) -> Self {
        Self::with_config(brand, ShowcaseConfig::default())
    }

    pub fn with_config(brand: &'a Brand, config: ShowcaseConfig) -> Self {
        Self { brand, config }
    }

    /// Every combination of theme, size and variant, in that nesting order
    pub fn entries(&self) -> Vec<ShowcaseEntry> {
        let mut entries = Vec::new();
        for &theme in Theme::ALL {
            for &size in Size::ALL {
                for &variant in Variant::ALL {
                    let config = LogoConfig::new()
                        .with_theme(theme)
                        .with_size(size)
                        .with_variant(variant);
                    entries.push(ShowcaseEntry {
                        label: format!("{} / {} / {}", theme, size, variant),
                        html: Logo::new(self.brand, config.clone()).to_html(),
                        config,
                    });
                }
            }
        }
        entries
    }

    /// Render the full page
    pub fn render_html(&self) -> String {
        tracing::debug!(brand = %self.brand.id, "rendering showcase page");
        let title = format!("{} Logo Assets", self.brand.name);

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!("<title>{}</title>\n", escape_xml(&title)));
        if self.config.include_tailwind {
            html.push_str(&format!("<script src=\"{}\"></script>\n", TAILWIND_CDN));
        }
        html.push_str("</head>\n<body class=\"min-h-screen bg-gray-50 py-12\">\n");
        html.push_str("<div class=\"max-w-6xl mx-auto px-4\">\n");

        html.push_str(&self.header(&title));
        html.push_str("<div class=\"grid grid-cols-1 lg:grid-cols-2 gap-8 mb-12\">\n");
        for &theme in Theme::ALL {
            html.push_str(&self.theme_panel(theme));
        }
        html.push_str("</div>\n");
        html.push_str(&self.size_matrix());
        html.push_str(&self.usage_section());
        html.push_str(&self.download_section());
        html.push_str(&self.specs_section());

        html.push_str("</div>\n");
        html.push_str(&format!("<script>\n{}\n</script>\n", COPY_SCRIPT));
        if self.brand.image_url().is_some() {
            html.push_str(&format!("<script>\n{}\n</script>\n", DOWNLOAD_SCRIPT));
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    fn header(&self, title: &str) -> String {
        let mut out = String::from("<div class=\"text-center mb-12\">\n");
        out.push_str(&format!(
            "<h1 class=\"text-4xl font-bold text-gray-900 mb-4\">{}</h1>\n",
            escape_xml(title)
        ));
        if let Some(tagline) = &self.brand.tagline {
            out.push_str(&format!(
                "<p class=\"text-lg text-gray-600\">{}</p>\n",
                escape_xml(tagline)
            ));
        }
        out.push_str("</div>\n");
        out
    }

    fn theme_panel(&self, theme: Theme) -> String {
        let (panel, heading, border, label) = match theme {
            Theme::Light => ("bg-white", "text-gray-900", "border", "text-gray-500"),
            Theme::Dark => ("bg-gray-900", "text-white", "border border-gray-700", "text-gray-400"),
        };
        let mut out = format!(
            "<section class=\"{} rounded-lg p-8 shadow-sm border\" data-theme=\"{}\">\n",
            panel, theme
        );
        out.push_str(&format!(
            "<h2 class=\"text-2xl font-semibold mb-6 {}\">{} Theme</h2>\n",
            heading,
            capitalize(theme.as_str())
        ));
        out.push_str("<div class=\"space-y-6\">\n");
        for (variant, size, text) in PANEL_ROWS {
            let config = LogoConfig::new()
                .with_theme(theme)
                .with_size(size)
                .with_variant(variant);
            out.push_str(&format!(
                "<div class=\"flex items-center justify-between p-4 {} rounded-lg\">\
                 <div class=\"flex items-center space-x-4\">{}\
                 <span class=\"text-sm {}\">{}</span></div></div>\n",
                border,
                Logo::new(self.brand, config).to_html(),
                label,
                text
            ));
        }
        out.push_str("</div>\n</section>\n");
        out
    }

    fn size_matrix(&self) -> String {
        let mut out = String::from(
            "<section class=\"bg-white rounded-lg p-8 shadow-sm border mb-8\">\n\
             <h2 class=\"text-2xl font-semibold mb-6 text-gray-900\">All Variants</h2>\n",
        );
        let entries = self.entries();
        for &theme in Theme::ALL {
            let bg = match theme {
                Theme::Light => "bg-white",
                Theme::Dark => "bg-gray-900",
            };
            out.push_str(&format!(
                "<div class=\"grid grid-cols-3 gap-4 p-4 mb-4 rounded-lg {}\" data-theme=\"{}\">\n",
                bg, theme
            ));
            for entry in entries.iter().filter(|e| e.config.theme == theme) {
                out.push_str(&format!(
                    "<figure class=\"flex flex-col items-start gap-2\">{}\
                     <figcaption class=\"text-xs text-gray-500\">{}</figcaption></figure>\n",
                    entry.html,
                    escape_xml(&entry.label)
                ));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</section>\n");
        out
    }

    fn usage_section(&self) -> String {
        let id = &self.brand.id;
        let render_cmd = format!(
            "logomark render --brand {} --size lg --theme light",
            id
        );
        let export_cmd = format!(
            "logomark export --brand {} --theme light --px {}",
            id, self.config.snippet_size
        );
        let mut out = String::from(
            "<section class=\"bg-white rounded-lg p-8 shadow-sm border mb-8\">\n\
             <h2 class=\"text-2xl font-semibold mb-6 text-gray-900\">Usage Examples</h2>\n\
             <div class=\"grid grid-cols-1 md:grid-cols-2 gap-6\">\n",
        );
        out.push_str(&code_block("usage-render", "Render Component Markup", &render_cmd));
        out.push_str(&code_block("usage-export", "Export Function", &export_cmd));
        out.push_str("</div>\n</section>\n");
        out
    }

    fn download_section(&self) -> String {
        let mut out = String::from(
            "<section class=\"bg-white rounded-lg p-8 shadow-sm border\">\n\
             <h2 class=\"text-2xl font-semibold mb-6 text-gray-900\">Download Assets</h2>\n\
             <div class=\"grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4\">\n",
        );
        let size = self.config.download_size;

        match &self.brand.icon {
            Icon::Vector(_) => {
                for &theme in Theme::ALL {
                    if let Some(svg) = svg_document(self.brand, theme, size) {
                        out.push_str(&download_link(
                            &format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)),
                            &format!("{}-logo-{}.svg", self.brand.id, theme),
                            &format!("{} SVG", capitalize(theme.as_str())),
                            &format!("{}px", size),
                        ));
                    }
                }
            }
            Icon::Raster(raster) => {
                out.push_str(&download_button(
                    &raster.url,
                    &format!("{}-logo.{}", self.brand.id, raster.format),
                    &format!("{} Image", self.brand.name),
                    &format!("{} format", raster.format.to_uppercase()),
                ));
            }
        }
        out.push_str("</div>\n");

        let snippet = match self.brand.image_url() {
            Some(url) => code_block("copy-image-url", "Image URL", url),
            None => code_block(
                "copy-svg",
                "Raw SVG",
                &serialize_logo_markup(self.brand, Theme::Light, self.config.snippet_size),
            ),
        };
        out.push_str("<div class=\"mt-6\">\n");
        out.push_str(&snippet);
        out.push_str("</div>\n</section>\n");
        out
    }

    fn specs_section(&self) -> String {
        let mut out = String::from(
            "<section class=\"bg-white rounded-lg p-8 shadow-sm border mt-8\">\n\
             <h2 class=\"text-2xl font-semibold mb-6 text-gray-900\">Technical Specifications</h2>\n\
             <div class=\"grid grid-cols-1 md:grid-cols-3 gap-6\">\n",
        );

        out.push_str("<div><h3 class=\"font-medium mb-2\">Colors</h3><div class=\"space-y-2 text-sm\">\n");
        let mut seen: Vec<&str> = Vec::new();
        for &theme in Theme::ALL {
            let palette = self.brand.palette(theme);
            for (role, color) in ["Primary", "Accent", "Text"].iter().zip(palette.colors()) {
                if seen.contains(&color) {
                    continue;
                }
                seen.push(color);
                out.push_str(&format!(
                    "<div class=\"flex items-center space-x-2\">\
                     <div class=\"w-4 h-4 rounded\" style=\"background-color: {};\"></div>\
                     <span>{} {}: {}</span></div>\n",
                    color,
                    capitalize(theme.as_str()),
                    role,
                    color
                ));
            }
        }
        out.push_str("</div></div>\n");

        let formats: &[&str] = match self.brand.icon {
            Icon::Vector(_) => &["HTML markup", "SVG (scalable vector)", "Inline SVG string"],
            Icon::Raster(_) => &["HTML markup", "Raster image", "Direct image URL"],
        };
        out.push_str(&bullet_list("Formats", formats));
        out.push_str(&bullet_list(
            "Variants",
            &[
                "Full logo (icon + text)",
                "Icon only",
                "Text only",
                "Light & dark themes",
                "Multiple sizes (sm to xl)",
            ],
        ));
        out.push_str("</div>\n</section>\n");
        out
    }
}

fn code_block(id: &str, heading: &str, code: &str) -> String {
    format!(
        "<div><div class=\"flex items-center justify-between mb-3\">\
         <h3 class=\"font-medium\">{}</h3>\
         <button type=\"button\" class=\"text-xs px-2 py-1 border rounded\" data-copy-target=\"{}\">Copy</button></div>\
         <pre id=\"{}\" class=\"bg-gray-100 p-4 rounded-lg text-sm font-mono whitespace-pre-wrap break-all\">{}</pre></div>\n",
        escape_xml(heading),
        id,
        id,
        escape_xml(code)
    )
}

fn download_link(href: &str, file_name: &str, title: &str, detail: &str) -> String {
    format!(
        "<a href=\"{}\" download=\"{}\" class=\"p-4 border rounded-lg hover:bg-gray-50 transition-colors text-center\">\
         <div class=\"text-sm font-medium\">{}</div>\
         <div class=\"text-xs text-gray-500 mt-1\">{}</div></a>\n",
        escape_xml(href),
        escape_xml(file_name),
        escape_xml(title),
        escape_xml(detail)
    )
}

fn download_button(url: &str, file_name: &str, title: &str, detail: &str) -> String {
    format!(
        "<button type=\"button\" data-download-url=\"{}\" data-download-name=\"{}\" class=\"p-4 border rounded-lg hover:bg-gray-50 transition-colors text-center\">\
         <div class=\"text-sm font-medium\">{}</div>\
         <div class=\"text-xs text-gray-500 mt-1\">{}</div></button>\n",
        escape_xml(url),
        escape_xml(file_name),
        escape_xml(title),
        escape_xml(detail)
    )
}

fn bullet_list(heading: &str, items: &[&str]) -> String {
    let mut out = format!(
        "<div><h3 class=\"font-medium mb-2\">{}</h3><ul class=\"space-y-1 text-sm\">",
        escape_xml(heading)
    );
    for item in items {
        out.push_str(&format!("<li>{}</li>", escape_xml(item)));
    }
    out.push_str("</ul></div>\n");
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_cross_product() {
        let brand = Brand::studypal();
        let entries = Showcase::new(&brand).entries();
        assert_eq!(entries.len(), Theme::ALL.len() * Size::ALL.len() * Variant::ALL.len());
        assert_eq!(entries[0].label, "light / sm / full");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("light"), "Light");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_code_block_escapes() {
        let block = code_block("x", "Raw", "<svg a=\"b\">");
        assert!(block.contains("&lt;svg a=&quot;b&quot;&gt;"));
        assert!(block.contains("data-copy-target=\"x\""));
    }

    #[test]
    fn test_download_link() {
        let link = download_link("data:x", "a.svg", "Light SVG", "200px");
        assert!(link.starts_with("<a href=\"data:x\" download=\"a.svg\""));
    }

    #[test]
    fn test_download_button() {
        let button = download_button("https://x/a?b=1&c=2", "a.webp", "A Image", "WEBP format");
        assert!(button.starts_with(
            "<button type=\"button\" data-download-url=\"https://x/a?b=1&amp;c=2\" data-download-name=\"a.webp\""
        ));
    }

    #[test]
    fn test_raster_download_goes_through_blob() {
        let brand = Brand::boomerang();
        let html = Showcase::new(&brand).render_html();
        assert!(html.contains("data-download-name=\"boomerang-logo.webp\""));
        assert!(!html.contains("download=\"boomerang-logo.webp\""));
        assert!(html.contains(DOWNLOAD_SCRIPT));
        for step in ["fetch(", ".blob()", "URL.createObjectURL", "link.click()", "URL.revokeObjectURL"] {
            assert!(DOWNLOAD_SCRIPT.contains(step), "missing {}", step);
        }
        assert!(DOWNLOAD_SCRIPT.contains("console.error('Download failed:', err)"));
    }

    #[test]
    fn test_vector_page_has_no_download_script() {
        let html = Showcase::new(&Brand::studypal()).render_html();
        assert!(!html.contains("data-download-url"));
    }
}
