//! Downloadable asset export
//!
//! Vector brands export rendered SVG files. Raster brands export their remote
//! image, fetched once; a failed fetch is logged and skipped, never retried.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::brand::{Brand, Icon};
use crate::logo::Theme;
use crate::renderer::svg_document;
use crate::LogomarkError;

/// Errors that can occur while fetching a remote asset
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
}

/// Source of bytes for remote assets
pub trait AssetFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP fetcher
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("logomark/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl AssetFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// Where an asset's contents come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Rendered locally
    Markup(String),
    /// Downloaded from a URL
    Remote(String),
}

/// One file an export will write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAsset {
    pub file_name: String,
    pub source: AssetSource,
}

/// Outcome of an export
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    /// File name and reason for each asset that could not be fetched
    pub failed: Vec<(String, String)>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// List the files exported for a brand at a pixel size
pub fn plan_assets(brand: &Brand, pixel_size: u32) -> Vec<PlannedAsset> {
    match &brand.icon {
        Icon::Vector(_) => Theme::ALL
            .iter()
            .filter_map(|&theme| {
                svg_document(brand, theme, pixel_size).map(|svg| PlannedAsset {
                    file_name: format!("{}-logo-{}.svg", brand.id, theme),
                    source: AssetSource::Markup(svg),
                })
            })
            .collect(),
        Icon::Raster(raster) => vec![PlannedAsset {
            file_name: format!("{}-logo.{}", brand.id, raster.format),
            source: AssetSource::Remote(raster.url.clone()),
        }],
    }
}

/// Write a brand's assets into `dir`, creating it if needed
pub fn export_assets(
    brand: &Brand,
    dir: &Path,
    pixel_size: u32,
    fetcher: &dyn AssetFetcher,
) -> Result<ExportReport, LogomarkError> {
    fs::create_dir_all(dir).map_err(|source| LogomarkError::io(dir, source))?;

    let mut report = ExportReport::default();
    for asset in plan_assets(brand, pixel_size) {
        let path = dir.join(&asset.file_name);
        let bytes = match asset.source {
            AssetSource::Markup(markup) => markup.into_bytes(),
            AssetSource::Remote(url) => match fetcher.fetch(&url) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::error!(
                        url = %url,
                        file = %asset.file_name,
                        error = %e,
                        "asset download failed"
                    );
                    report.failed.push((asset.file_name, e.to_string()));
                    continue;
                }
            },
        };
        fs::write(&path, bytes).map_err(|source| LogomarkError::io(&path, source))?;
        tracing::info!(path = %path.display(), "wrote asset");
        report.written.push(path);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_vector_assets() {
        let plan = plan_assets(&Brand::studypal(), 200);
        let names: Vec<_> = plan.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, vec!["studypal-logo-light.svg", "studypal-logo-dark.svg"]);
        match &plan[0].source {
            AssetSource::Markup(svg) => assert!(svg.contains(r#"width="200" height="200""#)),
            AssetSource::Remote(_) => panic!("vector assets are rendered locally"),
        }
    }

    #[test]
    fn test_plan_raster_assets() {
        let brand = Brand::boomerang();
        let plan = plan_assets(&brand, 200);
        assert_eq!(
            plan,
            vec![PlannedAsset {
                file_name: "boomerang-logo.webp".to_string(),
                source: AssetSource::Remote(brand.image_url().unwrap().to_string()),
            }]
        );
    }

    #[test]
    fn test_report_completeness() {
        let mut report = ExportReport::default();
        assert!(report.is_complete());
        report.failed.push(("a.png".to_string(), "timeout".to_string()));
        assert!(!report.is_complete());
    }
}
