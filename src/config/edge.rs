//! JSON configuration for the `edge_mask` tool.
//!
//! ```json
//! {
//!   "input": "bird.jpg",
//!   "pipeline": { "medianRadius": 3, "histogramBins": 50, "threshold": 50.0 },
//!   "output": { "maskImage": "out/my_edges.png", "reportJson": "out/report.json" }
//! }
//! ```
//! Every `pipeline` field is optional and falls back to its default.
use crate::error::Result;
use crate::pipeline::PipelineParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub pipeline: PipelineParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOutputConfig {
    /// Binary edge mask (single-channel PNG).
    pub mask_image: PathBuf,
    /// Optional preview of the magnitude field scaled to 8 bits.
    #[serde(default)]
    pub magnitude_image: Option<PathBuf>,
    /// Optional JSON report with histogram counts and timings.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: EdgeToolConfig =
            serde_json::from_str(r#"{"input": "a.png", "output": {"maskImage": "m.png"}}"#)
                .unwrap();
        assert_eq!(cfg.input, PathBuf::from("a.png"));
        assert!(cfg.output.report_json.is_none());
        let params = &cfg.pipeline;
        assert_eq!(params.median_radius, 3);
        assert_eq!(params.histogram_bins, 50);
        assert_eq!(params.threshold, 50.0);
    }

    #[test]
    fn pipeline_overrides_are_applied() {
        let cfg: EdgeToolConfig = serde_json::from_str(
            r#"{
                "input": "a.png",
                "pipeline": {"medianRadius": 1, "threshold": 20.5},
                "output": {"maskImage": "m.png", "reportJson": "r.json"}
            }"#,
        )
        .unwrap();
        let params = &cfg.pipeline;
        assert_eq!(params.median_radius, 1);
        assert_eq!(params.histogram_bins, 50);
        assert_eq!(params.threshold, 20.5);
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(serde_json::from_str::<EdgeToolConfig>(r#"{"input": "a.png"}"#).is_err());
    }
}
