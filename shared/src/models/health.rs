//! Health-source metric tree models

use serde::{Deserialize, Serialize};

/// Node returned by the metric structure queries, tagged folder or leaf
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetricNode {
    pub name: String,
    /// Leaf nodes are metrics; the path ends here
    pub is_leaf: bool,
}

impl MetricNode {
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_leaf: false,
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_leaf: true,
        }
    }
}

/// Query scope for the metric structure endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetricQuery {
    pub connector_ref: String,
    pub app_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_path: Option<String>,
}

impl MetricQuery {
    /// Key/value pairs for a URL query string; unset scopes are omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("connectorRef", self.connector_ref.clone()),
            ("appName", self.app_name.clone()),
        ];
        if let Some(tier) = &self.tier {
            pairs.push(("tier", tier.clone()));
        }
        if let Some(base_folder) = &self.base_folder {
            pairs.push(("baseFolder", base_folder.clone()));
        }
        if let Some(metric_path) = &self.metric_path {
            pairs.push(("metricPath", metric_path.clone()));
        }
        pairs
    }
}
