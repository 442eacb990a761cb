//! Base-path and metric-path browsing over a health-source connector

use std::sync::Arc;

use shared::models::{MetricNode, MetricQuery};

use crate::services::HealthSourceApi;

use super::{HealthSourceError, MetricPathPicker};

/// Two independent tree walks against one connector: the base path first,
/// then the metric path scoped by the resolved base path and tier
pub struct HealthSourceBrowser {
    api: Arc<dyn HealthSourceApi>,
    connector_ref: String,
    app_name: String,
    tier: Option<String>,
    base: MetricPathPicker,
    metric: MetricPathPicker,
}

impl HealthSourceBrowser {
    pub fn new(
        api: Arc<dyn HealthSourceApi>,
        connector_ref: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            api,
            connector_ref: connector_ref.into(),
            app_name: app_name.into(),
            tier: None,
            base: MetricPathPicker::new(),
            metric: MetricPathPicker::new(),
        }
    }

    /// Changing the tier re-scopes every metric-path query; the metric walk
    /// starts over
    pub fn set_tier(&mut self, tier: Option<String>) {
        self.tier = tier;
        self.metric.reset();
    }

    pub fn base(&self) -> &MetricPathPicker {
        &self.base
    }

    pub fn metric(&self) -> &MetricPathPicker {
        &self.metric
    }

    /// Resolved base path, `|`-joined
    pub fn base_path(&self) -> String {
        self.base.full_path()
    }

    /// Resolved metric path, `|`-joined
    pub fn metric_path(&self) -> String {
        self.metric.full_path()
    }

    fn none_if_empty(path: &str) -> Option<String> {
        if path.is_empty() {
            None
        } else {
            Some(path.to_string())
        }
    }

    /// Options for one base-path dropdown level
    pub async fn base_options(&self, level: usize) -> Result<Vec<MetricNode>, HealthSourceError> {
        let scope = self.base.scope_at(level)?.to_string();
        let query = MetricQuery {
            connector_ref: self.connector_ref.clone(),
            app_name: self.app_name.clone(),
            tier: None,
            base_folder: Self::none_if_empty(&scope),
            metric_path: None,
        };
        self.api
            .base_folders(&query)
            .await
            .map_err(HealthSourceError::Api)
    }

    pub fn select_base(
        &mut self,
        level: usize,
        node: &MetricNode,
    ) -> Result<(), HealthSourceError> {
        self.base.select(level, node)?;
        // The metric walk is scoped by the base path; a new base invalidates
        // it wholesale.
        self.metric.reset();
        Ok(())
    }

    /// Options for one metric-path dropdown level, scoped by the resolved
    /// base path and tier
    ///
    /// Without a tier the full metric structure is browsed; with one the
    /// walk narrows to the tier's metric paths.
    pub async fn metric_options(
        &self,
        level: usize,
    ) -> Result<Vec<MetricNode>, HealthSourceError> {
        let scope = self.metric.scope_at(level)?.to_string();
        let query = MetricQuery {
            connector_ref: self.connector_ref.clone(),
            app_name: self.app_name.clone(),
            tier: self.tier.clone(),
            base_folder: Self::none_if_empty(&self.base_path()),
            metric_path: Self::none_if_empty(&scope),
        };
        let result = match self.tier {
            Some(_) => self.api.metric_paths(&query).await,
            None => self.api.metric_structure(&query).await,
        };
        result.map_err(HealthSourceError::Api)
    }

    pub fn select_metric(
        &mut self,
        level: usize,
        node: &MetricNode,
    ) -> Result<(), HealthSourceError> {
        self.metric.select(level, node)
    }
}
