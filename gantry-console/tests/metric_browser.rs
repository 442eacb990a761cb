//! Health-source browsing against a mock metric structure

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use gantry_console::health::HealthSourceBrowser;
use gantry_console::services::HealthSourceApi;
use shared::error::AppError;
use shared::models::{MetricNode, MetricQuery};

/// Records every query and serves a small fixed tree
struct MockMetricApi {
    queries: Mutex<Vec<MetricQuery>>,
}

impl MockMetricApi {
    fn new() -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
        }
    }

    fn queries(&self) -> Vec<MetricQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn children_for(scope: Option<&str>) -> Vec<MetricNode> {
        match scope {
            None => vec![
                MetricNode::folder("Overall Application Performance"),
                MetricNode::folder("Business Transactions"),
            ],
            Some("Overall Application Performance") => vec![
                MetricNode::folder("web"),
                MetricNode::leaf("Exceptions per Minute"),
            ],
            Some("Overall Application Performance|web") => {
                vec![MetricNode::leaf("Calls per Minute")]
            }
            _ => Vec::new(),
        }
    }
}

#[async_trait]
impl HealthSourceApi for MockMetricApi {
    async fn metric_structure(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(Self::children_for(query.metric_path.as_deref()))
    }

    async fn base_folders(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(Self::children_for(query.base_folder.as_deref()))
    }

    async fn metric_paths(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(Self::children_for(query.metric_path.as_deref()))
    }
}

fn make_browser() -> (HealthSourceBrowser, Arc<MockMetricApi>) {
    let api = Arc::new(MockMetricApi::new());
    let browser = HealthSourceBrowser::new(api.clone(), "account.appd", "payments");
    (browser, api)
}

#[tokio::test]
async fn base_walk_accumulates_the_query_scope() {
    let (mut browser, api) = make_browser();

    let roots = browser.base_options(0).await.unwrap();
    assert_eq!(roots.len(), 2);
    browser.select_base(0, &roots[0]).unwrap();

    let children = browser.base_options(1).await.unwrap();
    browser.select_base(1, &children[0]).unwrap();

    let queries = api.queries();
    // Root level queries with no scope; level 1 is scoped by the selection
    assert_eq!(queries[0].base_folder, None);
    assert_eq!(
        queries[1].base_folder.as_deref(),
        Some("Overall Application Performance")
    );
    assert_eq!(browser.base_path(), "Overall Application Performance|web");
}

#[tokio::test]
async fn metric_queries_are_scoped_by_base_path_and_tier() {
    let (mut browser, api) = make_browser();

    let roots = browser.base_options(0).await.unwrap();
    browser.select_base(0, &roots[0]).unwrap();
    browser.set_tier(Some("web".to_string()));

    let options = browser.metric_options(0).await.unwrap();
    assert!(!options.is_empty());

    let query = api.queries().last().unwrap().clone();
    assert_eq!(query.tier.as_deref(), Some("web"));
    assert_eq!(
        query.base_folder.as_deref(),
        Some("Overall Application Performance")
    );
    assert_eq!(query.metric_path, None);
}

#[tokio::test]
async fn selecting_a_leaf_terminates_the_metric_path() {
    let (mut browser, _api) = make_browser();

    let roots = browser.metric_options(0).await.unwrap();
    browser.select_metric(0, &roots[0]).unwrap();

    let children = browser.metric_options(1).await.unwrap();
    let leaf = children.iter().find(|n| n.is_leaf).unwrap();
    browser.select_metric(1, leaf).unwrap();

    assert!(browser.metric().is_terminal());
    assert_eq!(
        browser.metric_path(),
        "Overall Application Performance|Exceptions per Minute"
    );
    assert_eq!(
        browser.metric().display_path(),
        "Overall Application Performance / Exceptions per Minute"
    );
}

#[tokio::test]
async fn changing_the_base_resets_the_metric_walk() {
    let (mut browser, _api) = make_browser();

    let roots = browser.metric_options(0).await.unwrap();
    browser.select_metric(0, &roots[0]).unwrap();
    assert_eq!(browser.metric().levels().len(), 2);

    let bases = browser.base_options(0).await.unwrap();
    browser.select_base(0, &bases[1]).unwrap();

    assert_eq!(browser.metric().levels().len(), 1);
    assert_eq!(browser.metric_path(), "");
}
