use anyhow::Result;
use serde::Serialize;

use crate::metrics::classify;
use crate::types::{Category, OutputFormat, PodSnapshot, Totals};

impl Totals {
    /// Fold the pods of one namespace into the running totals.
    pub fn fold(&mut self, pods: &[PodSnapshot]) {
        self.add(Category::Total, pods.len() as u64);
        for pod in pods {
            for category in classify(pod) {
                self.increment(category);
            }
        }
    }

    /// Add another totals record, e.g. one built for a single namespace.
    pub fn merge(&mut self, other: &Totals) {
        for category in Category::ALL {
            self.add(category, other.get(category));
        }
    }
}

/// Outcome of one run across all requested namespaces
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub totals: Totals,
    /// Namespaces whose pods were counted.
    pub processed_namespaces: Vec<String>,
    pub failed_namespaces: Vec<String>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_namespace(&mut self, namespace: &str, pods: &[PodSnapshot]) {
        self.totals.fold(pods);
        self.processed_namespaces.push(namespace.to_string());
    }

    pub fn add_failed_namespace(&mut self, namespace: &str) {
        self.failed_namespaces.push(namespace.to_string());
    }

    pub fn namespace_count(&self) -> usize {
        self.processed_namespaces.len() + self.failed_namespaces.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_namespaces.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(render_text(&self.totals)),
            OutputFormat::Json => Ok(render_json(self)? + "\n"),
        }
    }
}

/// One `<category>:<count>` line per category, in report order.
pub fn render_text(totals: &Totals) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        out.push_str(&format!("{}:{}\n", category, totals.get(category)));
    }
    out
}

pub fn render_json(summary: &RunSummary) -> Result<String> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        #[serde(flatten)]
        totals: &'a Totals,
        namespaces: usize,
        failed_namespaces: &'a [String],
    }

    let report = JsonReport {
        totals: &summary.totals,
        namespaces: summary.processed_namespaces.len(),
        failed_namespaces: &summary.failed_namespaces,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
