use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use crate::types::{Config, OutputFormat};

/// Summarize pod health across a cluster
#[derive(Parser, Clone, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Namespace to summarize, default all namespaces
    #[clap(short = 'n', long)]
    pub namespace: Option<String>,
    /// Path to the kubeconfig file, default kube's own inference
    #[clap(long)]
    pub kubecfg: Option<PathBuf>,
    /// Output format: text or json
    #[clap(short = 'o', long)]
    pub output: Option<String>,
}

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    load_config_with_env(cli, &SystemEnvironment)
}

/// Flags win over environment variables.
pub fn load_config_with_env<E: EnvironmentProvider>(cli: &Cli, env: &E) -> Result<Config> {
    let namespace = cli
        .namespace
        .clone()
        .or_else(|| env.get_var("NAMESPACE"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let kubeconfig = cli
        .kubecfg
        .clone()
        .or_else(|| env.get_var("KUBECONFIG_PATH").filter(|s| !s.trim().is_empty()).map(PathBuf::from));

    let output = match (cli.output.as_deref(), env.get_var("OUTPUT_FORMAT")) {
        (Some(v), _) => parse_output_format(v).context("Invalid --output flag")?,
        (None, Some(v)) => parse_output_format(&v).context("Invalid OUTPUT_FORMAT")?,
        (None, None) => OutputFormat::default(),
    };

    Ok(Config {
        namespace,
        kubeconfig,
        output,
    })
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" | "" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(anyhow!("unknown output format {:?}, expected text or json", other)),
    }
}
