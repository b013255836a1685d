use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Namespace served by `/pods`, `/npods` and the pod-count gauge
    #[serde(default = "default_pod_namespace")]
    pub pod_namespace: String,

    #[serde(default)]
    pub kubeconfig_path: Option<String>,

    #[serde(default)]
    pub log_json: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_pod_namespace() -> String {
    "default".to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let settings: Config = config.try_deserialize()?;

        Ok(settings)
    }

    pub fn listen_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            pod_namespace: default_pod_namespace(),
            kubeconfig_path: None,
            log_json: false,
        }
    }
}
