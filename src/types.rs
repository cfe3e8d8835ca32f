use crate::{
    modules::{dish, order},
    utils::{
        id::{IdGenerator, UlidGenerator},
        seed::{Seed, SeedError},
    },
};
use async_trait::async_trait;
use std::{env, io, path::PathBuf, sync::Arc};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid PORT {0:?}, expected a number between 0 and 65535")]
    InvalidPort(String),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error("server error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

/// Everything a request can reach: both stores, their pipelines and the id generator.
pub struct Context {
    pub app: AppContext,
    pub ids: Arc<dyn IdGenerator>,
    pub dish: dish::Resource,
    pub order: order::Resource,
}

impl Context {
    pub fn new(app: AppContext, seed: Seed, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            app,
            ids,
            dish: dish::Resource::new(seed.dishes),
            order: order::Resource::new(seed.orders),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug, Default)]
pub struct SeedConfig {
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub seed: SeedConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let environment = lookup("APP_ENV").unwrap_or_default();
        let raw_port = lookup("PORT").unwrap_or_else(|| "5000".to_string());
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| StartupError::InvalidPort(raw_port.clone()))?;
        let url = lookup("URL").unwrap_or_else(|| format!("http://{}:{}", host, port));
        let seed_path = lookup("SEED_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            seed: SeedConfig { path: seed_path },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, StartupError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, StartupError> {
        let seed = match &self.seed.path {
            Some(path) => Seed::load(path).await?,
            None => Seed::default(),
        };

        tracing::info!(
            "Starting with {} dishes and {} orders",
            seed.dishes.len(),
            seed.orders.len()
        );

        Ok(Context::new(
            AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            seed,
            Arc::new(UlidGenerator),
        ))
    }
}
