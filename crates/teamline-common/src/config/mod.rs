//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, Environment, JwtConfig, ServerConfig,
    SnowflakeConfig,
};
