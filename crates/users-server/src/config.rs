use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_users: usize,
    pub max_generate_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            seed_users: 10,
            max_generate_count: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            seed_users: env::var("SEED_USERS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            max_generate_count: env::var("MAX_GENERATE_COUNT")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()?,
        })
    }
}
