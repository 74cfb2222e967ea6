#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "strongs_ranking.db".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub default_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { default_port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            storage: StorageSettings::default(),
            server: ServerSettings::default(),
        }
    }
}
