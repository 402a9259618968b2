use std::collections::HashMap;
use std::env;
use std::fs;

/// Key=value configuration loaded from the file named by `CONFIG_FILE`,
/// with each lookup falling back to the process environment. Recognized
/// keys: `TICKETMASTER_API_KEY`, `PLANS_LOCATION`, and the per-provider
/// `*_BASE_URL` overrides.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn load() -> AppConfig {
        match env::var("CONFIG_FILE") {
            Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
            Err(_) => AppConfig::default(),
        }
    }

    pub fn from_file(path: &str) -> Result<AppConfig, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            values.insert(key.trim().to_string(), unquote(value.trim()));
        }
        Ok(AppConfig { values })
    }

    /// File value first, then the environment.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| env::var(key).ok())
    }
}

fn unquote(value: &str) -> String {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return value[1..value.len() - 1].to_string();
        }
    }
    value.to_string()
}
