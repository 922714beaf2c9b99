#[cfg(test)]
use crate::core::config::AdminConfig;

#[cfg(test)]
use base64::prelude::*;

#[cfg(test)]
pub fn test_admin_config() -> AdminConfig {
    AdminConfig {
        username: "admin".to_string(),
        password: "art123".to_string(),
    }
}

#[cfg(test)]
pub fn basic_auth_value(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{}:{}", username, password))
    )
}
