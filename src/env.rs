//! Fns to read variables from the environment more conveniently, plus the shared config struct
//! the binaries pull their settings from.

use std::env;

use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    pub static ref ENV_CONFIG: EnvConfig = get_env_config();
}

/// Get an environment variable, encoding found or missing as Option, and panic otherwise.
pub fn get_env_var(key: &str) -> Option<String> {
    let var = match env::var(key) {
        Err(env::VarError::NotPresent) => None,
        Err(e) => panic!("{e}"),
        Ok(var) => Some(var),
    };

    if let Some(ref existing_var) = var {
        debug!("env var {key}: {existing_var}");
    } else {
        debug!("env var {key} requested but not found")
    };

    var
}

pub fn get_env_bool(key: &str) -> Option<bool> {
    get_env_var(key).map(|var| match var.to_lowercase().as_str() {
        "true" => true,
        "false" => false,
        "t" => true,
        "f" => false,
        "1" => true,
        "0" => false,
        str => panic!("invalid bool value {str} for {key}"),
    })
}

/// Base URL of the P-Chain API the validator set is fetched from.
pub const PLATFORM_URL_DEFAULT: &str = "https://api.avax-test.network";

/// Where the filtered node list lands between a gather run and a batch-read run.
pub const NODE_LIST_PATH_DEFAULT: &str = "out/node-output.json";

pub struct EnvConfig {
    pub platform_url: String,
    pub node_list_path: String,
    pub log_json: bool,
}

pub fn get_env_config() -> EnvConfig {
    EnvConfig {
        platform_url: get_env_var("PLATFORM_URL")
            .unwrap_or_else(|| PLATFORM_URL_DEFAULT.to_string()),
        node_list_path: get_env_var("NODE_LIST_PATH")
            .unwrap_or_else(|| NODE_LIST_PATH_DEFAULT.to_string()),
        log_json: get_env_bool("LOG_JSON").unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_var_some() {
        let test_key = "TEST_KEY_SAFE_SOME";
        let test_value = "my-env-value";
        std::env::set_var(test_key, test_value);
        assert_eq!(get_env_var(test_key), Some(test_value.to_string()));
    }

    #[test]
    fn test_get_env_var_none() {
        let key = get_env_var("DOESNT_EXIST");
        assert!(key.is_none());
    }

    #[test]
    fn test_get_env_bool_not_there() {
        let flag = get_env_bool("DOESNT_EXIST");
        assert_eq!(flag, None);
    }

    #[test]
    fn test_get_env_bool_true() {
        let test_key = "TEST_KEY_BOOL_TRUE";
        let test_value = "true";
        std::env::set_var(test_key, test_value);
        assert_eq!(get_env_bool(test_key), Some(true));
    }

    #[test]
    fn test_get_env_bool_true_upper() {
        let test_key = "TEST_KEY_BOOL_TRUE2";
        let test_value = "TRUE";
        std::env::set_var(test_key, test_value);
        assert_eq!(get_env_bool(test_key), Some(true));
    }

    #[test]
    fn test_get_env_bool_false() {
        let test_key = "TEST_KEY_BOOL_FALSE";
        let test_value = "false";
        std::env::set_var(test_key, test_value);
        assert_eq!(get_env_bool(test_key), Some(false));
    }

    #[test]
    fn test_config_defaults() {
        let config = get_env_config();
        assert_eq!(config.platform_url, PLATFORM_URL_DEFAULT);
        assert_eq!(config.node_list_path, NODE_LIST_PATH_DEFAULT);
        assert!(!config.log_json);
    }
}
