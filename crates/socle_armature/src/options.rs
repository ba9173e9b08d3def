//! Registration options.

use serde::{Deserialize, Serialize};

/// Grace period between a detach and the forced destroy, in milliseconds.
pub const DEFAULT_DESTROY_TIMEOUT_MS: u32 = 3000;

/// Options recognized at registration time.
///
/// Wire names are camelCase; unknown keys are ignored so the same options
/// object can also carry the lifecycle hook functions, which are read
/// separately at the wasm boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeOptions {
    /// Render into a shadow root (when the platform supports it).
    #[serde(default)]
    pub shadow: bool,

    /// Stylesheet text injected into the shadow root after mount.
    #[serde(default)]
    pub shadow_css: Option<String>,

    /// Detach-to-destroy grace period in milliseconds.
    #[serde(default = "default_destroy_timeout")]
    pub destroy_timeout: u32,
}

fn default_destroy_timeout() -> u32 {
    DEFAULT_DESTROY_TIMEOUT_MS
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            shadow: false,
            shadow_css: None,
            destroy_timeout: DEFAULT_DESTROY_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = BridgeOptions::default();
        assert!(!opts.shadow);
        assert!(opts.shadow_css.is_none());
        assert_eq!(opts.destroy_timeout, 3000);
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let opts: BridgeOptions =
            serde_json::from_str(r#"{"shadow": true, "shadowCss": ".x{}"}"#).unwrap();
        assert!(opts.shadow);
        assert_eq!(opts.shadow_css.as_deref(), Some(".x{}"));
        assert_eq!(opts.destroy_timeout, 3000);

        let opts: BridgeOptions = serde_json::from_str(r#"{"destroyTimeout": 50}"#).unwrap();
        assert_eq!(opts.destroy_timeout, 50);
    }
}
