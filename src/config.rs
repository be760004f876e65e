use crate::editor::NavigationPolicy;

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Runtime configuration, read once at startup and injected from there on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub navigation_policy: NavigationPolicy,
}

impl EnvConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_base_url(&api_url.into()),
            navigation_policy: NavigationPolicy::default(),
        }
    }

    pub fn with_navigation_policy(mut self, policy: NavigationPolicy) -> Self {
        self.navigation_policy = policy;
        self
    }

    /// Resolve from `window.ENV` (`API_URL`, then `api_url`), then the page origin.
    ///
    /// `window.ENV.AWAIT_WRITES` (`true`/`"1"`) makes the editor wait for its exit write
    /// before leaving.
    pub fn from_window() -> Self {
        let policy = if read_window_env(&["AWAIT_WRITES"]).is_some_and(|v| is_truthy(&v)) {
            NavigationPolicy::AwaitWrite
        } else {
            NavigationPolicy::Immediate
        };

        if let Some(url) = read_window_env(&["API_URL", "api_url"]) {
            return Self::new(url).with_navigation_policy(policy);
        }

        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        let config = match origin {
            Some(origin) if origin.starts_with("http") => Self::new(origin),
            _ => Self::new(DEFAULT_API_URL),
        };
        config.with_navigation_policy(policy)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// First non-empty `window.ENV[key]` among `keys`. Booleans are read as `"true"`/`"false"`.
fn read_window_env(keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let env = window.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }

    keys.iter().find_map(|key| {
        let v = js_sys::Reflect::get(&env, &(*key).into()).ok()?;
        v.as_string()
            .or_else(|| v.as_bool().map(|b| b.to_string()))
            .filter(|s| !s.trim().is_empty())
    })
}

pub(crate) fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_env(value: &JsValue) {
        let window = web_sys::window().expect("window");
        js_sys::Reflect::set(&window, &"ENV".into(), value).expect("set ENV");
    }

    #[wasm_bindgen_test]
    fn test_from_window_prefers_api_url_key() {
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_URL".into(), &"http://api.test/".into()).unwrap();
        js_sys::Reflect::set(&env, &"api_url".into(), &"http://legacy.test".into()).unwrap();
        set_env(&env.into());

        assert_eq!(EnvConfig::from_window().api_url, "http://api.test");
    }

    #[wasm_bindgen_test]
    fn test_from_window_falls_back_to_origin() {
        set_env(&JsValue::UNDEFINED);

        let origin = web_sys::window().unwrap().location().origin().unwrap();
        assert_eq!(EnvConfig::from_window().api_url, normalize_base_url(&origin));
    }

    #[wasm_bindgen_test]
    fn test_from_window_reads_await_writes() {
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"AWAIT_WRITES".into(), &JsValue::TRUE).unwrap();
        set_env(&env.into());

        assert_eq!(
            EnvConfig::from_window().navigation_policy,
            NavigationPolicy::AwaitWrite
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_trims_trailing_slash() {
        assert_eq!(normalize_base_url("http://x.test/"), "http://x.test");
        assert_eq!(normalize_base_url("  http://x.test//  "), "http://x.test");
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn test_default_config() {
        let config = EnvConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.navigation_policy, NavigationPolicy::Immediate);
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" TRUE "));
        assert!(is_truthy("yes"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy(""));
    }
}
