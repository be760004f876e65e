use crate::api::ApiClient;
use crate::config::EnvConfig;
use crate::editor::NavigationPolicy;
use crate::models::Note;
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// How the editor orders its exit write against navigation.
    pub navigation_policy: NavigationPolicy,

    /// Notes shown on the list page. Reloaded on every list mount.
    pub notes: RwSignal<Vec<Note>>,
    pub notes_loaded: RwSignal<bool>,
    pub notes_loading: RwSignal<bool>,
    pub notes_error: RwSignal<Option<String>>,

    /// Notes load guard (ignore stale responses).
    pub notes_request_id: RwSignal<u64>,
}

impl AppState {
    pub fn new(config: EnvConfig) -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::new(config.api_url)),
            navigation_policy: config.navigation_policy,
            notes: RwSignal::new(vec![]),
            notes_loaded: RwSignal::new(false),
            notes_loading: RwSignal::new(false),
            notes_error: RwSignal::new(None),
            notes_request_id: RwSignal::new(0),
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
