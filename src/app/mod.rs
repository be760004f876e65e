use crate::config::EnvConfig;
use crate::pages::{Header, NotePage, NotesListPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub(crate) fn App(config: EnvConfig) -> impl IntoView {
    provide_context(AppContext(AppState::new(config)));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <div class="dark min-h-screen bg-background text-foreground">
                <div class="mx-auto flex w-full max-w-xl flex-col px-4 py-8">
                    <Header />
                    <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                        <Route path=path!("note/:id") view=NotePage />
                        <Route path=path!("") view=NotesListPage />
                    </Routes>
                </div>
            </div>
        </Router>
    }
}
