use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardHeader, CardList,
    CardTitle, Spinner, Textarea,
};
use crate::editor::{LocalSpawner, NoteEditor};
use crate::models::{Note, RouteId, NEW_NOTE_ID};
use crate::state::AppContext;
use crate::util::{note_href, note_preview, note_title, note_updated_date};
use icons::{ArrowLeft, Plus};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use tracing::{debug, warn};

#[derive(Params, PartialEq, Clone, Debug)]
pub struct NoteRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn Header() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    view! {
        <header class="flex items-center justify-between px-4 py-4">
            <a href="/" class="text-lg font-semibold text-foreground">"Note List"</a>
            <Show when=move || app_state.0.notes_loaded.get() fallback=|| ().into_view()>
                <span class="text-xs text-muted-foreground">
                    {move || format!("{} notes", app_state.0.notes.get().len())}
                </span>
            </Show>
        </header>
    }
}

#[component]
fn ListItem(note: Note) -> impl IntoView {
    let href = note_href(&note);
    let title = note_title(&note);
    let preview = note_preview(&note);
    let updated = note_updated_date(&note);

    view! {
        <li>
            <a href=href class="block px-4 py-3 hover:bg-accent/50">
                <div class="truncate text-sm font-medium">
                    {if title.is_empty() { "Untitled".to_string() } else { title }}
                </div>
                <div class="truncate text-xs text-muted-foreground">
                    {updated.map(|d| view! { <span class="mr-2">{d}</span> })}
                    {preview}
                </div>
            </a>
        </li>
    }
}

#[component]
pub fn NotesListPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    // The list re-fetches on every mount; writes from the editor may still be in flight.
    Effect::new(move |_| {
        let req_id = app_state
            .0
            .notes_request_id
            .get_untracked()
            .saturating_add(1);
        app_state.0.notes_request_id.set(req_id);

        app_state.0.notes_loading.set(true);
        app_state.0.notes_error.set(None);

        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.list_notes().await;

            // Ignore stale responses.
            if app_state.0.notes_request_id.get_untracked() != req_id {
                debug!(req_id, "discarding stale note list");
                return;
            }

            match result {
                Ok(notes) => {
                    app_state.0.notes.set(notes);
                    app_state.0.notes_loaded.set(true);
                }
                Err(e) => {
                    warn!(error = %e, "failed to load notes");
                    app_state.0.notes_error.set(Some(e.to_string()));
                }
            }
            app_state.0.notes_loading.set(false);
        });
    });

    view! {
        <Card class="relative min-h-96">
            <CardHeader>
                <CardTitle class="text-base">"☶ Notes"</CardTitle>
                <Show when=move || app_state.0.notes_loading.get() fallback=|| ().into_view()>
                    <Spinner />
                </Show>
            </CardHeader>

            {move || {
                app_state.0.notes_error.get().map(|e| view! {
                    <Alert class="m-4 w-auto border-destructive/30">
                        <AlertDescription class="text-destructive">{e}</AlertDescription>
                    </Alert>
                })
            }}

            <CardList>
                {move || {
                    app_state
                        .0
                        .notes
                        .get()
                        .into_iter()
                        .map(|note| view! { <ListItem note=note /> })
                        .collect_view()
                }}
            </CardList>

            <a
                href=format!("/note/{NEW_NOTE_ID}")
                class="absolute bottom-4 right-4 inline-flex size-12 items-center justify-center rounded-full bg-primary text-primary-foreground shadow-md hover:bg-primary/90"
                title="New note"
            >
                <Plus />
            </a>
        </Card>
    }
}

#[component]
pub fn NotePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = use_params::<NoteRouteParams>();
    let navigate = use_navigate();

    // Use a closure so params access happens inside a reactive tracking context.
    let route = move || {
        let id = params.get().ok().and_then(|p| p.id).unwrap_or_default();
        if id.trim().is_empty() {
            RouteId::New
        } else {
            RouteId::parse(&id)
        }
    };

    // Text shown in the textarea; the editor owns the draft itself.
    let body: RwSignal<String> = RwSignal::new(String::new());
    let loading: RwSignal<bool> = RwSignal::new(false);
    let is_new: RwSignal<bool> = RwSignal::new(true);
    // Set once an exit intent consumed the draft; the page may stay up while the write runs.
    let exiting: RwSignal<bool> = RwSignal::new(false);

    let to_list = move || navigate("/", Default::default());
    let editor = StoredValue::new_local(NoteEditor::new(
        app_state.0.api_client.get_untracked(),
        to_list,
        LocalSpawner,
        app_state.0.navigation_policy,
    ));

    // Re-runs whenever the route id changes while this page stays mounted.
    Effect::new(move |_| {
        let route = route();
        is_new.set(route.is_new());
        body.set(String::new());
        exiting.set(false);
        loading.set(!route.is_new());

        let ed = editor.get_value();
        spawn_local(async move {
            if let Some(note) = ed.enter(route).await {
                body.set(note.body.unwrap_or_default());
            }
            loading.set(ed.is_loading());
        });
    });

    on_cleanup(move || {
        editor.try_with_value(|ed| ed.dispose());
    });

    let on_change = move |text: String| {
        body.set(text.clone());
        editor.get_value().change_body(text);
    };
    let on_submit = move |_: ev::MouseEvent| {
        exiting.set(true);
        editor.get_value().submit();
    };
    let on_delete = move |_: ev::MouseEvent| {
        exiting.set(true);
        editor.get_value().delete();
    };

    view! {
        <Card class="min-h-96">
            <CardHeader>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    on:click=on_submit
                    attr:title="Back"
                >
                    <ArrowLeft />
                </Button>

                <Show when=move || loading.get() || exiting.get() fallback=|| ().into_view()>
                    <Spinner />
                </Show>

                <Show
                    when=move || is_new.get()
                    fallback=move || view! {
                        <Button
                            variant=ButtonVariant::Destructive
                            size=ButtonSize::Sm
                            on:click=on_delete
                        >
                            "Delete"
                        </Button>
                    }
                >
                    <Button size=ButtonSize::Sm on:click=on_submit>
                        "Done"
                    </Button>
                </Show>
            </CardHeader>

            <div class="flex flex-1 flex-col p-4">
                <Textarea
                    value=body
                    on_input=on_change
                    placeholder="Start typing..."
                    autofocus=true
                    disabled=exiting
                />
            </div>
        </Card>
    }
}
