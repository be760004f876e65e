use crate::api::{ApiError, ApiResult, NoteTransport};
use crate::models::{Note, RouteId};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

/// "Navigate to the list" hook supplied by the router.
pub(crate) trait Navigator {
    fn to_list(&self);
}

impl<F: Fn()> Navigator for F {
    fn to_list(&self) {
        self()
    }
}

/// Runs write requests without blocking the caller.
pub(crate) trait Spawner {
    fn spawn(&self, fut: impl Future<Output = ()> + 'static);
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalSpawner;

impl Spawner for LocalSpawner {
    fn spawn(&self, fut: impl Future<Output = ()> + 'static) {
        leptos::task::spawn_local(fut);
    }
}

/// When the editor leaves for the list relative to its exit write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum NavigationPolicy {
    /// Navigate as soon as the write is issued; its outcome is only logged.
    #[default]
    Immediate,
    /// Wait for the write to resolve (either way), then navigate.
    AwaitWrite,
}

/// What an exit intent does to the server.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ExitAction {
    Create(Note),
    Update { id: String, note: Option<Note> },
    Delete { id: String },
    /// Nothing to persist; still navigates.
    Nothing,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum WriteStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(ApiError),
}

/// Persistence decision for the submit/done intent.
///
/// An existing note emptied to `""` is deleted. A new note is created as soon as it has
/// any body, including an explicitly emptied one.
pub(crate) fn decide_submit(route: &RouteId, draft: Option<&Note>) -> ExitAction {
    match route {
        RouteId::Existing(id) => {
            if draft.and_then(|n| n.body.as_deref()) == Some("") {
                ExitAction::Delete { id: id.clone() }
            } else {
                ExitAction::Update {
                    id: id.clone(),
                    note: draft.cloned(),
                }
            }
        }
        RouteId::New => match draft {
            Some(note) if note.body.is_some() => ExitAction::Create(note.clone()),
            _ => ExitAction::Nothing,
        },
    }
}

/// Persistence decision for the explicit delete intent. Draft content is irrelevant,
/// and the route is not checked: `New` deletes the `"new"` id like any other.
pub(crate) fn decide_delete(route: &RouteId) -> ExitAction {
    ExitAction::Delete {
        id: route.to_string(),
    }
}

#[derive(Debug)]
struct EditorState {
    route: RouteId,
    draft: Option<Note>,
    /// Bumped on every `enter`; a fetch only lands if its generation is still current.
    generation: u64,
    loading: bool,
    disposed: bool,
    exited: bool,
    write: WriteStatus,
}

/// Owns one editor instance's draft: load on entry, edit, exactly one exit.
pub(crate) struct NoteEditor<T, N, S> {
    transport: T,
    navigator: N,
    spawner: S,
    policy: NavigationPolicy,
    state: Rc<RefCell<EditorState>>,
}

impl<T: Clone, N: Clone, S: Clone> Clone for NoteEditor<T, N, S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            navigator: self.navigator.clone(),
            spawner: self.spawner.clone(),
            policy: self.policy,
            state: Rc::clone(&self.state),
        }
    }
}

impl<T, N, S> NoteEditor<T, N, S>
where
    T: NoteTransport + Clone + 'static,
    N: Navigator + Clone + 'static,
    S: Spawner,
{
    pub fn new(transport: T, navigator: N, spawner: S, policy: NavigationPolicy) -> Self {
        Self {
            transport,
            navigator,
            spawner,
            policy,
            state: Rc::new(RefCell::new(EditorState {
                route: RouteId::New,
                draft: None,
                generation: 0,
                loading: false,
                disposed: false,
                exited: false,
                write: WriteStatus::Idle,
            })),
        }
    }

    pub fn route(&self) -> RouteId {
        self.state.borrow().route.clone()
    }

    #[cfg(test)]
    pub fn draft(&self) -> Option<Note> {
        self.state.borrow().draft.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[cfg(test)]
    pub fn write_status(&self) -> WriteStatus {
        self.state.borrow().write.clone()
    }

    /// Load the editor for `route`. Returns the note if this load is the one that landed.
    ///
    /// Fetch failures leave the draft unset and are only logged.
    pub async fn enter(&self, route: RouteId) -> Option<Note> {
        let generation = {
            let mut st = self.state.borrow_mut();
            st.generation = st.generation.saturating_add(1);
            st.route = route.clone();
            st.draft = None;
            st.exited = false;
            st.loading = !route.is_new();
            st.generation
        };

        let RouteId::Existing(id) = route else {
            return None;
        };

        let result = self.transport.fetch_note(&id).await;

        let mut st = self.state.borrow_mut();
        if st.disposed || st.generation != generation {
            debug!(%id, "discarding stale note response");
            return None;
        }
        st.loading = false;

        match result {
            Ok(note) => {
                st.draft = Some(note.clone());
                Some(note)
            }
            Err(e) => {
                error!(%id, kind = ?e.kind, error = %e, "error fetching note");
                None
            }
        }
    }

    /// Replace the draft body verbatim. Ignored once the draft has been consumed by an exit.
    pub fn change_body(&self, text: String) {
        let mut guard = self.state.borrow_mut();
        let st = &mut *guard;
        if st.exited {
            debug!("draft already consumed; ignoring edit");
            return;
        }
        if let Some(note) = st.draft.as_mut() {
            note.body = Some(text);
            return;
        }
        st.draft = Some(Note::draft(st.route.draft_id(), text));
    }

    /// Submit/done intent.
    pub fn submit(&self) -> ExitAction {
        let action = {
            let st = self.state.borrow();
            decide_submit(&st.route, st.draft.as_ref())
        };
        self.exit(action)
    }

    /// Explicit delete intent.
    pub fn delete(&self) -> ExitAction {
        let route = self.route();
        if route.is_new() {
            warn!("delete requested for an unsaved note");
        }
        self.exit(decide_delete(&route))
    }

    /// Invalidate any fetch still in flight. Called when the view goes away.
    pub fn dispose(&self) {
        let mut st = self.state.borrow_mut();
        st.disposed = true;
        st.loading = false;
    }

    fn exit(&self, action: ExitAction) -> ExitAction {
        {
            let mut st = self.state.borrow_mut();
            if st.exited {
                debug!(write = ?st.write, "exit already handled for this draft; navigating only");
                drop(st);
                self.navigator.to_list();
                return ExitAction::Nothing;
            }
            st.exited = true;
            st.draft = None;
        }

        info!(action = action_name(&action), policy = ?self.policy, "leaving note editor");

        if action == ExitAction::Nothing {
            self.navigator.to_list();
            return action;
        }

        self.state.borrow_mut().write = WriteStatus::Pending;
        let write = write_action(self.transport.clone(), action.clone(), Rc::clone(&self.state));

        match self.policy {
            NavigationPolicy::Immediate => {
                self.spawner.spawn(write);
                self.navigator.to_list();
            }
            NavigationPolicy::AwaitWrite => {
                let navigator = self.navigator.clone();
                self.spawner.spawn(async move {
                    write.await;
                    navigator.to_list();
                });
            }
        }

        action
    }
}

fn action_name(action: &ExitAction) -> &'static str {
    match action {
        ExitAction::Create(_) => "create",
        ExitAction::Update { .. } => "update",
        ExitAction::Delete { .. } => "delete",
        ExitAction::Nothing => "none",
    }
}

async fn write_action<T: NoteTransport>(
    transport: T,
    action: ExitAction,
    state: Rc<RefCell<EditorState>>,
) {
    let result: ApiResult<()> = match &action {
        ExitAction::Create(note) => transport.create_note(note).await,
        ExitAction::Update { id, note } => transport.update_note(id, note.as_ref()).await,
        ExitAction::Delete { id } => transport.delete_note(id).await,
        ExitAction::Nothing => Ok(()),
    };

    let status = match result {
        Ok(()) => WriteStatus::Succeeded,
        Err(e) => {
            error!(
                action = action_name(&action),
                kind = ?e.kind,
                error = %e,
                "note write failed"
            );
            WriteStatus::Failed(e)
        }
    };
    state.borrow_mut().write = status;
}
