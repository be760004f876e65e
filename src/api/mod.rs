use crate::models::Note;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn network(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// The notes backend as seen by the editor.
///
/// One request per call. No retries, no caching.
pub(crate) trait NoteTransport {
    async fn fetch_note(&self, id: &str) -> ApiResult<Note>;
    async fn create_note(&self, note: &Note) -> ApiResult<()>;
    /// `note` is `None` when the editor never got a draft; it is sent as JSON `null`.
    async fn update_note(&self, id: &str, note: Option<&Note>) -> ApiResult<()>;
    async fn delete_note(&self, id: &str) -> ApiResult<()>;
}

pub(crate) fn list_path() -> String {
    "/api/notes/".to_string()
}

pub(crate) fn note_path(id: &str) -> String {
    format!("/api/notes/{}", urlencoding::encode(id))
}

pub(crate) fn create_path() -> String {
    "/api/notes/create/".to_string()
}

pub(crate) fn update_path(id: &str) -> String {
    format!("/api/notes/{}/update/", urlencoding::encode(id))
}

pub(crate) fn delete_path(id: &str) -> String {
    format!("/api/notes/{}/delete/", urlencoding::encode(id))
}

/// HTTP implementation of [`NoteTransport`]. The base URL is fixed at construction.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn http() -> reqwest::Client {
        reqwest::Client::new()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, req: reqwest::RequestBuilder, ctx: &str) -> ApiResult<reqwest::Response> {
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    pub async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let req = Self::http().get(self.url(&list_path()));
        let res = self.send(req, "List notes failed").await?;
        res.json().await.map_err(ApiError::parse)
    }

    fn fetch_request(&self, id: &str) -> reqwest::RequestBuilder {
        Self::http().get(self.url(&note_path(id)))
    }

    fn create_request(&self, note: &Note) -> reqwest::RequestBuilder {
        Self::http().post(self.url(&create_path())).json(note)
    }

    fn update_request(&self, id: &str, note: Option<&Note>) -> reqwest::RequestBuilder {
        Self::http().put(self.url(&update_path(id))).json(&note)
    }

    // No body, but the header is still sent.
    fn delete_request(&self, id: &str) -> reqwest::RequestBuilder {
        Self::http()
            .delete(self.url(&delete_path(id)))
            .header("Content-Type", "application/json")
    }
}

impl NoteTransport for ApiClient {
    async fn fetch_note(&self, id: &str) -> ApiResult<Note> {
        debug!(%id, "fetching note");
        let res = self.send(self.fetch_request(id), "Fetch note failed").await?;
        res.json().await.map_err(ApiError::parse)
    }

    async fn create_note(&self, note: &Note) -> ApiResult<()> {
        debug!("creating note");
        self.send(self.create_request(note), "Create note failed")
            .await
            .map(|_| ())
    }

    async fn update_note(&self, id: &str, note: Option<&Note>) -> ApiResult<()> {
        debug!(%id, "updating note");
        self.send(self.update_request(id, note), "Update note failed")
            .await
            .map(|_| ())
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        debug!(%id, "deleting note");
        self.send(self.delete_request(id), "Delete note failed")
            .await
            .map(|_| ())
    }
}
