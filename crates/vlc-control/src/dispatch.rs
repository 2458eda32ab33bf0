/// Send-and-forget dispatch of player requests.
///
/// A [`Transport`] starts delivering a request and immediately hands back a
/// [`Dispatch`]. Callers may keep the handle to observe the outcome later,
/// or drop it; the request goes out either way.

use anyhow::Context;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use vlc_protocol::request::{PlayerCommand, PlayerRequest};

/// HTTP status of the player's reply, or why there was none.
/// The status is recorded for observation only; nothing acts on it.
pub type DispatchOutcome = Result<u16, DispatchError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("request to player failed: {0}")]
    Transport(String),

    #[error("dispatch task did not complete: {0}")]
    Aborted(String),
}

/// Capability that puts a request on the wire without blocking the caller.
pub trait Transport {
    fn dispatch(&self, request: PlayerRequest) -> Dispatch;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn dispatch(&self, request: PlayerRequest) -> Dispatch {
        (**self).dispatch(request)
    }
}

/// Handle to one in-flight (or already settled) request.
#[derive(Debug)]
pub struct Dispatch {
    command: PlayerCommand,
    url: String,
    state: DispatchState,
}

#[derive(Debug)]
enum DispatchState {
    Spawned(JoinHandle<DispatchOutcome>),
    Settled(DispatchOutcome),
}

impl Dispatch {
    /// Wrap a background task that delivers `request`.
    pub fn spawned(request: &PlayerRequest, task: JoinHandle<DispatchOutcome>) -> Self {
        Self {
            command: request.command,
            url: request.url.clone(),
            state: DispatchState::Spawned(task),
        }
    }

    /// A dispatch whose outcome is already known (synchronous transports, tests).
    pub fn settled(request: &PlayerRequest, outcome: DispatchOutcome) -> Self {
        Self {
            command: request.command,
            url: request.url.clone(),
            state: DispatchState::Settled(outcome),
        }
    }

    pub fn command(&self) -> PlayerCommand {
        self.command
    }

    /// Request URL (carries no credentials).
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_finished(&self) -> bool {
        match &self.state {
            DispatchState::Spawned(task) => task.is_finished(),
            DispatchState::Settled(_) => true,
        }
    }

    /// Wait for the request to settle. Only hosts and tests call this;
    /// the extension itself never waits on a dispatch.
    pub async fn outcome(self) -> DispatchOutcome {
        match self.state {
            DispatchState::Settled(outcome) => outcome,
            DispatchState::Spawned(task) => match task.await {
                Ok(outcome) => outcome,
                Err(e) => Err(DispatchError::Aborted(e.to_string())),
            },
        }
    }
}

/// Delivers requests with reqwest on a tokio runtime.
///
/// No timeout is configured beyond reqwest's defaults and failures are only
/// logged, never retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    runtime: Handle,
}

impl HttpTransport {
    /// Build a transport bound to the current tokio runtime.
    pub fn new() -> anyhow::Result<Self> {
        let runtime = Handle::try_current().context("HTTP transport needs a running tokio runtime")?;
        let http = reqwest::Client::builder()
            .build()
            .context("Cannot create HTTP client")?;
        Ok(Self::with_client(http, runtime))
    }

    pub fn with_client(http: reqwest::Client, runtime: Handle) -> Self {
        Self { http, runtime }
    }
}

impl Transport for HttpTransport {
    fn dispatch(&self, request: PlayerRequest) -> Dispatch {
        let http = self.http.clone();
        let command = request.command;
        let url = request.url.clone();
        let authorization = request.authorization.clone();

        let task = self.runtime.spawn(async move {
            match http
                .get(&url)
                .header(reqwest::header::AUTHORIZATION, authorization)
                .send()
                .await
            {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    debug!(command = %command, status = status, "Player command delivered");
                    Ok(status)
                }
                Err(e) => {
                    warn!(command = %command, error = %e, "Player command failed");
                    Err(DispatchError::Transport(e.to_string()))
                }
            }
        });

        Dispatch::spawned(&request, task)
    }
}
