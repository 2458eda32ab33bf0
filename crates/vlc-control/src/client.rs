/// Player command client: turns a command and its parameters into an
/// authenticated request for the configured endpoint and hands it to the
/// transport. Stateless apart from the endpoint snapshot it was built with.

use tracing::info;

use vlc_protocol::request::{Endpoint, PlayerCommand, PlayerRequest};
use vlc_protocol::timestamp::Timestamp;

use crate::dispatch::{Dispatch, Transport};

pub struct PlayerClient<T> {
    endpoint: Endpoint,
    transport: T,
}

impl<T: Transport> PlayerClient<T> {
    pub fn new(endpoint: Endpoint, transport: T) -> Self {
        Self { endpoint, transport }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Send `command` with `params`. Returns as soon as the request is handed off.
    pub fn send_command(&self, command: PlayerCommand, params: &[(&str, &str)]) -> Dispatch {
        self.send(PlayerRequest::new(&self.endpoint, command, params))
    }

    pub fn seek(&self, timestamp: &Timestamp) -> Dispatch {
        self.send(PlayerRequest::seek(&self.endpoint, timestamp))
    }

    pub fn force_resume(&self) -> Dispatch {
        self.send(PlayerRequest::force_resume(&self.endpoint))
    }

    fn send(&self, request: PlayerRequest) -> Dispatch {
        info!(command = %request.command, url = %request.url, "Sending player command");
        self.transport.dispatch(request)
    }
}
