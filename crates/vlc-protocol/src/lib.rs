pub mod request;
pub mod settings;
pub mod timestamp;

/// Path of VLC's HTTP status/control endpoint
pub const STATUS_PATH: &str = "/requests/status.xml";

/// Query parameter carrying the command name
pub const COMMAND_PARAM: &str = "command";

/// Query parameter carrying the seek target
pub const SEEK_VALUE_PARAM: &str = "val";

/// Default connection settings (VLC's own HTTP interface defaults)
pub const DEFAULT_HOST: &str = "http://127.0.0.1";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_PASSWORD: &str = "";
pub const DEFAULT_FORCE_RESUME_ON_SEEK: bool = true;
