use anyhow::anyhow;
use std::net::SocketAddr;
use tracing_appender::rolling::Rotation;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    pub log_rotation: Rotation,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_TRACKER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_TRACKER_LOG_FILENAME")?;
        let log_rotation = match std::env::var("TICKET_TRACKER_LOG_ROTATION") {
            Ok(rotation) => Self::parse_rotation(&rotation)?,
            Err(_) => Rotation::HOURLY,
        };
        let bind_address = Self::env_var("TICKET_TRACKER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("TICKET_TRACKER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("TICKET_TRACKER_DB_NAME")?;
        let max_http_content_len = Self::env_var("TICKET_TRACKER_MAX_HTTP_CONTENT_LEN")?
            .parse()
            .map_err(|err| anyhow!("TICKET_TRACKER_MAX_HTTP_CONTENT_LEN invalid: {err}"))?;

        Ok(Self {
            log_directory,
            log_filename,
            log_rotation,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn parse_rotation(rotation: &str) -> anyhow::Result<Rotation> {
        match rotation.to_ascii_lowercase().as_str() {
            "minutely" => Ok(Rotation::MINUTELY),
            "hourly" => Ok(Rotation::HOURLY),
            "daily" => Ok(Rotation::DAILY),
            "never" => Ok(Rotation::NEVER),
            _ => Err(anyhow!("TICKET_TRACKER_LOG_ROTATION invalid: {rotation}")),
        }
    }
}
