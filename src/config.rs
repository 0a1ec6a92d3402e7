use dotenvy;
use std::{env, fmt, process};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub api_key: String
}

impl ServerConfig {
    pub fn new(host: &str, port: u16, static_dir: &str, api_key: &str) -> Self {
        ServerConfig {
            host: host.to_string(),
            port,
            static_dir: static_dir.to_string(),
            api_key: api_key.to_string()
        }
    }

    // loads a .env file when one exists, then reads the process env.
    // the credential is required and startup aborts without it; host,
    // port and static dir fall back to defaults.
    pub fn from_env(default_host: &str) -> Self {
        dotenvy::dotenv().ok();
        let api_key = env::var("GROQ_API_KEY")
            .expect("GROQ_API_KEY not found in env");
        let host = env::var("HOST")
            .unwrap_or_else(|_| default_host.to_string());
        let port = get_port_from_env("PORT");
        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
        Self::new(&host, port, &static_dir, &api_key)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// manual impl so the credential never ends up in a log line.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn get_port_from_env(key: &str) -> u16 {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Failed to parse {} as a port number", key);
            process::exit(1);
        }),
        Err(_) => DEFAULT_PORT
    }
}
