use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// `host:port`, or `:port` to listen on every interface.
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
}

impl ServerConfig {
    /// Address in a form `TcpListener::bind` accepts.
    pub fn bind_address(&self) -> String {
        if self.listen_address.starts_with(':') {
            format!("0.0.0.0{}", self.listen_address)
        } else {
            self.listen_address.clone()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
        }
    }
}

fn default_listen_address() -> String {
    ":19115".to_string()
}
