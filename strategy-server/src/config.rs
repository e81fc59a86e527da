//! Server configuration (CLI flags with environment fallbacks).

use std::time::Duration;

use clap::Parser;
use strategy_agents::ManagerConfig;

/// Origins the web client is served from during development.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, Parser)]
#[command(name = "strategy-server", about = "Team strategy persona API")]
pub struct ServerConfig {
    /// Address to listen on (host:port)
    #[arg(long, env = "STRATEGY_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen_addr: String,

    /// Allowed CORS origin (repeatable)
    #[arg(
        long = "cors-origin",
        env = "STRATEGY_CORS_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_CORS_ORIGINS
    )]
    pub cors_origins: Vec<String>,

    /// SQLite file for the task board. In-memory when omitted.
    #[arg(long, env = "STRATEGY_DB_PATH")]
    pub db_path: Option<String>,

    /// Delay before each agent reply sent over WebSocket
    #[arg(long, env = "STRATEGY_REPLY_PACING_MS", default_value_t = 1500)]
    pub reply_pacing_ms: u64,

    /// Minimum simulated thinking time for chat replies
    #[arg(long, default_value_t = 500)]
    pub think_min_ms: u64,

    /// Maximum simulated thinking time for chat replies
    #[arg(long, default_value_t = 2000)]
    pub think_max_ms: u64,

    /// Skip the simulated delay before research, pitch, sprint and tech reports
    #[arg(long, env = "STRATEGY_INSTANT_REPORTS")]
    pub instant_reports: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            db_path: None,
            reply_pacing_ms: 1500,
            think_min_ms: 500,
            think_max_ms: 2000,
            instant_reports: false,
        }
    }
}

impl ServerConfig {
    /// Configuration with every simulated delay switched off.
    pub fn without_delays(mut self) -> Self {
        self.reply_pacing_ms = 0;
        self.think_min_ms = 0;
        self.think_max_ms = 0;
        self.instant_reports = true;
        self
    }

    pub fn reply_pacing(&self) -> Duration {
        Duration::from_millis(self.reply_pacing_ms)
    }

    pub fn manager_config(&self) -> ManagerConfig {
        let config = ManagerConfig {
            think_time: Duration::from_millis(self.think_min_ms)
                ..Duration::from_millis(self.think_max_ms),
            ..ManagerConfig::default()
        };
        if self.instant_reports {
            config.with_instant_reports()
        } else {
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_default_impl() {
        let parsed = ServerConfig::parse_from(["strategy-server"]);
        let default = ServerConfig::default();
        assert_eq!(parsed.listen_addr, default.listen_addr);
        assert_eq!(parsed.cors_origins, default.cors_origins);
        assert_eq!(parsed.reply_pacing_ms, 1500);
        assert!(parsed.db_path.is_none());
    }

    #[test]
    fn repeated_cors_origins() {
        let parsed = ServerConfig::parse_from([
            "strategy-server",
            "--cors-origin",
            "https://a.example",
            "--cors-origin",
            "https://b.example",
        ]);
        assert_eq!(parsed.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn manager_ranges_follow_flags() {
        let config = ServerConfig::parse_from(["strategy-server", "--think-min-ms", "10", "--think-max-ms", "20"]);
        let manager = config.manager_config();
        assert_eq!(manager.think_time.start, Duration::from_millis(10));
        assert_eq!(manager.think_time.end, Duration::from_millis(20));
        assert_eq!(manager.sprint_time, ManagerConfig::default().sprint_time);

        let instant = ServerConfig::parse_from(["strategy-server", "--instant-reports"]);
        assert!(instant.manager_config().tech_time.is_empty());
    }

    #[test]
    fn without_delays_zeroes_everything() {
        let config = ServerConfig::default().without_delays();
        assert!(config.reply_pacing().is_zero());
        let manager = config.manager_config();
        assert!(manager.think_time.is_empty());
        assert!(manager.research_time.is_empty());
        assert!(manager.pitch_time.is_empty());
    }
}
