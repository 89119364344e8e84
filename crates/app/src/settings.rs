//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` (see `settings.example.toml`), then overridden by
//! `SPLITSYNC__<SECTION>__<KEY>` environment variables and finally by CLI flags.
use chrono::TimeDelta;
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use engine::{Currency, GroupDeletePolicy, ReminderPolicy};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
/// Ten years; keeps every reminder due date far inside chrono's range.
const MAX_REMINDER_DUE_DAYS: u32 = 3650;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Engine {
    pub currency: Currency,
    /// Days between an expense and the due date of its reminders.
    pub reminder_due_days: u32,
    pub group_delete: GroupDeletePolicy,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            reminder_due_days: 7,
            group_delete: GroupDeletePolicy::default(),
        }
    }
}

impl Engine {
    pub fn reminder_policy(&self) -> Result<ReminderPolicy, ConfigError> {
        if self.reminder_due_days > MAX_REMINDER_DUE_DAYS {
            return Err(ConfigError::Message(format!(
                "engine.reminder_due_days must be <= {MAX_REMINDER_DUE_DAYS}, got {}",
                self.reminder_due_days
            )));
        }
        Ok(ReminderPolicy {
            due_after: TimeDelta::days(i64::from(self.reminder_due_days)),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub engine: Engine,
}

#[derive(Debug, Parser)]
#[command(name = "splitsync", about = "Expense splitting service")]
struct Args {
    /// Optional settings file path (TOML, extension may be omitted).
    #[arg(long)]
    config: Option<String>,
    /// Override bind address (e.g. 0.0.0.0).
    #[arg(long)]
    bind: Option<String>,
    /// Override listening port.
    #[arg(long, env = "SPLITSYNC_PORT")]
    port: Option<u16>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(config_path).required(args.config.is_some()))
            .add_source(Environment::with_prefix("SPLITSYNC").separator("__"))
            .build()?
            .try_deserialize()?;

        if let Some(bind) = args.bind {
            settings.server.bind = bind;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }
        settings.engine.reminder_policy()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_due_days_are_bounded() {
        let engine = Engine::default();
        assert_eq!(engine.reminder_policy().unwrap(), ReminderPolicy::default());

        let engine = Engine {
            reminder_due_days: u32::MAX,
            ..Engine::default()
        };
        assert!(engine.reminder_policy().is_err());
    }
}
