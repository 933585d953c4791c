use std::env;

use crate::models::CLIConfig;

const DEFAULT_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings from `HOMEPLAN_URL`, `HOMEPLAN_TOKEN`, `HOMEPLAN_DEBUG` and
/// `HOMEPLAN_CLI_TIMEOUT`, then overridden by command-line flags.
pub fn parse_config() -> CLIConfig {
    let cfg = CLIConfig {
        base_url: env_string("HOMEPLAN_URL").unwrap_or_else(|| DEFAULT_URL.to_string()),
        debug: env_string("HOMEPLAN_DEBUG")
            .and_then(|raw| raw.parse::<bool>().ok())
            .unwrap_or(false),
        token: env_string("HOMEPLAN_TOKEN"),
        timeout_secs: env_string("HOMEPLAN_CLI_TIMEOUT")
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    };
    apply_args(cfg, env::args().skip(1))
}

fn apply_args<I>(mut cfg: CLIConfig, args: I) -> CLIConfig
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--base" => {
                if let Some(url) = args.next() {
                    cfg.base_url = url;
                }
            }
            "--token" => cfg.token = args.next(),
            "--timeout" => {
                if let Some(secs) = args.next().and_then(|raw| raw.parse::<u64>().ok()) {
                    cfg.timeout_secs = secs;
                }
            }
            // `--debug` alone turns it on; an explicit boolean may follow.
            "--debug" => {
                let explicit = args.peek().and_then(|next| next.parse::<bool>().ok());
                if explicit.is_some() {
                    args.next();
                }
                cfg.debug = explicit.unwrap_or(true);
            }
            other => eprintln!("ignoring unknown argument: {}", other),
        }
    }
    cfg
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
