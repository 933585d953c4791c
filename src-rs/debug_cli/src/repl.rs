use std::io;

use crate::client::HTTPClient;
use crate::models::{CLIConfig, HistoryEntry};
use crate::render;

pub struct REPL {
    pub config: CLIConfig,
    pub client: HTTPClient,
    pub history: Vec<HistoryEntry>,
}

impl REPL {
    pub fn new(config: CLIConfig, client: HTTPClient) -> Self {
        Self {
            config,
            client,
            history: Vec::new(),
        }
    }

    pub fn run(&mut self) {
        render::banner(&self.config);
        loop {
            render::prompt();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('/') {
                if self.handle_command(&line) {
                    break;
                }
                continue;
            }
            self.handle_command(&format!("/plan {}", line));
        }
    }

    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "extract" => self.with_input(cmd, rest, |repl, text| {
                match repl.client.extract(text) {
                    Ok(resp) => render::tasks(&resp, repl.config.debug),
                    Err(err) => render::error(&err),
                }
            }),
            "plan" => self.with_input(cmd, rest, |repl, text| repl.plan(text)),
            "classify" => self.with_input(cmd, rest, |repl, text| {
                match repl.client.classify(text) {
                    Ok(resp) => render::classification(&resp),
                    Err(err) => render::error(&err),
                }
            }),
            "recipes" => self.with_input(cmd, rest, |repl, text| {
                let (items, conversation) = split_conversation(text);
                match repl.client.recipes(items, conversation) {
                    Ok(resp) => render::recipes(&resp, repl.config.debug),
                    Err(err) => render::error(&err),
                }
            }),
            "reply" => self.with_input(cmd, rest, |repl, text| {
                match repl.client.reply(text) {
                    Ok(resp) => render::reply(&resp),
                    Err(err) => render::error(&err),
                }
            }),
            "debug" => {
                if rest.is_empty() {
                    self.config.debug = !self.config.debug;
                    render::info(&format!("debug: {}", self.config.debug));
                } else if let Some(flag) = parse_on_off(rest) {
                    self.config.debug = flag;
                    render::info(&format!("debug: {}", self.config.debug));
                } else {
                    render::error("invalid debug flag");
                }
            }
            "history" => render::history(&self.history),
            "reset" => {
                self.history.clear();
                render::info("history cleared");
            }
            "config" => render::config(&self.config),
            "base" => {
                if rest.is_empty() {
                    render::info(&format!("base: {}", self.config.base_url));
                } else {
                    self.config.base_url = rest.to_string();
                    self.client = self.connect();
                    render::info("base url updated");
                }
            }
            "token" => {
                if rest.is_empty() {
                    let state = if self.config.token.is_some() { "set" } else { "unset" };
                    render::info(&format!("token: {}", state));
                } else {
                    self.config.token = Some(rest.to_string());
                    self.client = self.connect();
                    render::info("token updated");
                }
            }
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    fn with_input<F>(&mut self, cmd: &str, rest: &str, run: F)
    where
        F: FnOnce(&mut Self, &str),
    {
        if rest.is_empty() {
            render::error(&format!("usage: /{} <text>", cmd));
            return;
        }
        self.history.push(HistoryEntry {
            command: cmd.to_string(),
            input: rest.to_string(),
        });
        run(self, rest);
    }

    fn connect(&self) -> HTTPClient {
        HTTPClient::new(
            &self.config.base_url,
            self.config.token.clone(),
            self.config.timeout_secs,
        )
    }

    fn plan(&mut self, text: &str) {
        match self.client.plan(text) {
            Ok(resp) => render::tasks(&resp, self.config.debug),
            Err(err) => render::error(&err),
        }
    }
}

/// `items | conversation` splits into the ingredient list and meal context.
fn split_conversation(text: &str) -> (&str, Option<String>) {
    match text.split_once('|') {
        Some((items, conversation)) if !conversation.trim().is_empty() => {
            (items.trim(), Some(conversation.trim().to_string()))
        }
        Some((items, _)) => (items.trim(), None),
        None => (text, None),
    }
}

fn parse_on_off(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
