use std::io::{self, Write};

use crate::models::{
    CLIConfig, ClassifyResponse, HistoryEntry, RecipeResponse, ReplyResponse, TasksResponse,
};

pub fn banner(cfg: &CLIConfig) {
    println!("Homeplan Debug CLI");
    println!("API: {}", cfg.base_url);
    println!("Type /help for commands. A plain line is planned as a message.");
}

pub fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                       Show commands");
    println!("  /exit | /quit               Exit");
    println!("  /extract <message>          Extract tasks");
    println!("  /plan <message>             Extract and classify tasks");
    println!("  /classify <task>            Priority, responsibility and category");
    println!("  /recipes <items> [| text]   Three recipes, meal type from text");
    println!("  /reply <message>            Conversational reply");
    println!("  /debug [on|off]             Toggle debug output");
    println!("  /history                    Show input history");
    println!("  /reset                      Clear input history");
    println!("  /config                     Show current config");
    println!("  /base <url>                 Update base URL");
    println!("  /token <token>              Update bearer token");
}

pub fn tasks(resp: &TasksResponse, debug: bool) {
    if let Some(err) = &resp.error {
        println!("error: {}", err);
        return;
    }
    if resp.tasks.is_empty() {
        println!("no tasks");
        return;
    }
    for task in &resp.tasks {
        println!("- {} @ {} on {}", task.task_name, task.time, task.date);
        if let (Some(level), Some(score)) = (&task.priority_level, task.priority_score) {
            println!("    {} ({:.1})", level, score);
        }
        if let Some(who) = &task.responsibility {
            println!("    responsibility: {}", who);
        }
        if let Some(category) = &task.category {
            println!("    category: {}", category);
        }
    }
    if debug {
        println!("success: {:?}  count: {}", resp.success, resp.tasks.len());
    }
}

pub fn classification(resp: &ClassifyResponse) {
    println!("priority: {} ({:.1})", resp.priority_level, resp.priority_score);
    println!("responsibility: {}", resp.responsibility);
    println!("category: {}", resp.category);
}

pub fn recipes(resp: &RecipeResponse, debug: bool) {
    println!("{} for {}", resp.meal_type, resp.items_available);
    for (name, body) in resp.recipy_name.iter().zip(resp.recipy.iter()) {
        println!();
        println!("{}", name);
        println!("  {}", body);
    }
    println!();
    println!("also needed: {}", resp.items_needed);
    if debug {
        println!("generated: {} {}", resp.date, resp.time);
    }
}

pub fn reply(resp: &ReplyResponse) {
    match &resp.error {
        Some(err) if !resp.success => println!("error: {}", err),
        _ => println!("assistant> {}", resp.output),
    }
}

pub fn config(cfg: &CLIConfig) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    println!("  debug: {}", cfg.debug);
    println!("  timeout: {}s", cfg.timeout_secs);
    println!("  token: {}", if cfg.token.is_some() { "set" } else { "unset" });
}

pub fn history(items: &[HistoryEntry]) {
    if items.is_empty() {
        println!("no history");
        return;
    }
    for entry in items {
        println!("/{} {}", entry.command, entry.input);
    }
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}
