use std::sync::Arc;

use rosterwatch_core::app_state::AppState;
use rosterwatch_core::config::{
    load_snapshot, resolve_snapshot_path, save_snapshot, store_client_config,
};
use rosterwatch_core::rainbow::{self, RainbowParam};
use rosterwatch_core::skin;
use rosterwatch_core::status::{render_online, render_player};
use rosterwatch_core::vote;
use rosterwatch_core::{Category, MessageSink};
use rosterwatch_types::formatting::{framed, row};
use tokio::sync::RwLock;

/// Print and clear everything commands pushed to the message sink.
pub async fn flush_messages(state: Arc<RwLock<AppState>>) {
    let lines = state.write().await.messages.drain();
    for line in lines {
        println!("{line}");
    }
}

pub async fn add_temp(category: Category, name: &str, state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let s = &mut *s;
    if let Err(e) = s.overlay.add(category, name, &mut s.messages) {
        tracing::debug!(error = %e, "Ignored temp add");
    }
}

pub async fn del_temp(category: Category, name: &str, state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let s = &mut *s;
    // Not-found is already reported through the sink
    if let Err(e) = s.overlay.remove(category, name, false, &mut s.messages) {
        tracing::debug!(error = %e, "Temp remove had no effect");
    }
}

pub async fn list_temp(state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let entries = s.overlay.entries();
    if entries.is_empty() {
        s.messages.push("No temporary entries".to_string());
        return;
    }
    let rows = entries
        .iter()
        .map(|e| row(&format!("{}: {}", e.category, e.name)))
        .collect();
    s.messages.extend(framed("Temp Lists", rows));
}

pub async fn clear_temp(state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let dropped = s.overlay.clear();
    s.messages.push(format!("Cleared {dropped} temporary entries"));
}

pub async fn online_info(compact: bool, state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let counts = s.status().online_info();
    s.messages.extend(render_online(&counts, compact));
}

pub async fn player_info(name: &str, state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let lines = match s.status().player_info(name) {
        Ok(detail) => render_player(&detail),
        Err(e) => vec![e.to_string()],
    };
    s.messages.extend(lines);
}

pub async fn votekick(name: &str, reason: &str, state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let line = match vote::votekick(&s.roster, name, reason) {
        Ok(request) => format!(
            "Called {} vote on {} (id {})",
            request.kind, name, request.target_id
        ),
        Err(e) => e.to_string(),
    };
    s.messages.push(line);
}

pub async fn save_skin(state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let line = match skin::save_skin(&mut s.config) {
        Ok(character) => skin::saved_message(character),
        Err(e) => e.to_string(),
    };
    s.messages.push(line);
}

pub async fn restore_skin(state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let line = match skin::restore_skin(&mut s.config) {
        Ok(character) => skin::restored_message(character),
        Err(e) => e.to_string(),
    };
    s.messages.push(line);
}

/// Set a rainbow parameter, or show its current value when none is given.
pub async fn rainbow_param(
    param: RainbowParam,
    value: Option<i32>,
    dummy: Option<i32>,
    state: Arc<RwLock<AppState>>,
) {
    let mut s = state.write().await;
    match value {
        Some(value) => rainbow::set(&mut s.config, param, value, dummy),
        None => {
            let current = rainbow::get(&s.config, param);
            s.messages.push(current.to_string());
        }
    }
}

pub async fn load_roster(path: &str, state: Arc<RwLock<AppState>>) {
    let resolved = resolve_snapshot_path(path);
    let mut s = state.write().await;
    match load_snapshot(&resolved) {
        Ok(snapshot) => {
            let count = snapshot.slots.len();
            s.set_roster(snapshot);
            s.messages.push(format!("Loaded {count} players"));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load roster");
            s.messages.push(e.to_string());
        }
    }
}

pub async fn save_roster(path: &str, state: Arc<RwLock<AppState>>) {
    let target = std::path::Path::new(path);
    let mut s = state.write().await;
    let line = match save_snapshot(target, &s.roster) {
        Ok(()) => format!("Saved {} players to {}", s.roster.slots.len(), target.display()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to save roster");
            e.to_string()
        }
    };
    s.messages.push(line);
}

pub async fn save_config(state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let line = match store_client_config(&s.config) {
        Ok(()) => "Config saved".to_string(),
        Err(e) => e.to_string(),
    };
    s.messages.push(line);
}

/// Show rainbow settings as replayable command lines.
pub async fn rainbow_config(state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    let lines = rainbow::config_lines(&s.config.rainbow);
    s.messages.extend(lines);
}

pub fn exit() {
    println!("quitting...");
}
