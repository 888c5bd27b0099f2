//! Scripted prompt answers for non-interactive runs.
//!
//! When `ADOPTION_CORE_SCRIPT_INPUTS` is set, wizard prompts consume entries
//! from it instead of the terminal. Entries are separated by `;` or newlines;
//! tokens beginning with `:` carry navigation meaning (`:next`, `:previous`,
//! `:keep`, `:accept`, `:submit`, `:cancel`).

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

pub const SCRIPT_INPUTS_VAR: &str = "ADOPTION_CORE_SCRIPT_INPUTS";

struct InputQueue {
    enabled: bool,
    entries: VecDeque<String>,
}

impl InputQueue {
    fn from_env() -> Self {
        match env::var(SCRIPT_INPUTS_VAR) {
            Ok(raw) => Self {
                enabled: true,
                entries: parse_entries(&raw),
            },
            Err(_) => Self {
                enabled: false,
                entries: VecDeque::new(),
            },
        }
    }
}

static INPUTS: Lazy<Mutex<InputQueue>> = Lazy::new(|| Mutex::new(InputQueue::from_env()));

pub fn is_enabled() -> bool {
    INPUTS.lock().expect("script input queue poisoned").enabled
}

/// Next scripted entry, or `None` when scripting is inactive.
///
/// An exhausted queue yields `:cancel` so a runaway wizard ends instead of
/// looping.
pub fn next_input() -> Option<String> {
    let mut queue = INPUTS.lock().expect("script input queue poisoned");
    if !queue.enabled {
        return None;
    }
    Some(
        queue
            .entries
            .pop_front()
            .unwrap_or_else(|| ":cancel".to_string()),
    )
}

fn parse_entries(raw: &str) -> VecDeque<String> {
    raw.split(['\n', ';'])
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_split_on_newlines_and_semicolons() {
        let entries = parse_entries("Jordan;Reyes\n:next; ;jordan@example.com");
        assert_eq!(
            entries,
            VecDeque::from([
                "Jordan".to_string(),
                "Reyes".to_string(),
                ":next".to_string(),
                "jordan@example.com".to_string(),
            ])
        );
    }
}
