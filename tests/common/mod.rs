//! Common test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use toolbelt::keypad::{Key, KeypadState};
use toolbelt::{RateTable, ToolbeltServerHandler};

/// Create a test handler with a to-do file in a fresh temporary directory
pub fn get_test_handler() -> (ToolbeltServerHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let handler =
        ToolbeltServerHandler::new(dir.path().join("todo_list.txt"), RateTable::default())
            .unwrap();
    (handler, dir)
}

/// Path of the to-do file used by `get_test_handler`
pub fn todo_path(dir: &TempDir) -> PathBuf {
    dir.path().join("todo_list.txt")
}

pub fn read_todo_file(dir: &TempDir) -> String {
    fs::read_to_string(todo_path(dir)).unwrap_or_default()
}

/// Press whitespace-separated keys, expanding digit runs like `12.5`
pub fn press(state: &mut KeypadState, input: &str) {
    for token in input.split_whitespace() {
        let keys = Key::parse_number_run(token).unwrap_or_else(|| vec![token.parse().unwrap()]);
        state.press_all(keys);
    }
}
