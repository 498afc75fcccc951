//! Shared helpers for tests that mutate process environment variables.

use std::sync::Mutex;

/// Global mutex to ensure env-mutating tests run sequentially
pub(crate) static TEST_MUTEX: Mutex<()> = Mutex::new(());

/// Helper to safely set environment variables for a test
pub(crate) struct EnvGuard {
    vars_to_restore: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn new() -> Self {
        Self {
            vars_to_restore: Vec::new(),
        }
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) {
        // Store original value for restoration
        let original = std::env::var(key).ok();
        self.vars_to_restore.push((key.to_string(), original));
        unsafe {
            std::env::set_var(key, value);
        }
    }

    pub(crate) fn remove(&mut self, key: &str) {
        // Store original value for restoration
        let original = std::env::var(key).ok();
        self.vars_to_restore.push((key.to_string(), original));
        unsafe {
            std::env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Restore all environment variables
        for (key, original_value) in &self.vars_to_restore {
            unsafe {
                match original_value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
