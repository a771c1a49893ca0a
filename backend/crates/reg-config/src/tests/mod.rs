
use crate::CONFIG_DIR_ENV;

use tempfile::TempDir;

/// Sets or clears environment variables and puts the previous values back on
/// drop. Tests touching the environment must also be `#[serial]`.
#[derive(Default)]
pub(crate) struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(mut self, key: &'static str, value: &str) -> Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: env tests run under #[serial]
        unsafe { std::env::set_var(key, value) };
        self
    }

    pub(crate) fn remove(mut self, key: &'static str) -> Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: env tests run under #[serial]
        unsafe { std::env::remove_var(key) };
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Newest first so a key touched twice ends at its original value
        for (key, original) in self.saved.drain(..).rev() {
            unsafe {
                match original {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

/// Fresh config dir, selected through the config dir env var
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::new().set(CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}
