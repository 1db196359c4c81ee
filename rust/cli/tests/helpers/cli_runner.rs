use std::time::{Duration, Instant};

use drawodds_cli::run;

const CONFIG_VARS: &[&str] = &[
    "DRAWODDS_CONFIG",
    "DRAWODDS_DECK_SIZE",
    "DRAWODDS_HAND_SIZE",
    "DRAWODDS_SERIES_MAX",
];

#[derive(Debug, Default)]
pub struct CliRunner {
    env: Vec<(String, String)>,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

#[allow(dead_code)]
impl CliResult {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, self.stdout))
    }
}

/// Clears every drawodds variable, applies the overrides and restores the
/// previous values on drop. Callers must hold the `serial` lock.
struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(String, String)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            if !CONFIG_VARS.contains(&key.as_str()) {
                restores.push((key.clone(), std::env::var(key).ok()));
            }
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

impl CliRunner {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.env.push((key.to_string(), value.as_ref().to_string()));
        self
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        let _guard = EnvGuard::apply(&self.env);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv: Vec<&str> = std::iter::once("drawodds").chain(args.iter().copied()).collect();
        let start = Instant::now();
        let code = run(argv, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
            duration: start.elapsed(),
        }
    }
}
