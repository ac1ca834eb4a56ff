#![allow(dead_code)]

use async_trait::async_trait;
use staging_migrator::{CommandOutput, InvokeError, TrackerCli};
use std::path::PathBuf;
use std::sync::Mutex;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

type Responder = Box<dyn Fn(&[String]) -> CommandOutput + Send + Sync>;

/// Records tracker invocations and answers them from a closure.
pub struct FakeTracker {
    responder: Responder,
    calls: Mutex<Vec<Vec<String>>>,
    bodies: Mutex<Vec<String>>,
}

impl FakeTracker {
    pub fn new(responder: impl Fn(&[String]) -> CommandOutput + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
            bodies: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(|_| CommandOutput::ok("https://github.com/acme/staging/issues/1\n"))
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }

    pub fn calls_to(&self, group: &str, verb: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|args| args.len() >= 2 && args[0] == group && args[1] == verb)
            .collect()
    }
}

#[async_trait]
impl TrackerCli for FakeTracker {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, InvokeError> {
        if let Some(pos) = args.iter().position(|a| a == "--body-file") {
            let body = std::fs::read_to_string(&args[pos + 1]).unwrap_or_default();
            self.bodies.lock().unwrap().push(body);
        }
        self.calls.lock().unwrap().push(args.to_vec());
        Ok((self.responder)(args))
    }
}

pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|pos| args.get(pos + 1))
        .map(String::as_str)
}

pub fn flag_values<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
    args.windows(2)
        .filter(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
        .collect()
}
