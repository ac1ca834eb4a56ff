//! Fakes shared by unit tests.

use crate::tracker::{CommandOutput, InvokeError, TrackerCli};
use async_trait::async_trait;
use std::sync::Mutex;

type Responder = Box<dyn Fn(&[String]) -> CommandOutput + Send + Sync>;

/// Tracker CLI fake that records every invocation and answers from a closure.
///
/// The contents of any `--body-file` are captured at call time, since the
/// file is removed once the call returns.
pub(crate) struct RecordingCli {
    responder: Responder,
    calls: Mutex<Vec<Vec<String>>>,
    bodies: Mutex<Vec<String>>,
}

impl RecordingCli {
    pub(crate) fn new(
        responder: impl Fn(&[String]) -> CommandOutput + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
            bodies: Mutex::new(Vec::new()),
        }
    }

    /// Every call succeeds and prints a fake issue URL.
    pub(crate) fn succeeding() -> Self {
        Self::new(|_| CommandOutput::ok("https://github.com/acme/staging/issues/1\n"))
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }

    /// Calls whose first two arguments are `group verb`.
    pub(crate) fn calls_to(&self, group: &str, verb: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|args| args.len() >= 2 && args[0] == group && args[1] == verb)
            .collect()
    }
}

#[async_trait]
impl TrackerCli for RecordingCli {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, InvokeError> {
        if let Some(pos) = args.iter().position(|a| a == "--body-file") {
            let body = std::fs::read_to_string(&args[pos + 1]).unwrap_or_default();
            self.bodies.lock().unwrap().push(body);
        }
        self.calls.lock().unwrap().push(args.to_vec());
        Ok((self.responder)(args))
    }
}

/// Value following `flag` in an argument list.
pub(crate) fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|pos| args.get(pos + 1))
        .map(String::as_str)
}
