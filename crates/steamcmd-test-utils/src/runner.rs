//! Scripted command runner

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use steamcmd_core::{CommandRunner, Result, ToolOutput};

/// One recorded tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub bin_dir: PathBuf,
    pub commands: Vec<String>,
}

/// A [`CommandRunner`] that replays canned outputs in order and records
/// every invocation it sees. Panics when invoked with no output queued —
/// in a test that is always a bug in the test.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<ToolOutput>>,
    invocations: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given stdout and exit code.
    pub fn push_output(&self, stdout: &str, exit_code: i32) {
        self.responses
            .lock()
            .unwrap()
            .push_back(ToolOutput::new(stdout, "", exit_code));
    }

    /// Builder-style [`Self::push_output`].
    pub fn with_output(self, stdout: &str, exit_code: i32) -> Self {
        self.push_output(stdout, exit_code);
        self
    }

    /// Everything this runner has been asked to execute, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, bin_dir: &Path, commands: &[String]) -> Result<ToolOutput> {
        self.invocations.lock().unwrap().push(Invocation {
            bin_dir: bin_dir.to_path_buf(),
            commands: commands.to_vec(),
        });
        let output = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedRunner invoked with no queued output");
        Ok(output)
    }
}
