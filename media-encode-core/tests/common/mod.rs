// media-encode-core/tests/common/mod.rs
//
// Mock spawner shared by the batch integration tests. It never launches a
// process: a "successful" run writes a fabricated encode into the output path
// it was given, a failing run writes nothing and reports a non-zero status.

#![allow(dead_code)]

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use media_encode_core::error::{CoreResult, command_start_error};
use media_encode_core::external::{FfmpegOutputHandler, FfmpegProcess, FfmpegSpawner};
use std::cell::RefCell;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

/// Prefix written in front of the source bytes by a mock encode.
pub const ENCODED_MARKER: &[u8] = b"encoded:";

pub struct MockFfmpegProcess {
    events: Vec<FfmpegEvent>,
    exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn run_to_completion(&mut self, output: &mut FfmpegOutputHandler) -> CoreResult<ExitStatus> {
        for event in self.events.drain(..) {
            output.handle_event(event)?;
        }
        Ok(self.exit_status)
    }
}

/// One recorded spawn.
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub args: Vec<OsString>,
    pub input: PathBuf,
    pub output: PathBuf,
}

enum Outcome {
    ExitCode(i32),
    SpawnError,
}

#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    failures: Rc<RefCell<Vec<(String, Outcome)>>>,
    received_calls: Rc<RefCell<Vec<ReceivedCall>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Inputs whose path contains `pattern` exit with `exit_code`.
    pub fn fail_when_input_contains(&self, pattern: &str, exit_code: i32) {
        self.failures
            .borrow_mut()
            .push((pattern.to_string(), Outcome::ExitCode(exit_code)));
    }

    /// Inputs whose path contains `pattern` cannot be spawned at all.
    pub fn spawn_error_when_input_contains(&self, pattern: &str) {
        self.failures
            .borrow_mut()
            .push((pattern.to_string(), Outcome::SpawnError));
    }

    pub fn get_received_calls(&self) -> Vec<ReceivedCall> {
        self.received_calls.borrow().clone()
    }

    pub fn converted_inputs(&self) -> Vec<PathBuf> {
        self.received_calls
            .borrow()
            .iter()
            .map(|call| call.input.clone())
            .collect()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<OsString> = cmd.as_inner().get_args().map(OsString::from).collect();
        let input = args
            .windows(2)
            .find(|w| w[0] == "-i")
            .map(|w| PathBuf::from(&w[1]))
            .expect("mock: command has no -i argument");
        let output = PathBuf::from(args.last().expect("mock: command has no arguments"));

        self.received_calls.borrow_mut().push(ReceivedCall {
            args,
            input: input.clone(),
            output: output.clone(),
        });

        let input_bytes = input.as_os_str().as_encoded_bytes();
        let outcome = self
            .failures
            .borrow()
            .iter()
            .find(|(pattern, _)| {
                input_bytes
                    .windows(pattern.len())
                    .any(|w| w == pattern.as_bytes())
            })
            .map(|(_, outcome)| match outcome {
                Outcome::ExitCode(code) => Outcome::ExitCode(*code),
                Outcome::SpawnError => Outcome::SpawnError,
            });

        match outcome {
            Some(Outcome::SpawnError) => Err(command_start_error(
                "ffmpeg (mock)",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock spawn denied"),
            )),
            Some(Outcome::ExitCode(code)) => Ok(MockFfmpegProcess {
                events: vec![FfmpegEvent::Error("mock encoder failure".to_string())],
                exit_status: ExitStatus::from_raw(code << 8),
            }),
            None => {
                write_fake_encode(&input, &output);
                Ok(MockFfmpegProcess {
                    events: Vec::new(),
                    exit_status: ExitStatus::from_raw(0),
                })
            }
        }
    }
}

fn write_fake_encode(input: &Path, output: &Path) {
    let source = fs::read(input).expect("mock: cannot read input");
    let mut file = File::create(output).expect("mock: cannot create output");
    file.write_all(ENCODED_MARKER).unwrap();
    file.write_all(&source).unwrap();
}

/// Creates `relative` under `root` (with parents) holding `content`.
pub fn create_file(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(&path).unwrap().write_all(content).unwrap();
    path
}

/// Relative paths of every regular file under `root`, sorted.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    files.sort();
    files
}
