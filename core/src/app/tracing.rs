#![allow(dead_code)]

use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::Outcome;

/// Builds the global `tracing` subscriber for an application.
///
/// Console output goes to stderr, filtered by `CONSOLE_LOG` unless a filter is given. With the `app_tracing_file`
/// feature and a log file path, a second non-blocking layer writes to that file, filtered by `FILE_LOG`.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  default_directive: Option<String>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }
  /// Directive used when `CONSOLE_LOG`/`FILE_LOG` are unset or invalid, e.g. `"info"`.
  pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
    self.default_directive = Some(directive.into());
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  pub fn build(self) -> AppTracing {
    let default_directive = self.default_directive.as_deref().unwrap_or("warn");
    let filter = |env: &str| EnvFilter::try_from_env(env).unwrap_or_else(|_| EnvFilter::new(default_directive));

    let console_filter = self.console_filter.unwrap_or_else(|| filter("CONSOLE_LOG"));
    let file = self.log_file_path.as_deref().map(|p| (p, self.file_filter.unwrap_or_else(|| filter("FILE_LOG"))));
    AppTracing::new(console_filter, file)
  }
}

/// Keeps the file writer alive; drop it last to flush buffered log lines.
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(&Path, EnvFilter)>) -> Self {
    let layered = tracing_subscriber::registry();
    let layered = layered.with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
    );

    let Some((file_path, filter)) = file else {
      layered.init();
      return Self { _file_tracing: FileTracing::default() };
    };

    #[cfg(feature = "app_tracing_file")] {
      match create_log_file(file_path).into_result() {
        Err(e) => {
          layered.init();
          tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
          Self { _file_tracing: FileTracing::default() }
        }
        Ok(log_file) => {
          let (non_blocking, guard) = tracing_appender::non_blocking(BufWriter::new(log_file));
          let layered = layered.with(
            tracing_subscriber::fmt::layer()
              .with_writer(non_blocking)
              .with_ansi(false)
              .with_filter(filter)
          );
          layered.init();
          Self { _file_tracing: FileTracing(Some(guard)) }
        }
      }
    }
    #[cfg(not(feature = "app_tracing_file"))] {
      let _ = filter;
      layered.init();
      tracing::warn!("Cannot log to file '{}'; built without the `app_tracing_file` feature", file_path.display());
      Self { _file_tracing: FileTracing::default() }
    }
  }
}

fn create_log_file(file_path: &Path) -> Outcome<File, io::Error> {
  if let Some(parent) = file_path.parent() {
    crate::propagate!(Outcome::from(create_dir_all(parent)));
  }
  File::create(file_path).into()
}
