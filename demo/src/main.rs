use std::error::Error;

use tracing::{debug, info, warn};

use outcome_core::app::env;
use outcome_core::app::panic_handler::install_panic_handler;
use outcome_core::app::tracing::AppTracingBuilder;
use outcome_core::OutcomeInstrumentExt;

use crate::config::Config;
use crate::input::summarize;

mod config;
mod input;

fn main() -> Result<(), Box<dyn Error>> {
  let dotenv = env::load_dotenv_into_env();
  let config = Config::from_env().into_result()?;
  let _tracing = AppTracingBuilder::default()
    .with_default_directive("info")
    .with_log_file_path_opt(config.log_file.clone())
    .build();
  install_panic_handler();
  if let Some(cause) = dotenv.failure() {
    warn!(%cause, "failed to load `.env` file");
  }
  debug!(?config, "loaded configuration");

  let Some(raw) = config.input_or_args(std::env::args().skip(1)) else {
    return Err("no input; pass numbers as arguments or set `OUTCOME_DEMO_INPUT`".into());
  };

  let summary = summarize(&raw, config.max_magnitude)
    .warn_failure("summarizing input")
    .into_result()?;
  info!(count = summary.count, sum = summary.sum, "summarized input");

  println!("count: {}", summary.count);
  println!("sum:   {}", summary.sum);
  println!("min:   {}", summary.min);
  println!("max:   {}", summary.max);
  println!("mean:  {:.3}", summary.mean());
  Ok(())
}
