use std::any::Any;
use std::panic;

/// Installs a panic hook that records every panic, including [`Outcome`](crate::Outcome) contract violations, as a
/// `tracing` error event before delegating to the previously installed hook.
pub fn install_panic_handler() {
  let previous = panic::take_hook();
  panic::set_hook(Box::new(move |info| {
    let payload = payload_str(info.payload());
    let location = info.location().map(|l| l.to_string()).unwrap_or_default();
    tracing::error!(payload, %location, "panicked");
    previous(info);
  }));
}

fn payload_str(payload: &(dyn Any + Send)) -> &str {
  payload.downcast_ref::<String>().map(String::as_str)
    .or_else(|| payload.downcast_ref::<&str>().copied())
    .unwrap_or("<non-string panic payload>")
}


#[cfg(test)]
mod tests {
  use std::io;
  use std::sync::{Arc, Mutex};

  use super::*;

  #[derive(Clone, Default)]
  struct Captured(Arc<Mutex<Vec<u8>>>);

  impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> { Ok(()) }
  }

  #[test]
  fn payload_is_extracted_from_strings() {
    assert_eq!(payload_str(&String::from("owned")), "owned");
    assert_eq!(payload_str(&"static"), "static");
    assert_eq!(payload_str(&42u8), "<non-string panic payload>");
  }

  #[test]
  fn panic_is_logged_with_payload_field() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_writer(move || writer.clone())
      .with_ansi(false)
      .finish();

    install_panic_handler();
    let result = tracing::subscriber::with_default(subscriber, || {
      panic::catch_unwind(|| panic!("boom-payload"))
    });
    assert!(result.is_err());

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("panicked"), "{output}");
    assert!(output.contains("payload=\"boom-payload\""), "{output}");
  }
}
