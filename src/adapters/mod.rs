// Adapters layer: terminal I/O behind the Notifier / AnswerSource ports.

#[cfg(feature = "cli")]
pub mod terminal;
