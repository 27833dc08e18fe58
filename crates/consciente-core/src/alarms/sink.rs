//! Where triggered alarms go.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use tracing::warn;

/// Receives the side effects of a triggered alarm.
///
/// Both calls are fire-and-forget: a sink that cannot play audio or speak
/// logs the failure and carries on.
pub trait NotificationSink {
    /// Play the audible cue and speak `text`.
    fn announce(&mut self, text: &str);

    /// Stop any speech or audio still in flight.
    fn dismiss(&mut self);
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn announce(&mut self, text: &str) {
        (**self).announce(text)
    }

    fn dismiss(&mut self) {
        (**self).dismiss()
    }
}

/// Terminal notifications: rings the bell, prints the announcement and,
/// when configured, speaks it through an external text-to-speech command.
pub struct TerminalSink<W> {
    out: W,
    speech_command: Option<Vec<String>>,
    speaking: Option<Child>,
}

impl TerminalSink<std::io::Stdout> {
    pub fn stdout(speech_command: Option<&str>) -> Self {
        Self::new(std::io::stdout(), speech_command)
    }
}

impl<W: Write> TerminalSink<W> {
    /// `speech_command` is split on whitespace; the announcement is passed
    /// as one extra trailing argument.
    pub fn new(out: W, speech_command: Option<&str>) -> Self {
        let speech_command = speech_command
            .map(|cmd| {
                cmd.split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|parts| !parts.is_empty());
        Self {
            out,
            speech_command,
            speaking: None,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn is_speaking(&mut self) -> bool {
        matches!(
            self.speaking.as_mut().map(|child| child.try_wait()),
            Some(Ok(None))
        )
    }

    fn speak(&mut self, text: &str) {
        let Some(parts) = self.speech_command.clone() else {
            return;
        };
        self.stop_speaking();

        let spawned = Command::new(&parts[0])
            .args(&parts[1..])
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => self.speaking = Some(child),
            Err(e) => warn!(command = %parts[0], error = %e, "failed to start speech command"),
        }
    }

    fn stop_speaking(&mut self) {
        if let Some(mut child) = self.speaking.take() {
            // Already exited is fine.
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl<W: Write> NotificationSink for TerminalSink<W> {
    fn announce(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "\x07🔔 {text}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write alarm notification");
        }
        self.speak(text);
    }

    fn dismiss(&mut self) {
        self.stop_speaking();
    }
}

impl<W> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        if let Some(mut child) = self.speaking.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announce_rings_bell_and_prints_text() {
        let mut sink = TerminalSink::new(Vec::new(), None);
        sink.announce("Atención. Recordatorio del Coach: Caminar");
        sink.dismiss();
        let out = String::from_utf8(sink.output().clone()).unwrap();
        assert!(out.starts_with('\x07'));
        assert!(out.contains("Recordatorio del Coach: Caminar"));
    }

    #[test]
    fn blank_speech_command_is_ignored() {
        let mut sink = TerminalSink::new(Vec::new(), Some("   "));
        assert!(sink.speech_command.is_none());
        sink.announce("hola");
        assert!(!sink.is_speaking());
    }

    #[test]
    fn missing_speech_program_does_not_panic() {
        let mut sink = TerminalSink::new(Vec::new(), Some("definitely-not-a-real-tts-binary -v es"));
        sink.announce("hola");
        assert!(!sink.is_speaking());
        sink.dismiss();
    }

    #[cfg(unix)]
    #[test]
    fn dismiss_kills_the_speech_child() {
        // The announcement text becomes the last argument: `sleep 30`.
        let mut sink = TerminalSink::new(Vec::new(), Some("sleep"));
        sink.announce("30");
        assert!(sink.is_speaking());

        sink.dismiss();
        assert!(!sink.is_speaking());
    }

    #[test]
    fn boxed_sinks_forward() {
        let mut sink: Box<dyn NotificationSink> = Box::new(TerminalSink::new(Vec::new(), None));
        sink.announce("hola");
        sink.dismiss();
    }
}
