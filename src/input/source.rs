//! Event sources the session can drain.
//!
//! [`QueuedInput`] is what browser listeners push into; [`ScriptedInput`]
//! replays a timed script so the motion controller can run without a
//! browser.

use std::collections::VecDeque;

use web_time::Duration;

use super::event::InputEvent;
use crate::error::VantageError;

/// Anything that yields input events.
pub trait InputSource {
    /// Next event due at `elapsed` since the session started, if any.
    fn poll_event(&mut self, elapsed: Duration) -> Option<InputEvent>;
}

/// FIFO of events delivered as soon as they are polled.
#[derive(Debug, Default)]
pub struct QueuedInput {
    events: VecDeque<InputEvent>,
}

impl QueuedInput {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Number of undelivered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether every event has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for QueuedInput {
    fn poll_event(&mut self, _elapsed: Duration) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Events with timestamps, released once their time has come.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<(Duration, InputEvent)>,
}

impl ScriptedInput {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `at` after the session start. Events keep their
    /// insertion order when timestamps tie.
    #[must_use]
    pub fn at(mut self, at: Duration, event: InputEvent) -> Self {
        let idx = self.events.partition_point(|(t, _)| *t <= at);
        self.events.insert(idx, (at, event));
        self
    }

    /// Parse a replay script.
    ///
    /// One event per line, `<seconds> <kind> <args...>`; blank lines and
    /// lines starting with `#` are skipped:
    ///
    /// ```text
    /// 0.0 loaded 0 0 0
    /// 0.5 pointer 960 540
    /// 4.5 scroll 300
    /// 6.0 resize 1280 720
    /// ```
    pub fn parse(script: &str) -> Result<Self, VantageError> {
        let mut input = Self::new();
        for (idx, raw) in script.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (at, event) = parse_line(line).map_err(|reason| VantageError::Replay {
                line: idx + 1,
                reason,
            })?;
            input = input.at(at, event);
        }
        Ok(input)
    }

    /// Time of the last scheduled event.
    #[must_use]
    pub fn last_time(&self) -> Option<Duration> {
        self.events.back().map(|(t, _)| *t)
    }

    /// Whether every event has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self, elapsed: Duration) -> Option<InputEvent> {
        match self.events.front() {
            Some((at, _)) if *at <= elapsed => self.events.pop_front().map(|(_, e)| e),
            _ => None,
        }
    }
}

fn parse_line(line: &str) -> Result<(Duration, InputEvent), String> {
    let mut parts = line.split_whitespace();
    let at: f32 = parse_field(parts.next(), "timestamp")?;
    if !(at.is_finite() && at >= 0.0) {
        return Err(format!("timestamp must be non-negative, got {at}"));
    }
    let at = Duration::try_from_secs_f32(at).map_err(|e| format!("timestamp {at}: {e}"))?;
    let kind = parts.next().ok_or("missing event kind")?;
    let event = match kind {
        "scroll" => InputEvent::Scrolled {
            offset: parse_field(parts.next(), "offset")?,
        },
        "pointer" => InputEvent::PointerMoved {
            x: parse_field(parts.next(), "x")?,
            y: parse_field(parts.next(), "y")?,
        },
        "resize" => InputEvent::Resized {
            width: parse_field(parts.next(), "width")?,
            height: parse_field(parts.next(), "height")?,
        },
        "progress" => InputEvent::AssetProgress {
            loaded: parse_field(parts.next(), "loaded")?,
            total: parse_field(parts.next(), "total")?,
        },
        "loaded" => InputEvent::AssetLoaded {
            anchor: [
                parse_field(parts.next(), "anchor x")?,
                parse_field(parts.next(), "anchor y")?,
                parse_field(parts.next(), "anchor z")?,
            ],
        },
        "failed" => {
            let reason = parts.collect::<Vec<_>>().join(" ");
            return Ok((at, InputEvent::AssetFailed { reason }));
        }
        other => return Err(format!("unknown event kind '{other}'")),
    };
    if let Some(extra) = parts.next() {
        return Err(format!("unexpected trailing '{extra}'"));
    }
    Ok((at, event))
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, name: &str) -> Result<T, String> {
    let raw = field.ok_or_else(|| format!("missing {name}"))?;
    raw.parse()
        .map_err(|_| format!("invalid {name} '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut queue = QueuedInput::new();
        queue.push(InputEvent::Scrolled { offset: 1.0 });
        queue.push(InputEvent::Scrolled { offset: 2.0 });
        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.poll_event(Duration::ZERO),
            Some(InputEvent::Scrolled { offset: 1.0 })
        );
        assert_eq!(
            queue.poll_event(Duration::ZERO),
            Some(InputEvent::Scrolled { offset: 2.0 })
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn scripted_events_wait_for_their_time() {
        let mut script = ScriptedInput::new()
            .at(Duration::from_secs(2), InputEvent::Scrolled { offset: 10.0 })
            .at(Duration::from_secs(1), InputEvent::PointerMoved { x: 1.0, y: 2.0 });

        assert_eq!(script.poll_event(Duration::from_millis(500)), None);
        assert_eq!(
            script.poll_event(Duration::from_secs(1)),
            Some(InputEvent::PointerMoved { x: 1.0, y: 2.0 })
        );
        assert_eq!(script.poll_event(Duration::from_secs(1)), None);
        assert_eq!(
            script.poll_event(Duration::from_secs(3)),
            Some(InputEvent::Scrolled { offset: 10.0 })
        );
        assert!(script.is_empty());
    }

    #[test]
    fn parses_every_event_kind() {
        let script = "\
# intro
0 loaded 0 0 0
0.25 progress 512 1024
0.5 pointer 960 540
4.5 scroll 300
6 resize 1280 720
7 failed network unreachable
";
        let mut input = ScriptedInput::parse(script).unwrap();
        assert_eq!(input.last_time(), Some(Duration::from_secs(7)));

        let mut kinds = Vec::new();
        while let Some(event) = input.poll_event(Duration::from_secs(10)) {
            if let InputEvent::AssetFailed { reason } = &event {
                assert_eq!(reason, "network unreachable");
            }
            kinds.push(event.kind());
        }
        assert_eq!(
            kinds,
            ["loaded", "progress", "pointer", "scroll", "resize", "failed"]
        );
    }

    #[test]
    fn reports_the_bad_line() {
        let err = ScriptedInput::parse("0 loaded 0 0 0\n\n1 scroll far\n").unwrap_err();
        match err {
            VantageError::Replay { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("offset"), "{reason}");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn rejects_unknown_kinds_and_trailing_fields() {
        assert!(ScriptedInput::parse("0 wiggle").is_err());
        assert!(ScriptedInput::parse("0 scroll 1 2").is_err());
        assert!(ScriptedInput::parse("-1 scroll 1").is_err());
        assert!(ScriptedInput::parse("1e30 scroll 5").is_err());
    }
}
