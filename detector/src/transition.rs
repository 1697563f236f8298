//! Frame-accurate measurement of screen transitions.
//!
//! A transition is a selection moving between menu items, a new screen
//! sliding in, an EPG filling up, and so on. To stay frame-accurate nothing
//! expensive happens per frame: each frame is only diffed against its
//! predecessor (or against the frame from before the key-press).

use std::fmt;

use transition_common::Frame;

use crate::diagnostics::DiagnosticsSink;
use crate::diff::changed;
use crate::error::TransitionError;
use crate::request::TransitionRequest;
use crate::result::{TransitionResult, TransitionStatus};
use crate::source::FrameSource;
use crate::trigger::{Actuator, TriggerResult};

/// Non-terminal states of the measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the screen to differ from the reference frame.
    AwaitStart,
    /// Waiting for the screen to stay still for the stable duration.
    AwaitStability,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::AwaitStart => "AWAIT_START",
            Phase::AwaitStability => "AWAIT_STABILITY",
        })
    }
}

/// One measurement over a frame stream.
///
/// Owns the stream cursor for its lifetime: frames are pulled strictly in
/// order and never revisited. The expiry time is fixed by whichever phase
/// starts first and shared by both phases.
pub struct Transition<'a, S: ?Sized, D: ?Sized> {
    request: &'a TransitionRequest,
    frames: &'a mut S,
    sink: &'a mut D,
    expiry_time: Option<f64>,
    frame_size: Option<(u32, u32)>,
}

impl<'a, S, D> Transition<'a, S, D>
where
    S: FrameSource + ?Sized,
    D: DiagnosticsSink + ?Sized,
{
    pub fn new(request: &'a TransitionRequest, frames: &'a mut S, sink: &'a mut D) -> Self {
        Self {
            request,
            frames,
            sink,
            expiry_time: None,
            frame_size: None,
        }
    }

    /// Wait for the screen to start changing after `press`, then for it to
    /// stop changing.
    pub fn wait(&mut self, press: &TriggerResult) -> Result<TransitionResult, TransitionError> {
        self.check_frame(&press.reference_frame)?;
        let expiry = press.completion_time + self.request.timeout_secs();
        self.expiry_time = Some(expiry);

        let first_changed = loop {
            let f = self.pull(Phase::AwaitStart)?;
            if f.time < press.completion_time {
                // Still in flight in the capture pipeline when the press
                // completed.
                continue;
            }
            if changed(&press.reference_frame, &f, self.request.area()) {
                self.debug(&f, "Animation started");
                break f;
            }
            self.debug(&f, "No change");
            if f.time >= expiry {
                self.debug(
                    &f,
                    &format!(
                        "Transition didn't start within {} seconds of pressing {}",
                        self.request.timeout_secs(),
                        press.action
                    ),
                );
                return Ok(TransitionResult::new(
                    f,
                    TransitionStatus::StartTimeout,
                    Some(press.completion_time),
                    None,
                    None,
                ));
            }
        };

        let result = self.wait_for_transition_to_end(Some(first_changed))?;
        Ok(result.with_press_time(press.completion_time))
    }

    /// Wait for the screen to stop changing.
    ///
    /// `initial_frame` is the frame at which the transition started; if
    /// `None`, the next frame from the stream is used. Unless [`wait`] already
    /// set one, the expiry time is `timeout_secs` after the initial frame.
    ///
    /// [`wait`]: Transition::wait
    pub fn wait_for_transition_to_end(
        &mut self,
        initial_frame: Option<Frame>,
    ) -> Result<TransitionResult, TransitionError> {
        let initial = match initial_frame {
            Some(f) => {
                self.check_frame(&f)?;
                f
            }
            None => self.pull(Phase::AwaitStability)?,
        };
        let timeout_secs = self.request.timeout_secs();
        let expiry = *self.expiry_time.get_or_insert(initial.time + timeout_secs);
        let stable_secs = self.request.stable_secs();

        let mut first_stable = initial.clone();
        let mut prev = initial.clone();
        loop {
            let f = self.pull(Phase::AwaitStability)?;
            if changed(&prev, &f, self.request.area()) {
                self.debug(&f, "Animation in progress");
                first_stable = f.clone();
            } else {
                self.debug(&f, "No change since previous frame");
            }

            if f.time - first_stable.time >= stable_secs {
                self.debug(
                    &first_stable,
                    &format!(
                        "Transition complete (stable for {stable_secs}s since {:.3}).",
                        first_stable.time
                    ),
                );
                let end_time = first_stable.time;
                return Ok(TransitionResult::new(
                    first_stable,
                    TransitionStatus::Complete,
                    None,
                    Some(initial.time),
                    Some(end_time),
                ));
            }
            if f.time >= expiry {
                self.debug(
                    &f,
                    &format!("Transition didn't end within {timeout_secs} seconds"),
                );
                return Ok(TransitionResult::new(
                    f,
                    TransitionStatus::StableTimeout,
                    None,
                    Some(initial.time),
                    None,
                ));
            }
            prev = f;
        }
    }

    fn pull(&mut self, phase: Phase) -> Result<Frame, TransitionError> {
        let frame = self
            .frames
            .next_frame()
            .map_err(TransitionError::Source)?
            .ok_or(TransitionError::StreamExhausted { phase })?;
        self.check_frame(&frame)?;
        Ok(frame)
    }

    /// All frames of one measurement must have the same size, and match the
    /// mask if there is one.
    fn check_frame(&mut self, frame: &Frame) -> Result<(), TransitionError> {
        match self.frame_size {
            Some(expected) if expected != frame.dimensions() => Err(TransitionError::FrameSize {
                time: frame.time,
                expected,
                got: frame.dimensions(),
            }),
            Some(_) => Ok(()),
            None => {
                self.request.area().check(frame)?;
                self.frame_size = Some(frame.dimensions());
                Ok(())
            }
        }
    }

    fn debug(&mut self, frame: &Frame, message: &str) {
        self.sink.event(frame.time, message);
    }
}

/// Press `action`, wait for the screen to change, then wait for it to stop
/// changing.
///
/// Useful for waiting until a menu selection has finished moving, for
/// measuring animation durations, or for measuring how long a screen takes
/// to populate fully. Timeouts are reported through the result's status, not
/// as errors.
pub fn press_and_wait<A, S, D>(
    actuator: &mut A,
    frames: &mut S,
    action: &str,
    request: &TransitionRequest,
    sink: &mut D,
) -> Result<TransitionResult, TransitionError>
where
    A: Actuator + ?Sized,
    S: FrameSource + ?Sized,
    D: DiagnosticsSink + ?Sized,
{
    let press = actuator.press(action).map_err(TransitionError::Actuator)?;
    sink.event(
        press.completion_time,
        &format!("Pressed {action}"),
    );
    let result = Transition::new(request, frames, sink).wait(&press)?;
    sink.event(
        result.frame().time,
        &format!("press_and_wait({action:?}) -> {result}"),
    );
    Ok(result)
}

/// Wait for the screen to stop changing.
///
/// Use [`press_and_wait`] to measure a whole transition. This is for
/// measuring the last stage of a transition that something else already
/// detected the start of, e.g. a screen that appeared and is still
/// populating; pass the frame where that was detected as `initial_frame`.
pub fn wait_for_transition_to_end<S, D>(
    frames: &mut S,
    initial_frame: Option<Frame>,
    request: &TransitionRequest,
    sink: &mut D,
) -> Result<TransitionResult, TransitionError>
where
    S: FrameSource + ?Sized,
    D: DiagnosticsSink + ?Sized,
{
    let result = Transition::new(request, frames, sink).wait_for_transition_to_end(initial_frame)?;
    sink.event(
        result.frame().time,
        &format!("wait_for_transition_to_end() -> {result}"),
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Mask;
    use crate::diagnostics::{MemorySink, NullSink};
    use crate::source::{BoxError, ScriptedSource};
    use crate::test_support::{frame, paint};
    use image::{DynamicImage, Rgb, RgbImage};
    use transition_common::Region;

    const W: u32 = 32;
    const H: u32 = 24;

    fn grey(value: u8, time: f64) -> Frame {
        frame(W, H, value, time)
    }

    fn request(timeout_secs: f64, stable_secs: f64) -> TransitionRequest {
        TransitionRequest::new(Region::ALL, None, timeout_secs, stable_secs).unwrap()
    }

    fn press_at(time: f64, reference: Frame) -> TriggerResult {
        TriggerResult {
            action: "KEY_OK".into(),
            completion_time: time,
            reference_frame: reference,
        }
    }

    fn wait(press: &TriggerResult, frames: Vec<Frame>, req: &TransitionRequest) -> TransitionResult {
        let mut source = ScriptedSource::new(frames);
        Transition::new(req, &mut source, &mut NullSink).wait(press).unwrap()
    }

    #[test]
    fn completes_after_quiet_period() {
        let press = press_at(0.0, grey(0, -0.04));
        let frames = vec![
            grey(0, 0.05),
            grey(200, 0.20),
            grey(200, 0.40),
            grey(200, 0.65),
        ];
        let result = wait(&press, frames, &request(5.0, 0.25));

        assert_eq!(result.status(), TransitionStatus::Complete);
        assert!(result.is_complete());
        assert_eq!(result.press_time(), Some(0.0));
        assert_eq!(result.animation_start_time(), Some(0.20));
        assert_eq!(result.end_time(), Some(0.20));
        assert_eq!(result.frame().time, 0.20);
        assert_eq!(result.duration(), Some(0.20));
        assert_eq!(result.animation_duration(), Some(0.0));
    }

    #[test]
    fn start_timeout_when_nothing_changes() {
        let press = press_at(0.0, grey(50, -0.04));
        let frames: Vec<_> = (1..=4).map(|i| grey(50, i as f64 * 0.25)).collect();
        let result = wait(&press, frames, &request(1.0, 1.0));

        assert_eq!(result.status(), TransitionStatus::StartTimeout);
        assert!(!result.is_complete());
        assert_eq!(result.frame().time, 1.0);
        assert_eq!(result.press_time(), Some(0.0));
        assert_eq!(result.animation_start_time(), None);
        assert_eq!(result.end_time(), None);
        assert_eq!(result.duration(), None);
    }

    #[test]
    fn stable_timeout_when_screen_keeps_changing() {
        let press = press_at(0.0, grey(0, -0.04));
        let frames: Vec<_> = (1..=10)
            .map(|i| grey(if i % 2 == 0 { 100 } else { 200 }, i as f64 / 10.0))
            .collect();
        let result = wait(&press, frames, &request(1.0, 0.3));

        assert_eq!(result.status(), TransitionStatus::StableTimeout);
        assert!(!result.is_complete());
        assert_eq!(result.frame().time, 1.0);
        assert_eq!(result.animation_start_time(), Some(0.1));
        assert_eq!(result.end_time(), None);
        assert_eq!(result.duration(), None);
        assert_eq!(result.animation_duration(), None);
    }

    #[test]
    fn end_time_is_first_frame_of_stable_run() {
        let press = press_at(10.0, grey(0, 9.9));
        let frames = vec![
            grey(10, 10.125),
            grey(20, 10.25),
            grey(30, 10.375),
            grey(30, 10.5),
            grey(30, 10.625),
            grey(30, 10.75),
            grey(30, 10.875),
        ];
        let result = wait(&press, frames, &request(5.0, 0.5));

        assert!(result.is_complete());
        assert_eq!(result.animation_start_time(), Some(10.125));
        assert_eq!(result.end_time(), Some(10.375));
        assert_eq!(result.duration(), Some(0.375));
        assert_eq!(result.animation_duration(), Some(0.25));
    }

    #[test]
    fn stability_window_restarts_on_every_change() {
        let press = press_at(0.0, grey(0, -0.1));
        // Quiet for 0.375s, then one more change, then quiet again.
        let frames = vec![
            grey(100, 0.125),
            grey(100, 0.25),
            grey(100, 0.375),
            grey(100, 0.5),
            grey(150, 0.625),
            grey(150, 0.75),
            grey(150, 0.875),
            grey(150, 1.0),
            grey(150, 1.125),
        ];
        let result = wait(&press, frames, &request(5.0, 0.5));
        assert!(result.is_complete());
        assert_eq!(result.end_time(), Some(0.625));
    }

    #[test]
    fn frames_before_press_are_discarded() {
        let reference = grey(0, -0.5);
        let press = press_at(1.0, reference);
        // The changed frames before the press must not count as the start.
        let frames = vec![
            grey(255, 0.5),
            grey(255, 0.75),
            grey(0, 1.0),
            grey(0, 1.5),
            grey(0, 2.0),
        ];
        let result = wait(&press, frames, &request(1.0, 0.25));
        assert_eq!(result.status(), TransitionStatus::StartTimeout);
        assert_eq!(result.frame().time, 2.0);
    }

    #[test]
    fn frame_exactly_at_press_time_is_considered() {
        let press = press_at(1.0, grey(0, 0.9));
        let frames = vec![grey(255, 1.0), grey(255, 1.5)];
        let result = wait(&press, frames, &request(5.0, 0.5));
        assert!(result.is_complete());
        assert_eq!(result.animation_start_time(), Some(1.0));
    }

    #[test]
    fn completion_beats_expiry_on_the_same_frame() {
        let press = press_at(0.0, grey(0, -0.1));
        let frames = vec![grey(255, 0.5), grey(255, 1.0)];
        let result = wait(&press, frames, &request(1.0, 0.5));
        assert!(result.is_complete());
        assert_eq!(result.end_time(), Some(0.5));
    }

    #[test]
    fn change_at_expiry_starts_animation() {
        let press = press_at(0.0, grey(0, -0.1));
        let frames = vec![grey(0, 0.5), grey(255, 1.0), grey(255, 1.25)];
        let result = wait(&press, frames, &request(1.0, 0.5));
        assert_eq!(result.status(), TransitionStatus::StableTimeout);
        assert_eq!(result.animation_start_time(), Some(1.0));
        assert_eq!(result.frame().time, 1.25);
    }

    #[test]
    fn region_limits_what_counts_as_change() {
        let reference = grey(0, -0.1);
        let press = press_at(0.0, reference.clone());
        // Something flickers in the bottom-right corner forever; the
        // top-left menu changes once.
        let corner = |on: bool, t: f64| {
            let v = if on { 255 } else { 0 };
            paint(&reference, &[(W - 1, H - 1, [v, v, v])], t)
        };
        let mut frames = vec![corner(true, 0.1)];
        let menu = paint(&corner(false, 0.2), &[(0, 0, [255, 255, 255])], 0.2);
        frames.push(menu.clone());
        for i in 3..10 {
            let base = corner(i % 2 == 0, i as f64 / 10.0);
            frames.push(paint(&base, &[(0, 0, [255, 255, 255])], i as f64 / 10.0));
        }

        let req = TransitionRequest::new(Region::new(0, 0, 8, 8), None, 5.0, 0.25).unwrap();
        let result = wait(&press, frames.clone(), &req);
        assert!(result.is_complete());
        assert_eq!(result.animation_start_time(), Some(0.2));
        assert_eq!(result.end_time(), Some(0.2));

        let result = wait(&press, frames, &request(0.8, 0.25));
        assert_eq!(result.status(), TransitionStatus::StableTimeout);
    }

    #[test]
    fn mask_limits_what_counts_as_change() {
        let reference = grey(0, -0.1);
        let press = press_at(0.0, reference.clone());
        let frames: Vec<_> = (1..=6)
            .map(|i| {
                let v = if i % 2 == 0 { 255 } else { 128 };
                paint(&reference, &[(5, 5, [v, v, v])], i as f64 / 10.0)
            })
            .collect();

        let mut img = RgbImage::new(W, H);
        img.put_pixel(20, 20, Rgb([255, 255, 255]));
        let mask = Mask::from_image(DynamicImage::ImageRgb8(img));
        let req = TransitionRequest::new(Region::ALL, Some(mask), 0.5, 0.25).unwrap();
        let result = wait(&press, frames, &req);
        assert_eq!(result.status(), TransitionStatus::StartTimeout);
    }

    #[test]
    fn standalone_wait_uses_initial_frame() {
        let initial = grey(0, 5.0);
        let frames = vec![grey(100, 5.1), grey(100, 5.2), grey(100, 5.3), grey(100, 5.75)];
        let mut source = ScriptedSource::new(frames);
        let mut sink = MemorySink::new();
        let result =
            wait_for_transition_to_end(&mut source, Some(initial), &request(10.0, 0.5), &mut sink)
                .unwrap();

        assert!(result.is_complete());
        assert_eq!(result.press_time(), None);
        assert_eq!(result.animation_start_time(), Some(5.0));
        assert_eq!(result.end_time(), Some(5.1));
        assert_eq!(result.duration(), None);
        assert!((result.animation_duration().unwrap() - 0.1).abs() < 1e-9);
        assert_eq!(
            sink.messages().last().unwrap(),
            &format!("wait_for_transition_to_end() -> {result}")
        );
    }

    #[test]
    fn standalone_wait_pulls_initial_frame() {
        let frames = vec![grey(0, 1.0), grey(0, 1.25), grey(0, 1.5)];
        let mut source = ScriptedSource::new(frames);
        let result =
            wait_for_transition_to_end(&mut source, None, &request(10.0, 0.5), &mut NullSink)
                .unwrap();
        assert!(result.is_complete());
        assert_eq!(result.animation_start_time(), Some(1.0));
        assert_eq!(result.end_time(), Some(1.0));
        assert_eq!(source.pulled(), 3);
    }

    #[test]
    fn standalone_expiry_counts_from_initial_frame() {
        let frames: Vec<_> = (1..=20)
            .map(|i| grey(if i % 2 == 0 { 0 } else { 255 }, 3.0 + i as f64 * 0.125))
            .collect();
        let mut source = ScriptedSource::new(frames);
        let result = wait_for_transition_to_end(
            &mut source,
            Some(grey(0, 3.0)),
            &request(1.0, 0.5),
            &mut NullSink,
        )
        .unwrap();
        assert_eq!(result.status(), TransitionStatus::StableTimeout);
        assert_eq!(result.frame().time, 4.0);
        assert_eq!(source.remaining(), 12);
    }

    #[test]
    fn stops_pulling_at_verdict() {
        let press = press_at(0.0, grey(0, -0.1));
        let frames = vec![grey(0, 0.5), grey(0, 1.0), grey(0, 1.5), grey(0, 2.0)];
        let mut source = ScriptedSource::new(frames);
        let result = Transition::new(&request(1.0, 1.0), &mut source, &mut NullSink)
            .wait(&press)
            .unwrap();
        assert_eq!(result.status(), TransitionStatus::StartTimeout);
        assert_eq!(source.remaining(), 2);
    }

    #[test]
    fn exhausted_stream_while_awaiting_start() {
        let press = press_at(0.0, grey(0, -0.1));
        let mut source = ScriptedSource::new(vec![grey(0, 0.1)]);
        let err = Transition::new(&request(1.0, 1.0), &mut source, &mut NullSink)
            .wait(&press)
            .unwrap_err();
        assert!(matches!(
            err,
            TransitionError::StreamExhausted { phase: Phase::AwaitStart }
        ));
    }

    #[test]
    fn exhausted_stream_while_awaiting_stability() {
        let press = press_at(0.0, grey(0, -0.1));
        let mut source = ScriptedSource::new(vec![grey(255, 0.1), grey(255, 0.2)]);
        let err = Transition::new(&request(1.0, 1.0), &mut source, &mut NullSink)
            .wait(&press)
            .unwrap_err();
        assert!(matches!(
            err,
            TransitionError::StreamExhausted { phase: Phase::AwaitStability }
        ));
        assert_eq!(err.to_string(), "frame stream ended while waiting in AWAIT_STABILITY");
    }

    #[test]
    fn exhausted_stream_without_initial_frame() {
        let mut source = ScriptedSource::default();
        let err = wait_for_transition_to_end(&mut source, None, &request(1.0, 1.0), &mut NullSink)
            .unwrap_err();
        assert!(matches!(err, TransitionError::StreamExhausted { .. }));
    }

    #[test]
    fn source_errors_propagate() {
        let press = press_at(0.0, grey(0, -0.1));
        let mut source = ScriptedSource::new(vec![grey(0, 0.1)]).then_fail("usb disconnected");
        let err = Transition::new(&request(1.0, 1.0), &mut source, &mut NullSink)
            .wait(&press)
            .unwrap_err();
        match err {
            TransitionError::Source(inner) => assert_eq!(inner.to_string(), "usb disconnected"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mismatched_frame_size_is_an_error() {
        let press = press_at(0.0, grey(0, -0.1));
        let mut source = ScriptedSource::new(vec![grey(0, 0.1), frame(W * 2, H, 0, 0.2)]);
        let err = Transition::new(&request(1.0, 1.0), &mut source, &mut NullSink)
            .wait(&press)
            .unwrap_err();
        assert!(matches!(
            err,
            TransitionError::FrameSize { expected: (W, H), got, .. } if got == (W * 2, H)
        ));
    }

    #[test]
    fn mismatched_mask_size_is_an_error() {
        let mask = Mask::from_image(DynamicImage::ImageRgb8(RgbImage::new(4, 4)));
        let req = TransitionRequest::new(Region::ALL, Some(mask), 1.0, 1.0).unwrap();
        let mut source = ScriptedSource::new(vec![grey(0, 0.1)]);
        let err = wait_for_transition_to_end(&mut source, None, &req, &mut NullSink).unwrap_err();
        assert!(matches!(err, TransitionError::MaskSize { .. }));
    }

    #[test]
    fn press_and_wait_reports_press() {
        let reference = grey(0, 99.9);
        let mut presses = Vec::new();
        let mut actuator = |action: &str| -> Result<TriggerResult, BoxError> {
            presses.push(action.to_string());
            Ok(press_at(100.0, reference.clone()))
        };
        let mut source = ScriptedSource::new(vec![
            grey(0, 99.95),
            grey(0, 100.05),
            grey(80, 100.25),
            grey(80, 100.5),
            grey(80, 101.25),
        ]);
        let mut sink = MemorySink::new();
        let result = press_and_wait(
            &mut actuator,
            &mut source,
            "KEY_RIGHT",
            &request(10.0, 1.0),
            &mut sink,
        )
        .unwrap();

        assert_eq!(presses, vec!["KEY_RIGHT"]);
        assert!(result.is_complete());
        assert_eq!(result.press_time(), Some(100.0));
        assert_eq!(result.animation_start_time(), Some(100.25));
        assert_eq!(result.end_time(), Some(100.25));
        assert_eq!(result.duration(), Some(0.25));

        let messages = sink.messages();
        assert_eq!(messages[0], "Pressed KEY_RIGHT");
        assert!(messages.contains(&"No change"));
        assert!(messages.contains(&"Animation started"));
        assert!(messages.contains(&"No change since previous frame"));
        assert!(messages.contains(&"Transition complete (stable for 1s since 100.250)."));
        assert_eq!(
            messages.last().unwrap(),
            &format!("press_and_wait(\"KEY_RIGHT\") -> {result}")
        );
    }

    #[test]
    fn press_and_wait_timeout_message_names_action() {
        let reference = grey(0, -0.1);
        let mut actuator = |action: &str| -> Result<TriggerResult, BoxError> {
            Ok(TriggerResult {
                action: action.to_string(),
                ..press_at(0.0, reference.clone())
            })
        };
        let mut source = ScriptedSource::new(vec![grey(0, 0.5), grey(0, 1.0)]);
        let mut sink = MemorySink::new();
        let result =
            press_and_wait(&mut actuator, &mut source, "KEY_MENU", &request(1.0, 1.0), &mut sink)
                .unwrap();
        assert_eq!(result.status(), TransitionStatus::StartTimeout);
        assert!(sink
            .messages()
            .contains(&"Transition didn't start within 1 seconds of pressing KEY_MENU"));
    }

    #[test]
    fn actuator_errors_propagate_before_any_frame_is_pulled() {
        let mut actuator =
            |_: &str| -> Result<TriggerResult, BoxError> { Err("IR blaster not found".into()) };
        let mut source = ScriptedSource::new(vec![grey(0, 0.0)]);
        let err = press_and_wait(
            &mut actuator,
            &mut source,
            "KEY_OK",
            &TransitionRequest::default(),
            &mut NullSink,
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::Actuator(_)));
        assert_eq!(source.pulled(), 0);
    }

    #[test]
    fn diagnostics_do_not_change_the_result() {
        let press = press_at(0.0, grey(0, -0.1));
        let frames: Vec<_> = (1..=8).map(|i| grey(if i < 3 { 0 } else { 90 }, i as f64 / 8.0)).collect();
        let req = request(5.0, 0.25);

        let with_null = wait(&press, frames.clone(), &req);
        let mut source = ScriptedSource::new(frames);
        let mut sink = MemorySink::new();
        let with_memory = Transition::new(&req, &mut source, &mut sink).wait(&press).unwrap();

        assert_eq!(format!("{with_null}"), format!("{with_memory}"));
        assert!(!sink.events.is_empty());
    }
}
