use std::collections::VecDeque;
use std::sync::mpsc;

use transition_common::Frame;

/// Error type carried through from frame sources and actuators untouched.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Forward-only stream of video frames in ascending timestamp order.
///
/// `next_frame` may block (e.g. waiting on capture hardware). `Ok(None)`
/// means the stream has ended and will not produce any more frames.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, BoxError>;
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn next_frame(&mut self) -> Result<Option<Frame>, BoxError> {
        (**self).next_frame()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn next_frame(&mut self) -> Result<Option<Frame>, BoxError> {
        (**self).next_frame()
    }
}

/// A capture thread can feed frames through a channel. Dropping the sender
/// ends the stream.
impl FrameSource for mpsc::Receiver<Frame> {
    fn next_frame(&mut self) -> Result<Option<Frame>, BoxError> {
        Ok(self.recv().ok())
    }
}

/// Adapts any iterator of frames.
pub struct IterSource<I>(pub I);

impl<I: Iterator<Item = Frame>> FrameSource for IterSource<I> {
    fn next_frame(&mut self) -> Result<Option<Frame>, BoxError> {
        Ok(self.0.next())
    }
}

/// Finite, pre-recorded sequence of frames followed by end-of-stream (or a
/// scripted failure).
#[derive(Debug, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Frame>,
    failure: Option<String>,
    pulled: usize,
}

impl ScriptedSource {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into(),
            failure: None,
            pulled: 0,
        }
    }

    /// Fail with `message` once the scripted frames run out, instead of
    /// ending the stream.
    pub fn then_fail(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of frames handed out so far.
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FromIterator<Frame> for ScriptedSource {
    fn from_iter<T: IntoIterator<Item = Frame>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FrameSource for ScriptedSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, BoxError> {
        match self.frames.pop_front() {
            Some(frame) => {
                self.pulled += 1;
                Ok(Some(frame))
            }
            None => match self.failure.take() {
                Some(message) => Err(message.into()),
                None => Ok(None),
            },
        }
    }
}
