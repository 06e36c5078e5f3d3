use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Progress {
    RunStart {
        total_steps: u64,
    },
    StepComplete {
        step: u64,
        total_steps: u64,
        elapsed: Duration,
    },
    RunFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback.
///
/// Percentage and ETA rendering are the callback's concern; the engine only
/// exposes the step counters and wall-clock time elapsed since the run began.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
