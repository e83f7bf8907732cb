/// Progress events emitted while scoring decoys against a target.
#[derive(Debug, Clone)]
pub enum Progress {
    DecoyStart { name: String, cutoffs: u64 },
    CutoffStart { limit: usize, seeds: u64 },
    SeedScored,
    CutoffFinish { limit: usize, score: f64 },
    DecoyFinish { name: String, score: f64 },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback; a reporter without
/// a callback discards them.
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
