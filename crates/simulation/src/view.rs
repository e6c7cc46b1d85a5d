//! Read-only views for renderers.

use serde::{Deserialize, Serialize};
use travelsim_core::HistoryRecorder;
use travelsim_types::{HistoryPoint, MeetingEvent, RunnerPair, ScenarioPolicy};

/// Committed simulation state between two ticks.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Simulated seconds since reset.
    pub elapsed: f64,
    /// Both runners.
    pub runners: &'a RunnerPair,
    /// Track length of the active configuration.
    pub track_length: f64,
    /// Active scenario.
    pub scenario: ScenarioPolicy,
    /// Bounded chart history.
    pub history: &'a HistoryRecorder,
    /// Event log since reset.
    pub events: &'a [MeetingEvent],
}

impl Frame<'_> {
    /// Chart contents for the given scrolling window.
    pub fn chart(&self, window: &ChartWindow) -> ChartView {
        window.view(self.history, self.events)
    }
}

/// External renderer fed once per tick.
///
/// Renderers only read; nothing reachable from a [`Frame`] is mutable.
pub trait Renderer {
    /// Draw one frame.
    fn render(&mut self, frame: &Frame<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(&Frame<'_>),
{
    fn render(&mut self, frame: &Frame<'_>) {
        self(frame)
    }
}

/// Renderer that draws nothing, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {}
}

/// Scrolling time window of the position-vs-time chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartWindow {
    /// Visible span in simulated seconds.
    pub time_window: f64,
}

impl Default for ChartWindow {
    fn default() -> Self {
        Self { time_window: 20.0 }
    }
}

impl ChartWindow {
    /// Create a window spanning `time_window` seconds.
    pub fn new(time_window: f64) -> Self {
        Self { time_window }
    }

    /// Select what is visible given the history and events.
    ///
    /// The window ends at the latest sample and starts `time_window` earlier,
    /// never before zero. The axis always spans a full window so the chart
    /// does not rescale during the first seconds of a run.
    pub fn view(&self, history: &HistoryRecorder, events: &[MeetingEvent]) -> ChartView {
        let latest = history.latest().map(|p| p.time).unwrap_or(0.0);
        let start = (latest - self.time_window).max(0.0);
        let end = start + self.time_window;

        ChartView {
            start,
            end,
            latest,
            points: history.iter().filter(|p| p.time >= start).copied().collect(),
            events: events
                .iter()
                .filter(|e| e.time >= start && e.time <= latest)
                .copied()
                .collect(),
        }
    }
}

/// Visible slice of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    /// Left edge of the time axis.
    pub start: f64,
    /// Right edge of the time axis.
    pub end: f64,
    /// Time of the newest sample.
    pub latest: f64,
    /// Samples with `time >= start`.
    pub points: Vec<HistoryPoint>,
    /// Events with `start <= time <= latest`.
    pub events: Vec<MeetingEvent>,
}

impl ChartView {
    /// Horizontal position of `time` in `[0, 1]` across the axis.
    pub fn progress(&self, time: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return 0.0;
        }
        ((time - self.start) / span).clamp(0.0, 1.0)
    }
}
