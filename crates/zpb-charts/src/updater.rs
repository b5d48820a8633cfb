//! Data join for line paths (enter / update / exit with transitions)
//!
//! Lines are keyed by series index, like D3's default join. The join keeps the
//! series each line is bound to and its transition phase; each plot draws the
//! joined lines through its own scales.

use zpb_core::{Dataset, Series};

/// Duration of update and exit transitions
pub const TRANSITION_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePhase {
    /// Drawn at its current geometry
    Steady,
    /// Easing towards the geometry of a newly bound series
    Transition,
    /// Unbound; fading out until transitions settle
    Exit,
}

impl LinePhase {
    /// CSS transition for a path in this phase
    pub fn css_transition(&self) -> String {
        match self {
            Self::Steady => String::new(),
            Self::Transition => format!("transition: d {}ms ease-in-out", TRANSITION_MS),
            Self::Exit => format!("transition: stroke {}ms", TRANSITION_MS),
        }
    }
}

/// A line bound to one series
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedLine {
    /// Rendering identity, never reused within a join
    pub id: u64,
    pub series: Series,
    pub phase: LinePhase,
}

impl JoinedLine {
    pub fn is_live(&self) -> bool {
        self.phase != LinePhase::Exit
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineJoin {
    lines: Vec<JoinedLine>,
    next_id: u64,
}

impl LineJoin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join seeded with one steady line per series
    pub fn from_dataset(data: &Dataset) -> Self {
        let mut join = Self::new();
        for series in data.series() {
            join.enter(series.clone(), LinePhase::Steady);
        }
        join
    }

    /// Rebind `data`, keyed by series index.
    ///
    /// Missing lines are created, every bound line transitions to its new
    /// series, and surplus lines exit until [`LineJoin::settle`] drops them.
    /// Exiting lines are never rebound, so repeating a call with the same
    /// dataset creates no duplicates.
    pub fn update(&mut self, data: &Dataset) {
        let series = data.series();
        let mut index = 0;

        for line in self.lines.iter_mut().filter(|l| l.is_live()) {
            match series.get(index) {
                Some(s) => {
                    line.series = s.clone();
                    line.phase = LinePhase::Transition;
                }
                None => line.phase = LinePhase::Exit,
            }
            index += 1;
        }

        for s in series.iter().skip(index) {
            self.enter(s.clone(), LinePhase::Transition);
        }

        tracing::trace!(lines = series.len(), "line data joined");
    }

    /// Redraw at the current scale positions: running transitions stop
    pub fn redraw(&mut self) {
        for line in &mut self.lines {
            if line.phase == LinePhase::Transition {
                line.phase = LinePhase::Steady;
            }
        }
    }

    /// Finish transitions and remove exited lines
    pub fn settle(&mut self) {
        self.lines.retain(JoinedLine::is_live);
        self.redraw();
    }

    pub fn lines(&self) -> &[JoinedLine] {
        &self.lines
    }

    /// Lines currently bound to a series (exiting lines excluded)
    pub fn live_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_live()).count()
    }

    fn enter(&mut self, series: Series, phase: LinePhase) {
        self.lines.push(JoinedLine {
            id: self.next_id,
            series,
            phase,
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zpb_core::DataPoint;

    fn series(n: usize) -> Series {
        (0..n)
            .map(|i| DataPoint::new().with("date", i as f64).with("value", i as f64))
            .collect()
    }

    fn lengths(join: &LineJoin) -> Vec<usize> {
        join.lines().iter().map(|l| l.series.len()).collect()
    }

    #[test]
    fn test_seeded_lines_are_steady() {
        let join = LineJoin::from_dataset(&Dataset::new(vec![series(2), series(3)]));

        assert_eq!(join.live_count(), 2);
        assert_eq!(lengths(&join), vec![2, 3]);
        assert!(join.lines().iter().all(|l| l.phase == LinePhase::Steady));
    }

    #[test]
    fn test_enter_and_update_transition() {
        let mut join = LineJoin::from_dataset(&Dataset::new(vec![series(2)]));
        join.update(&Dataset::new(vec![series(5), series(1)]));

        assert_eq!(lengths(&join), vec![5, 1]);
        assert!(join.lines().iter().all(|l| l.phase == LinePhase::Transition));
        // The rebound line keeps its identity
        assert_eq!(join.lines()[0].id, 0);
        assert_eq!(join.lines()[1].id, 1);
    }

    #[test]
    fn test_update_is_idempotent() {
        let data = Dataset::new(vec![series(2), series(3)]);
        let mut join = LineJoin::new();
        join.update(&data);
        let ids: Vec<u64> = join.lines().iter().map(|l| l.id).collect();
        join.update(&data);

        assert_eq!(join.lines().len(), 2);
        assert_eq!(join.lines().iter().map(|l| l.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_exit_then_settle() {
        let mut join = LineJoin::new();
        join.update(&Dataset::new(vec![series(1), series(2), series(3)]));
        join.update(&Dataset::new(vec![series(4)]));

        assert_eq!(join.live_count(), 1);
        assert_eq!(join.lines().len(), 3);
        assert_eq!(join.lines()[2].phase, LinePhase::Exit);

        // Exiting lines are not rebound by a later join
        join.update(&Dataset::new(vec![series(4), series(1)]));
        assert_eq!(join.live_count(), 2);
        assert_eq!(join.lines().len(), 4);
        assert_eq!(join.lines()[3].id, 3);

        join.settle();
        assert_eq!(lengths(&join), vec![4, 1]);
        assert!(join.lines().iter().all(|l| l.phase == LinePhase::Steady));
    }

    #[test]
    fn test_only_moving_lines_carry_transitions() {
        assert_eq!(LinePhase::Steady.css_transition(), "");
        assert_eq!(
            LinePhase::Transition.css_transition(),
            "transition: d 250ms ease-in-out"
        );
        assert!(LinePhase::Exit.css_transition().starts_with("transition: stroke"));
    }

    #[test]
    fn test_redraw_stops_transitions_but_not_exits() {
        let mut join = LineJoin::from_dataset(&Dataset::new(vec![series(1), series(2)]));
        join.update(&Dataset::new(vec![series(3)]));
        join.redraw();

        assert_eq!(join.lines()[0].phase, LinePhase::Steady);
        assert_eq!(join.lines()[1].phase, LinePhase::Exit);
    }
}
