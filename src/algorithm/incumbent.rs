use enum_dispatch::enum_dispatch;

use crate::component::ScoredTour;
use crate::utils::Selection;

#[enum_dispatch]
#[derive(Debug)]
pub enum IncumbentEnum {
    LastIteration,
    AllTime,
}

/// Keeps the tour a run will return, fed one iteration at a time.
#[enum_dispatch(IncumbentEnum)]
pub trait Incumbent {
    fn offer(&mut self, batch: Vec<ScoredTour>);
    fn best(&self) -> Option<&ScoredTour>;
}

/// Only the final batch counts.
#[derive(Debug, Default)]
pub struct LastIteration {
    best: Option<ScoredTour>,
}

/// Running minimum over every batch; ties keep the earlier tour.
#[derive(Debug, Default)]
pub struct AllTime {
    best: Option<ScoredTour>,
}

impl Incumbent for LastIteration {
    fn offer(&mut self, batch: Vec<ScoredTour>) {
        self.best = shortest(batch);
    }
    fn best(&self) -> Option<&ScoredTour> {
        self.best.as_ref()
    }
}

impl Incumbent for AllTime {
    fn offer(&mut self, batch: Vec<ScoredTour>) {
        let challenger = match shortest(batch) {
            Some(challenger) => challenger,
            None => return,
        };
        match &self.best {
            Some(best) if best.distance <= challenger.distance => {}
            _ => self.best = Some(challenger),
        }
    }
    fn best(&self) -> Option<&ScoredTour> {
        self.best.as_ref()
    }
}

impl From<Selection> for IncumbentEnum {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::LastIteration => LastIteration::default().into(),
            Selection::AllTime => AllTime::default().into(),
        }
    }
}

/// First tour of minimal distance.
fn shortest(batch: Vec<ScoredTour>) -> Option<ScoredTour> {
    batch.into_iter().min_by_key(|scored| scored.distance)
}
