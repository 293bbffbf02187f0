use crate::core::{ai, Coordinate, ShotOutcome, TargetView, TargetingMemory};
use rand::rngs::SmallRng;

use super::Player;

/// How the computer picks its shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Uniformly random untargeted cell every time.
    Random,
    /// Random until a hit, then work the neighbours of the wounded ship.
    #[default]
    HuntAndTarget,
}

/// Computer player. Keeps its own targeting memory of the opponent board.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    strategy: Strategy,
    memory: TargetingMemory,
}

impl AiPlayer {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            memory: TargetingMemory::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn memory(&self) -> &TargetingMemory {
        &self.memory
    }
}

impl Player for AiPlayer {
    fn next_shot(
        &mut self,
        rng: &mut SmallRng,
        view: &TargetView<'_>,
    ) -> anyhow::Result<Coordinate> {
        let pick = match self.strategy {
            Strategy::Random => ai::hunt(rng, view),
            Strategy::HuntAndTarget => ai::hunt_and_target(rng, &mut self.memory, view),
        };
        pick.ok_or_else(|| anyhow::anyhow!("no untargeted cells left"))
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.memory.record_hit(target),
            ShotOutcome::Sunk(_) => self.memory.reset(),
            ShotOutcome::Miss => {}
        }
    }
}
