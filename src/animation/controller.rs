use tracing::{debug, trace};

use crate::core::GraphGeometry;
use crate::error::RevealResult;
use crate::render::RenderFrame;

use super::{NodeChain, NodeStyle, RevealEvent, WaveDirection};

/// Drives the reveal wave: one active node receives every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphController {
    chain: NodeChain,
    current: usize,
    direction: WaveDirection,
}

impl GraphController {
    /// Builds the chain and starts the root node growing forward.
    pub fn new(node_count: usize) -> RevealResult<Self> {
        let mut chain = NodeChain::new(node_count)?;
        chain.start(0)?;
        debug!(node_count, "graph controller initialized");
        Ok(Self {
            chain,
            current: 0,
            direction: WaveDirection::Forward,
        })
    }

    #[must_use]
    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> WaveDirection {
        self.direction
    }

    /// Advances the active node by one tick.
    ///
    /// On completion the next node in the wave direction becomes active; at
    /// either end of the chain the direction flips and the same node is
    /// restarted the other way.
    pub fn update(&mut self) -> RevealResult<RevealEvent> {
        match self.chain.update(self.current)? {
            RevealEvent::Idle => Ok(RevealEvent::Idle),
            RevealEvent::Advanced(index) => {
                trace!(from = self.current, to = index, "active node advanced by chain");
                self.current = index;
                Ok(RevealEvent::Advanced(index))
            }
            RevealEvent::Completed | RevealEvent::ReversedDirection => {
                self.advance_after_completion()
            }
        }
    }

    pub fn draw(
        &self,
        geometry: &GraphGeometry,
        style: NodeStyle,
        frame: &mut RenderFrame,
    ) -> RevealResult<()> {
        self.chain.draw(geometry, style, frame)
    }

    fn advance_after_completion(&mut self) -> RevealResult<RevealEvent> {
        match self.chain.get_next(self.current, self.direction) {
            Some(next) => {
                self.chain.start(next)?;
                trace!(from = self.current, to = next, "active node advanced");
                self.current = next;
                Ok(RevealEvent::Advanced(next))
            }
            None => {
                self.direction = self.direction.reversed();
                self.chain.start(self.current)?;
                debug!(
                    node = self.current,
                    direction = ?self.direction,
                    "reveal wave reversed"
                );
                Ok(RevealEvent::ReversedDirection)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphController;
    use crate::animation::{RevealEvent, WaveDirection};

    fn next_event(controller: &mut GraphController) -> RevealEvent {
        for _ in 0..40 {
            let event = controller.update().expect("tick");
            if event != RevealEvent::Idle {
                return event;
            }
        }
        panic!("controller produced no event within 40 ticks");
    }

    #[test]
    fn forward_wave_visits_every_node() {
        let mut controller = GraphController::new(4).expect("controller");
        assert_eq!(next_event(&mut controller), RevealEvent::Advanced(1));
        assert_eq!(next_event(&mut controller), RevealEvent::Advanced(2));
        assert_eq!(next_event(&mut controller), RevealEvent::Advanced(3));
        assert_eq!(controller.current(), 3);
    }

    #[test]
    fn last_node_flips_direction_without_moving() {
        let mut controller = GraphController::new(2).expect("controller");
        assert_eq!(next_event(&mut controller), RevealEvent::Advanced(1));
        assert_eq!(next_event(&mut controller), RevealEvent::ReversedDirection);
        assert_eq!(controller.current(), 1);
        assert_eq!(controller.direction(), WaveDirection::Backward);
        assert_eq!(controller.chain().states()[1].direction(), -1.0);
    }

    #[test]
    fn backward_wave_hides_nodes_and_turns_around_at_root() {
        let mut controller = GraphController::new(2).expect("controller");
        next_event(&mut controller);
        next_event(&mut controller);

        assert_eq!(next_event(&mut controller), RevealEvent::Advanced(0));
        assert_eq!(controller.chain().states()[1].committed_scale(), 0.0);
        assert_eq!(next_event(&mut controller), RevealEvent::ReversedDirection);
        assert_eq!(controller.current(), 0);
        assert_eq!(controller.direction(), WaveDirection::Forward);
        assert_eq!(controller.chain().states()[0].committed_scale(), 0.0);
        assert_eq!(controller.chain().states()[0].direction(), 1.0);
    }

    #[test]
    fn single_node_pulses_in_place() {
        let mut controller = GraphController::new(1).expect("controller");
        assert_eq!(next_event(&mut controller), RevealEvent::ReversedDirection);
        assert_eq!(next_event(&mut controller), RevealEvent::ReversedDirection);
        assert_eq!(controller.current(), 0);
    }
}
