use tracing::trace;

use crate::core::GraphGeometry;
use crate::core::interpolation::{CIRCLE_STAGE, LINE_STAGE, REVEAL_STAGES, stage_scale};
use crate::error::{RevealError, RevealResult};
use crate::render::{CirclePrimitive, Color, LinePrimitive, RenderFrame};

use super::{RevealEvent, RevealState, RevealStep, WaveDirection};

/// Stroke and fill settings shared by every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub color: Color,
    pub stroke_width: f64,
}

/// Reveal states for every datum, stored in series order.
///
/// Neighbors are `index ± 1`; no node holds a reference to another.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeChain {
    states: Vec<RevealState>,
}

impl NodeChain {
    pub fn new(len: usize) -> RevealResult<Self> {
        if len == 0 {
            return Err(RevealError::InvalidData(
                "node chain needs at least one node".to_owned(),
            ));
        }
        Ok(Self {
            states: vec![RevealState::new(); len],
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn states(&self) -> &[RevealState] {
        &self.states
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<&RevealState> {
        self.states.get(index)
    }

    /// Starts the transition of node `index`; `false` if it was already moving.
    pub fn start(&mut self, index: usize) -> RevealResult<bool> {
        let len = self.len();
        let state = self
            .states
            .get_mut(index)
            .ok_or(RevealError::IndexOutOfRange { index, len })?;
        let activated = state.start_updating();
        if activated {
            trace!(index, direction = state.direction(), "node transition started");
        }
        Ok(activated)
    }

    /// Neighbor of `index` in `direction`, if any.
    #[must_use]
    pub fn get_next(&self, index: usize, direction: WaveDirection) -> Option<usize> {
        match direction {
            WaveDirection::Forward => index.checked_add(1).filter(|next| *next < self.len()),
            WaveDirection::Backward => index.checked_sub(1),
        }
    }

    /// Ticks node `index` once.
    ///
    /// When the node commits at 1 and has a forward neighbor, that neighbor is
    /// started and reported as `Advanced`; a commit at -1 does the same
    /// backward. Any other commit reports `Completed`. A neighbor advance
    /// replaces the completion signal.
    pub fn update(&mut self, index: usize) -> RevealResult<RevealEvent> {
        let len = self.len();
        let step = self
            .states
            .get_mut(index)
            .ok_or(RevealError::IndexOutOfRange { index, len })?
            .tick();

        let RevealStep::Committed { committed_scale } = step else {
            return Ok(RevealEvent::Idle);
        };
        trace!(index, committed_scale, "node committed");

        let forward = self.get_next(index, WaveDirection::Forward);
        let backward = self.get_next(index, WaveDirection::Backward);
        let event = match (committed_scale, forward, backward) {
            (scale, Some(next), _) if scale == 1.0 => {
                self.start(next)?;
                RevealEvent::Advanced(next)
            }
            (scale, _, Some(previous)) if scale == -1.0 => {
                self.start(previous)?;
                RevealEvent::Advanced(previous)
            }
            _ => RevealEvent::Completed,
        };
        Ok(event)
    }

    /// Appends the primitives of every node to `frame`.
    ///
    /// Each node draws its bar, then its head circle, and a join toward the
    /// previous node's head. Bars grow during the first half of a reveal;
    /// circle and join grow during the second half.
    pub fn draw(
        &self,
        geometry: &GraphGeometry,
        style: NodeStyle,
        frame: &mut RenderFrame,
    ) -> RevealResult<()> {
        if geometry.len() != self.len() {
            return Err(RevealError::InvalidData(format!(
                "geometry has {} nodes but chain has {}",
                geometry.len(),
                self.len()
            )));
        }

        let mut previous_top = None;
        for (node, state) in geometry.nodes().zip(&self.states) {
            let line_scale = stage_scale(state.scale(), LINE_STAGE, REVEAL_STAGES);
            let join_scale = stage_scale(state.scale(), CIRCLE_STAGE, REVEAL_STAGES);
            let (top_x, top_y) = node.top();

            let bar_length = node.bar_height * line_scale;
            if bar_length != 0.0 {
                frame.lines.push(LinePrimitive::new(
                    node.x,
                    node.baseline_y,
                    node.x,
                    node.baseline_y - bar_length,
                    style.stroke_width,
                    style.color,
                ));
            }

            if let Some((from_x, from_y)) = previous_top {
                if join_scale != 0.0 {
                    frame.lines.push(LinePrimitive::new(
                        from_x,
                        from_y,
                        from_x + (top_x - from_x) * join_scale,
                        from_y + (top_y - from_y) * join_scale,
                        style.stroke_width,
                        style.color,
                    ));
                }
            }

            let radius = node.radius * join_scale;
            if radius != 0.0 {
                frame
                    .circles
                    .push(CirclePrimitive::new(top_x, top_y, radius, style.color));
            }

            previous_top = Some((top_x, top_y));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeChain, NodeStyle};
    use crate::animation::{RevealEvent, WaveDirection};
    use crate::core::{DataSeries, GraphGeometry, Viewport};
    use crate::render::{Color, RenderFrame};

    fn tick_until_event(chain: &mut NodeChain, index: usize) -> RevealEvent {
        for _ in 0..40 {
            let event = chain.update(index).expect("valid index");
            if event != RevealEvent::Idle {
                return event;
            }
        }
        panic!("node {index} never settled");
    }

    #[test]
    fn get_next_is_bounds_checked() {
        let chain = NodeChain::new(3).expect("chain");
        assert_eq!(chain.get_next(0, WaveDirection::Forward), Some(1));
        assert_eq!(chain.get_next(2, WaveDirection::Forward), None);
        assert_eq!(chain.get_next(0, WaveDirection::Backward), None);
        assert_eq!(chain.get_next(2, WaveDirection::Backward), Some(1));
    }

    #[test]
    fn grown_node_starts_forward_neighbor() {
        let mut chain = NodeChain::new(3).expect("chain");
        chain.start(0).expect("start");

        assert_eq!(tick_until_event(&mut chain, 0), RevealEvent::Advanced(1));
        assert_eq!(chain.states()[0].committed_scale(), 1.0);
        assert_eq!(chain.states()[1].direction(), 1.0);
        assert_eq!(chain.states()[2].direction(), 0.0);
    }

    #[test]
    fn last_node_reports_completion() {
        let mut chain = NodeChain::new(1).expect("chain");
        chain.start(0).expect("start");
        assert_eq!(tick_until_event(&mut chain, 0), RevealEvent::Completed);
    }

    #[test]
    fn shrunk_node_reports_completion() {
        let mut chain = NodeChain::new(2).expect("chain");
        chain.start(1).expect("start");
        assert_eq!(tick_until_event(&mut chain, 1), RevealEvent::Completed);
        chain.start(1).expect("restart");
        assert_eq!(tick_until_event(&mut chain, 1), RevealEvent::Completed);
        assert_eq!(chain.states()[1].committed_scale(), 0.0);
    }

    #[test]
    fn out_of_range_update_is_an_error() {
        let mut chain = NodeChain::new(2).expect("chain");
        assert!(chain.update(2).is_err());
        assert!(chain.start(5).is_err());
    }

    #[test]
    fn resting_chain_draws_nothing() {
        let series = DataSeries::sample();
        let geometry = GraphGeometry::new(&series, Viewport::new(800, 600)).expect("geometry");
        let chain = NodeChain::new(series.len()).expect("chain");
        let mut frame = RenderFrame::new(geometry.viewport(), Color::BACKGROUND);
        let style = NodeStyle {
            color: Color::LINE,
            stroke_width: 10.0,
        };

        chain.draw(&geometry, style, &mut frame).expect("draw");
        assert!(frame.is_empty());
    }
}
