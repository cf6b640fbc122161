//! Unit tests for bg-render.

use bg_agent::BoundedHistory;
use bg_core::{GridConfig, Position, Tick};
use bg_sim::Frame;
use bg_world::ObstacleSet;

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn path(cells: &[Position]) -> BoundedHistory<Position> {
    let mut h = BoundedHistory::new(16);
    for &c in cells {
        h.push(c);
    }
    h
}

fn frame<'a>(
    obstacles: &'a ObstacleSet,
    path:      &'a BoundedHistory<Position>,
    robot:     Position,
    target:    Position,
    terminal:  bool,
) -> Frame<'a> {
    Frame {
        grid_size: 3,
        obstacles,
        robot,
        path,
        target,
        tick: Tick::ZERO,
        terminal,
    }
}

fn config(grid_size: u32, max_movements: u64) -> GridConfig {
    GridConfig {
        grid_size,
        max_movements,
        num_obstacles: 0,
        seed: Some(3),
        ..GridConfig::default()
    }
}

// ── GridView ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;
    use crate::{Cell, GridView};

    #[test]
    fn paints_every_layer() {
        let obstacles = ObstacleSet::from_cells(vec![p(1, 1)], 3).unwrap();
        let walk = path(&[p(0, 2), p(0, 1), p(0, 0)]);
        let view = GridView::from_frame(&frame(&obstacles, &walk, p(0, 0), p(2, 2), false));

        assert_eq!(view.size(), 3);
        assert_eq!(view.get(p(0, 0)), Some(Cell::Robot));
        assert_eq!(view.get(p(1, 1)), Some(Cell::Obstacle));
        assert_eq!(view.get(p(2, 2)), Some(Cell::Light));
        assert_eq!(view.get(p(0, 1)), Some(Cell::Trail));
        assert_eq!(view.get(p(2, 0)), Some(Cell::Empty));
        assert_eq!(view.get(p(3, 0)), None);
        assert_eq!(view.to_string(), "R . .\n* # .\n* . L\n");
    }

    #[test]
    fn target_hides_colocated_robot() {
        let obstacles = ObstacleSet::empty();
        let walk = path(&[p(1, 0), p(1, 1)]);
        let view = GridView::from_frame(&frame(&obstacles, &walk, p(1, 1), p(1, 1), false));
        assert_eq!(view.get(p(1, 1)), Some(Cell::Light));
        assert_eq!(view.get(p(1, 0)), Some(Cell::Trail));
    }

    #[test]
    fn terminal_frame_marks_beacon() {
        let obstacles = ObstacleSet::empty();
        let walk = path(&[p(0, 0)]);
        let view = GridView::from_frame(&frame(&obstacles, &walk, p(0, 0), p(2, 1), true));
        assert_eq!(view.get(p(2, 1)), Some(Cell::Beacon));
        assert_eq!(view.to_string(), "R . .\n. . B\n. . .\n");
    }

    #[test]
    fn trail_never_overwrites_markers() {
        let obstacles = ObstacleSet::empty();
        // The walk passed over the target's cell before it moved there.
        let walk = path(&[p(2, 2), p(2, 1), p(1, 1)]);
        let view = GridView::from_frame(&frame(&obstacles, &walk, p(1, 1), p(2, 2), false));
        assert_eq!(view.get(p(2, 2)), Some(Cell::Light));
        assert_eq!(view.get(p(1, 1)), Some(Cell::Robot));
        assert_eq!(view.get(p(2, 1)), Some(Cell::Trail));
    }

    #[test]
    fn glyphs() {
        let s: String = [Cell::Empty, Cell::Trail, Cell::Obstacle, Cell::Robot, Cell::Light, Cell::Beacon]
            .iter()
            .map(|c| c.glyph())
            .collect();
        assert_eq!(s, ".*#RLB");
    }
}

// ── TranscriptObserver ────────────────────────────────────────────────────────

#[cfg(test)]
mod transcript_tests {
    use std::io;

    use bg_sim::SimBuilder;

    use super::*;
    use crate::{RenderError, TITLE, TranscriptObserver};

    fn run_to_string(cfg: GridConfig, build: impl FnOnce(SimBuilder) -> SimBuilder, quiet: bool) -> String {
        let max = cfg.max_movements;
        let mut sim = build(SimBuilder::new(cfg)).build().unwrap();
        let mut obs = TranscriptObserver::new(Vec::new(), max).quiet(quiet);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());
        String::from_utf8(obs.into_inner()).unwrap()
    }

    #[test]
    fn capture_transcript() {
        let out = run_to_string(
            config(3, 2),
            |b| b.robot_at(p(0, 0)).target_at(p(2, 0)),
            false,
        );
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(TITLE));
        let rule = lines.next().unwrap();
        assert!(!rule.is_empty() && rule.chars().all(|c| c == '='));
        assert_eq!(lines.next(), Some("Obstacles:"));
        assert_eq!(lines.next(), Some(""));
        assert!(out.contains("Movement 1:\nRobot Position: (0, 0)\nLight Position: (2, 0)\nDistance to light: 2.00\n"));
        assert!(out.contains("Movement 2:\nRobot Position: (1, 0)\n"));
        assert!(!out.contains("Movement 3:"));
        assert!(out.contains("Final Simulation State:\n* * B\n. . .\n. . .\n"));
        assert!(out.trim_end().ends_with("Robot reached the light after 2 movements."));
    }

    #[test]
    fn failure_transcript_lists_obstacles() {
        let out = run_to_string(
            config(3, 3),
            |b| {
                b.obstacles(vec![p(1, 0), p(1, 2), p(0, 1), p(2, 1)])
                    .robot_at(p(1, 1))
                    .target_at(p(0, 0))
            },
            false,
        );
        assert!(out.contains("Obstacle Position: (1, 0)\nObstacle Position: (1, 2)\n"));
        assert_eq!(out.matches("Grid State:").count(), 3);
        assert!(out.contains("Final Simulation State:\nB # .\n# R #\n. # .\n"));
        assert!(out.trim_end().ends_with("Robot failed to reach the light within 3 movements."));
    }

    #[test]
    fn relocation_notices() {
        let out = run_to_string(config(1, 10), |b| b, false);
        assert_eq!(out.matches("Light Found!").count(), 2);
        assert_eq!(out.matches("Light repositioned!").count(), 1);
        assert!(out.contains("New light position: (0, 0)"));
    }

    #[test]
    fn quiet_keeps_final_state_only() {
        let out = run_to_string(
            config(3, 2),
            |b| b.robot_at(p(0, 0)).target_at(p(2, 0)),
            true,
        );
        assert!(!out.contains("Movement"));
        assert!(!out.contains("Grid State:"));
        assert!(out.contains("Final Simulation State:"));
    }

    /// A sink that fails every write.
    struct Broken {
        calls: usize,
    }

    impl io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_kept() {
        let mut sim = SimBuilder::new(config(3, 4)).build().unwrap();
        let mut obs = TranscriptObserver::new(Broken { calls: 0 }, 4);
        sim.run(&mut obs);

        let err = obs.take_error().expect("write error recorded");
        assert!(matches!(err, RenderError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_inner().calls, 1);
    }
}
