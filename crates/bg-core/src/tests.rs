//! Unit tests for bg-core primitives.

#[cfg(test)]
mod geo {
    use crate::{Direction, Position};

    #[test]
    fn manhattan_is_symmetric_sum_of_deltas() {
        let a = Position::new(0, 0);
        let b = Position::new(2, 3);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn euclidean_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert!((a.euclidean(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn bounds() {
        assert!(Position::new(0, 0).in_bounds(10));
        assert!(Position::new(9, 9).in_bounds(10));
        assert!(!Position::new(10, 0).in_bounds(10));
        assert!(!Position::new(0, -1).in_bounds(10));
        assert!(!Position::new(0, 0).in_bounds(0));
    }

    #[test]
    fn neighbour_order_is_up_down_left_right() {
        let p = Position::new(5, 5);
        assert_eq!(
            p.neighbours(),
            [
                Position::new(5, 4),
                Position::new(5, 6),
                Position::new(4, 5),
                Position::new(6, 5),
            ]
        );
        assert_eq!(p.step(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Direction::Left.to_string(), "left");
    }

    #[test]
    fn row_major_index() {
        assert_eq!(Position::new(2, 1).index(10), 12);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn budget_exhaustion() {
        assert!(!Tick(59).exhausts(60));
        assert!(Tick(60).exhausts(60));
        assert!(Tick::ZERO.exhausts(0));
    }
}

#[cfg(test)]
mod config {
    use crate::{BgError, GridConfig, MAX_GRID_SIZE};

    #[test]
    fn defaults_match_reference_run() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.grid_size, 10);
        assert_eq!(cfg.max_movements, 60);
        assert_eq!(cfg.num_obstacles, 10);
        assert_eq!(cfg.max_path_length, 100);
        assert_eq!(cfg.max_visited_length, 200);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn obstacles_filling_grid_rejected() {
        let cfg = GridConfig { grid_size: 4, num_obstacles: 16, ..GridConfig::default() };
        assert!(matches!(cfg.validate(), Err(BgError::Config(_))));

        let cfg = GridConfig { grid_size: 4, num_obstacles: 15, ..GridConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_sizes_rejected() {
        for cfg in [
            GridConfig { grid_size: 0, num_obstacles: 0, ..GridConfig::default() },
            GridConfig { max_path_length: 0, ..GridConfig::default() },
            GridConfig { max_visited_length: 0, ..GridConfig::default() },
            GridConfig { grid_size: MAX_GRID_SIZE + 1, ..GridConfig::default() },
        ] {
            assert!(cfg.validate().is_err(), "{cfg:?} should be rejected");
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.cell(10), r2.cell(10));
        }
    }

    #[test]
    fn cells_in_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            assert!(rng.cell(3).in_bounds(3));
        }
        assert_eq!(rng.seed(), 7);
    }

    #[test]
    fn single_cell_grid_always_origin() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.cell(1), crate::Position::new(0, 0));
    }
}
