//! Unit tests for the rabbit step protocol and colony bookkeeping.

#[cfg(test)]
mod rabbit {
    use warren_core::{RabbitId, SimRng};
    use warren_grid::{Cell, Direction, GridSpace};

    use crate::Rabbit;

    fn placed_rabbit(grid: &mut GridSpace, at: Cell, energy: i32) -> Rabbit {
        let mut rng = SimRng::new(1);
        assert!(grid.place(RabbitId(0), at));
        Rabbit::new(RabbitId(0), at, energy, &mut rng)
    }

    #[test]
    fn walk_moves_and_forages() {
        // 3×3 grid, rabbit at (0,0) heading East onto grassy (1,0).
        let mut grid = GridSpace::new(3);
        let mut rabbit = placed_rabbit(&mut grid, Cell::new(0, 0), 50);
        let target = Cell::new(1, 0);
        grid.deposit_grass(target, 1);

        rabbit.heading = Direction::East;
        rabbit.walk(&mut grid, 10);

        assert_eq!(rabbit.position, target);
        assert_eq!(grid.occupant(Cell::new(0, 0)), None);
        assert_eq!(grid.occupant(target), Some(RabbitId(0)));
        assert_eq!(grid.grass_at(target), 0);
        assert_eq!(rabbit.energy, 50 + 10 - 1);
    }

    #[test]
    fn stacked_grass_gives_one_flat_reward() {
        let mut grid = GridSpace::new(3);
        let mut rabbit = placed_rabbit(&mut grid, Cell::new(0, 0), 50);
        grid.deposit_grass(Cell::new(1, 0), 7);

        rabbit.heading = Direction::East;
        rabbit.walk(&mut grid, 10);

        // all 7 units consumed, reward still a flat +10
        assert_eq!(grid.total_grass(), 0);
        assert_eq!(rabbit.energy, 59);
    }

    #[test]
    fn walk_wraps_and_blocks_on_occupied() {
        // Rabbit at (2,0) heading East wraps to (0,0); (0,0) is occupied,
        // so it stays, forages nothing, and only ages.
        let mut grid = GridSpace::new(3);
        let mut rng = SimRng::new(2);
        assert!(grid.place(RabbitId(1), Cell::new(0, 0)));
        grid.deposit_grass(Cell::new(0, 0), 3);

        let start = Cell::new(2, 0);
        assert!(grid.place(RabbitId(0), start));
        let mut rabbit = Rabbit::new(RabbitId(0), start, 50, &mut rng);

        rabbit.heading = Direction::East;
        rabbit.walk(&mut grid, 10);

        assert_eq!(rabbit.position, start);
        assert_eq!(grid.occupant(start), Some(RabbitId(0)));
        assert_eq!(grid.occupant(Cell::new(0, 0)), Some(RabbitId(1)));
        assert_eq!(grid.grass_at(Cell::new(0, 0)), 3, "no foraging without a move");
        assert_eq!(rabbit.energy, 49);
    }

    #[test]
    fn walk_without_grass_just_ages() {
        let mut grid = GridSpace::new(3);
        let mut rabbit = placed_rabbit(&mut grid, Cell::new(1, 1), 50);
        rabbit.heading = Direction::South;
        rabbit.walk(&mut grid, 10);
        assert_eq!(rabbit.position, Cell::new(1, 2));
        assert_eq!(rabbit.energy, 49);
    }

    #[test]
    fn energy_goes_negative_without_clamping() {
        let mut grid = GridSpace::new(3);
        let mut rabbit = placed_rabbit(&mut grid, Cell::new(0, 0), 0);
        assert!(!rabbit.is_exhausted(), "zero energy is still alive");
        rabbit.heading = Direction::East;
        rabbit.walk(&mut grid, 10);
        assert_eq!(rabbit.energy, -1);
        assert!(rabbit.is_exhausted());
    }

    #[test]
    fn fertility_is_strictly_above_threshold() {
        let mut grid = GridSpace::new(2);
        let rabbit = placed_rabbit(&mut grid, Cell::new(0, 0), 300);
        assert!(!rabbit.is_fertile(300));
        assert!(rabbit.is_fertile(299));
    }

    #[test]
    fn step_preserves_occupancy_invariant() {
        let mut grid = GridSpace::new(4);
        let mut rng = SimRng::new(99);
        let mut rabbit = placed_rabbit(&mut grid, Cell::new(2, 2), 50);
        for _ in 0..100 {
            rabbit.step(&mut grid, &mut rng, 10);
            assert_eq!(grid.occupant(rabbit.position), Some(rabbit.id));
            assert_eq!(grid.occupied_count(), 1);
        }
    }
}

#[cfg(test)]
mod colony {
    use warren_core::{RabbitId, SimRng};
    use warren_grid::{Cell, GridSpace};

    use crate::Colony;

    #[test]
    fn spawn_places_and_registers() {
        let mut grid = GridSpace::new(3);
        let mut colony = Colony::new();
        let mut rng = SimRng::new(0);

        let id = colony.spawn(&mut grid, Cell::new(1, 1), 50, &mut rng);
        assert_eq!(id, Some(RabbitId(0)));
        assert_eq!(colony.len(), 1);
        assert_eq!(grid.occupant(Cell::new(1, 1)), Some(RabbitId(0)));
        assert_eq!(colony.rabbits()[0].energy, 50);
    }

    #[test]
    fn spawn_on_occupied_cell_is_a_silent_no_op() {
        let mut grid = GridSpace::new(3);
        let mut colony = Colony::new();
        let mut rng = SimRng::new(0);

        assert!(colony.spawn(&mut grid, Cell::new(0, 0), 50, &mut rng).is_some());
        assert!(colony.spawn(&mut grid, Cell::new(0, 0), 50, &mut rng).is_none());
        assert_eq!(colony.len(), 1);
        // failed attempt must not burn an id
        let next = colony.spawn(&mut grid, Cell::new(1, 0), 50, &mut rng);
        assert_eq!(next, Some(RabbitId(1)));
    }

    #[test]
    fn retain_drops_rabbits() {
        let mut grid = GridSpace::new(3);
        let mut colony = Colony::new();
        let mut rng = SimRng::new(0);
        colony.spawn(&mut grid, Cell::new(0, 0), 50, &mut rng);
        colony.spawn(&mut grid, Cell::new(1, 0), -5, &mut rng);

        colony.retain(|r| !r.is_exhausted());
        assert_eq!(colony.len(), 1);
        assert_eq!(colony.rabbits()[0].id, RabbitId(0));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut grid = GridSpace::new(3);
        let mut colony = Colony::new();
        let mut rng = SimRng::new(0);
        colony.spawn(&mut grid, Cell::new(0, 0), -1, &mut rng);
        grid.vacate(Cell::new(0, 0));
        colony.retain(|r| !r.is_exhausted());

        let id = colony.spawn(&mut grid, Cell::new(0, 0), 50, &mut rng);
        assert_eq!(id, Some(RabbitId(1)));
    }
}
