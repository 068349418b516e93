//! Unit tests for the grid space.

#[cfg(test)]
mod cell {
    use warren_core::SimRng;

    use crate::{Cell, Direction};

    #[test]
    fn step_moves_one_cell() {
        let c = Cell::new(1, 1);
        assert_eq!(c.step(Direction::East, 5), Cell::new(2, 1));
        assert_eq!(c.step(Direction::West, 5), Cell::new(0, 1));
        assert_eq!(c.step(Direction::South, 5), Cell::new(1, 2));
        assert_eq!(c.step(Direction::North, 5), Cell::new(1, 0));
    }

    #[test]
    fn step_wraps_at_edges() {
        let size = 3;
        assert_eq!(Cell::new(2, 0).step(Direction::East, size), Cell::new(0, 0));
        assert_eq!(Cell::new(0, 0).step(Direction::West, size), Cell::new(2, 0));
        assert_eq!(Cell::new(0, 2).step(Direction::South, size), Cell::new(0, 0));
        assert_eq!(Cell::new(0, 0).step(Direction::North, size), Cell::new(0, 2));
    }

    #[test]
    fn toroidal_closure() {
        // Every cell × every direction lands inside [0, size) on both axes.
        let size = 4;
        for y in 0..size {
            for x in 0..size {
                for dir in Direction::ALL {
                    let c = Cell::new(x, y).step(dir, size);
                    assert!(c.x < size && c.y < size, "{c} escaped the grid");
                }
            }
        }
    }

    #[test]
    fn sample_covers_all_directions() {
        let mut rng = SimRng::new(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            match Direction::sample(&mut rng) {
                Direction::East  => seen[0] = true,
                Direction::West  => seen[1] = true,
                Direction::North => seen[2] = true,
                Direction::South => seen[3] = true,
            }
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn deltas_are_unit_vectors() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}

#[cfg(test)]
mod grass {
    use warren_core::SimRng;

    use crate::{Cell, GridSpace};

    #[test]
    fn grow_conserves_units() {
        let mut grid = GridSpace::new(5);
        let mut rng = SimRng::new(42);
        grid.grow_grass(137, &mut rng);
        assert_eq!(grid.total_grass(), 137);
        grid.grow_grass(63, &mut rng);
        assert_eq!(grid.total_grass(), 200);
    }

    #[test]
    fn cells_can_stack() {
        // 1×1 grid: every unit lands on the same cell.
        let mut grid = GridSpace::new(1);
        let mut rng = SimRng::new(0);
        grid.grow_grass(9, &mut rng);
        assert_eq!(grid.grass_at(Cell::new(0, 0)), 9);
    }

    #[test]
    fn consume_is_all_or_nothing_and_idempotent() {
        let mut grid = GridSpace::new(1);
        let mut rng = SimRng::new(0);
        grid.grow_grass(4, &mut rng);
        let cell = Cell::new(0, 0);
        assert!(grid.has_grass(cell));

        grid.consume_grass(cell);
        assert_eq!(grid.grass_at(cell), 0);
        assert!(!grid.has_grass(cell));

        // second consume on the untouched cell is a no-op
        grid.consume_grass(cell);
        assert_eq!(grid.grass_at(cell), 0);
        assert_eq!(grid.total_grass(), 0);
    }
}

#[cfg(test)]
mod occupancy {
    use warren_core::{RabbitId, SimRng};

    use crate::{Cell, GridSpace};

    #[test]
    fn place_claims_cell() {
        let mut grid = GridSpace::new(3);
        let cell = Cell::new(1, 2);
        assert!(grid.place(RabbitId(0), cell));
        assert!(grid.is_occupied(cell));
        assert_eq!(grid.occupant(cell), Some(RabbitId(0)));
    }

    #[test]
    fn place_refuses_occupied_cell() {
        let mut grid = GridSpace::new(3);
        let cell = Cell::new(0, 0);
        assert!(grid.place(RabbitId(0), cell));
        assert!(!grid.place(RabbitId(1), cell));
        // original occupant untouched
        assert_eq!(grid.occupant(cell), Some(RabbitId(0)));
    }

    #[test]
    fn relocate_transfers_occupancy() {
        let mut grid = GridSpace::new(3);
        let from = Cell::new(0, 0);
        let to = Cell::new(1, 0);
        grid.place(RabbitId(5), from);

        assert!(grid.relocate(RabbitId(5), from, to));
        assert!(!grid.is_occupied(from));
        assert_eq!(grid.occupant(to), Some(RabbitId(5)));
    }

    #[test]
    fn relocate_refuses_occupied_target() {
        let mut grid = GridSpace::new(3);
        let from = Cell::new(0, 0);
        let to = Cell::new(1, 0);
        grid.place(RabbitId(0), from);
        grid.place(RabbitId(1), to);

        assert!(!grid.relocate(RabbitId(0), from, to));
        // both occupants exactly where they were
        assert_eq!(grid.occupant(from), Some(RabbitId(0)));
        assert_eq!(grid.occupant(to), Some(RabbitId(1)));
    }

    #[test]
    fn vacate_clears_cell() {
        let mut grid = GridSpace::new(3);
        let cell = Cell::new(2, 2);
        grid.place(RabbitId(3), cell);
        grid.vacate(cell);
        assert!(!grid.is_occupied(cell));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn random_free_cell_avoids_occupants() {
        let mut grid = GridSpace::new(2);
        let mut rng = SimRng::new(11);
        // occupy 3 of 4 cells
        grid.place(RabbitId(0), Cell::new(0, 0));
        grid.place(RabbitId(1), Cell::new(1, 0));
        grid.place(RabbitId(2), Cell::new(0, 1));

        for _ in 0..20 {
            assert_eq!(grid.random_free_cell(&mut rng), Some(Cell::new(1, 1)));
        }

        grid.place(RabbitId(3), Cell::new(1, 1));
        assert_eq!(grid.random_free_cell(&mut rng), None);
    }

    #[test]
    fn free_cells_counts_complement() {
        let mut grid = GridSpace::new(3);
        assert_eq!(grid.free_cells().len(), 9);
        grid.place(RabbitId(0), Cell::new(1, 1));
        assert_eq!(grid.free_cells().len(), 8);
        assert_eq!(grid.occupied_count(), 1);
    }
}
