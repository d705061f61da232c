use hexmap::{visible_coords, visible_coords_with, Cell, Coord, CoordSet, HexGrid};

#[derive(Copy, Clone, Debug, Default)]
struct Tile {
    blocks_sight: bool,
}

impl Cell for Tile {
    fn blocks_line_of_sight(&self) -> bool {
        self.blocks_sight
    }

    fn blocks_movement(&self) -> bool {
        false
    }
}

#[test]
fn test_open_field() {
    let grid = HexGrid::hexagon(3, |_| Tile::default());
    let origin = Coord::ORIGIN;

    let visible = visible_coords(origin, 2, &grid);

    // With nothing blocking, every coordinate of every sight line is
    // reported: 12 ring members, each line 3 coordinates long
    assert_eq!(visible.len(), 36);
    assert!(visible.contains(&origin));
    for member in origin.ring(2) {
        for pos in origin.line(member) {
            assert!(visible.contains(&pos), "{} missing from sweep", pos);
        }
    }
}

#[test]
fn test_blocker_truncates_its_line() {
    // A single row with a wall at (1, 0)
    let mut grid: HexGrid<Tile> = (0..4)
        .map(|q| (Coord::new(q, 0), Tile::default()))
        .collect();
    grid.get_mut(Coord::new(1, 0)).unwrap().blocks_sight = true;

    let visible: CoordSet =
        visible_coords(Coord::new(0, 0), 3, &grid).into_iter().collect();

    // The wall itself is visible; the cells behind it are not
    assert!(visible.contains(&Coord::new(0, 0)));
    assert!(visible.contains(&Coord::new(1, 0)));
    assert!(!visible.contains(&Coord::new(2, 0)));
    assert!(!visible.contains(&Coord::new(3, 0)));
}

#[test]
fn test_absent_cells_do_not_block() {
    // A row with a hole at (1, 0): the hole is skipped, not a wall
    let grid: HexGrid<Tile> = [Coord::new(0, 0), Coord::new(2, 0)]
        .into_iter()
        .map(|pos| (pos, Tile::default()))
        .collect();

    let visible = visible_coords(Coord::new(0, 0), 2, &grid);
    assert!(visible.contains(&Coord::new(2, 0)));
    assert!(!visible.contains(&Coord::new(1, 0)));
}

#[test]
fn test_duplicates_are_retained() {
    let grid = HexGrid::hexagon(2, |_| Tile::default());
    let origin = Coord::ORIGIN;

    // Range 1: six two-coordinate lines, and the origin is on all of them
    let visible = visible_coords(origin, 1, &grid);
    assert_eq!(visible.len(), 12);
    assert_eq!(visible.iter().filter(|pos| **pos == origin).count(), 6);
}

#[test]
fn test_zero_range() {
    let grid = HexGrid::hexagon(1, |_| Tile::default());
    assert_eq!(visible_coords(Coord::ORIGIN, 0, &grid), vec![Coord::ORIGIN]);
}

#[test]
fn test_call_time_predicate() {
    // Same store, different eyes: the predicate variant ignores the cells'
    // own flags entirely
    let mut grid = HexGrid::hexagon(3, |_| Tile::default());
    grid.get_mut(Coord::new(1, 0)).unwrap().blocks_sight = true;

    let xray: CoordSet =
        visible_coords_with(Coord::ORIGIN, 3, &grid, |_| false)
            .into_iter()
            .collect();
    assert!(xray.contains(&Coord::new(3, 0)));

    let fog = visible_coords_with(Coord::ORIGIN, 3, &grid, |_| true);
    // Every line stops at its first present cell: the origin itself
    assert_eq!(fog.iter().filter(|pos| **pos == Coord::ORIGIN).count(), 18);
    assert_eq!(fog.len(), 18);
}
