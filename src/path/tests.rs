#![cfg(test)]

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::util::float::assert_close;

/// An undirected weighted graph keyed by name.
fn graph(edges: &[(char, char, f64)]) -> HashMap<char, Vec<(char, f64)>> {
    let mut adjacency: HashMap<_, Vec<_>> = HashMap::new();
    for &(from, to, weight) in edges {
        adjacency.entry(from).or_default().push((to, weight));
        adjacency.entry(to).or_default().push((from, weight));
    }
    adjacency
}

fn path_weight(grid: &Grid, path: &[heuristic::Cell]) -> f64 {
    path.iter().map(|cell| grid.weight(*cell).unwrap_or(f64::INFINITY)).sum()
}

#[test]
fn test_reversed_order() {
    let adjacency = graph(&[('a', 'b', 1.0), ('b', 'c', 1.0)]);
    let path = find_path(&'a', &'c', heuristic::zero, |p| adjacency[p].clone());

    assert_eq!(
        path,
        ['c', 'b'],
        "Paths should start at the goal and exclude the start position."
    );
}

#[test]
fn test_shortest_weighted_path() {
    let adjacency = graph(&[
        ('a', 'b', 1.0),
        ('b', 'c', 2.0),
        ('a', 'c', 5.0),
        ('c', 'd', 1.0),
        ('b', 'd', 5.0),
    ]);
    let finder = PathFinder::new(Weighted::new(heuristic::zero, |p: &char| adjacency[p].clone()));

    let path = finder.search(&'a', &'d').expect("d is reachable from a");
    assert_eq!(path.positions(), ['d', 'c', 'b']);
    assert_close!(path.cost(), 4.0, 0.0, "The cheapest route is a-b-c-d.");
    assert_eq!(
        path.iter_forward().copied().collect::<Vec<_>>(),
        ['b', 'c', 'd'],
        "Forward iteration should walk from the start to the goal."
    );
}

#[test]
fn test_no_path() {
    let adjacency = graph(&[('a', 'b', 1.0), ('c', 'd', 1.0)]);
    let finder = PathFinder::new(Weighted::new(heuristic::zero, |p: &char| adjacency[p].clone()));

    assert!(
        finder.find_path(&'a', &'d').is_empty(),
        "A goal in another component should produce an empty path."
    );
    assert!(finder.search(&'a', &'d').is_none());
}

#[test]
fn test_trivial_path() {
    let path = find_path(&7_u32, &7_u32, heuristic::zero, |_| Vec::<(u32, f64)>::new());
    assert_eq!(path, [7], "start == goal should return just the goal.");

    let finder = PathFinder::with_options(
        Unit::new(heuristic::zero, |_: &u32| Vec::<u32>::new()),
        PathOptions::new().include_start(true),
    );
    assert_eq!(
        finder.find_path(&7, &7),
        [7],
        "The start shouldn't be duplicated when it is also the goal."
    );
}

#[test]
fn test_include_start() {
    let finder = PathFinder::with_options(
        Unit::new(heuristic::zero, |p: &char| match p {
            'a' => vec!['b'],
            'b' => vec!['c'],
            _ => vec![],
        }),
        PathOptions::new().include_start(true),
    );

    assert_eq!(finder.find_path(&'a', &'c'), ['c', 'b', 'a']);
}

#[test]
fn test_cycles() {
    // A ring of 8 positions, with a chord from 0 to 4.
    let neighbors = |p: &u8| {
        let mut next = vec![((p + 1) % 8, 1.0), ((p + 7) % 8, 1.0)];
        if *p == 0 {
            next.push((4, 3.5));
        }
        next
    };

    let finder = PathFinder::new(Weighted::new(heuristic::zero, neighbors));
    let path = finder.search(&0, &4).expect("the ring is connected");
    assert_close!(path.cost(), 3.5, 0.0, "The chord should beat walking around the ring.");
    assert_eq!(path.positions(), [4]);

    let path = finder.search(&0, &5).expect("the ring is connected");
    assert_close!(path.cost(), 3.0, 0.0);
    assert_eq!(path.positions(), [5, 6, 7]);
}

#[test]
fn test_unit_path() {
    // A 5x5 open board, moving in 4 directions.
    let neighbors = |&(row, column): &(i64, i64)| {
        [(row - 1, column), (row + 1, column), (row, column - 1), (row, column + 1)]
            .into_iter()
            .filter(|(row, column)| (0..5_i64).contains(row) && (0..5_i64).contains(column))
    };

    let path = find_unit_path(
        &(0, 0),
        &(4, 4),
        |cell| heuristic::manhattan(*cell, (4, 4)),
        neighbors,
    );
    assert_eq!(path.len(), 8, "Every route along the board takes 8 unit steps.");
    assert_eq!(path.first(), Some(&(4, 4)));
    assert!(!path.contains(&(0, 0)));
}

#[test]
fn test_stale_entries() {
    // 'b' is first reached through the expensive direct edge, then improved through 'x'.
    let adjacency = graph(&[('a', 'b', 10.0), ('a', 'x', 1.0), ('x', 'b', 1.0), ('b', 'g', 1.0)]);
    let finder = PathFinder::new(Weighted::new(heuristic::zero, |p: &char| adjacency[p].clone()));

    let path = finder.search(&'a', &'g').expect("g is reachable");
    assert_eq!(path.positions(), ['g', 'b', 'x']);
    assert_close!(path.cost(), 3.0, 0.0);
    assert_eq!(path.expanded(), 3, "b should only be expanded once, despite being pushed twice.");
}

#[test]
fn test_finalized_neighbor_rewired() {
    // The heuristic overestimates nothing, but isn't consistent: x is finalized through the direct
    // edge before b, which is cheaper to go through, gets expanded.
    let adjacency = graph(&[('s', 'x', 5.0), ('s', 'b', 1.0), ('b', 'x', 1.0), ('x', 'g', 10.0)]);
    let finder = PathFinder::new(Weighted::new(
        |p: &char| if *p == 'b' { 10.0 } else { 0.0 },
        |p: &char| adjacency[p].clone(),
    ));

    let path = finder.search(&'s', &'g').expect("g is reachable");
    assert_eq!(path.positions(), ['g', 'x', 'b']);
    assert_close!(
        path.cost(),
        12.0,
        0.0,
        "The cost should match the weight of the returned path, not the goal's stale g-score."
    );
    assert_eq!(path.expanded(), 3, "x shouldn't be expanded again after being rewired.");
}

#[test]
fn test_max_expansions() {
    let line = |p: &u32| [(p + 1, 1.0)];

    let limited = PathFinder::with_options(
        Weighted::new(heuristic::zero, line),
        PathOptions::new().max_expansions(5),
    );
    assert!(
        limited.find_path(&0, &10).is_empty(),
        "The search should give up after expanding 5 positions."
    );
    assert_eq!(
        limited.find_path(&0, &5).len(),
        5,
        "A goal popped right after the last allowed expansion should still be found."
    );
    assert!(limited.find_path(&0, &6).is_empty());

    let unlimited = PathFinder::with_options(
        Weighted::new(heuristic::zero, line),
        limited.options().unlimited(),
    );
    assert_eq!(unlimited.find_path(&0, &10).len(), 10);
}

#[test]
fn test_nan_heuristic() {
    // A broken heuristic shouldn't prevent reaching the goal, only reorder the frontier.
    let path = find_path(
        &0_u32,
        &3,
        |p| if *p == 1 { f64::NAN } else { 0.0 },
        |p| if *p < 3 { vec![(p + 1, 1.0)] } else { vec![] },
    );
    assert_eq!(path, [3, 2, 1]);
}

#[test]
fn test_grid_weights() {
    let grid = Grid::parse(
        "
        .....
        .###.
        .#9..
        .#.#.
        .....
        ",
    )
    .expect("valid grid");

    let path = grid.find_path((0, 0), (2, 2));
    assert_eq!(path.first(), Some(&(2, 2)));
    assert_close!(
        path_weight(&grid, &path),
        16.0,
        0.0,
        "The 9 can only be entered from below or from the right, both 7 unit steps away."
    );

    let path = grid.find_path((0, 0), (4, 2));
    assert_close!(path_weight(&grid, &path), 6.0, 0.0);
}

#[test]
fn test_grid_diagonals() {
    let grid = Grid::parse(
        "
        ...
        ...
        ...
        ",
    )
    .expect("valid grid")
    .with_connectivity(Connectivity::Eight);

    let finder = PathFinder::new(grid.towards((2, 2)));
    let path = finder.search(&(0, 0), &(2, 2)).expect("open grid");
    assert_eq!(path.positions(), [(2, 2), (1, 1)]);
    assert_close!(path.cost(), 2.0 * std::f64::consts::SQRT_2, 1e-12);

    let walled = Grid::parse(
        "
        .#
        ..
        ",
    )
    .expect("valid grid")
    .with_connectivity(Connectivity::Eight);
    assert_eq!(
        walled.find_path((0, 0), (1, 1)),
        [(1, 1), (1, 0)],
        "Diagonal moves shouldn't cut the corner of a wall."
    );
}

#[test]
fn test_heuristic_matches_dijkstra() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let text = (0..12)
            .map(|_| {
                (0..12)
                    .map(|_| match rng.gen_range(0..10) {
                        0 | 1 => '#',
                        2 => '5',
                        _ => '.',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        let grid = Grid::parse(&text).expect("generated grid only uses valid glyphs");
        let (start, goal) = ((0, 0), (11, 11));
        if !grid.is_passable(start) || !grid.is_passable(goal) {
            continue;
        }

        let informed = PathFinder::new(grid.towards(goal)).search(&start, &goal);
        let blind = PathFinder::new(Weighted::new(heuristic::zero, |cell: &heuristic::Cell| {
            let mut edges = Vec::new();
            grid.towards(goal).neighbors(cell, &mut edges);
            edges
        }))
        .search(&start, &goal);

        match (informed, blind) {
            (Some(informed), Some(blind)) => {
                assert_close!(
                    informed.cost(),
                    blind.cost(),
                    1e-9,
                    "An admissible heuristic shouldn't change the optimal cost."
                );
                assert_close!(informed.cost(), path_weight(&grid, informed.positions()), 1e-9);
                assert!(informed.expanded() <= blind.expanded());
            },
            (None, None) => {},
            _ => panic!("Both searches should agree on whether the goal is reachable."),
        }
    }
}

#[test]
fn test_grid_parse_errors() {
    assert!(Grid::parse("").unwrap_err().is_empty());
    assert!(Grid::parse("   \n\n").unwrap_err().is_empty());

    assert_eq!(
        Grid::parse("...\n..\n...").unwrap_err(),
        GridParseError::Ragged { row: 1, expected: 3, found: 2 }
    );
    assert_eq!(
        Grid::parse("..\n.x").unwrap_err(),
        GridParseError::UnknownCell { row: 1, column: 1, glyph: 'x' }
    );
    assert_eq!(
        Grid::parse("..0").unwrap_err().to_string(),
        "unknown cell '0' at row 0, column 2"
    );
}

#[test]
fn test_grid_render() {
    let grid: Grid = ".#\n3.".parse().expect("valid grid");
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.columns(), 2);
    assert_eq!(grid.to_string(), ".#\n3.\n");
    assert_eq!(grid.render_path(&[(1, 1), (1, 0)]), ".#\n**\n");
    assert_eq!(grid.weight((1, 0)), Some(3.0));
    assert_eq!(grid.weight((0, 1)), None);
    assert_eq!(grid.weight((-1, 0)), None);
}

#[test]
fn test_grid_step_cost() {
    let grid = Grid::parse(
        "
        ..
        .3
        ",
    )
    .expect("valid grid")
    .with_connectivity(Connectivity::Eight);

    assert_eq!(grid.step_cost((0, 0), (0, 1)), Some(1.0));
    assert_eq!(grid.step_cost((0, 1), (1, 1)), Some(3.0));
    assert_close!(
        grid.step_cost((0, 0), (1, 1)).unwrap_or_default(),
        3.0 * std::f64::consts::SQRT_2,
        1e-12
    );
    assert_eq!(grid.step_cost((0, 0), (0, 0)), None, "Staying in place isn't a move.");
    assert_eq!(grid.step_cost((0, 0), (2, 0)), None);
    assert_eq!(grid.step_cost((1, 0), (2, 0)), None);

    let grid = grid.with_connectivity(Connectivity::Four);
    assert_eq!(grid.step_cost((0, 0), (1, 1)), None);
}

#[test]
fn test_grid_cost_matches_steps() {
    let grid = Grid::parse(
        "
        .....
        .###.
        .#9..
        .#.#.
        .....
        ",
    )
    .expect("valid grid")
    .with_connectivity(Connectivity::Eight);
    let (start, goal) = ((0, 0), (2, 2));

    let path = PathFinder::new(grid.towards(goal)).search(&start, &goal).expect("9 is reachable");
    let walked: Vec<_> = std::iter::once(&start).chain(path.iter_forward()).copied().collect();
    let steps: Vec<_> = walked.windows(2).map(|step| grid.step_cost(step[0], step[1])).collect();

    assert!(steps.iter().all(Option::is_some), "Every step of a path should be a legal move.");
    assert_close!(path.cost(), steps.into_iter().flatten().sum::<f64>(), 1e-9);
}

#[test]
fn test_grid_impassable_endpoints() {
    let grid = Grid::parse(
        "
        #.
        ..
        ",
    )
    .expect("valid grid");

    assert!(grid.find_path((0, 0), (1, 1)).is_empty(), "A path can't leave a wall.");
    assert!(grid.find_path((1, 1), (0, 0)).is_empty(), "A path can't end on a wall.");
    assert!(grid.find_path((i64::MAX, 0), (1, 1)).is_empty());
    assert!(grid.find_path((1, 1), (i64::MIN, i64::MIN)).is_empty());

    // Searching the space directly from far outside of the grid finds no neighbours.
    let grid = grid.with_connectivity(Connectivity::Eight);
    let finder = PathFinder::new(grid.towards((1, 1)));
    assert!(finder.search(&(i64::MAX, i64::MAX), &(1, 1)).is_none());
    assert!(finder.search(&(i64::MIN, i64::MAX), &(1, 1)).is_none());
}

#[test]
fn test_heuristic_extremes() {
    let (low, high) = ((i64::MIN, i64::MIN), (i64::MAX, i64::MAX));
    let span = u64::MAX as f64;

    assert_eq!(heuristic::manhattan(low, high), 2.0 * span);
    assert_eq!(heuristic::chebyshev(low, high), span);
    assert_eq!(heuristic::octile(low, high), span * std::f64::consts::SQRT_2);
    assert!(heuristic::euclidean(low, high).is_finite());

    assert_eq!(heuristic::manhattan((0, 0), (3, -4)), 7.0);
    assert_eq!(heuristic::octile((0, 0), (3, -4)), 1.0 + 3.0 * std::f64::consts::SQRT_2);
}
