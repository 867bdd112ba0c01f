use std::iter;

use searchstat::path::{Connectivity, Grid, GridParseError, PathFinder};
use searchstat::stats::{self, RecurrentStatistics};

const MAP: &str = "
    ..........
    .####.###.
    .#..9...#.
    .#.####.#.
    ...#..5...
    ##.#.###.#
    ...3......
";

fn main() -> Result<(), GridParseError> {
    let grid = Grid::parse(MAP)?;
    let (start, goal) = ((0, 0), (6, 9));

    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let grid = grid.clone().with_connectivity(connectivity);
        let finder = PathFinder::new(grid.towards(goal));

        println!("\n[{:?}]\n", connectivity);

        let Some(path) = finder.search(&start, &goal) else {
            println!("No path from {:?} to {:?}", start, goal);
            continue;
        };

        print!("{}", grid.render_path(path.positions()));
        println!("cost: {:.3}, expanded: {}", path.cost(), path.expanded());

        let walked: Vec<_> = iter::once(&start).chain(path.iter_forward()).copied().collect();
        let step_costs: RecurrentStatistics = walked
            .windows(2)
            .filter_map(|step| grid.step_cost(step[0], step[1]))
            .collect();
        println!("step costs:\n{}", stats::format(&step_costs));
    }

    Ok(())
}
