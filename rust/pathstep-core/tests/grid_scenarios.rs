mod common;

use pathstep_core::{scaled_distance, EstimateMode, GridMap, PathFinder, SearchError, SearchOptions};

use common::{approx_eq, assert_valid_path, cost_of, reference_cost};

const MAZE: &str = "\
@          #     ######## $
####### #######    ##      
         ##      ##    #   
 #   ##         #     #    
  #  #   ##  #  #    ##    
# #  #     #     ###       
  #  ##    ##              
         #     ###   #     ";

#[test]
fn open_row_is_walked_straight_with_and_without_heuristic() {
    let map = GridMap::new(vec![vec![true; 4]]);
    let start = map.node(0, 0);
    let target = map.node(0, 3);
    let expected: Vec<_> = (0..4).map(|c| map.node(0, c)).collect();

    let dijkstra = PathFinder::new(start.clone(), target.clone()).run_bounded(None).unwrap();
    assert_eq!(dijkstra, expected);
    assert_eq!(cost_of(&dijkstra), 3.0);

    let euclid = PathFinder::with_heuristic(start.clone(), target.clone(), scaled_distance(1.0))
        .run_bounded(None)
        .unwrap();
    assert_eq!(euclid, expected);

    let opts = SearchOptions { estimate: EstimateMode::Target, ..SearchOptions::unbounded() };
    let astar = PathFinder::with_options(start, target, scaled_distance(1.0), opts).run().unwrap();
    assert_eq!(astar, expected);
    assert_eq!(cost_of(&astar), 3.0);
}

#[test]
fn walled_in_target_has_no_path() {
    let (_, start, target) = GridMap::parse("@   ###\n    #$#\n    ###").unwrap();
    let mut pf = PathFinder::new(start, target);
    assert_eq!(pf.run_bounded(None), Err(SearchError::NoPathFound));
    assert_eq!(pf.explored_len(), 12);
}

#[test]
fn maze_solution_is_valid_and_shortest() {
    let (map, start, target) = GridMap::parse(MAZE).unwrap();
    let path = PathFinder::new(start.clone(), target.clone()).run_bounded(None).unwrap();
    assert_valid_path(&path, &start, &target);

    let best = reference_cost(&start, &target).expect("maze is solvable");
    assert!(approx_eq(cost_of(&path), best), "found {} expected {}", cost_of(&path), best);

    let drawn = map.render_path(&path, '*');
    assert_eq!(drawn.lines().count(), map.height());
    assert_eq!(drawn.chars().filter(|&c| c == '*').count(), path.len());
}

#[test]
fn unit_heuristic_on_edges_matches_dijkstra_cost() {
    let (_, start, target) = GridMap::parse(MAZE).unwrap();
    let plain = PathFinder::new(start.clone(), target.clone()).run_bounded(None).unwrap();
    let scaled = PathFinder::with_heuristic(start.clone(), target.clone(), scaled_distance(1.0))
        .run_bounded(None)
        .unwrap();
    assert_valid_path(&scaled, &start, &target);
    assert!(approx_eq(cost_of(&plain), cost_of(&scaled)));
}

#[test]
fn target_estimate_finds_a_valid_maze_path() {
    let (_, start, target) = GridMap::parse(MAZE).unwrap();
    let opts = SearchOptions { estimate: EstimateMode::Target, ..SearchOptions::default() };
    let mut pf =
        PathFinder::with_options(start.clone(), target.clone(), scaled_distance(1.0), opts);
    let path = pf.run().unwrap();
    assert_valid_path(&path, &start, &target);
    let best = reference_cost(&start, &target).unwrap();
    assert!(cost_of(&path) + 1e-4 >= best);
}

#[test]
fn too_small_budget_is_reported_not_a_partial_path() {
    let (_, start, target) = GridMap::parse(MAZE).unwrap();
    let mut pf = PathFinder::new(start, target);
    assert_eq!(pf.run_bounded(Some(10)), Err(SearchError::StepBudgetExhausted { steps: 10 }));
    assert_eq!(pf.explored_len(), 10);
}
