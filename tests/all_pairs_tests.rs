use shortest_paths::algorithm::floyd_warshall;
use shortest_paths::graph::generators::{random_dense, random_symmetric};
use shortest_paths::{AllPairsAlgorithm, Error, FloydWarshall, WeightMatrix};

// Minimum total weight over all simple paths from `from` to `to`, by exhaustive search
fn brute_force_distance(graph: &WeightMatrix<i64>, from: usize, to: usize) -> Option<i64> {
    fn walk(
        graph: &WeightMatrix<i64>,
        current: usize,
        to: usize,
        cost: i64,
        visited: &mut Vec<bool>,
        best: &mut Option<i64>,
    ) {
        if current == to {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for next in 0..graph.size() {
            if visited[next] || next == current {
                continue;
            }
            if let Some(w) = graph.weight(current, next) {
                visited[next] = true;
                walk(graph, next, to, cost + w, visited, best);
                visited[next] = false;
            }
        }
    }

    if from == to {
        return Some(0);
    }
    let mut visited = vec![false; graph.size()];
    visited[from] = true;
    let mut best = None;
    walk(graph, from, to, 0, &mut visited, &mut best);
    best
}

// True if some simple cycle has negative total weight
fn has_negative_cycle(graph: &WeightMatrix<i64>) -> bool {
    let n = graph.size();
    (0..n).any(|start| {
        (0..n).any(|last| {
            last != start
                && graph.weight(last, start).map_or(false, |back| {
                    brute_force_distance(graph, start, last).map_or(false, |d| d + back < 0)
                })
        }) || graph.weight(start, start).map_or(false, |w| w < 0)
    })
}

fn sample_graph() -> WeightMatrix<i64> {
    WeightMatrix::from_edges(4, vec![(0, 1, 5), (0, 3, 10), (1, 2, 3), (2, 3, 1)]).unwrap()
}

#[test]
fn test_sample_graph_distances_and_predecessors() {
    let result = floyd_warshall::solve(&sample_graph()).unwrap();

    assert_eq!(result.distance(0, 3), Some(9));
    assert_eq!(result.predecessor(0, 3), Some(2));
    assert_eq!(result.distance(0, 2), Some(8));
    assert_eq!(result.distance(1, 3), Some(4));
    assert_eq!(result.distance(3, 0), None);
    assert_eq!(result.predecessor(3, 0), None);
    assert_eq!(result.path(0, 3), Some(vec![0, 1, 2, 3]));
    assert_eq!(result.path(3, 0), None);
}

#[test]
fn test_two_node_negative_cycle_is_rejected() {
    let graph = WeightMatrix::from_edges(2, vec![(0, 1, 1), (1, 0, -2)]).unwrap();
    let result = FloydWarshall::new().solve(&graph);
    assert!(matches!(result, Err(Error::NegativeCycle { .. })));
}

#[test]
fn test_negative_edges_without_negative_cycle() {
    let edges = vec![
        (0, 1, 6),
        (0, 2, 5),
        (1, 2, 7),
        (1, 3, 3),
        (1, 4, -2),
        (2, 3, -4),
        (3, 4, 8),
        (3, 1, -1),
        (4, 0, 2),
        (4, 3, 7),
    ];
    let graph = WeightMatrix::from_edges(5, edges).unwrap();
    let result = floyd_warshall::solve(&graph).unwrap();

    let expected = [
        [0, 0, 5, 1, -2],
        [0, 0, 5, 1, -2],
        [-5, -5, 0, -4, -7],
        [-1, -1, 4, 0, -3],
        [2, 2, 7, 3, 0],
    ];
    for (i, row) in expected.iter().enumerate() {
        for (j, &d) in row.iter().enumerate() {
            assert_eq!(result.distance(i, j), Some(d), "distance {} -> {}", i, j);
        }
    }
}

#[test]
fn test_diagonal_is_zero_without_negative_cycles() {
    for seed in 0..10 {
        let graph = random_dense(7, 0.4, 0, 20, seed);
        let result = floyd_warshall::solve(&graph).unwrap();
        for i in 0..graph.size() {
            assert_eq!(result.distance(i, i), Some(0));
            assert_eq!(result.predecessor(i, i), None);
        }
    }
}

#[test]
fn test_matches_brute_force_on_non_negative_graphs() {
    for seed in 0..25 {
        let graph = random_dense(6, 0.35, 0, 15, seed);
        let result = floyd_warshall::solve(&graph).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(
                    result.distance(i, j),
                    brute_force_distance(&graph, i, j),
                    "seed {} pair {} -> {}",
                    seed,
                    i,
                    j
                );
            }
        }
    }
}

#[test]
fn test_mixed_weights_agree_with_brute_force_or_cycle_check() {
    for seed in 0..40 {
        let graph = random_dense(5, 0.4, -4, 12, seed);
        match floyd_warshall::solve(&graph) {
            Ok(result) => {
                assert!(!has_negative_cycle(&graph), "seed {}: cycle missed", seed);
                for i in 0..5 {
                    for j in 0..5 {
                        assert_eq!(result.distance(i, j), brute_force_distance(&graph, i, j));
                    }
                }
            }
            Err(Error::NegativeCycle { .. }) => {
                assert!(has_negative_cycle(&graph), "seed {}: spurious cycle", seed);
            }
            Err(other) => panic!("unexpected error {:?}", other),
        }
    }
}

#[test]
fn test_symmetric_input_gives_symmetric_distances() {
    for seed in 0..10 {
        let graph = random_symmetric(8, 0.3, 50, seed);
        let result = floyd_warshall::solve(&graph).unwrap();
        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(result.distance(i, j), result.distance(j, i));
            }
        }
    }
}

#[test]
fn test_solving_twice_is_identical() {
    let graph = random_dense(9, 0.3, 0, 30, 99);
    let solver = FloydWarshall::new();
    let first = solver.solve(&graph).unwrap();
    let second = solver.solve(&graph).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_input_is_not_mutated() {
    let graph = sample_graph();
    let before = graph.clone();
    floyd_warshall::solve(&graph).unwrap();
    assert_eq!(graph, before);
}

#[test]
fn test_reconstructed_paths_follow_edges_and_sum_to_distance() {
    for seed in 0..10 {
        let graph = random_dense(8, 0.3, 1, 9, seed);
        let result = floyd_warshall::solve(&graph).unwrap();
        for i in 0..8 {
            for j in 0..8 {
                match result.path(i, j) {
                    Some(path) => {
                        assert_eq!(path.first(), Some(&i));
                        assert_eq!(path.last(), Some(&j));
                        let total: i64 = path
                            .windows(2)
                            .map(|step| graph.weight(step[0], step[1]).unwrap())
                            .sum();
                        assert_eq!(Some(total), result.distance(i, j));
                    }
                    None => assert_eq!(result.distance(i, j), None),
                }
            }
        }
    }
}

#[test]
fn test_malformed_matrix_is_rejected() {
    let ragged = vec![vec![Some(0), Some(1), None], vec![None, Some(0)], vec![None, None, Some(0)]];
    assert!(matches!(
        WeightMatrix::<i64>::from_rows(ragged),
        Err(Error::InvalidGraph(_))
    ));
}

#[test]
fn test_empty_and_single_node_graphs() {
    let empty: WeightMatrix<i64> = WeightMatrix::new(0);
    assert_eq!(floyd_warshall::solve(&empty).unwrap().node_count(), 0);

    let single: WeightMatrix<i64> = WeightMatrix::new(1);
    let result = floyd_warshall::solve(&single).unwrap();
    assert_eq!(result.distance(0, 0), Some(0));
    assert_eq!(result.path(0, 0), Some(vec![0]));
    assert_eq!(result.distance(0, 1), None);
}

#[test]
fn test_name() {
    assert_eq!(
        <FloydWarshall as AllPairsAlgorithm<i64>>::name(&FloydWarshall::default()),
        "Floyd-Warshall"
    );
}
