use pathlab::floyd;
use pathlab::graph::Error as GraphError;
use pathlab::{Distance, DistanceMatrix, Error, PathOutcome, reconstruct, reconstruct_indices};

fn f(v: f64) -> Distance {
    Distance::Finite(v)
}

const U: Distance = Distance::Unreachable;

/// A -> B 1, B -> C 2, A -> C 5, plus an isolated D.
fn abcd() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![f(0.0), f(1.0), f(5.0), U],
        vec![U, f(0.0), f(2.0), U],
        vec![U, U, f(0.0), U],
        vec![U, U, U, f(0.0)],
    ])
    .unwrap()
}

#[test]
fn floyd_finds_the_relayed_path() {
    let run = floyd::run(&abcd(), &["A", "B", "C", "D"]).unwrap();
    assert_eq!(run.distances.get(0, 2), f(3.0));
    assert_eq!(run.successors.get(0, 2), Some(1));
    assert_eq!(
        run.route(0, 2).unwrap(),
        PathOutcome::Found {
            distance: 3.0,
            nodes: vec![0, 1, 2]
        }
    );
    assert_eq!(run.route_names(0, 2).unwrap(), vec!["A", "B", "C"]);
    assert_eq!(
        reconstruct(0, 2, &run.successors, &run.names).unwrap(),
        vec!["A", "B", "C"]
    );
}

#[test]
fn floyd_reports_unreachable_pairs_without_failing() {
    let run = floyd::run(&abcd(), &["A", "B", "C", "D"]).unwrap();
    assert_eq!(run.distance(0, 3).unwrap(), U);
    assert_eq!(run.successors.get(0, 3), None);
    assert_eq!(run.route(0, 3).unwrap(), PathOutcome::NoPath);
    assert_eq!(run.route(2, 0).unwrap(), PathOutcome::NoPath);
    assert!(
        reconstruct(0, 3, &run.successors, &run.names)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn floyd_snapshots_every_intermediate_node() {
    let run = floyd::run(&abcd(), &["A", "B", "C", "D"]).unwrap();
    assert_eq!(run.iterations.len(), 4);
    let labels: Vec<&str> = run.iterations.iter().map(|it| it.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B", "C", "D"]);

    // Nothing enters A, so relaying through it changes nothing.
    assert_eq!(run.iterations[0].distances, abcd());
    assert_eq!(run.iterations[0].intermediate, 0);
    assert_eq!(run.iterations[1].distances.get(0, 2), f(3.0));
    assert_eq!(run.iterations[3].distances, run.distances);
}

#[test]
fn floyd_successor_relays_through_existing_prefix() {
    // A -> B -> C -> D chain plus a costly shortcut A -> D.
    let m = DistanceMatrix::from_rows(vec![
        vec![f(0.0), f(1.0), U, f(10.0)],
        vec![U, f(0.0), f(1.0), U],
        vec![U, U, f(0.0), f(1.0)],
        vec![U, U, U, f(0.0)],
    ])
    .unwrap();
    let run = floyd::run(&m, &[] as &[&str]).unwrap();
    assert_eq!(run.names, vec!["N1", "N2", "N3", "N4"]);
    assert_eq!(run.distances.get(0, 3), f(3.0));
    assert_eq!(
        reconstruct_indices(0, 3, &run.successors).unwrap(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn reconstruct_is_empty_on_the_diagonal_and_checks_indices() {
    let run = floyd::run(&abcd(), &["A", "B", "C", "D"]).unwrap();
    assert!(reconstruct_indices(1, 1, &run.successors).unwrap().is_empty());
    assert_eq!(
        reconstruct_indices(0, 4, &run.successors).err(),
        Some(Error::Graph(GraphError::InvalidIndex { index: 4, len: 4 }))
    );
    assert_eq!(
        reconstruct(0, 2, &run.successors, &["A"]).err(),
        Some(Error::Graph(GraphError::NameCountMismatch { names: 1, nodes: 4 }))
    );
}

#[test]
fn routes_list_every_ordered_pair() {
    let run = floyd::run(&abcd(), &["A", "B", "C", "D"]).unwrap();
    let routes = run.routes();
    assert_eq!(routes.len(), 12);
    let found: Vec<(usize, usize, f64)> = routes
        .iter()
        .filter_map(|r| match &r.outcome {
            PathOutcome::Found { distance, .. } => Some((r.from, r.to, *distance)),
            PathOutcome::NoPath => None,
        })
        .collect();
    assert_eq!(found, vec![(0, 1, 1.0), (0, 2, 3.0), (1, 2, 2.0)]);
}

#[test]
fn floyd_refuses_empty_matrices_and_extra_names() {
    assert_eq!(
        floyd::run(&DistanceMatrix::new(0), &[] as &[&str]).err(),
        Some(Error::EmptyGraph)
    );
    assert_eq!(
        floyd::run(&DistanceMatrix::new(1), &["A", "B"]).err(),
        Some(Error::Graph(GraphError::NameCountMismatch { names: 2, nodes: 1 }))
    );
}

#[test]
fn floyd_without_step_recording_gives_the_same_result() {
    let full = floyd::run(&abcd(), &["A", "B", "C", "D"]).unwrap();
    let lean = floyd::run_with(&abcd(), &["A", "B", "C", "D"], false).unwrap();
    assert!(lean.iterations.is_empty());
    assert_eq!(lean.distances, full.distances);
    assert_eq!(lean.successors, full.successors);
}

#[test]
fn floyd_run_serializes_successors_as_rows() {
    let run = floyd::run(&abcd(), &["A", "B", "C", "D"]).unwrap();
    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["successors"][0], serde_json::json!([null, 1, 1, null]));
    assert_eq!(json["distances"][0], serde_json::json!([0.0, 1.0, 3.0, null]));
}
