use pathlab_graph::{Direction, Error, Graph, GraphOptions, NodeNaming, Point, Step};

fn abc() -> Graph {
    let mut g = Graph::default();
    for _ in 0..3 {
        g.add_node(Point::default());
    }
    g
}

#[test]
fn add_node_names_nodes_with_letters_by_default() {
    let mut g = Graph::default();
    assert_eq!(g.add_node(Point::new(10.0, 20.0)), 0);
    assert_eq!(g.add_node(Point::new(30.0, 40.0)), 1);
    assert_eq!(g.node_names(), vec!["A", "B"]);
    assert_eq!(g.node(1).map(|n| n.position), Some(Point::new(30.0, 40.0)));
    assert_eq!(g.node_index("B"), Some(1));
}

#[test]
fn add_node_uses_numbered_names_when_configured() {
    let mut g = Graph::new(GraphOptions {
        node_naming: NodeNaming::Numbered,
    });
    g.add_node(Point::default());
    g.add_node(Point::default());
    assert_eq!(g.node_names(), vec!["N1", "N2"]);
}

#[test]
fn add_node_skips_names_already_taken() {
    let mut g = Graph::default();
    g.add_named_node("B", Point::default()).unwrap();
    g.add_node(Point::default());
    g.add_node(Point::default());
    assert_eq!(g.node_names(), vec!["B", "C", "D"]);
}

#[test]
fn add_named_node_rejects_duplicates_and_blanks() {
    let mut g = Graph::default();
    g.add_named_node(" Home ", Point::default()).unwrap();
    assert_eq!(g.node_names(), vec!["Home"]);
    assert_eq!(
        g.add_named_node("Home", Point::default()),
        Err(Error::DuplicateNode {
            name: "Home".to_string()
        })
    );
    assert_eq!(g.add_named_node("   ", Point::default()), Err(Error::InvalidName));
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.history().done().len(), 1);
}

#[test]
fn add_edge_validates_endpoints_and_weight_without_mutating() {
    let mut g = abc();
    assert_eq!(
        g.add_edge(0, 3, 1.0, Direction::Forward),
        Err(Error::InvalidIndex { index: 3, len: 3 })
    );
    assert!(matches!(
        g.add_edge(0, 1, -1.0, Direction::Forward),
        Err(Error::InvalidWeight { .. })
    ));
    assert!(matches!(
        g.add_edge(0, 1, f64::NAN, Direction::Forward),
        Err(Error::InvalidWeight { .. })
    ));
    assert!(matches!(
        g.add_edge(0, 1, f64::INFINITY, Direction::Both),
        Err(Error::InvalidWeight { .. })
    ));
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.history().done().len(), 3);

    assert_eq!(g.add_edge(0, 1, 0.0, Direction::Forward), Ok(0));
    assert_eq!(g.add_edge(1, 2, 2.5, Direction::Both), Ok(1));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn add_edge_str_parses_user_text() {
    let mut g = abc();
    assert_eq!(g.add_edge_str(0, 1, " 4.5 ", Direction::Forward), Ok(0));
    assert_eq!(g.edge(0).map(|e| e.weight), Some(4.5));
    for bad in ["", "abc", "-2", "inf", "NaN"] {
        assert_eq!(
            g.add_edge_str(0, 1, bad, Direction::Forward),
            Err(Error::InvalidWeight {
                value: bad.to_string()
            }),
            "{bad:?} should be rejected"
        );
    }
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn outgoing_respects_direction() {
    let mut g = abc();
    g.add_edge(0, 1, 1.0, Direction::Forward).unwrap();
    g.add_edge(2, 1, 2.0, Direction::Both).unwrap();

    let from_a: Vec<Step> = g.outgoing(0).collect();
    assert_eq!(
        from_a,
        vec![Step {
            edge: 0,
            to: 1,
            weight: 1.0
        }]
    );

    let from_b: Vec<usize> = g.outgoing(1).map(|s| s.to).collect();
    assert_eq!(from_b, vec![2]);

    let from_c: Vec<usize> = g.outgoing(2).map(|s| s.to).collect();
    assert_eq!(from_c, vec![1]);
}
