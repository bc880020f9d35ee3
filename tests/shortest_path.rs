use anyhow::Result;
use waypath::{
    astar, bellman_ford, breadth_first_search, dag_shortest_paths, dijkstra, AStar,
    AdjacencyGraph, BellmanFord, Color, DagShortestPath, DelegateIncidenceGraph, Dijkstra,
    EventRecorder, GraphError, ObservableAlgorithm, ShortestPathObserver, TaggedEdge,
    VertexDistanceRecorder, VertexPredecessorRecorder,
};

type Graph = AdjacencyGraph<&'static str, TaggedEdge<&'static str, f64>>;

fn graph(edges: &[(&'static str, &'static str, f64)]) -> Graph {
    let mut graph = AdjacencyGraph::new();
    graph.add_vertices_and_edge_range(edges.iter().map(|&(s, t, w)| TaggedEdge::new(s, t, w)));
    graph
}

fn weight(edge: &TaggedEdge<&'static str, f64>) -> f64 {
    *edge.tag()
}

#[test]
fn triangle_scenario() -> Result<()> {
    let g = graph(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]);

    let paths = dijkstra(&g, weight, "A")?;
    assert_eq!(paths.distance(&"B"), Some(1.0));
    assert_eq!(paths.distance(&"C"), Some(3.0));
    assert_eq!(paths.predecessor(&"C"), Some(&TaggedEdge::new("B", "C", 2.0)));

    let route: Vec<_> = paths
        .path_to(&"C")
        .unwrap_or_default()
        .iter()
        .map(|e| e.to_string())
        .collect();
    assert_eq!(route, vec!["A -> B (1)", "B -> C (2)"]);
    Ok(())
}

#[test]
fn single_negative_edge_scenario() -> Result<()> {
    let g = graph(&[("A", "B", -1.0)]);

    let err = dijkstra(&g, weight, "A").unwrap_err();
    assert!(matches!(err, GraphError::NegativeWeight(_)));
    assert!(err.to_string().contains("negative weight"));

    let (paths, negative_cycle) = bellman_ford(&g, weight, "A")?;
    assert!(!negative_cycle);
    assert_eq!(paths.distance(&"B"), Some(-1.0));
    Ok(())
}

#[test]
fn negative_cycle_scenario() -> Result<()> {
    let g = graph(&[("A", "B", 1.0), ("B", "A", -3.0)]);
    let (_, negative_cycle) = bellman_ford(&g, weight, "A")?;
    assert!(negative_cycle);

    let mut search = BellmanFord::new(&g, weight);
    assert!(search.compute_from("A")?);
    assert!(search.has_negative_cycle());
    Ok(())
}

#[test]
fn implicit_graphs_need_a_root() -> Result<()> {
    let line = DelegateIncidenceGraph::new(|&v: &u64| {
        (v < 100).then(|| vec![TaggedEdge::new(v, v + 1, 2u64)])
    });
    let unit = |e: &TaggedEdge<u64, u64>| *e.tag();

    let mut search = Dijkstra::new(&line, unit);
    assert_eq!(search.compute(), Err(GraphError::RootRequired));

    search.compute_from(0)?;
    assert_eq!(search.distance(&100)?, 200);
    assert!(matches!(
        search.distance(&101),
        Err(GraphError::VertexNotFound(_))
    ));

    let mut recorder: EventRecorder<u64, TaggedEdge<u64, u64>> = EventRecorder::new();
    assert_eq!(
        breadth_first_search(&line, None, &mut recorder).unwrap_err(),
        GraphError::RootRequired
    );
    Ok(())
}

#[test]
fn astar_builder_reports_missing_parts() {
    type Weight = fn(&TaggedEdge<&'static str, f64>) -> f64;
    type Heuristic = fn(&&'static str) -> f64;

    let g = graph(&[("A", "B", 1.0)]);
    let missing = AStar::<Graph, Weight, Heuristic, f64>::builder()
        .graph(&g)
        .weights(weight as Weight)
        .build()
        .unwrap_err();
    assert_eq!(missing, GraphError::InvalidArgument("heuristic"));
}

#[test]
fn astar_with_zero_heuristic_matches_dijkstra() -> Result<()> {
    let g = graph(&[
        ("S", "A", 2.0),
        ("S", "B", 1.0),
        ("B", "A", 0.5),
        ("A", "T", 3.0),
        ("B", "T", 5.0),
    ]);
    let by_astar = astar(&g, weight, |_: &&str| 0.0, "S")?;
    let by_dijkstra = dijkstra(&g, weight, "S")?;
    for (vertex, distance) in by_dijkstra.reached() {
        assert_eq!(by_astar.distance(vertex), Some(distance));
    }
    assert_eq!(by_astar.distance(&"T"), Some(4.5));
    Ok(())
}

#[test]
fn dag_search_rejects_cycles_and_handles_negatives() -> Result<()> {
    let g = graph(&[("A", "B", 4.0), ("A", "C", 1.0), ("C", "B", -2.0)]);
    let paths = dag_shortest_paths(&g, weight, "A")?;
    assert_eq!(paths.distance(&"B"), Some(-1.0));

    let cyclic = graph(&[("A", "B", 1.0), ("B", "A", 1.0)]);
    let mut search = DagShortestPath::new(&cyclic, weight);
    assert_eq!(search.compute(), Err(GraphError::NonAcyclicGraph));
    Ok(())
}

#[test]
fn observers_attach_and_detach() -> Result<()> {
    let g = graph(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]);
    let mut search = Dijkstra::new(&g, weight);
    let mut predecessors = VertexPredecessorRecorder::new();
    let mut distances = VertexDistanceRecorder::new();

    {
        let mut pair = (&mut predecessors, &mut distances);
        let mut attached = search.attach(&mut pair);
        attached.compute_from("A")?;
        assert_eq!(attached.algorithm().distance(&"C")?, 3.0);
        let search = attached.detach();
        // Detached: this run reports to nobody.
        search.compute_from("B")?;
    }

    assert_eq!(search.color(&"A")?, Color::White);
    assert_eq!(distances.distance(&"C"), Some(3.0));
    assert_eq!(predecessors.predecessor(&"B"), Some(&TaggedEdge::new("A", "B", 1.0)));
    assert_eq!(predecessors.predecessors().len(), 2);
    Ok(())
}

#[derive(Default)]
struct Counter {
    discovered: usize,
    finished: usize,
    rejected: usize,
}

impl<V, E, D> ShortestPathObserver<V, E, D> for Counter {
    fn discover_vertex(&mut self, _: &V) {
        self.discovered += 1;
    }

    fn finish_vertex(&mut self, _: &V) {
        self.finished += 1;
    }

    fn edge_not_relaxed(&mut self, _: &E) {
        self.rejected += 1;
    }
}

#[test]
fn custom_observer_sees_every_vertex() -> Result<()> {
    let g = graph(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]);
    let mut search = Dijkstra::new(&g, weight);
    let mut counter = Counter::default();
    search.attach(&mut counter).compute_from("A")?;

    assert_eq!(counter.discovered, 3);
    assert_eq!(counter.finished, 3);
    // A -> C (5) is beaten by A -> B -> C (3).
    assert_eq!(counter.rejected, 0);
    Ok(())
}

#[test]
fn negative_weight_fails_before_the_edge_is_relaxed() {
    let g = graph(&[("A", "C", 2.0), ("A", "B", -1.0), ("C", "D", 1.0)]);
    let mut search = Dijkstra::new(&g, weight);
    let mut predecessors = VertexPredecessorRecorder::new();
    let mut distances = VertexDistanceRecorder::new();
    let mut pair = (&mut predecessors, &mut distances);

    let err = search.attach(&mut pair).compute_from("A").unwrap_err();
    assert!(matches!(err, GraphError::NegativeWeight(_)));

    // A -> C was relaxed before A -> B was examined; nothing after it ran.
    assert_eq!(predecessors.predecessor(&"C"), Some(&TaggedEdge::new("A", "C", 2.0)));
    assert_eq!(predecessors.predecessor(&"B"), None);
    assert_eq!(distances.distance(&"B"), None);
    assert_eq!(predecessors.predecessors().len(), 1);
}

#[test]
fn saturating_weights_never_reach_their_targets() -> Result<()> {
    let mut g: AdjacencyGraph<char, TaggedEdge<char, u64>> = AdjacencyGraph::new();
    g.add_vertices_and_edge_range([
        TaggedEdge::new('A', 'B', u64::MAX),
        TaggedEdge::new('B', 'C', 1),
    ]);
    let paths = dijkstra(&g, |e: &TaggedEdge<char, u64>| *e.tag(), 'A')?;

    assert_eq!(paths.len(), 1);
    assert!(!paths.is_reached(&'B'));
    assert_eq!(paths.distance(&'C'), None);
    assert_eq!(paths.path_to(&'C'), None);
    Ok(())
}
