use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petgraph::graph::{DiGraph, NodeIndex};
use waypath::{bellman_ford, dag_shortest_paths, dijkstra, AdjacencyGraph, TaggedEdge};

const SIDE: usize = 40;

/// A `SIDE x SIDE` grid with right and down edges, so it is also acyclic.
fn grid_edges() -> Vec<(usize, usize, u64)> {
    let mut edges = Vec::new();
    for row in 0..SIDE {
        for col in 0..SIDE {
            let v = row * SIDE + col;
            let w = ((row * 31 + col * 17) % 9 + 1) as u64;
            if col + 1 < SIDE {
                edges.push((v, v + 1, w));
            }
            if row + 1 < SIDE {
                edges.push((v, v + SIDE, w + 1));
            }
        }
    }
    edges
}

fn weight(edge: &TaggedEdge<usize, u64>) -> u64 {
    *edge.tag()
}

fn bench_shortest_paths(c: &mut Criterion) {
    let edges = grid_edges();

    let mut graph = AdjacencyGraph::new();
    graph.add_vertices_and_edge_range(edges.iter().map(|&(s, t, w)| TaggedEdge::new(s, t, w)));

    let mut reference = DiGraph::<(), u64>::new();
    let nodes: Vec<NodeIndex> = (0..SIDE * SIDE).map(|_| reference.add_node(())).collect();
    for &(s, t, w) in &edges {
        reference.add_edge(nodes[s], nodes[t], w);
    }

    let mut group = c.benchmark_group("shortest_path");

    group.bench_function("petgraph_dijkstra", |b| {
        b.iter(|| {
            let distances = petgraph::algo::dijkstra(&reference, nodes[0], None, |e| *e.weight());
            black_box(distances.len());
        });
    });

    group.bench_function("waypath_dijkstra", |b| {
        b.iter(|| {
            let paths = dijkstra(&graph, weight, black_box(0)).unwrap();
            black_box(paths.len());
        });
    });

    group.bench_function("waypath_dag_shortest_paths", |b| {
        b.iter(|| {
            let paths = dag_shortest_paths(&graph, weight, black_box(0)).unwrap();
            black_box(paths.len());
        });
    });

    group.sample_size(10);
    group.bench_function("waypath_bellman_ford", |b| {
        b.iter(|| {
            let (paths, cycle) = bellman_ford(&graph, weight, black_box(0)).unwrap();
            black_box((paths.len(), cycle));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_shortest_paths);
criterion_main!(benches);
