use max_flow::edmonds_karp::EdmondsKarp;
use max_flow::parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: max_flow <network-file>");
        return ExitCode::FAILURE;
    };

    let mut network = match parser::load_network(&path) {
        Ok(network) => network,
        Err(err) => {
            eprintln!("failed to load {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut solver = EdmondsKarp::default();
    solver.solve(&mut network);

    for (path, bottleneck) in solver.augmenting_paths() {
        let nodes: Vec<String> = path.iter().map(|node| node.to_string()).collect();
        println!("augmenting path {} (bottleneck {})", nodes.join(" -> "), bottleneck);
    }
    println!("maximum flow: {}", solver.maximum_flow());

    ExitCode::SUCCESS
}
