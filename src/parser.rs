use crate::graph::FlowNetwork;
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("input is empty")]
    EmptyInput,
    #[error("invalid node count {0:?} on the first line")]
    InvalidNodeCount(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Loads a network from a text file.
///
/// Format: the first non-empty line is the node count; every following line
/// is a `from to capacity` triple. Node 0 is the source, node `count - 1`
/// the sink. Malformed lines are logged and skipped, never fatal.
pub fn load_network<P: AsRef<Path>>(path: P) -> Result<FlowNetwork<i64>, ParseError> {
    parse_network(BufReader::new(File::open(path)?))
}

pub fn parse_network<R: BufRead>(reader: R) -> Result<FlowNetwork<i64>, ParseError> {
    let mut lines = reader.lines();

    let first = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(ParseError::EmptyInput),
        }
    };

    let num_nodes: usize = match first.trim().parse() {
        Ok(n) if n >= 1 => n,
        _ => return Err(ParseError::InvalidNodeCount(first.trim().to_string())),
    };
    let mut network = FlowNetwork::new(num_nodes, 0, num_nodes - 1);

    let mut line_number = 1;
    for line in lines {
        let line = line?;
        line_number += 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 3 {
            warn!("line {line_number}: expected 3 values, got {} - line ignored", tokens.len());
            continue;
        }

        let (from, to, capacity) = match (tokens[0].parse::<i64>(), tokens[1].parse::<i64>(), tokens[2].parse::<i64>()) {
            (Ok(from), Ok(to), Ok(capacity)) => (from, to, capacity),
            _ => {
                warn!("line {line_number}: non-integer value - line ignored");
                continue;
            }
        };

        if from < 0 || from >= num_nodes as i64 {
            warn!("line {line_number}: 'from' node {from} outside 0..{num_nodes} - edge ignored");
            continue;
        }
        if to < 0 || to >= num_nodes as i64 {
            warn!("line {line_number}: 'to' node {to} outside 0..{num_nodes} - edge ignored");
            continue;
        }
        if capacity < 0 {
            warn!("line {line_number}: negative capacity {capacity} - edge ignored");
            continue;
        }

        let _ = network.add_edge(from as usize, to as usize, capacity);
    }

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edmonds_karp::EdmondsKarp;
    use std::io::Cursor;

    #[test]
    fn parses_nodes_and_edges() {
        let input = "4\n0 1 10\n0 2 5\n1 3 9\n2 3 10\n1 2 4\n";
        let mut network = parse_network(Cursor::new(input)).unwrap();

        assert_eq!(network.num_nodes(), 4);
        assert_eq!(network.source(), 0);
        assert_eq!(network.sink(), 3);
        assert_eq!(network.num_edges(), 5);

        let mut solver = EdmondsKarp::default();
        solver.solve(&mut network);
        assert_eq!(solver.maximum_flow(), 15);
    }

    #[test]
    fn skips_malformed_lines() {
        let input = "3\n\
                     0 1 4\n\
                     0 1\n\
                     0 one 3\n\
                     0 7 3\n\
                     -1 2 3\n\
                     0 2 -5\n\
                     1 2 4\n";
        let mut network = parse_network(Cursor::new(input)).unwrap();
        assert_eq!(network.num_edges(), 2);

        let mut solver = EdmondsKarp::default();
        solver.solve(&mut network);
        assert_eq!(solver.maximum_flow(), 4);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_network(Cursor::new("")), Err(ParseError::EmptyInput)));
        assert!(matches!(parse_network(Cursor::new("\n  \n")), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn bad_node_count_is_an_error() {
        assert!(matches!(parse_network(Cursor::new("zero\n")), Err(ParseError::InvalidNodeCount(_))));
        assert!(matches!(parse_network(Cursor::new("0\n")), Err(ParseError::InvalidNodeCount(_))));
        assert!(matches!(parse_network(Cursor::new("-3\n0 1 2\n")), Err(ParseError::InvalidNodeCount(_))));
    }

    #[test]
    fn single_node_network_is_degenerate() {
        let mut network = parse_network(Cursor::new("1\n")).unwrap();
        assert_eq!(network.source(), network.sink());

        let mut solver = EdmondsKarp::default();
        solver.solve(&mut network);
        assert_eq!(solver.maximum_flow(), 0);
    }
}
