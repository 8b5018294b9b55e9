pub mod edmonds_karp;
pub mod graph;
pub mod parser;
pub mod status;
