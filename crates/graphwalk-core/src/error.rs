use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("No such edge: {from} -> {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("Not found in priority queue: {0}")]
    NotFound(String),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("Negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl GraphError {
    pub fn unknown_vertex<V: std::fmt::Debug>(v: &V) -> Self {
        Self::UnknownVertex(format!("{v:?}"))
    }

    pub fn no_such_edge<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Self::NoSuchEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub fn not_found<T: std::fmt::Debug>(item: &T) -> Self {
        Self::NotFound(format!("{item:?}"))
    }
}
