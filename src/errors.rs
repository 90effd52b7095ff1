use thiserror::Error;


pub type PlannerResult<T> = Result<T, PlannerError>;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A search touched a node that is not a key of the graph
    #[error("node {0} is not present in the graph")]
    UnknownNode(String),

    /// Start or goal rejected before searching
    #[error("invalid city {node}. Choose from: {}", .valid.join(", "))]
    InvalidNode { node: String, valid: Vec<String> },

    #[error("traffic variation must be within [0, 1), got {0}")]
    InvalidVariation(f64),

    #[error("failed to read road network: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed road network document: {0}")]
    Json(#[from] serde_json::Error),
}
