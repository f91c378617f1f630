//! Track metadata, directory scanning and asynchronous queue queries.

mod model;
mod query;
mod scan;

pub use model::Track;
pub use query::*;
pub use scan::scan;
