pub mod dictionary;
pub mod output;
pub mod pronunciation;
pub mod resolver;
pub mod stats;
pub mod types;

pub use dictionary::{Entry, SourceError, SourceIndex, SourceParser};
pub use resolver::Resolver;
pub use stats::Summary;
pub use types::{MasterList, ResolvedEntry, SourceFormat, SourceTag};
