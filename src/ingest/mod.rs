pub mod loader;
pub mod normalize;
pub mod records;

pub use loader::{load_dataset, parse_dataset, DataFormat};
pub use normalize::{normalize, IngestError, UnknownStatusPolicy};
pub use records::{Dataset, PoliticianRecord, RawPromise, RawVote};
