mod mock_query_engine;

pub use mock_query_engine::{a_reply, MockQueryEngine, RecordedCall};
