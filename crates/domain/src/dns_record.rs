mod class;
mod record;
mod record_type;

pub use class::RecordClass;
pub use record::{RecordData, ResourceRecord};
pub use record_type::RecordType;
