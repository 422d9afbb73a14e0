mod builders;

pub use builders::ReplyBuilder;
