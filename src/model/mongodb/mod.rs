mod bson;
mod collection;
mod filter;

pub use bson::Id;
pub use collection::{Coll, MongoCollection};
pub use filter::FilterBuilder;
