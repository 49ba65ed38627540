// Storage operation traits and implementations
pub mod delete;
pub mod load;
pub mod query;

pub use delete::ItemDeleter;
pub use load::ItemLoader;
pub use query::ItemLister;
