pub mod artist;
pub mod date;
pub mod ids;
pub mod location;
pub mod relation;

pub use artist::Artist;
pub use date::Date;
pub use ids::{ArtistId, DateId, LocationId};
pub use location::Location;
pub use relation::Relation;
