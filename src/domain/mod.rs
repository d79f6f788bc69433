//! Domain layer - Rendering, page model and trip queries

pub mod hotel;
pub mod layout;
pub mod markup;
pub mod outline;
pub mod page;
pub mod region;
pub mod trip;

pub use hotel::Hotel;
pub use outline::Outline;
pub use page::Page;
pub use region::{NodeId, NodeKind, Region};
pub use trip::{PlanRequest, TripQuery};
