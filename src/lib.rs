pub mod args;
pub mod configuration;
pub mod matcher;
pub mod resolver;
pub mod router;

pub use configuration::{Configuration, DomainRule};
pub use resolver::resolve;
pub use router::{Route, Router};
