mod filterable;
mod functor;
mod instances;
mod monad;

#[cfg(feature = "experimental")]
pub mod experimental;

pub use filterable::Filterable;
pub use functor::{Functor, PartiallyApplied};
pub use monad::{sequence, Monad};
