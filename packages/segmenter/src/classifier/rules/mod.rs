//! Line rules for statute text, grouped by kind.

mod boilerplate;
mod heading;
mod numbered;
mod title;

pub use boilerplate::*;
pub use heading::*;
pub use numbered::*;
pub use title::*;
