pub mod compare;
pub mod run;

pub use compare::*;
pub use run::*;
