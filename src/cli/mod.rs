pub mod masthead;
pub mod output;

pub use masthead::Masthead;
