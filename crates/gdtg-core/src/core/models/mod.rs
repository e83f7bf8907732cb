//! Data model for protein bond graphs: identifier conventions, bond
//! records, and the immutable-after-construction `BondGraph`.

pub mod bond;
pub mod graph;
pub mod ids;
