//! Loaders for the external file formats: bond listings and the
//! sequence-length table.

pub mod bonds;
pub mod seqlen;
