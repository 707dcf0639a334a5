//! Collaborator endpoints used by the advanced indicator filter.

pub mod indicators;
