//! Risk classification: maps the four user scores to bucketed labels and an
//! investment recommendation.

pub mod classifier;
