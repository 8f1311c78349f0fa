//! Ref graph construction and divergence analysis
//!
//! - `ref_graph`: ref name lookup built from one `for-each-ref` listing
//! - `divergence`: local-branch vs upstream comparison

pub mod divergence;
pub mod ref_graph;
