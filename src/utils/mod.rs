/*!
# Utilities

Small self-contained helpers. Currently only [`RollbackDsu`](dsu::RollbackDsu), the
union-find backing the realization search.
*/

pub mod dsu;

pub use dsu::RollbackDsu;
