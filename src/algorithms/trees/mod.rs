//! CART-style classification decision trees and bagged ensembles.
//!
//! The engine operates on integer-encoded training data (see [`data`]) produced by an
//! external ARFF-style reader: ordinal columns carry their literal integer value,
//! categorical columns carry a dense code, and the last column is always the
//! categorical class label. [`split`] and [`partition`] implement the Gini-gain search
//! and the resulting row partition; [`builder`] ties them into a recursive, optionally
//! parallel induction; [`classify`] walks a built tree for inference; [`bagging`]
//! composes the induction engine into a bootstrap-aggregated ensemble.

pub mod bagging;
pub mod builder;
pub mod classify;
pub mod data;
pub mod decision_tree;
pub mod node;
pub mod partition;
pub mod split;

pub use bagging::BaggingEnsemble;
pub use decision_tree::DecisionTreeClassifier;
pub use node::{LeafPrediction, Node, Question};
