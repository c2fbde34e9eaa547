pub mod trees;

// Re-export implemented algorithms
pub use trees::bagging::BaggingEnsemble;
pub use trees::decision_tree::DecisionTreeClassifier;
