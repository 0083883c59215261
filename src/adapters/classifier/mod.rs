//! Classifier Adapters
//!
//! - **CartClassifier** - Gini-impurity CART fitted with `linfa-trees`

mod cart;

pub use cart::CartClassifier;
