//! Startup handlers.

mod load_knowledge_base;

pub use load_knowledge_base::{
    holdout_accuracy, KnowledgeBase, LoadKnowledgeBaseHandler, StartupError,
};
