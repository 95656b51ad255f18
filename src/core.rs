// src/core.rs
pub mod index;
pub mod ranker;
pub mod stopwords;
pub mod tokenizer;
