pub mod inference;
pub mod openai;
pub mod summarizer;
pub mod transcript;
