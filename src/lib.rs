//! Static visual summaries of a word-frequency table: ranked bars,
//! thematic-term bars and a word cloud.

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod render;
