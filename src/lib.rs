// Batmi: Marathi news topic identification
//
// This is the library root. Text goes through preprocessing (text), topic
// inference (topics), and is assembled into a Classification (classifier)
// that the terminal, HTML and HTTP layers render.

pub mod classifier;
pub mod config;
pub mod output;
pub mod text;
pub mod topics;

#[cfg(feature = "web")]
pub mod web;
