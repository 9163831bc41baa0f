//! Core library for the Tâi-lô voice/handwriting input tool.
//!
//! Converts recognized Taiwanese Hokkien (Tâi-lô romanization) transcripts
//! into standard Chinese characters (Hanji). The host environment owns
//! microphone capture, handwriting ink, rendering and network transport;
//! this crate owns everything between "raw transcript string in" and
//! "display string out":
//!
//! * [`text`] — text normalization and the rule-based Tâi-lô → Hanji
//!   transliteration engine.
//! * [`domain`] — curated domain phrases (songs, stocks) with
//!   normalized-key lookup and recognizer bias phrases.
//! * [`dict`] — the user-maintained override dictionary: merge operations,
//!   JSON/CSV import/export, and JSON file persistence.
//! * [`pipeline`] — the transcript → Hanji composition of the above.
//! * [`speech`] — typed request model for the external speech recognizer,
//!   carrying the domain bias phrases.
//! * [`config`] — TOML settings and platform paths.
//!
//! # Quick start
//!
//! ```rust
//! use tailo_input::dict::UserDict;
//! use tailo_input::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let mut dict = UserDict::new();
//! dict.add_or_update("Lí hó".into(), "你好".into());
//!
//! let result = pipeline.process("Lí hó", &dict);
//! assert_eq!(result.hanji, "你好");
//! ```

pub mod config;
pub mod dict;
pub mod domain;
pub mod pipeline;
pub mod speech;
pub mod text;
