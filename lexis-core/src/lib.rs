//! Lexis text-metrics pipeline.
//!
//! Turns raw text into a structured [`MetricsReport`]: character and
//! word counts, class tallies, frequency tables, a word-length
//! histogram, palindrome detection, reading time, a readability
//! heuristic, and sentiment (delegated to a collaborator).
//!
//! The pipeline is deterministic, single-pass, and stateless per call:
//!
//! ```
//! use lexis_core::TextAnalyzer;
//! use lexis_types::NeutralScorer;
//!
//! let analyzer = TextAnalyzer::new();
//! let report = analyzer.analyze("Hello World 123!", &NeutralScorer).unwrap();
//!
//! assert_eq!(report.cleaned_text, "Hello World 123");
//! assert_eq!(report.classes.digits, 3);
//! assert_eq!(report.special_count, 1);
//! ```

pub mod analyzer;
pub mod report;

pub use report::TextAnalyzer;

pub use lexis_types::{AnalyzeError, AnalyzerConfig, MetricsReport};
