/// Data layer: argument parsing and summary statistics.
///
/// Architecture:
/// ```text
///   argv[1..]
///       │
///       ▼
///  ┌──────────┐
///  │  parser   │  best-effort token parse → Vec<f64>
///  └──────────┘
///       │
///       ▼
///  ┌──────────┐
///  │  stats    │  average / max / min reductions
///  └──────────┘
/// ```

pub mod parser;
pub mod stats;
