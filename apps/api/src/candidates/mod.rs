// Candidate submission surface: upload endpoints, the file-backed list
// store, and ranked/export views. The extraction and scoring pipeline lives
// in `extraction` and `scoring`; nothing here touches the oracle directly.

pub mod handlers;
pub mod store;
