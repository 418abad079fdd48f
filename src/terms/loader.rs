//! JSON-based terms loader
//!
//! Reads loan terms from a JSON document such as:
//!
//! ```json
//! {
//!   "repayment": { "rate": 0.09, "threshold": 25000 },
//!   "interest": { "rpi": 0.03, "variable_interest": 0.03 },
//!   "salary_growth": { "type": "fixed", "rate": 0.05 },
//!   "term_years": 30
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::LoanTerms;
use crate::error::LoanResult;

/// Load terms from a JSON file without validating them
pub fn load_terms(path: &Path) -> LoanResult<LoanTerms> {
    let file = File::open(path)?;
    let terms = load_terms_from_reader(BufReader::new(file))?;
    debug!("Loaded loan terms from {}", path.display());
    Ok(terms)
}

/// Load terms from any reader (e.g., request body, string buffer)
pub fn load_terms_from_reader<R: Read>(reader: R) -> LoanResult<LoanTerms> {
    Ok(serde_json::from_reader(reader)?)
}
