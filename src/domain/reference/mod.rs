//! Static reference tables: symptom severities, diagnosis descriptions and
//! diagnosis precautions.

mod precautions;
mod reference_data;

pub use precautions::Precautions;
pub use reference_data::ReferenceData;
