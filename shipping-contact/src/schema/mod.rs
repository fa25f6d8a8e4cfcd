//! Form field definitions and the schemas they are registered into.

mod field;
mod validators;

pub use field::{FieldDefinition, FieldSchema, InputType};
pub use validators::Validator;
