pub mod field;
pub mod text_box;

pub use field::{Description, Field, FieldContext, Input, Label};
pub use text_box::TextBox;
