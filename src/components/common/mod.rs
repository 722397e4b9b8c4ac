mod fields;

pub use fields::{NumericField, TextAreaField, TextField, VolumeField};
