use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwatchError {
    #[error("Hovered position {position} is outside the {len} colour samples")]
    InvalidSelection { position: usize, len: usize },
    #[error("Cannot convert Lab({l}, {a}, {b}) to RGB")]
    Conversion { l: f32, a: f32, b: f32 },
}
