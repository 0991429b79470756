// Domain layer: value types shared by the generator and the validator.

pub mod model;
