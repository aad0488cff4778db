mod austrian_translation;

pub use austrian_translation::*;
