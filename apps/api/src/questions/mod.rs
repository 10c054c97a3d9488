// Question generation: chunk-based with optional genre/audience framing,
// plus tag-based distillation.

pub mod generator;
pub mod handlers;
pub mod prompts;
