pub mod edit;
pub mod init;
pub mod presets;
pub mod render;
pub mod variants;

pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use presets::{presets, PresetsArgs};
pub use render::{render, RenderArgs};
pub use variants::{variants, VariantsArgs};
