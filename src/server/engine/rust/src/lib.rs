/* src/server/engine/rust/src/lib.rs */

pub mod diagram;
pub mod escape;
pub mod head;
pub mod layout;
pub mod pages;
pub mod ui;

// Public API re-exports
pub use diagram::{Diagram, DiagramInput, DiagramRegistry, strip_step_prefix, truncate_chars};
pub use escape::script_safe_json;
pub use head::HeadMeta;
pub use layout::{Mounts, PageContext, document};
pub use pages::Pages;
pub use ui::t;
