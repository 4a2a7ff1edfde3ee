pub mod ask_actions;
pub mod input_box;
pub mod task_panel;
pub mod utils;

pub use ask_actions::AskActions;
pub use input_box::InputBox;
pub use task_panel::TaskPanel;
