pub mod cart_items;
pub mod search_panel;
pub mod toast_stack;

pub use cart_items::CartItemList;
pub use search_panel::SearchPanel;
pub use toast_stack::ToastStack;
