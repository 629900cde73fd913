mod item_create;
mod item_delete;
mod item_list;
mod item_read;
mod item_update;

pub use item_create::create_item;
pub use item_delete::delete_item;
pub use item_list::list_items;
pub use item_read::get_item;
pub use item_update::update_item;
