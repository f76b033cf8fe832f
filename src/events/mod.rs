mod container;
mod page;

pub use container::wire_container;
pub use page::wire_page;
