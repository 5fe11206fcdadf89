pub mod layout_view;

pub use layout_view::render_node;
