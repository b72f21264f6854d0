pub mod canvas;
pub mod draw_graph;
pub mod generative_view;
pub mod render_loop;
pub mod view_longitudinal;
pub mod view_transverse;
