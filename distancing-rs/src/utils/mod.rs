mod ascii_plot;
mod functions;
pub use ascii_plot::*;
pub use functions::*;
