pub mod image;
pub mod recommendation;
pub mod session;
pub mod state;
pub mod timer;
pub mod upload;

pub use image::UploadedImage;
pub use recommendation::recommendation_for;
pub use session::{MirrorSession, OpenGeneration};
pub use state::{MirrorAction, MirrorState};
pub use timer::BrowserTimer;
pub use upload::{read_selected_file, MirrorError};
