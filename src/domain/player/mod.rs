pub mod media;
pub mod session;
pub mod state;

pub use media::{MediaEvent, MediaListener, MediaOutput, Subscription};
pub use session::{PlaybackSession, PlayerListener};
pub use state::{LoadState, PlayerEvent};
